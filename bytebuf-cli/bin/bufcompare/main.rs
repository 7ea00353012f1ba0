//! ByteBuffer versus Vec<u8> timing utility
//!
//! Runs the same workloads on both containers and reports mean and standard
//! deviation per scenario, like a small benchmark harness that needs no
//! benchmarking framework.

use std::io::{self, Write};
use std::process;

mod opts;

use opts::BufCompareOpts;

use bytebuf_cli::{format_error_for_stderr, run, Scenario};

const PROGRAM_NAME: &str = "bufcompare";

fn main() -> io::Result<()> {
    let opts = BufCompareOpts::parse();
    let config = opts.config();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.list_only() {
        for scenario in Scenario::ALL {
            writeln!(out, "{scenario}")?;
        }
        return Ok(());
    }

    if let Err(err) = run(&config, &mut out) {
        let err = io::Error::from(err);
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }

        process::exit(1);
    }

    Ok(())
}
