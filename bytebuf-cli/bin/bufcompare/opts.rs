//! Command line argument parsing for the bufcompare utility.

use clap::Parser;

use bytebuf_cli::{
    parse_count, parse_scenario, HarnessConfig, Scenario, DEFAULT_ELEMENTS, DEFAULT_ITERATIONS,
    DEFAULT_SCALE,
};

/// Time ByteBuffer against Vec<u8>
///
/// bufcompare runs each workload on both containers several times and prints
/// the mean and standard deviation of the timings in milliseconds, together
/// with the ByteBuffer mean as a percentage of the Vec<u8> mean.
#[derive(Debug, Parser)]
#[command(
    name = "bufcompare",
    version = "0.1.0",
    about = "Time ByteBuffer against Vec<u8>",
    long_about = "bufcompare runs each workload on both containers several times and prints \
                 the mean and standard deviation of the timings in milliseconds, together \
                 with the ByteBuffer mean as a percentage of the Vec<u8> mean."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct BufCompareOpts {
    /// Timed runs per scenario
    #[arg(short = 'n', long = "iterations", value_name = "N", default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Multiply every scenario's loop count
    #[arg(short = 's', long = "scale", value_name = "FACTOR", default_value_t = DEFAULT_SCALE)]
    scale: usize,

    /// Bytes per workload (accepts K and M suffixes)
    #[arg(
        short = 'e',
        long = "elements",
        value_name = "COUNT",
        value_parser = parse_count,
        default_value_t = DEFAULT_ELEMENTS
    )]
    elements: usize,

    /// Fixed loop count for every scenario
    #[arg(short = 'l', long = "loops", value_name = "COUNT", value_parser = parse_count)]
    loops: Option<usize>,

    /// Run only this scenario (repeatable)
    #[arg(
        short = 'o',
        long = "only",
        value_name = "SCENARIO",
        value_parser = parse_scenario,
        action = clap::ArgAction::Append
    )]
    only: Vec<Scenario>,

    /// List scenario names and exit
    #[arg(long = "list")]
    list: bool,

    /// Print every timed run to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Suppress error messages when specified twice
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    quiet: u8,

    /// Machine-readable CSV output
    #[arg(long = "robot")]
    robot: bool,

    /// Repeat the report in reverse order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,
}

impl BufCompareOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build harness configuration from the parsed options
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig {
            iterations: self.iterations,
            scale: self.scale,
            elements: self.elements,
            loops: self.loops,
            scenarios: self.only.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
            robot: self.robot,
            reverse: self.reverse,
        }
    }

    /// Whether only the scenario list was requested
    pub fn list_only(&self) -> bool {
        self.list
    }
}
