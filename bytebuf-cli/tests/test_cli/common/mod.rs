use std::process::{ExitStatus, Stdio};

/// Arguments that keep every scenario fast in debug builds
pub const QUICK_ARGS: &[&str] = &["-n", "2", "-e", "64", "-l", "4"];

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Path to the `bufcompare` binary built by cargo
fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_bufcompare")
}

/// Run `bufcompare` with the specified arguments
///
/// # Panics
///
/// Panics if the binary cannot be spawned.
pub async fn run_bufcompare(args: &[&str]) -> Output {
    let raw_output = tokio::process::Command::new(binary_path())
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .unwrap();

    Output {
        status: raw_output.status,
        stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
    }
}

/// Run `bufcompare` with [`QUICK_ARGS`] followed by `extra`
pub async fn run_quick(extra: &[&str]) -> Output {
    let args: Vec<&str> = QUICK_ARGS.iter().chain(extra).copied().collect();
    run_bufcompare(&args).await
}

/// Report lines without header or blank lines
pub fn report_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .collect()
}
