use crate::add_test;
use crate::common::{run_bufcompare, run_quick};

// --list prints every scenario name and runs nothing
add_test!(list_prints_names, async {
    let output = run_bufcompare(&["--list"]).await;
    assert!(output.status.success());

    let names: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(names.len(), 10);
    assert!(names.contains(&"assign-move"));
    assert!(names.contains(&"construct-fill"));
});

// Verbose mode writes per-run timings to stderr
add_test!(verbose_logs_to_stderr, async {
    let output = run_quick(&["-v", "-o", "equality"]).await;
    assert!(output.status.success());
    assert!(output.stderr.contains("ByteBuffer vs Vec<u8> (equality"));
    assert!(output.stderr.contains("Results:"));
});

// Zero iterations is rejected with exit status 1
add_test!(zero_iterations_fails, async {
    let output = run_bufcompare(&["-n", "0"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output
        .stderr
        .contains("bufcompare: The number of iterations must be at least 1"));
});

// -qq suppresses the error message but keeps the exit status
add_test!(double_quiet_suppresses_errors, async {
    let output = run_bufcompare(&["-qq", "-s", "0"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
});

// Unknown scenario names are rejected by argument parsing
add_test!(unknown_scenario_rejected, async {
    let output = run_bufcompare(&["--only", "sort"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("Unknown scenario"));
});

// --version prints the program name
add_test!(version_flag, async {
    let output = run_bufcompare(&["--version"]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("bufcompare"));
});
