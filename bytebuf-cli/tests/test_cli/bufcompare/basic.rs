use crate::add_test;
use crate::common::{report_lines, run_quick};

// Every scenario is reported once by default
add_test!(reports_all_scenarios, async {
    let output = run_quick(&[]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    let lines = report_lines(&output.stdout);
    assert_eq!(lines.len(), 10);
    assert!(lines[0].ends_with("construct"));
    assert!(lines[9].ends_with("equality"));
});

// Report lines carry a ratio column
add_test!(report_has_ratio, async {
    let output = run_quick(&["--only", "iterate"]).await;
    assert!(output.status.success());

    let lines = report_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains('%'));
    assert!(lines[0].contains('±'));
});

// Robot mode prints CSV with five fields
add_test!(robot_output_is_csv, async {
    let output = run_quick(&["--robot", "-o", "erase", "-o", "insert"]).await;
    assert!(output.status.success());

    let lines = report_lines(&output.stdout);
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(line.split(',').count(), 5);
    }
    assert!(lines[0].starts_with("erase,"));
    assert!(lines[1].starts_with("insert,"));
});

// Reverse mode repeats the report backwards
add_test!(reverse_repeats_report, async {
    let output = run_quick(&["--robot", "-r", "-o", "append", "-o", "equality"]).await;
    assert!(output.status.success());

    let names: Vec<&str> = report_lines(&output.stdout)
        .into_iter()
        .filter(|line| *line != "Reverse:")
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(names, ["append", "equality", "equality", "append"]);
});
