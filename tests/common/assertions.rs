//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use stitch_engine::Image;
use stitchwork::services::ScriptRunner;

/// Assert a report contains exactly the given command outcomes, in order
pub fn assert_report(report: &str, expected: &[&str]) {
    let actual: Vec<&str> = report.lines().collect();
    assert_eq!(actual, expected, "Full report:\n{}", report);
}

/// Assert two images have the same size
pub fn assert_same_size(a: &Image, b: &Image) {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "Image dimensions differ"
    );
}

/// Assert a serialized pattern is well formed and return its legend lines
pub fn assert_pattern_text(text: &str, width: usize, height: usize) -> Vec<String> {
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(format!("{}x{}", width, height).as_str()));

    for row in 0..height {
        let line = lines.next().unwrap_or_else(|| panic!("missing grid row {}", row));
        assert_eq!(line.chars().count(), width, "grid row {} has wrong width", row);
    }

    assert_eq!(lines.next(), Some(""), "expected blank line after grid");
    assert_eq!(lines.next(), Some("LEGEND:"));

    let legend: Vec<String> = lines.map(str::to_string).collect();
    assert!(!legend.is_empty(), "legend should not be empty");
    for entry in &legend {
        assert!(
            entry.contains(" DMC-"),
            "legend entry {:?} should read '<symbol> DMC-<code>'",
            entry
        );
    }
    legend
}

/// Run a script that must not abort and return its report
pub fn run_ok(runner: &mut ScriptRunner, script: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = runner.run(script, &mut out) {
        panic!(
            "Script aborted: {}\nReport so far:\n{}",
            e,
            String::from_utf8_lossy(&out)
        );
    }
    String::from_utf8(out).expect("report is UTF-8")
}
