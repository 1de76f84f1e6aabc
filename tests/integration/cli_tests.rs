//! CLI integration tests.
//!
//! Runs the compiled binary and checks exit codes and stream contents.

use crate::fixtures::{passing_markup, StylesheetFixture, TempProject, Violation};
use assert_cmd::Command;
use predicates::prelude::*;

fn ransom_check() -> Command {
    let mut cmd = Command::cargo_bin("ransom-check").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_passing_project_exits_zero() {
    let project = TempProject::passing();

    ransom_check()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "🔍 Validating CSS Ransom Note Requirements...\n",
        ))
        .stdout(predicate::str::contains("🎉 ALL REQUIREMENTS PASSED! 🎉"));
}

#[test]
fn test_current_directory_is_default_project() {
    let project = TempProject::passing();

    ransom_check()
        .current_dir(project.path())
        .assert()
        .success();
}

#[test]
fn test_violation_exits_one() {
    let project = TempProject::violating(Violation::InlineStyle);

    ransom_check()
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Inline styles found - remove them"))
        .stdout(predicate::str::contains("❌ SOME REQUIREMENTS FAILED"));
}

#[test]
fn test_missing_stylesheet_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), passing_markup()).unwrap();

    ransom_check()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error during validation: "))
        .stdout(predicate::str::contains("📋").not())
        .stdout(predicate::str::contains("REQUIREMENTS").not());
}

#[test]
fn test_css_and_html_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("note.css");
    let html = dir.path().join("note.html");
    std::fs::write(&css, StylesheetFixture::default().render()).unwrap();
    std::fs::write(&html, passing_markup()).unwrap();

    ransom_check()
        .arg("--css")
        .arg(&css)
        .arg("--html")
        .arg(&html)
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .success();
}

#[test]
fn test_skip_failing_check_passes() {
    let project = TempProject::violating(Violation::NoUppercase);

    ransom_check()
        .arg(project.path())
        .args(["--skip", "text-transform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking text transformations").not());
}

#[test]
fn test_only_runs_selected_checks() {
    let project = TempProject::violating(Violation::TooFewStyleGroups);

    ransom_check()
        .arg(project.path())
        .args(["--only", "font-weights", "--only", "color-systems"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📋 Checking font weights..."))
        .stdout(predicate::str::contains("📋 Checking color systems..."))
        .stdout(predicate::str::contains("Checking for at least 10 unique styles").not());
}

#[test]
fn test_unknown_check_id_is_usage_error() {
    ransom_check()
        .args(["--only", "font-sizes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("font-sizes"));
}

#[test]
fn test_unknown_option_is_usage_error() {
    ransom_check().arg("--fail-fast").assert().code(2);
}

#[test]
fn test_list_command() {
    ransom_check()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Available checks:\n"))
        .stdout(predicate::str::contains("style-groups"))
        .stdout(predicate::str::contains("grouped-selectors"))
        .stdout(predicate::str::contains("markup"));
}

#[test]
fn test_version_command() {
    ransom_check()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "ransom-check {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TempProject::passing();

    let output = ransom_check()
        .arg(project.path())
        .arg("--verbose")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("DEBUG"));
    assert!(!output.stderr.is_empty());
}
