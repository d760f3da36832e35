// mfclean/tests/cli_integration_tests.rs
//! End-to-end tests for the `mfclean` binary.
//!
//! Each test writes a fixture into a temporary directory, runs the binary
//! against it with `assert_cmd`, and checks stdout, the exit status and the
//! file left on disk.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use strip_ansi_escapes::strip as strip_ansi_escapes_fn;
use tempfile::tempdir;

const REPORT_WITH_MARKERS: &str = include_str!("fixtures/report_with_markers.tsx");
const REPORT_CLEANED: &str = include_str!("fixtures/report_cleaned.tsx");

fn mfclean() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("mfclean"));
    cmd.env_remove("MFCLEAN_TARGET");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).to_string()
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn cleans_file_and_reports_success() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", REPORT_WITH_MARKERS)?;

    mfclean()
        .arg(&path)
        .assert()
        .success()
        .stdout("✅ Report.tsx cleaned\n");

    assert_eq!(fs::read_to_string(&path)?, REPORT_CLEANED);
    Ok(())
}

#[test]
fn second_run_reports_no_change() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", REPORT_WITH_MARKERS)?;

    mfclean().arg(&path).assert().success();
    mfclean()
        .arg(&path)
        .assert()
        .success()
        .stdout("ℹ️ No changes applied to Report.tsx\n");

    assert_eq!(fs::read_to_string(&path)?, REPORT_CLEANED);
    Ok(())
}

#[test]
fn scenario_line_marker_is_removed() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(
        dir.path(),
        "Report.tsx",
        "const a = 1;\n  // MF_REPORT_START debug info here\nconst b = 2;\n",
    )?;

    mfclean().arg(&path).assert().success();
    assert_eq!(fs::read_to_string(&path)?, "const a = 1;\nconst b = 2;\n");
    Ok(())
}

#[test]
fn scenario_debug_warn_is_removed() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(
        dir.path(),
        "Report.tsx",
        "start();\nconsole.warn(\"MF_REPORT_DEBUG: value=\" + x);\nfinish();\n",
    )?;

    mfclean().arg(&path).assert().success();
    let cleaned = fs::read_to_string(&path)?;
    assert!(!cleaned.contains("MF_REPORT_DEBUG"));
    assert_eq!(cleaned, "start();\n\nfinish();\n");
    Ok(())
}

#[test]
fn scenario_only_lint_directive_is_removed() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(
        dir.path(),
        "Report.tsx",
        "// eslint-disable-next-line no-console\nconsole.log(\"kept\");\n",
    )?;

    mfclean().arg(&path).assert().success();
    assert_eq!(fs::read_to_string(&path)?, "console.log(\"kept\");\n");
    Ok(())
}

#[test]
fn scenario_blank_lines_collapse() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", "first();\n\n\n\n\n\nsecond();\n")?;

    mfclean().arg(&path).assert().success();
    assert_eq!(fs::read_to_string(&path)?, "first();\n\nsecond();\n");
    Ok(())
}

#[test]
fn check_mode_exits_one_and_keeps_file() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", REPORT_WITH_MARKERS)?;

    mfclean()
        .arg("--check")
        .arg(&path)
        .assert()
        .code(1)
        .stdout("🔎 Report.tsx would be cleaned\n");

    assert_eq!(fs::read_to_string(&path)?, REPORT_WITH_MARKERS);
    Ok(())
}

#[test]
fn check_mode_on_clean_file_succeeds() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", REPORT_CLEANED)?;

    mfclean()
        .args(["--check"])
        .arg(&path)
        .assert()
        .success()
        .stdout("ℹ️ No changes applied to Report.tsx\n");
    Ok(())
}

#[test]
fn diff_and_summary_are_written_to_stderr() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", REPORT_WITH_MARKERS)?;

    let output = mfclean()
        .args(["--diff", "--summary", "--quiet"])
        .arg(&path)
        .output()?;

    assert!(output.status.success());
    let stdout = strip_ansi(&output.stdout);
    let stderr = strip_ansi(&output.stderr);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stderr.contains("-// MF_REPORT_IMPORTS"));
    assert!(stderr.contains("eslint_no_console: 2"));
    Ok(())
}

#[test]
fn default_target_is_report_page() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("src/pages"))?;
    let path = write_fixture(&dir.path().join("src/pages"), "Report.tsx", REPORT_WITH_MARKERS)?;

    mfclean()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("✅ Report.tsx cleaned\n");

    assert_eq!(fs::read_to_string(&path)?, REPORT_CLEANED);
    Ok(())
}

#[test]
fn target_can_come_from_environment() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Panel.tsx", "a\n// __MF_REPORT_X__\nb\n")?;

    mfclean()
        .env("MFCLEAN_TARGET", &path)
        .assert()
        .success()
        .stdout("✅ Panel.tsx cleaned\n");
    Ok(())
}

#[test]
fn missing_file_fails_without_status_line() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("Missing.tsx");

    mfclean()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::starts_with("Error: Failed to clean")
                .and(predicate::str::contains("Failed to read source file")),
        );
    Ok(())
}

#[cfg(unix)]
#[test]
fn read_only_file_fails_without_status_line() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", REPORT_WITH_MARKERS)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444))?;
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        // Permission bits are not enforced for this user (e.g. root).
        return Ok(());
    }

    mfclean()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to write source file"));
    assert_eq!(fs::read_to_string(&path)?, REPORT_WITH_MARKERS);
    Ok(())
}

#[test]
fn invalid_theme_color_fails_before_cleaning() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", REPORT_WITH_MARKERS)?;
    let theme = write_fixture(dir.path(), "theme.yaml", "success:\n  fg: notacolor\n")?;

    mfclean()
        .arg("--theme")
        .arg(&theme)
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to parse theme file"));
    assert_eq!(fs::read_to_string(&path)?, REPORT_WITH_MARKERS);
    Ok(())
}

#[test]
fn debug_flag_emits_logs_on_stderr_only() -> Result<()> {
    let dir = tempdir()?;
    let path = write_fixture(dir.path(), "Report.tsx", "x\n// MF_REPORT_X\n")?;

    mfclean()
        .arg("--debug")
        .arg(&path)
        .assert()
        .success()
        .stdout("✅ Report.tsx cleaned\n")
        .stderr(predicate::str::contains("Rule 'line_comment_marker' compiled successfully."));
    Ok(())
}
