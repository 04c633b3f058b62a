//! Integration tests for the xcversion binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_bundle(root: &Path, name: &str, version: &str) {
    let contents = root.join(name).join("Contents");
    fs::create_dir_all(contents.join("Developer")).unwrap();
    fs::write(
        contents.join("Info.plist"),
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
  <key>CFBundleIdentifier</key>
  <string>com.apple.dt.Xcode</string>
  <key>CFBundleShortVersionString</key>
  <string>{}</string>
</dict>
</plist>
"#,
            version
        ),
    )
    .unwrap();
}

/// A directory with Xcode 8.0.9, 8.1.5, 8.1.9 and 9.0 installed.
fn setup_applications() -> TempDir {
    let temp = TempDir::new().unwrap();
    for version in ["8.0.9", "8.1.5", "8.1.9", "9.0"] {
        write_bundle(temp.path(), &format!("Xcode-{}.app", version), version);
    }
    temp
}

fn xcversion(project: &Path, apps: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("xcversion"));
    cmd.current_dir(project);
    cmd.env_remove("FL_XCODE_VERSION");
    cmd.env("NO_COLOR", "1");
    cmd.arg("--search-path").arg(apps);
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("xcversion"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Select an installed Xcode"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("xcversion"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn select_prints_developer_dir() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;
    let expected = apps.path().join("Xcode-8.1.9.app/Contents/Developer");

    xcversion(project.path(), apps.path())
        .args(["select", "8.1"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()))
        .stderr(predicate::str::contains("8.1.9"));
    Ok(())
}

#[test]
fn select_shell_format() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .args(["select", "~> 8.0", "--format", "shell"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("export DEVELOPER_DIR='"))
        .stdout(predicate::str::contains("Xcode-8.1.9.app/Contents/Developer'"));
    Ok(())
}

#[test]
fn select_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    let output = xcversion(project.path(), apps.path())
        .args(["select", "= 8.1.5", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["requirement"], "= 8.1.5");
    assert_eq!(json["origin"]["kind"], "explicit");
    assert_eq!(json["toolchain"]["version"], "8.1.5");
    Ok(())
}

#[test]
fn select_reads_env_var() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .env("FL_XCODE_VERSION", "~> 8.0.0")
        .arg("select")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xcode-8.0.9.app"));
    Ok(())
}

#[test]
fn no_subcommand_selects() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .env("FL_XCODE_VERSION", ">= 9")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xcode-9.0.app/Contents/Developer"));
    Ok(())
}

#[test]
fn select_falls_back_to_version_file() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;
    fs::write(project.path().join(".xcode-version"), "= 8.1.5\n")?;
    let nested = project.path().join("ios").join("App");
    fs::create_dir_all(&nested)?;

    xcversion(&nested, apps.path())
        .arg("select")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xcode-8.1.5.app"))
        .stderr(predicate::str::contains(".xcode-version"));
    Ok(())
}

#[test]
fn bare_version_file_picks_latest_in_series() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;
    fs::write(project.path().join(".xcode-version"), "8.1.5\n")?;

    xcversion(project.path(), apps.path())
        .arg("select")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xcode-8.1.9.app/Contents/Developer"))
        .stderr(predicate::str::contains("satisfying '8.1.5'"));
    Ok(())
}

#[test]
fn select_without_requirement_fails() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;
    fs::write(
        project.path().join(".xcversion.yml"),
        "version_file: .xcversion-test-absent\n",
    )?;

    xcversion(project.path(), apps.path())
        .arg("select")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "No version requirement supplied and no .xcversion-test-absent file found",
        ));
    Ok(())
}

#[test]
fn select_invalid_requirement_fails() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .args(["select", ">= 8.a.0"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Invalid version requirement"));
    Ok(())
}

#[test]
fn select_unsatisfied_requirement_fails() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .args(["select", "~> 7.3"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains(
            "Cannot find an installed Xcode satisfying '~> 7.3'",
        ));
    Ok(())
}

#[test]
fn quiet_mode_prints_only_result() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .args(["--quiet", "select", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Xcode-9.0.app"))
        .stderr("");
    Ok(())
}

#[test]
fn list_shows_installations_best_first() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    let output = xcversion(project.path(), apps.path())
        .args(["list", "~> 8.1.0"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("9.0"));
    assert!(lines[1].starts_with('*'));
    assert!(lines[1].contains("8.1.9"));
    assert!(lines[3].contains("8.0.9"));
    Ok(())
}

#[test]
fn list_to_redirected_stdout_is_plain() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    let output = xcversion(project.path(), apps.path())
        .env_remove("NO_COLOR")
        .args(["--verbose", "list", "~> 8.1.0"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("8.1.9"));
    assert!(!stdout.contains('\u{1b}'), "escape codes in {:?}", stdout);
    Ok(())
}

#[test]
fn list_json() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    let output = xcversion(project.path(), apps.path())
        .args(["list", "--json"])
        .output()?;
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json.as_array().map(|a| a.len()), Some(4));
    assert_eq!(json[0]["version"], "9.0");
    Ok(())
}

#[test]
fn list_skips_missing_search_path() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let missing = project.path().join("no-such-dir");

    xcversion(project.path(), &missing)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No Xcode installations found"));
    Ok(())
}

#[test]
fn validate_accepts_and_normalizes() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("xcversion"));
    cmd.args(["validate", ">=7.3,<8"]);
    cmd.assert().success().stdout(">= 7.3, < 8\n");
    Ok(())
}

#[test]
fn validate_rejects_garbage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("xcversion"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["validate", "latest"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("latest"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn exec_sets_developer_dir() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .args(["exec", "-r", "= 8.1.5", "--", "sh", "-c", "echo \"$DEVELOPER_DIR\""])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Xcode-8.1.5.app/Contents/Developer",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn exec_returns_child_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;

    xcversion(project.path(), apps.path())
        .args(["exec", "-r", "9", "--", "sh", "-c", "exit 5"])
        .assert()
        .code(5);
    Ok(())
}

#[test]
fn malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let apps = setup_applications();
    let project = TempDir::new()?;
    fs::write(project.path().join(".xcversion.yml"), "discovery: [oops\n")?;

    xcversion(project.path(), apps.path())
        .args(["select", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("xcversion"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("xcversion"));
    Ok(())
}
