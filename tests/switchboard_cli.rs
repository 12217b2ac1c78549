use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn write_config(dir: &Path, file_name: &str, accounts: &Path, extra: &str) -> PathBuf {
    let config_path = dir.join(file_name);
    fs::write(
        &config_path,
        format!(
            r#"
accounts_file = "{accounts}"
api_base = "http://127.0.0.1:9/api/v9/"
{extra}
[observability]
filter_level = "warn"
"#,
            accounts = accounts.display(),
        ),
    )
    .expect("write config");

    config_path
}

fn write_accounts(path: &Path) {
    fs::write(
        path,
        r#"[
  { "name": "main", "id": "1001", "token": "AAAA.BBBB.CCCCCCCC.dd" },
  { "name": "alt", "id": "1002", "token": "XXXX.YYYY.ZZZZ", "aliases": ["second"] }
]"#,
    )
    .expect("write accounts");
}

fn run_switchboard(args: &[&str], current_dir: Option<&Path>) -> Output {
    let mut cmd = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_switchboard")));
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }
    cmd.output().expect("run switchboard command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn list_prints_redacted_tokens() {
    let temp = tempfile::tempdir().expect("temp dir");
    let accounts = temp.path().join("accounts.json");
    write_accounts(&accounts);
    let config = write_config(temp.path(), "switchboard.toml", &accounts, "");

    let output = run_switchboard(&["list", "--config", config.to_str().expect("utf8 path")], None);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let out = stdout(&output);
    assert!(out.contains("main (1001)"));
    assert!(out.contains("AAAA.BBBB.********.**"));
    assert!(out.contains("XXXX.YYYY.****"));
    assert!(out.contains("aliases: second"));
    assert!(!out.contains("CCCCCCCC"));
}

#[test]
fn list_creates_missing_account_file() {
    let temp = tempfile::tempdir().expect("temp dir");
    let accounts = temp.path().join("data").join("accounts.json");
    let config = write_config(temp.path(), "custom.toml", &accounts, "");

    let output = run_switchboard(&["--config", config.to_str().expect("utf8 path"), "list"], None);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No accounts stored"));
    assert_eq!(
        fs::read_to_string(&accounts).expect("account file created").trim(),
        "[]"
    );
}

#[test]
fn list_tolerates_malformed_account_file() {
    let temp = tempfile::tempdir().expect("temp dir");
    let accounts = temp.path().join("accounts.json");
    fs::write(&accounts, "not json at all").expect("write accounts");
    let config = write_config(temp.path(), "switchboard.toml", &accounts, "");

    let output = run_switchboard(&["list", "-c", config.to_str().expect("utf8 path")], None);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No accounts stored"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not be parsed"));
    // listing never rewrites the file
    assert_eq!(
        fs::read_to_string(&accounts).expect("read accounts"),
        "not json at all"
    );
}

#[test]
fn config_is_found_in_current_directory() {
    let temp = tempfile::tempdir().expect("temp dir");
    let accounts = temp.path().join("accounts.json");
    write_accounts(&accounts);
    write_config(temp.path(), "switchboard.toml", &accounts, "");

    let output = run_switchboard(&["list"], Some(temp.path()));

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("alt (1002)"));
}

#[test]
fn check_config_accepts_valid_config() {
    let temp = tempfile::tempdir().expect("temp dir");
    let accounts = temp.path().join("accounts.json");
    let config = write_config(
        temp.path(),
        "valid.toml",
        &accounts,
        r#"
[[menu]]
label = "Help"
[menu.inline]
title = "Help"
text = ["Esc goes back"]
"#,
    );

    let output = run_switchboard(
        &["check-config", "--config", config.to_str().expect("utf8 path")],
        None,
    );

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("Configuration is valid"));
}

#[test]
fn check_config_rejects_choice_without_target() {
    let temp = tempfile::tempdir().expect("temp dir");
    let accounts = temp.path().join("accounts.json");
    let config = write_config(
        temp.path(),
        "invalid.toml",
        &accounts,
        r#"
[[menu]]
label = "Nowhere"
"#,
    );

    let output = run_switchboard(
        &["check-config", "--config", config.to_str().expect("utf8 path")],
        None,
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("menu[0]"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let temp = tempfile::tempdir().expect("temp dir");
    let missing = temp.path().join("missing.toml");

    let output = run_switchboard(&["list", "--config", missing.to_str().expect("utf8 path")], None);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.toml"));
}
