//! End-to-end tests for the dylext binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HELLO: &str = "Module: hello\n\ndefine function main () format-out(\"hi\") end;\n";

fn dylext(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dylext").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("DYLEXT_VERBOSE")
        .env_remove("DYLEXT_CONFIG")
        .env("DYLEXT_NO_COLOR", "1");
    cmd
}

fn write_hello(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("hello.dylan");
    std::fs::write(&path, HELLO).unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    dylext(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("highlight"))
        .stdout(predicate::str::contains("modes"))
        .stdout(predicate::str::contains("init-config"));
}

#[test]
fn test_highlight_text() {
    let dir = TempDir::new().unwrap();
    let path = write_hello(&dir);

    dylext(&dir)
        .arg("highlight")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:0-8\theader-keyword\tModule: \n"))
        .stdout(predicate::str::contains("3:0-6\tdef\tdefine\n"))
        .stdout(predicate::str::contains("\tstring\t\"hi\"\n"));
}

#[test]
fn test_highlight_json() {
    let dir = TempDir::new().unwrap();
    let path = write_hello(&dir);

    let output = dylext(&dir)
        .args(["highlight", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["lines"][2]["tokens"][0]["category"], "def");
}

#[test]
fn test_highlight_stdin() {
    let dir = TempDir::new().unwrap();
    dylext(&dir)
        .args(["highlight", "-"])
        .write_stdin("\n#t")
        .assert()
        .success()
        .stdout("2:0-2\tatom\t#t\n");
}

#[test]
fn test_highlight_ansi_without_color_echoes_source() {
    let dir = TempDir::new().unwrap();
    let path = write_hello(&dir);

    dylext(&dir)
        .args(["highlight", "-F", "ansi"])
        .arg(&path)
        .assert()
        .success()
        .stdout(HELLO);
}

#[test]
fn test_highlight_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    dylext(&dir)
        .args(["highlight", "missing.dylan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.dylan"));
}

#[test]
fn test_highlight_uses_config_from_current_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_hello(&dir);
    std::fs::write(
        dir.path().join("dylext.toml"),
        "[highlight]\nformat = \"json\"\n",
    )
    .unwrap();

    dylext(&dir)
        .arg("highlight")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_verbose_from_config_enables_debug_logging() {
    let dir = TempDir::new().unwrap();
    let path = write_hello(&dir);

    dylext(&dir)
        .arg("highlight")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("file classified").not());

    std::fs::write(dir.path().join("dylext.toml"), "verbose = true\n").unwrap();
    dylext(&dir)
        .arg("highlight")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("file classified"));
}

#[test]
fn test_broken_config_does_not_block_modes() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("dylext.toml"), "verbose = \"loud\"\n").unwrap();

    dylext(&dir).arg("modes").assert().success();
    dylext(&dir)
        .arg("highlight")
        .arg("-")
        .write_stdin("x")
        .assert()
        .failure();
}

#[test]
fn test_highlight_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let path = write_hello(&dir);
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[colors]\nkeyword = \"31\"\n").unwrap();

    dylext(&dir)
        .arg("--config")
        .arg(&config)
        .arg("highlight")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("keyword"));
}

#[test]
fn test_modes() {
    let dir = TempDir::new().unwrap();
    dylext(&dir)
        .arg("modes")
        .assert()
        .success()
        .stdout("dylan\ttext/x-dylan\tdylan,dyl,intr,lid\n");
}

#[test]
fn test_init_config_then_refuse_overwrite() {
    let dir = TempDir::new().unwrap();

    dylext(&dir).arg("init-config").assert().success();
    let written = std::fs::read_to_string(dir.path().join("dylext.toml")).unwrap();
    assert!(written.contains("indent_unit = 2"));
    assert!(written.contains("[highlight]"));

    dylext(&dir)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    dylext(&dir).args(["init-config", "--force"]).assert().success();
}
