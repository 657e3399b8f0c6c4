use assert_cmd::prelude::*;
use serial_test::serial;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn passforge() -> Command {
    Command::cargo_bin("passforge").unwrap()
}

fn write_config(dir: &Path, content: &str) {
    let cfg_dir = dir.join("passforge");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("config.toml"), content).unwrap();
}

fn first_line_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    out.lines().next().unwrap().to_string()
}

#[test]
#[serial]
fn generator_uses_config_length_when_not_overridden() {
    let td = tempdir().unwrap();
    write_config(td.path(), "generator_length = 33\n");

    let secret = first_line_of(
        passforge()
            .env("PASSFORGE_CONFIG_DIR", td.path())
            .env_remove("PASSFORGE_GEN_LENGTH")
            .arg("gen"),
    );
    assert_eq!(secret.len(), 33);
}

#[test]
#[serial]
fn env_overrides_config_file_length() {
    let td = tempdir().unwrap();
    write_config(td.path(), "generator_length = 33\n");

    let secret = first_line_of(
        passforge()
            .env("PASSFORGE_CONFIG_DIR", td.path())
            .env("PASSFORGE_GEN_LENGTH", "44")
            .arg("gen"),
    );
    assert_eq!(secret.len(), 44);
}

#[test]
#[serial]
fn cli_flag_beats_env_and_config() {
    let td = tempdir().unwrap();
    write_config(td.path(), "generator_length = 33\n");

    let secret = first_line_of(
        passforge()
            .env("PASSFORGE_CONFIG_DIR", td.path())
            .env("PASSFORGE_GEN_LENGTH", "44")
            .arg("gen")
            .args(["--length", "11"]),
    );
    assert_eq!(secret.len(), 11);
}

#[test]
#[serial]
fn config_can_allow_ambiguous_characters() {
    let td = tempdir().unwrap();
    write_config(td.path(), "avoid_ambiguous = false\n");

    // With filtering disabled the full pools are in play; just assert the
    // command works and honors length, since ambiguous chars may or may not
    // be drawn in any one run.
    let secret = first_line_of(
        passforge()
            .env("PASSFORGE_CONFIG_DIR", td.path())
            .arg("gen")
            .args(["--length", "25"]),
    );
    assert_eq!(secret.len(), 25);
}

#[test]
#[serial]
fn malformed_config_falls_back_to_defaults() {
    let td = tempdir().unwrap();
    write_config(td.path(), "generator_length = \"not a number\n");

    let secret = first_line_of(
        passforge()
            .env("PASSFORGE_CONFIG_DIR", td.path())
            .env_remove("PASSFORGE_GEN_LENGTH")
            .arg("gen"),
    );
    assert_eq!(secret.len(), 20);
}
