use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bubblehue_cmd() -> Command {
    Command::cargo_bin("bubblehue").expect("binary exists")
}

#[test]
fn bubblehue_help_prints_usage() {
    bubblehue_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Color picker overlay with contrast-aware text",
        ));
}

#[test]
fn no_flags_prints_controls() {
    bubblehue_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .success()
        .stdout(predicate::str::contains("bubblehue --snapshot"));
}

#[test]
fn active_mode_requires_wayland_env() {
    bubblehue_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--active")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn invalid_color_is_rejected() {
    bubblehue_cmd()
        .args(["--snapshot", "out.png", "--color", "#12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn snapshot_size_requires_snapshot() {
    bubblehue_cmd()
        .args(["--width", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--snapshot"));
}

#[test]
fn oversized_elapsed_is_rejected() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("late.png");

    for elapsed in ["1e19", "3601"] {
        bubblehue_cmd()
            .env("XDG_CONFIG_HOME", temp.path())
            .arg("--snapshot")
            .arg(&out)
            .args(["--elapsed", elapsed])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("exceeds the maximum"));
    }
    assert!(!out.exists());
}

#[test]
fn snapshot_writes_png_using_temp_config_home() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("bubblehue");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[picker]\ndefault_color = \"#5f27cd\"\nstart_dark = true\n",
    )
    .unwrap();
    let out = temp.path().join("picker.png");

    bubblehue_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--snapshot")
        .arg(&out)
        .args(["--width", "400", "--height", "480", "--elapsed", "7", "--seed", "3"])
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn snapshot_accepts_color_override() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("black.png");

    bubblehue_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--snapshot")
        .arg(&out)
        .args(["--color", "000", "--dark", "--elapsed", "0"])
        .assert()
        .success();

    assert!(out.exists());
}
