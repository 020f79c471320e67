//! Runs the built binary and checks its exit status and output.

use std::process::{Command, Output};

use treeglyph_icons::IconStyle;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_treeglyph-icons"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn writes_icons_and_reports_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("build");

    let output = run_cli(&["--out-dir", out.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("Generated icons in {}\n", out.display())
    );
    for name in ["icon.png", "icon.icns", "icon.ico"] {
        assert!(out.join(name).is_file(), "{name} missing");
    }
}

#[test]
fn missing_style_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let out = dir.path().join("build");

    let output = run_cli(&[
        "--style",
        missing.to_str().unwrap(),
        "--out-dir",
        out.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read style"), "stderr: {stderr}");
    assert!(!out.exists());
}

#[test]
fn print_style_outputs_default_json() {
    let output = run_cli(&["--print-style"]);

    assert!(output.status.success());
    let json = String::from_utf8(output.stdout).unwrap();
    assert_eq!(IconStyle::from_json(&json).unwrap(), IconStyle::default());
}
