use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use tempfile::TempDir;
use textlaser::{run, Cli};

const FONT: &str = "\
# Name: tiny

[H] 3
L 0,0,0,6
L 4,0,4,6
L 0,3,4,3

[i] 2
L 0,0,0,4
L 0,5,0,6

[T] 1
L 0,6,4,6

";

fn font_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tiny.cxf"), FONT).unwrap();
    dir
}

fn run_textlaser(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textlaser"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_run_writes_program_for_every_line() {
    let dir = font_dir();
    let cli = Cli::try_parse_from([
        "textlaser",
        "--font",
        "tiny.cxf",
        "--font-dir",
        dir.path().to_str().unwrap(),
        "-aHi",
        "-aHiH",
        "-Y20",
    ])
    .unwrap();

    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("; Code generated by textlaser\n"));
    assert!(text.contains("; Fontfile: tiny.cxf\n"));
    assert!(text.contains("M4 S0"));
    assert!(text.contains("; Line 1 \n"));
    assert_eq!(text.matches("M5").count(), 1);
    // second line sits one font height (6) lower
    assert!(text.contains("G00 X0.000000 Y14.000000"));
}

#[test]
fn test_count_mismatch_is_written_as_comment() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.cxf"), "[A] 2\nL 0,0,2,6\n\n").unwrap();
    let cli = Cli::try_parse_from([
        "textlaser",
        "--font",
        "bad.cxf",
        "--font-dir",
        dir.path().to_str().unwrap(),
        "-aA",
    ])
    .unwrap();

    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("; warning: discrepancy in number of commands bad.cxf, line 3, 2 != 1 \n"));
    assert!(text.contains("G01 X2.000000 Y6.000000 S200 F1000"));
}

#[test]
fn test_missing_font_is_fatal() {
    let dir = TempDir::new().unwrap();
    let cli = Cli::try_parse_from([
        "textlaser",
        "--font",
        "missing.cxf",
        "--font-dir",
        dir.path().to_str().unwrap(),
        "-aA",
    ])
    .unwrap();

    let mut out = Vec::new();
    let err = run(&cli, &mut out).unwrap_err();
    assert!(err.to_string().contains("missing.cxf"));
    assert!(out.is_empty());
}

#[test]
fn test_binary_finds_font_in_local_cxf_fonts() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("cxf_fonts")).unwrap();
    fs::write(dir.path().join("cxf_fonts").join("tiny.cxf"), FONT).unwrap();

    let output = run_textlaser(&["--font", "tiny.cxf", "-aT", "-S2"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("G00 X0.000000 Y6.000000"));
    assert!(stdout.contains("G01 X8.000000 Y6.000000 S200 F1000"));
}

#[test]
fn test_binary_fails_without_font() {
    let dir = TempDir::new().unwrap();
    let output = run_textlaser(&["--font", "nothing.cxf", "-aT"], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
