// ビルド済みバイナリを実行するテスト
use std::ffi::OsStr;
use std::iter;
use std::process::{Command, Output};

use fibonacci::cli::parse_limit;

fn run_binary<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fibonacci"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_single_term() {
    let output = run_binary(&["1"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "    1  1\n");
}

#[test]
fn test_default_prints_ten_terms() {
    let output = run_binary::<&str>(&[]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "    1  1");
    assert_eq!(lines[9], "   10  55");
}

#[test]
fn test_five_terms() {
    let output = run_binary(&["5"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "    1  1\n    2  1\n    3  2\n    4  3\n    5  5\n"
    );
}

#[test]
fn test_non_numeric_prints_nothing() {
    let output = run_binary(&["abc"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    // 警告は標準エラー出力にのみ出る
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("abc"));
}

#[test]
fn test_negative_and_zero_print_nothing() {
    for arg in ["0", "-3"] {
        let output = run_binary(&[arg]);
        assert!(output.status.success(), "limit {arg}");
        assert!(output.stdout.is_empty(), "limit {arg}");
    }
}

#[test]
fn test_extra_args_are_ignored() {
    let output = run_binary(&["2", "100"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "    1  1\n    2  1\n");
}

#[test]
fn test_flag_like_args_print_nothing() {
    for arg in ["--", "-h", "--help", "-V", "--version", "--unknown"] {
        let output = run_binary(&[arg]);
        assert!(output.status.success(), "arg {arg:?}");
        assert!(output.stdout.is_empty(), "arg {arg:?}");
    }
}

#[cfg(unix)]
#[test]
fn test_invalid_utf8_prints_nothing() {
    use std::os::unix::ffi::OsStrExt;

    let output = run_binary(&[OsStr::from_bytes(&[0xff, 0x35])]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_binary_agrees_with_parse_limit() {
    let cases: &[&[&str]] = &[
        &[],
        &["--"],
        &["-h"],
        &["-V"],
        &[""],
        &["9x"],
        &["-3"],
        &["7"],
        &[" 4 "],
        &["--", "5"],
        &["3", "--help"],
    ];

    for args in cases {
        let expected = parse_limit(iter::once("fibonacci").chain(args.iter().copied())).count();
        let output = run_binary(*args);

        assert!(output.status.success(), "args {args:?}");
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), expected, "args {args:?}");
    }
}
