//! Runs the `hybrid` binary on source files and checks its output and exit
//! status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Writes `source_code` to a fresh file in the temp directory and returns its
/// path.
fn source_file(name: &str, source_code: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hybrid-cli-{}-{}.txt", std::process::id(), name));
    fs::write(&path, source_code).expect("Unable to write source file");
    path
}

fn hybrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hybrid"))
        .args(args)
        .env_remove("HYBRID_TRACE")
        .env_remove("HYBRID_LOG")
        .output()
        .expect("Unable to run interpreter")
}

fn run_source(name: &str, source_code: &str) -> (Option<i32>, String) {
    let path = source_file(name, source_code);
    let output = hybrid(&[path.to_str().expect("Temp path is not UTF-8")]);
    let _ = fs::remove_file(&path);
    (
        output.status.code(),
        String::from_utf8(output.stdout).expect("Output is not UTF-8"),
    )
}

#[test]
fn test_success() {
    assert_eq!(
        (Some(0), "7\n-14\n".to_owned()),
        run_source("success", "x = 3 + 4\nprint(x)\nprint(x * -2)\n"),
    );
}

#[test]
fn test_wrong_argument_count() {
    for args in &[&[][..], &["a.txt", "b.txt"][..]] {
        let output = hybrid(args);
        assert_eq!(Some(1), output.status.code());
        let stdout = String::from_utf8(output.stdout).expect("Output is not UTF-8");
        assert!(stdout.starts_with("Wrong number of command line arguments\n"));
    }
}

#[test]
fn test_unreadable_file() {
    let path = std::env::temp_dir().join("hybrid-cli-missing-dir").join("nothing.txt");
    let path = path.to_str().expect("Temp path is not UTF-8");
    let output = hybrid(&[path]);
    assert_eq!(Some(1), output.status.code());
    assert_eq!(
        format!("Cannot read input file {}\n", path),
        String::from_utf8(output.stdout).expect("Output is not UTF-8"),
    );
}

#[test]
fn test_compile_error() {
    assert_eq!(
        (
            Some(1),
            "\nError on '\\n' line 2 column 8\nExpecting RIGHTPAREN\n".to_owned(),
        ),
        run_source("compile-error", "x = 1\nprint(x\n"),
    );
}

#[test]
fn test_uninitialized_name() {
    let (code, stdout) = run_source("uninitialized", "print(1)\nx = x\n");
    assert_eq!("1\nNo value for x\n", stdout);
    if cfg!(unix) {
        assert_eq!(Some(255), code);
    } else {
        assert_eq!(Some(-1), code);
    }
}

#[test]
fn test_carriage_return_source() {
    assert_eq!(
        (Some(0), "1\n".to_owned()),
        run_source("carriage-return", "x = 1\rprint(x)\r"),
    );
}
