//! Black-box test suite.

use itertools::Itertools;

mod math;
mod syntax;

use super::errors::*;
use super::span::TextPoint;
use super::LangInt;

/// Compiles and runs the given source code and checks that it succeeds with
/// the expected output.
fn assert_output(expected: &str, source_code: &str) {
    assert_eq!(
        Ok(expected.to_owned()),
        run_program(source_code),
        "Wrong output for program:\n{}",
        source_code,
    );
}

/// Compiles the given source code and checks that it fails with the expected
/// message on a token with the given lexeme and position.
fn assert_compile_error(
    expected_msg: LangErrorMsg,
    expected_lexeme: &str,
    expected_point: (usize, usize),
    source_code: &str,
) {
    let err = super::compile(source_code).expect_err("Compilation should have failed");
    assert_eq!(expected_msg, err.msg, "Wrong error for program:\n{}", source_code);
    let token = err.token.expect("Compile error should carry a token");
    assert_eq!(expected_lexeme, token.lexeme);
    assert_eq!(TextPoint(expected_point.0, expected_point.1), token.point());
}

/// Compiles and runs the given source code, returning its output.
fn run_program(source_code: &str) -> LangResult<String> {
    let mut out: Vec<u8> = vec![];
    super::compile_and_run(source_code, &mut out)?;
    Ok(String::from_utf8(out).expect("Program output is not UTF-8"))
}

/// Returns a handful of integers to try, including some that do not fit in 64
/// bits.
fn test_values() -> Vec<LangInt> {
    vec![
        "0",
        "1",
        "7",
        "10",
        "4096",
        "9223372036854775807",
        "18446744073709551616",
        "123456789012345678901234567890",
    ]
    .into_iter()
    .map(|s| s.parse().expect("Bad test value"))
    .collect_vec()
}

#[test]
fn test_empty_program() {
    assert_output("", "");
    assert_output("", "\n  \n\t\n");
}

#[test]
fn test_run_with_config() {
    let config = crate::Config {
        trace: true,
        ..crate::Config::default()
    };
    let mut out: Vec<u8> = vec![];
    crate::run_with_config(&config, "print(6 * 7)", &mut out).expect("Run failed");
    let out = String::from_utf8(out).expect("Output is not UTF-8");
    assert!(out.starts_with("----1-3-5"));
    assert!(out.contains("  1 print(6 * 7)\n"));
    assert!(out.ends_with(" Program output\n42\n"));

    let config = crate::Config {
        trace: false,
        ..crate::Config::default()
    };
    let mut out: Vec<u8> = vec![];
    crate::run_with_config(&config, "print(6 * 7)", &mut out).expect("Run failed");
    assert_eq!(b"42\n", &out[..]);
}

#[test]
fn test_trace_stops_at_invalid_token() {
    let mut out: Vec<u8> = vec![];
    let err = crate::compile_and_run_traced("x = 1\nprint(x) $\n", &mut out).unwrap_err();
    assert_eq!(LangErrorMsg::InvalidToken('$'), err.msg);
    let out = String::from_utf8(out).expect("Output is not UTF-8");
    assert!(out.contains("RIGHTPAREN"));
    assert!(!out.contains("Program output"));
}
