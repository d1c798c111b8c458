use super::*;
use crate::lexer::TokenCategory::*;

#[test]
fn test_invalid_token() {
    assert_compile_error(LangErrorMsg::InvalidToken('/'), "/", (1, 7), "x = 4 / 2");
    assert_compile_error(LangErrorMsg::InvalidToken('#'), "#", (3, 1), "x = 1\n\n# comment\n");
}

#[test]
fn test_syntax_errors() {
    assert_compile_error(
        LangErrorMsg::UnexpectedToken(Expected::Category(Newline)),
        ")",
        (1, 9),
        "print(1))",
    );
    assert_compile_error(
        LangErrorMsg::UnexpectedToken(Expected::Category(RightParen)),
        "\n",
        (1, 10),
        "print((1)",
    );
    assert_compile_error(
        LangErrorMsg::UnexpectedToken(Expected::Factor),
        "*",
        (1, 5),
        "x = * 2",
    );
    assert_compile_error(
        LangErrorMsg::UnexpectedToken(Expected::Category(Eof)),
        "3",
        (2, 1),
        "x = 1\n3\n",
    );
    assert_compile_error(
        LangErrorMsg::UnexpectedToken(Expected::Category(AssignOp)),
        "+",
        (1, 3),
        "x + 1",
    );
}

#[test]
fn test_error_message_text() {
    let err = crate::compile("print(1\n").unwrap_err();
    assert_eq!(
        "Error on '\\n' line 1 column 8\nExpecting RIGHTPAREN",
        err.to_string(),
    );
    assert_eq!(COMPILE_ERROR_EXIT_CODE, err.exit_code());

    let err = crate::compile("\n\nx = 1 +\n").unwrap_err();
    assert_eq!(
        "Error on '\\n' line 3 column 8\nExpecting factor",
        err.to_string(),
    );

    let err = crate::compile("x = 1\nprint(y)").unwrap_err();
    assert_eq!(
        "Error on 'y' line 2 column 7\nName y is not defined",
        err.to_string(),
    );
}

#[test]
fn test_nothing_runs_after_compile_error() {
    let mut out: Vec<u8> = vec![];
    let err = crate::compile_and_run("print(1)\nprint(2\n", &mut out).unwrap_err();
    assert!(matches!(err.msg, LangErrorMsg::UnexpectedToken(_)));
    assert!(out.is_empty());
}

#[test]
fn test_carriage_return_positions() {
    let err = crate::compile("print(1\r\n").unwrap_err();
    assert_eq!(
        "Error on '\\n' line 1 column 8\nExpecting RIGHTPAREN",
        err.to_string(),
    );
    assert_compile_error(
        LangErrorMsg::UndefinedName("y".to_owned()),
        "y",
        (4, 7),
        "x = 1\r\r\rprint(y)\r",
    );
}
