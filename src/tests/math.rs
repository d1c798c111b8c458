use itertools::iproduct;
use proptest::prelude::*;

use super::*;

#[test]
fn test_precedence() {
    assert_output("10\n", "print(2*3+4)");
    assert_output("14\n", "print(2+3*4)");
    assert_output("20\n", "print((2+3)*4)");
    assert_output("26\n", "print(2 * (3 + 4) + 3 * 4)");
}

#[test]
fn test_negation() {
    assert_output("-5\n", "print(-5)");
    assert_output("5\n", "print(--5)");
    assert_output("5\n", "print(+-+-5)");
    assert_output("-6\n", "print(-2 * 3)");
    assert_output("6\n", "print(-2 * -3)");
    assert_output("-1\n", "print(-(2 + -3) * -1)");
    assert_output("0\n", "print(-0)");
    assert_output("-3\n", "x = 3\nprint(-x)");
    assert_output("3\n", "x = -3\nprint(-x)");
    assert_output("-9\n", "x = 3\nprint(-x * x)");
    assert_output("9\n", "x = 3\nprint(-x * -x)");
}

#[test]
fn test_subtraction_is_rejected() {
    assert_compile_error(
        LangErrorMsg::UnexpectedToken(Expected::Category(crate::lexer::TokenCategory::RightParen)),
        "-",
        (1, 10),
        "print(10 - 3 - 2)",
    );
}

#[test]
fn test_integer_grid() {
    for (a, b) in iproduct!(test_values(), test_values()) {
        assert_output(&format!("{}\n", &a + &b), &format!("print({} + {})", a, b));
        assert_output(&format!("{}\n", &a * &b), &format!("print({} * {})", a, b));
        assert_output(&format!("{}\n", -&a * &b), &format!("print(-{} * {})", a, b));
        assert_output(
            &format!("{}\n", -(&a + &b)),
            &format!("a = {}\nb = {}\nprint(-(a + b))", a, b),
        );
    }
}

#[test]
fn test_big_literals() {
    assert_output(
        "100000000000000000000000000000000000000\n",
        "print(10000000000000000000 * 10000000000000000000)",
    );
    assert_output(
        "-99999999999999999999\n",
        "print(-99999999999999999999)",
    );
}

proptest! {
    #[test]
    fn proptest_sums_and_products(
        terms in prop::collection::vec(
            prop::collection::vec(-1000_i64..1000, 1..4),
            1..5,
        ),
    ) {
        let source_code = format!(
            "print({})",
            terms.iter().map(|factors| factors.iter().join(" * ")).join(" + "),
        );
        let expected: LangInt = terms
            .iter()
            .map(|factors| factors.iter().map(|&f| LangInt::from(f)).product::<LangInt>())
            .sum();
        prop_assert_eq!(Ok(format!("{}\n", expected)), run_program(&source_code));
    }
}
