//! The evaluation pipeline.
//!
//! A single call runs four phases over the token sequence:
//!
//! 1. whitespace stripping and tokenization;
//! 2. bracket resolution (recursive, innermost first);
//! 3. `*`/`/` reduction, then `+`/`-` reduction, leftmost first;
//! 4. a final numeral parse, with one fallback: a remainder that is not
//!    a numeral resolves as a bare (possibly signed) symbol.
//!
//! The fallback is what makes an operator-free formula like `-x` or `t`
//! produce a value. Every phase either shrinks the token sequence or
//! fails; no call can loop forever.

use crate::bindings::Bindings;
use crate::brackets;
use crate::error::EvalResult;
use crate::operand;
use crate::reduce::{self, Tier};
use crate::tokenize::{parse_numeral, tokenize};
use crate::Scalar;

/// Evaluate an infix formula against a substitution table.
///
/// The grammar covers digits, `.`, the four binary operators,
/// parentheses, and ASCII-letter variable names; whitespace is ignored
/// anywhere. A minus is a sign when it opens the formula or directly
/// follows an operator, and a binary operator otherwise.
///
/// # Errors
/// [`MalformedExpression`](crate::error::EvalErrorKind::MalformedExpression)
/// for unmatched `(`, dangling operators, or token runs the reducer
/// cannot consume;
/// [`DivisionByZero`](crate::error::EvalErrorKind::DivisionByZero) when
/// the divisor of a `/` step reduces to zero.
pub fn evaluate(expression: &str, bindings: &Bindings) -> EvalResult<Scalar> {
    reduce_to_value(tokenize(expression), bindings)
}

/// Run phases 2 to 4 over an already-tokenized sequence.
///
/// Also the re-entry point for bracketed sub-expressions, which go
/// through the same pipeline recursively.
pub(crate) fn reduce_to_value(tokens: Vec<char>, bindings: &Bindings) -> EvalResult<Scalar> {
    let tokens = brackets::resolve(tokens, bindings)?;
    let tokens = reduce::reduce_tier(tokens, Tier::MulDiv, bindings)?;
    let tokens = reduce::reduce_tier(tokens, Tier::AddSub, bindings)?;

    match parse_numeral(&tokens) {
        Some(value) => Ok(value),
        None => Ok(operand::resolve(&tokens, bindings)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::EvalErrorKind;

    fn eval(input: &str) -> EvalResult<Scalar> {
        evaluate(input, &Bindings::new())
    }

    fn eval_with(input: &str, bindings: &Bindings) -> EvalResult<Scalar> {
        evaluate(input, bindings)
    }

    // -- literals --

    #[test]
    fn bare_literals() {
        assert_eq!(eval("7").unwrap(), 7.0);
        assert_eq!(eval("0.5").unwrap(), 0.5);
        assert_eq!(eval("-2.5").unwrap(), -2.5);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(eval("").unwrap(), 0.0);
        assert_eq!(eval("   ").unwrap(), 0.0);
    }

    // -- precedence and associativity --

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("2*3+4").unwrap(), 10.0);
        assert_eq!(eval("8-6/2").unwrap(), 5.0);
    }

    #[test]
    fn same_tier_reduces_left_to_right() {
        assert_eq!(eval("8/2*4").unwrap(), 16.0);
        assert_eq!(eval("10-3-4").unwrap(), 3.0);
        assert_eq!(eval("1-2+3").unwrap(), 2.0);
        assert_eq!(eval("100/10/5").unwrap(), 2.0);
    }

    #[test]
    fn whitespace_is_ignored_anywhere() {
        assert_eq!(eval(" 2 + 3\t* 4 ").unwrap(), 14.0);
    }

    // -- brackets --

    #[test]
    fn brackets_override_precedence() {
        assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
    }

    #[test]
    fn nested_brackets_innermost_first() {
        assert_eq!(eval("((1+2)*(3+4))").unwrap(), 21.0);
        assert_eq!(eval("2*(3+(4-1))").unwrap(), 12.0);
    }

    #[test]
    fn bracket_result_feeds_surrounding_reduction() {
        assert_eq!(eval("1-(0-5)").unwrap(), 6.0);
        assert_eq!(eval("(0-5)*3").unwrap(), -15.0);
    }

    // -- substitution --

    #[test]
    fn names_substitute() {
        let b = Bindings::new().with("x", 3.0).with("y", 4.0);
        assert_eq!(eval_with("x+y", &b).unwrap(), 7.0);
        assert_eq!(eval_with("x*y", &b).unwrap(), 12.0);
    }

    #[test]
    fn flat_table_form() {
        let b = Bindings::from_flat(&["x", "3", "y", "4"]);
        assert_eq!(eval_with("x+y", &b).unwrap(), 7.0);
    }

    #[test]
    fn single_signed_name_without_operators() {
        let b = Bindings::new().with("x", 5.0);
        assert_eq!(eval_with("-x", &b).unwrap(), -5.0);
        assert_eq!(eval_with("x", &b).unwrap(), 5.0);
    }

    #[test]
    fn multi_letter_names() {
        let b = Bindings::new().with("vel", 2.5);
        assert_eq!(eval_with("vel*4", &b).unwrap(), 10.0);
    }

    #[test]
    fn unregistered_symbol_is_zero() {
        assert_eq!(eval("z").unwrap(), 0.0);
        assert_eq!(eval("2+z").unwrap(), 2.0);
        assert_eq!(eval("z*9").unwrap(), 0.0);
    }

    // -- signs --

    #[test]
    fn sign_after_operator() {
        assert_eq!(eval("2*-3").unwrap(), -6.0);
        assert_eq!(eval("2+-3").unwrap(), -1.0);
        assert_eq!(eval("2--3").unwrap(), 5.0);
    }

    #[test]
    fn leading_sign() {
        assert_eq!(eval("-5+2").unwrap(), -3.0);
        assert_eq!(eval("-2*-2").unwrap(), 4.0);
    }

    // -- errors --

    #[test]
    fn division_by_zero() {
        let err = eval("1/0").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        let err = eval("1/(2-2)").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn unmatched_open_bracket() {
        let err = eval("(2+3").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::MalformedExpression);
    }

    #[test]
    fn trailing_operator() {
        let err = eval("2+").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::MalformedExpression);
    }

    #[test]
    fn unreducible_operator_run() {
        let err = eval("2**3").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::MalformedExpression);
    }

    #[test]
    fn error_inside_bracket_propagates() {
        let err = eval("2*(1/0)").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }

    // -- splice round trips --

    #[test]
    fn spliced_numerals_re_parse_exactly() {
        // 0.1+0.2 splices a long numeral back into the sequence; the
        // final result must match doing the arithmetic directly.
        assert_eq!(eval("(0.1+0.2)*10").unwrap(), (0.1 + 0.2) * 10.0);
        assert_eq!(eval("1/3*3").unwrap(), 1.0 / 3.0 * 3.0);
    }

    #[test]
    fn printed_result_evaluates_to_itself() {
        for v in [20.0, -6.0, 0.30000000000000004, 1.0 / 3.0] {
            assert_eq!(eval(&v.to_string()).unwrap(), v);
        }
    }

    // -- field-style formulas --

    #[test]
    fn field_component_formula() {
        // The shape of a real caller: coordinates, radius and time.
        let b = Bindings::new()
            .with("x", 3.0)
            .with("y", 4.0)
            .with("r", 5.0)
            .with("t", 0.5);
        assert_eq!(eval_with("y/r", &b).unwrap(), 0.8);
        assert_eq!(eval_with("(x-1)/(r*r)", &b).unwrap(), 2.0 / 25.0);
        assert_eq!(eval_with("t*x-y", &b).unwrap(), -2.5);
    }
}
