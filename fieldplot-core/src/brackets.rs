//! Innermost-first parenthesis resolution.

use crate::bindings::Bindings;
use crate::error::{EvalError, EvalResult};
use crate::eval;
use crate::reduce::{splice, ProgressGuard};
use crate::tokenize::join;

/// Resolve every parenthesized group in the token sequence.
///
/// Each pass finds the first `(`, walks to its matching `)` with a
/// nesting counter, runs the enclosed span through the full evaluation
/// pipeline (which resolves any nested groups first), and splices the
/// printed result over the group including both parentheses. The pass
/// repeats while any `(` remains.
///
/// An unmatched `(` fails immediately with a malformed-expression error.
/// Recursion depth is bounded by the bracket nesting depth of the input.
pub fn resolve(mut expr: Vec<char>, bindings: &Bindings) -> EvalResult<Vec<char>> {
    let mut guard = ProgressGuard::new();
    while let Some(open) = expr.iter().position(|&c| c == '(') {
        guard.check(&expr)?;
        let close = matching_paren(&expr, open)
            .ok_or_else(|| EvalError::malformed(format!("unmatched `(` in `{}`", join(&expr))))?;
        let inner = eval::reduce_to_value(expr[open + 1..close].to_vec(), bindings)?;
        expr = splice(&expr, open, close, inner);
    }
    Ok(expr)
}

/// Index of the `)` matching the `(` at `open`, if any.
fn matching_paren(expr: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &c) in expr.iter().enumerate().skip(open + 1) {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
