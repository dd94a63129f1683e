//! Precedence-ordered reduction over the token sequence.
//!
//! There is no expression tree. A reduction pass locates the leftmost
//! operator of the active tier, scans outward for the two operand spans,
//! resolves them, and splices the printed result back over the consumed
//! span. Each successful step removes one operator; the token sequence
//! shrinks until the tier is exhausted.
//!
//! Two things keep the loop honest:
//! - an operator in the last position fails immediately (nothing to its
//!   right can ever complete it);
//! - a step that cannot consume its operator returns the sequence
//!   unchanged, and the [`ProgressGuard`] turns the stall into a
//!   [`MalformedExpression`](crate::error::EvalErrorKind::MalformedExpression)
//!   error on the next pass instead of looping forever.

use crate::bindings::Bindings;
use crate::error::{EvalError, EvalResult};
use crate::operand;
use crate::tokenize::{format_numeral, is_operator, is_sign, join};
use crate::Scalar;

// ---------------------------------------------------------------------------
// Binary operators
// ---------------------------------------------------------------------------

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Map an operator character to its operator, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The operator's character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Apply the operator to two resolved operands.
    ///
    /// Division checks the divisor against exact zero (the same test the
    /// operand resolver's zero fallback produces for unknown symbols, so
    /// `1/z` with `z` unbound is also caught here).
    pub fn apply(self, lhs: Scalar, rhs: Scalar) -> EvalResult<Scalar> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0.0 {
                    return Err(EvalError::division_by_zero());
                }
                Ok(lhs / rhs)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Precedence tiers
// ---------------------------------------------------------------------------

/// An operator class resolved completely before the next class runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `*` and `/`.
    MulDiv,
    /// `+` and `-`. A `-` in position 0 is a sign, never an operator.
    AddSub,
}

impl Tier {
    /// Find the leftmost operator of this tier.
    ///
    /// When both operators of the tier are present the smaller index
    /// wins, which gives the conventional left-to-right evaluation order
    /// within a tier.
    #[must_use]
    pub fn find(self, expr: &[char]) -> Option<(usize, BinOp)> {
        for (i, &c) in expr.iter().enumerate() {
            let Some(op) = BinOp::from_char(c) else {
                continue;
            };
            let eligible = match self {
                Self::MulDiv => matches!(op, BinOp::Mul | BinOp::Div),
                Self::AddSub => match op {
                    BinOp::Add => true,
                    BinOp::Sub => i > 0,
                    BinOp::Mul | BinOp::Div => false,
                },
            };
            if eligible {
                return Some((i, op));
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Progress guard
// ---------------------------------------------------------------------------

/// Detects a reduction pass that consumed nothing.
///
/// Checked at the top of every pass: if the joined token sequence equals
/// the joined sequence from the previous pass of the same phase, the
/// reducer is structurally stuck and the evaluation fails instead of
/// spinning.
#[derive(Debug, Default)]
pub struct ProgressGuard {
    previous: String,
}

impl ProgressGuard {
    /// Create a guard with no history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: String::new(),
        }
    }

    /// Record the sequence about to be reduced, failing on a repeat.
    pub fn check(&mut self, expr: &[char]) -> EvalResult<()> {
        let joined = join(expr);
        if joined == self.previous {
            return Err(EvalError::malformed(format!(
                "expression does not reduce: `{joined}`"
            )));
        }
        self.previous = joined;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Splicing
// ---------------------------------------------------------------------------

/// Replace the inclusive token range `start..=end` with a printed numeral.
#[must_use]
pub(crate) fn splice(expr: &[char], start: usize, end: usize, value: Scalar) -> Vec<char> {
    let mut out = Vec::with_capacity(expr.len());
    out.extend_from_slice(&expr[..start]);
    out.extend(format_numeral(value));
    out.extend_from_slice(&expr[end + 1..]);
    out
}

// ---------------------------------------------------------------------------
// Tier reduction
// ---------------------------------------------------------------------------

/// Reduce every operator of one tier, leftmost first.
pub fn reduce_tier(mut expr: Vec<char>, tier: Tier, bindings: &Bindings) -> EvalResult<Vec<char>> {
    let mut guard = ProgressGuard::new();
    while let Some((root, op)) = tier.find(&expr) {
        guard.check(&expr)?;
        expr = reduce_at(expr, root, op, bindings)?;
    }
    Ok(expr)
}

/// Perform one reduction step at the operator in position `root`.
///
/// The left scan walks over non-operator tokens and additionally accepts
/// a sign character directly left of the operator or in position 0; this
/// is what lets signed literals and signed names ride along as a single
/// operand. The right scan mirrors it, except only the token directly
/// right of the operator may be a sign.
///
/// An empty right span (the next token is another operator) returns the
/// sequence unchanged; the caller's guard then reports the stall.
fn reduce_at(
    expr: Vec<char>,
    root: usize,
    op: BinOp,
    bindings: &Bindings,
) -> EvalResult<Vec<char>> {
    if root == expr.len() - 1 {
        return Err(EvalError::malformed(format!(
            "dangling operator `{}` in `{}`",
            op.symbol(),
            join(&expr)
        )));
    }

    let mut start = root;
    for j in (0..root).rev() {
        let c = expr[j];
        let keep = !is_operator(c) || (j == root - 1 && is_sign(c)) || (j == 0 && is_sign(c));
        if !keep {
            break;
        }
        start = j;
    }

    let mut end = root;
    for (j, &c) in expr.iter().enumerate().skip(root + 1) {
        let keep = !is_operator(c) || (j == root + 1 && is_sign(c));
        if !keep {
            break;
        }
        end = j;
    }
    if end == root {
        // Nothing consumable on the right (`2**3`); stall for the guard.
        return Ok(expr);
    }

    let lhs = operand::resolve(&expr[start..root], bindings);
    let rhs = operand::resolve(&expr[root + 1..=end], bindings);
    let value = op.apply(lhs, rhs)?;

    Ok(splice(&expr, start, end, value))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
