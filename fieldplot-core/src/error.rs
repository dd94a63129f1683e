//! Error types for the formula evaluator.

use std::fmt;

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Categories of evaluation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Brackets or operator sequences the reducer cannot consume:
    /// an unmatched `(`, a dangling operator, or a reduction pass that
    /// left the token sequence unchanged.
    MalformedExpression,
    /// The right operand of a `/` reduced to zero.
    DivisionByZero,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedExpression => write!(f, "malformed expression"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// An error produced by the formula evaluator.
///
/// Evaluation never returns a partial numeric result: any failure inside
/// a bracketed sub-expression or a reduction step propagates to the top
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    /// What went wrong.
    pub kind: EvalErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl EvalError {
    /// Create a new error.
    #[must_use]
    pub fn new(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`EvalErrorKind::MalformedExpression`] error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::MalformedExpression, message)
    }

    /// Shorthand for a [`EvalErrorKind::DivisionByZero`] error.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new(EvalErrorKind::DivisionByZero, "division by zero")
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

/// Convenience type alias for results using [`EvalError`].
pub type EvalResult<T> = Result<T, EvalError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
