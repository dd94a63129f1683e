//! Hand-rolled infix formula evaluator with variable substitution.
//!
//! Given a text formula and a table of named numeric values, produces a
//! single numeric result. There is no parse tree: evaluation rewrites a
//! flat token sequence in place, resolving parenthesized groups
//! recursively and then reducing operators tier by tier until one
//! numeral remains.

pub mod bindings;
pub mod brackets;
pub mod error;
pub mod eval;
pub mod operand;
pub mod reduce;
pub mod tokenize;

/// Convenience alias for the numeric type used throughout.
pub type Scalar = f64;
