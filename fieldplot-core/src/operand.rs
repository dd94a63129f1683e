//! Operand span resolution.
//!
//! An operand span is the contiguous token run on one side of a binary
//! operator, optionally carrying a leading sign. Resolution never fails;
//! the fallbacks bottom out at zero.

use crate::bindings::Bindings;
use crate::tokenize::{join, parse_numeral};
use crate::Scalar;

/// Resolve an operand span to a number.
///
/// In priority order:
/// 1. the span is exactly a bound name: its value;
/// 2. the span is `-` followed by a bound name: the negated value;
/// 3. the span parses as a finite numeral: that literal;
/// 4. anything else: `0.0`.
///
/// Rule 4 makes unregistered symbols evaluate to zero rather than
/// erroring. Callers that want stricter behavior must check the table
/// before evaluating.
#[must_use]
pub fn resolve(span: &[char], bindings: &Bindings) -> Scalar {
    let text = join(span);

    if let Some(value) = bindings.lookup(&text) {
        return value;
    }
    if let Some(name) = text.strip_prefix('-') {
        if let Some(value) = bindings.lookup(name) {
            return -value;
        }
    }
    if let Some(value) = parse_numeral(span) {
        return value;
    }
    0.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
