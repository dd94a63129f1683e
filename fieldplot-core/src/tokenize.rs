//! Tokenizer for infix formulas.
//!
//! The reduction passes rewrite the token sequence in place, splicing the
//! printed form of each intermediate result back into the sequence. With
//! numerals re-entering the input mid-flight there is nothing to gain from
//! merging characters up front, so a token is exactly one character:
//! multi-character numerals and variable names are carved out later by the
//! operand scans.
//!
//! # Token production rules
//!
//! | Input        | Tokens produced                    |
//! |--------------|------------------------------------|
//! | `1 + 2`      | `1`, `+`, `2` (whitespace dropped) |
//! | `(x+3)*y`    | `(`, `x`, `+`, `3`, `)`, `*`, `y`  |
//! | `-0.5`       | `-`, `0`, `.`, `5`                 |
//!
//! No character is rejected here. Anything outside the grammar survives
//! tokenization and is caught later, either by the progress guard or by
//! the zero fallback for unknown symbols.

use crate::Scalar;

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Returns `true` for the four binary operator characters.
#[must_use]
pub const fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Returns `true` for the characters that can prefix an operand as a sign.
#[must_use]
pub const fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Split a formula into single-character tokens, dropping all whitespace.
#[must_use]
pub fn tokenize(input: &str) -> Vec<char> {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Join a token span back into a string.
#[must_use]
pub fn join(tokens: &[char]) -> String {
    tokens.iter().collect()
}

// ---------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------

/// Parse a token span as a finite number.
///
/// Returns `None` when the span is not a numeral, or when it parses to
/// NaN or an infinity. Non-finite intermediate results therefore fall
/// back to symbol resolution rather than re-entering arithmetic.
#[must_use]
pub fn parse_numeral(tokens: &[char]) -> Option<Scalar> {
    let value: Scalar = join(tokens).parse().ok()?;
    value.is_finite().then_some(value)
}

/// Print a value as the token sequence of its numeral.
///
/// Uses the standard shortest round-trip formatting, so splicing a result
/// into the token sequence and re-parsing it later recovers the exact
/// same value.
#[must_use]
pub fn format_numeral(value: Scalar) -> Vec<char> {
    value.to_string().chars().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
