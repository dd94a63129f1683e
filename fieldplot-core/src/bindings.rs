//! Substitution table for variable names.
//!
//! The evaluator itself never defines variables; the caller supplies a
//! table of name/value pairs and the operand resolver looks names up in
//! it. Lookup is ordered: the value paired with the *first* exact name
//! match wins, so a caller can shadow an earlier binding by appending,
//! never by mutation from the evaluator's side.

use crate::Scalar;

/// An ordered name/value substitution table.
///
/// Names are ASCII-letter identifiers as produced by the formula grammar.
/// The table is deliberately a flat sequence rather than a map: tables
/// are tiny (a handful of coordinates and a time scalar) and ordered
/// first-match lookup is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: Vec<(String, Scalar)>,
}

impl Bindings {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a binding.
    pub fn define(&mut self, name: impl Into<String>, value: Scalar) {
        self.entries.push((name.into(), value));
    }

    /// Append a binding, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Scalar) -> Self {
        self.define(name, value);
        self
    }

    /// Build a table from a flat alternating `[name, value, name, value]`
    /// sequence of strings (even index = name, odd index = value).
    ///
    /// Value strings that do not parse as numbers bind as `0.0`; a
    /// trailing name with no value is ignored.
    #[must_use]
    pub fn from_flat(items: &[&str]) -> Self {
        let mut table = Self::new();
        for pair in items.chunks_exact(2) {
            table.define(pair[0], pair[1].parse().unwrap_or(0.0));
        }
        table
    }

    /// Look a name up, returning the value of the first exact match.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Scalar> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, v)| v)
    }

    /// Number of bindings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
