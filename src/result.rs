//! Per-run execution records.
//!
//! Each completed run produces one flat, ordered record of numeric
//! fields. The on-disk form is a single comma-separated line of values
//! (no keys, no header) appended to the caller's sink; downstream
//! analysis tooling keys columns by the documented field order of each
//! algorithm.

use std::fmt;
use std::io::{self, Write};

/// A single numeric field value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    Int(u64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

/// An ordered run record: parameters plus measured outcome.
///
/// Immutable once constructed; field order is fixed by the producing
/// algorithm and is the contract with downstream readers.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExecutionResult {
    fields: Vec<(&'static str, Value)>,
}

impl ExecutionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named field, preserving insertion order.
    pub fn with_field(mut self, name: &'static str, value: Value) -> Self {
        self.fields.push((name, value));
        self
    }

    /// Field names in record order.
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    /// Looks a field up by name.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    /// The record's values comma-joined, without a trailing newline.
    pub fn to_line(&self) -> String {
        self.fields
            .iter()
            .map(|(_, value)| value.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Writes the record as one line to an append-only sink.
    pub fn save<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "{}", self.to_line())
    }
}
