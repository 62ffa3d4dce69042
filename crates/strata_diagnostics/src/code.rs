//! Diagnostic codes with category prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Errors in the input, prefixed with `E`.
    Error,
    /// Suspicious but usable input, prefixed with `W`.
    Warning,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A category prefix plus a numeric identifier, displayed as e.g. `E101`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// A netlist record that matches none of the known shapes or lacks a field.
    pub const MALFORMED_RECORD: DiagnosticCode = DiagnosticCode::new(Category::Error, 101);

    /// A gate name declared by more than one `INPUT`/`OUTPUT` record.
    pub const DUPLICATE_DECLARATION: DiagnosticCode = DiagnosticCode::new(Category::Error, 102);

    /// A gate referenced as a fanin or output that no record ever defines.
    pub const UNDEFINED_GATE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 201);

    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
