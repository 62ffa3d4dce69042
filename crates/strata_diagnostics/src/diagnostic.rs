//! Structured diagnostic messages.

use crate::code::DiagnosticCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic, ordered from least to most severe.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// Extra context that does not indicate a problem.
    Note,
    /// A potential issue; the run continues with the input as given.
    Warning,
    /// A definite problem; the offending record was skipped.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic tied to an optional netlist line.
///
/// Netlist records are line oriented, so a 1-based line number plus the
/// record's tokens is all the location information a diagnostic carries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the kind of problem.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// 1-based line of the offending record, if known.
    pub line: Option<usize>,
    /// Tokens of the offending record, if any.
    pub tokens: Vec<String>,
    /// Explanatory footnotes.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    fn with_severity(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            line: None,
            tokens: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Attaches the line number of the offending record.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attaches the tokens of the offending record.
    pub fn with_tokens<S: AsRef<str>>(mut self, tokens: &[S]) -> Self {
        self.tokens = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Note < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn builder_methods() {
        let diag = Diagnostic::error(DiagnosticCode::MALFORMED_RECORD, "record can't be parsed")
            .at_line(7)
            .with_tokens(&["OUTPUT"])
            .with_note("expected `OUTPUT <name>`");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.line, Some(7));
        assert_eq!(diag.tokens, vec!["OUTPUT".to_string()]);
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn warning_has_no_location_by_default() {
        let diag = Diagnostic::warning(DiagnosticCode::UNDEFINED_GATE, "gate `n7` is never defined");
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.line.is_none());
        assert!(diag.tokens.is_empty());
    }
}
