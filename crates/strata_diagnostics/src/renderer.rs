//! Human-readable rendering of diagnostics.

use crate::diagnostic::{Diagnostic, Severity};

const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";
const BLUE: &str = "\x1b[1;34m";
const RESET: &str = "\x1b[0m";

/// Renders diagnostics in a rustc-like terminal format:
///
/// ```text
/// error[E101]: record can't be parsed
///   --> c17.bench:4
///    | ["OUTPUT"]
///    = note: expected `OUTPUT <name>`
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders a single diagnostic; `source` names the netlist file.
    pub fn render(&self, diag: &Diagnostic, source: &str) -> String {
        let mut out = String::new();
        let severity = match (self.color, diag.severity) {
            (false, s) => s.to_string(),
            (true, Severity::Error) => format!("{RED}error{RESET}"),
            (true, Severity::Warning) => format!("{YELLOW}warning{RESET}"),
            (true, Severity::Note) => format!("{BLUE}note{RESET}"),
        };
        out.push_str(&format!("{}[{}]: {}\n", severity, diag.code, diag.message));

        if let Some(line) = diag.line {
            out.push_str(&format!("  --> {source}:{line}\n"));
        }
        if !diag.tokens.is_empty() {
            let quoted: Vec<String> = diag.tokens.iter().map(|t| format!("\"{t}\"")).collect();
            out.push_str(&format!("   | [{}]\n", quoted.join(",")));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        out
    }
}
