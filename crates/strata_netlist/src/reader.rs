//! Line tokenizer for `.bench` netlists.

use crate::builder::CircuitBuilder;
use crate::circuit::Circuit;
use crate::error::NetlistError;
use strata_diagnostics::DiagnosticSink;
use std::path::Path;

/// Characters that separate tokens. `\r` is included so CRLF files
/// tokenize the same as LF files.
const DELIMITERS: &[char] = &['\r', '\t', ' ', '(', ')', ','];

/// One tokenized netlist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Non-empty tokens of the line.
    pub tokens: Vec<String>,
}

/// Splits one line into its non-empty tokens.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.split(DELIMITERS)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenizes a whole netlist, skipping blank lines and `#` comments.
pub fn tokenize(text: &str) -> Vec<Record> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|(i, line)| {
            let tokens = tokenize_line(line);
            (!tokens.is_empty()).then_some(Record { line: i + 1, tokens })
        })
        .collect()
}

/// Builds a circuit from netlist text.
pub fn parse_circuit(text: &str, sink: &DiagnosticSink) -> Result<Circuit, NetlistError> {
    let mut builder = CircuitBuilder::new();
    for record in tokenize(text) {
        builder.apply(&record, sink);
    }
    builder.finish(sink)
}

/// Reads and builds a circuit from a netlist file.
pub fn read_circuit(path: &Path, sink: &DiagnosticSink) -> Result<Circuit, NetlistError> {
    let text = std::fs::read_to_string(path).map_err(|source| NetlistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("reading circuit from {}", path.display());
    parse_circuit(&text, sink)
}
