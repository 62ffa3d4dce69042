//! Error types for netlist reading.

use std::path::PathBuf;

/// Fatal errors while building a circuit. Record-level problems are
/// reported through the diagnostic sink instead.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// The netlist file could not be read.
    #[error("failed to open {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A gate with this name already exists.
    #[error("gate `{0}` is already declared")]
    DuplicateGate(String),

    /// The number of declared nodes does not match the number of gates.
    #[error("failed to parse circuit: {declared} nodes declared but {gates} gates built")]
    InconsistentParse {
        /// Gate declarations seen, including duplicates.
        declared: usize,
        /// Distinct gates in the arena.
        gates: usize,
    },
}
