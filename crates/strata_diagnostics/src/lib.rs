//! Diagnostics for netlist ingestion and placement.
//!
//! Problems found in user input (a malformed netlist record, a gate that is
//! declared twice) are reported as structured [`Diagnostic`]s instead of
//! aborting the run. The thread-safe [`DiagnosticSink`] accumulates them and
//! the [`TerminalRenderer`] formats them for the command line.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::{Diagnostic, Severity};
pub use renderer::TerminalRenderer;
pub use sink::DiagnosticSink;
