//! Gate-level circuit graph for the Strata placer.
//!
//! A netlist in the ISCAS `.bench` style is read line by line
//! ([`reader`]), each tokenized record is applied to a [`CircuitBuilder`],
//! and the result is a [`Circuit`]: an arena of [`Gate`]s addressed by
//! [`GateId`] handles, with matched fanin/fanout edges, per-type counters
//! and the running doubled area.
//!
//! # Usage
//!
//! ```ignore
//! use strata_diagnostics::DiagnosticSink;
//! use strata_netlist::parse_circuit;
//!
//! let sink = DiagnosticSink::new();
//! let circuit = parse_circuit("INPUT a\nINPUT b\nc = AND(a, b)\nOUTPUT c\n", &sink)?;
//! assert_eq!(circuit.gate_count(), 4);
//! assert_eq!(circuit.stats().double_area(), 12);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod ids;
pub mod reader;
pub mod stats;

pub use builder::CircuitBuilder;
pub use circuit::{Circuit, GateStats};
pub use error::NetlistError;
pub use gate::{Gate, GateType, Position};
pub use ids::GateId;
pub use reader::{parse_circuit, read_circuit, tokenize, Record};
pub use stats::circuit_statistics;
