//! Applies tokenized netlist records to a [`Circuit`].
//!
//! Three record shapes are understood:
//!
//! * `INPUT <name>` declares a primary input.
//! * `OUTPUT <name>` declares a `<name>-OUTPUT` terminal driven by `<name>`.
//! * `<name> = <TYPE> <arg>...` defines (or retypes) `<name>` with the
//!   given fanins.
//!
//! Anything else is reported as [`DiagnosticCode::MALFORMED_RECORD`] and
//! skipped. A record is validated completely before the circuit is touched.

use crate::circuit::Circuit;
use crate::error::NetlistError;
use crate::gate::GateType;
use crate::ids::GateId;
use crate::reader::Record;
use strata_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};

/// Suffix of the synthetic terminal gate created for each `OUTPUT` record.
pub const OUTPUT_SUFFIX: &str = "-OUTPUT";

/// Incrementally builds a [`Circuit`] from records.
pub struct CircuitBuilder {
    circuit: Circuit,
    /// Gate declarations seen, including ones rejected as duplicates.
    declared: usize,
}

impl CircuitBuilder {
    /// Creates a builder for an empty circuit.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
            declared: 0,
        }
    }

    /// Applies one record. Malformed and duplicate records are reported to
    /// `sink` and otherwise ignored.
    pub fn apply(&mut self, record: &Record, sink: &DiagnosticSink) {
        let tokens = &record.tokens;
        let Some(head) = tokens.first() else {
            return;
        };
        match (head.as_str(), tokens.get(1)) {
            ("INPUT", Some(name)) => self.declare_input(name, record, sink),
            ("OUTPUT", Some(name)) => self.declare_output(name, record, sink),
            (_, Some(eq)) if eq == "=" && tokens.len() >= 3 => {
                self.define_gate(&tokens[0], &tokens[2], &tokens[3..]);
            }
            _ => sink.emit(malformed(record)),
        }
    }

    /// Finishes the build, checking that every declaration produced exactly
    /// one gate. Gates that were referenced but never defined are reported
    /// as warnings.
    pub fn finish(self, sink: &DiagnosticSink) -> Result<Circuit, NetlistError> {
        if self.declared != self.circuit.gate_count() {
            return Err(NetlistError::InconsistentParse {
                declared: self.declared,
                gates: self.circuit.gate_count(),
            });
        }
        for gate in self.circuit.gates() {
            if gate.gate_type == GateType::Undefined {
                sink.emit(Diagnostic::warning(
                    DiagnosticCode::UNDEFINED_GATE,
                    format!("gate `{}` is referenced but never defined", gate.name),
                ));
            }
        }
        log::debug!(
            "built circuit: {} gates, {} inputs, {} outputs",
            self.circuit.gate_count(),
            self.circuit.inputs().len(),
            self.circuit.outputs().len()
        );
        Ok(self.circuit)
    }

    fn declare_input(&mut self, name: &str, record: &Record, sink: &DiagnosticSink) {
        self.declared += 1;
        match self.circuit.create_gate(name, "INPUT") {
            Ok(id) => {
                self.circuit.assign_width(id);
            }
            Err(_) => sink.emit(duplicate(name, record)),
        }
    }

    fn declare_output(&mut self, name: &str, record: &Record, sink: &DiagnosticSink) {
        let port_name = format!("{name}{OUTPUT_SUFFIX}");
        self.declared += 1;
        let port = match self.circuit.create_gate(&port_name, "OUTPUT") {
            Ok(id) => id,
            Err(_) => {
                sink.emit(duplicate(&port_name, record));
                return;
            }
        };
        self.circuit.assign_width(port);
        let driver = self.find_or_forward(name);
        self.circuit.link(driver, port);
    }

    fn define_gate(&mut self, name: &str, type_token: &str, args: &[String]) {
        let gate = match self.circuit.find(name) {
            Some(id) => {
                self.circuit.retype_gate(id, type_token);
                id
            }
            None => self.create(name, type_token),
        };
        for arg in args {
            let driver = self.find_or_forward(arg);
            self.circuit.link(driver, gate);
        }
        self.circuit.assign_width(gate);
    }

    /// Resolves a gate by name, creating it as undefined if unseen.
    fn find_or_forward(&mut self, name: &str) -> GateId {
        match self.circuit.find(name) {
            Some(id) => id,
            None => self.create(name, "UNDEF"),
        }
    }

    fn create(&mut self, name: &str, type_token: &str) -> GateId {
        self.declared += 1;
        // The name was looked up just before, so this cannot collide.
        self.circuit
            .create_gate(name, type_token)
            .unwrap_or_else(|_| unreachable!("gate `{name}` created twice"))
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn malformed(record: &Record) -> Diagnostic {
    Diagnostic::error(DiagnosticCode::MALFORMED_RECORD, "line can't be parsed")
        .at_line(record.line)
        .with_tokens(&record.tokens)
        .with_note("expected `INPUT <name>`, `OUTPUT <name>` or `<name> = <TYPE>(<args>)`")
}

fn duplicate(name: &str, record: &Record) -> Diagnostic {
    Diagnostic::error(
        DiagnosticCode::DUPLICATE_DECLARATION,
        format!("gate `{name}` is declared more than once"),
    )
    .at_line(record.line)
    .with_tokens(&record.tokens)
}
