//! Gates, gate types and the cell width table.

use crate::ids::GateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The cell type of a gate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum GateType {
    /// NAND gate.
    Nand,
    /// NOR gate.
    Nor,
    /// AND gate.
    And,
    /// OR gate.
    Or,
    /// XOR gate.
    Xor,
    /// XNOR gate.
    Xnor,
    /// Inverter.
    Inv,
    /// Buffer.
    Buf,
    /// Primary input terminal.
    Input,
    /// Primary output terminal.
    Output,
    /// Forward-referenced gate whose defining record has not been seen.
    Undefined,
}

impl GateType {
    /// The logic cell types, excluding terminals and [`GateType::Undefined`].
    pub const LOGIC: [GateType; 8] = [
        GateType::Nand,
        GateType::Nor,
        GateType::And,
        GateType::Or,
        GateType::Xor,
        GateType::Xnor,
        GateType::Inv,
        GateType::Buf,
    ];

    /// Resolves a netlist type token. Unrecognized tokens map to
    /// [`GateType::Undefined`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "NAND" | "NAND2_X1" => GateType::Nand,
            "NOR" | "NOR2_X1" => GateType::Nor,
            "AND" | "AND2_X1" => GateType::And,
            "OR" | "OR2_X1" => GateType::Or,
            "XOR" | "XOR2_X1" => GateType::Xor,
            "XNOR" => GateType::Xnor,
            "NOT" | "INV_X1" => GateType::Inv,
            "BUFF" | "BUF_X1" => GateType::Buf,
            "INPUT" => GateType::Input,
            "OUTPUT" => GateType::Output,
            _ => GateType::Undefined,
        }
    }

    /// Cell width in doubled units for a gate of this type with `fanin`
    /// inputs. Multi-input cells are never narrower than their 2-input form.
    pub fn double_width(self, fanin: usize) -> u32 {
        let inputs = fanin.max(2) as u32;
        match self {
            GateType::Input | GateType::Output | GateType::Inv => 2,
            GateType::Buf => 4,
            GateType::Nand => 2 * inputs,
            GateType::Nor | GateType::And => 3 * inputs,
            GateType::Or => 4 * inputs,
            GateType::Xor => 5 * inputs,
            GateType::Xnor => 6 * inputs,
            GateType::Undefined => 0,
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateType::Nand => "NAND",
            GateType::Nor => "NOR",
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Xor => "XOR",
            GateType::Xnor => "XNOR",
            GateType::Inv => "INV",
            GateType::Buf => "BUF",
            GateType::Input => "INP",
            GateType::Output => "OUTP",
            GateType::Undefined => "Undefined",
        };
        f.write_str(name)
    }
}

/// Location of a placed gate.
///
/// `x2` is the left edge in doubled-width units; `y` is the row coordinate
/// (row index + 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    /// Left edge, doubled units.
    pub x2: u32,
    /// Row coordinate.
    pub y: u32,
}

impl Position {
    /// The left edge in physical units.
    pub fn x(self) -> f64 {
        f64::from(self.x2) / 2.0
    }
}

/// A logic cell or I/O terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    /// Unique name (the output wire name in the netlist).
    pub name: String,
    /// Cell type.
    pub gate_type: GateType,
    /// Width in doubled units; zero until assigned. Only
    /// [`Circuit::assign_width`](crate::Circuit::assign_width) writes it.
    pub(crate) double_width: u32,
    /// Current location, `None` until placed.
    pub position: Option<Position>,
    /// Gates driving this one, in netlist order.
    pub fanin: Vec<GateId>,
    /// Gates driven by this one, in netlist order.
    pub fanout: Vec<GateId>,
}

impl Gate {
    /// Creates an unplaced gate with no connections.
    pub fn new(name: impl Into<String>, gate_type: GateType) -> Self {
        Self {
            name: name.into(),
            gate_type,
            double_width: 0,
            position: None,
            fanin: Vec::new(),
            fanout: Vec::new(),
        }
    }

    /// Width in doubled units.
    pub fn double_width(&self) -> u32 {
        self.double_width
    }

    /// Physical width.
    pub fn width(&self) -> f64 {
        f64::from(self.double_width) / 2.0
    }

    /// Returns `true` if the gate has a position.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// `TYPE-name`, the label used in reports.
    pub fn label(&self) -> String {
        format!("{}-{}", self.gate_type, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_table() {
        for f in 0..6 {
            let m = f.max(2) as u32;
            assert_eq!(GateType::Input.double_width(f), 2);
            assert_eq!(GateType::Output.double_width(f), 2);
            assert_eq!(GateType::Inv.double_width(f), 2);
            assert_eq!(GateType::Buf.double_width(f), 4);
            assert_eq!(GateType::Nand.double_width(f), 2 * m);
            assert_eq!(GateType::Nor.double_width(f), 3 * m);
            assert_eq!(GateType::And.double_width(f), 3 * m);
            assert_eq!(GateType::Or.double_width(f), 4 * m);
            assert_eq!(GateType::Xor.double_width(f), 5 * m);
            assert_eq!(GateType::Xnor.double_width(f), 6 * m);
            assert_eq!(GateType::Undefined.double_width(f), 0);
        }
    }

    #[test]
    fn token_aliases() {
        assert_eq!(GateType::from_token("NAND2_X1"), GateType::Nand);
        assert_eq!(GateType::from_token("NOT"), GateType::Inv);
        assert_eq!(GateType::from_token("INV_X1"), GateType::Inv);
        assert_eq!(GateType::from_token("BUFF"), GateType::Buf);
        assert_eq!(GateType::from_token("XNOR"), GateType::Xnor);
        assert_eq!(GateType::from_token("DFF"), GateType::Undefined);
        // Tokens are case-sensitive.
        assert_eq!(GateType::from_token("nand"), GateType::Undefined);
    }

    #[test]
    fn display_names() {
        assert_eq!(GateType::Input.to_string(), "INP");
        assert_eq!(GateType::Output.to_string(), "OUTP");
        assert_eq!(GateType::Undefined.to_string(), "Undefined");
        assert_eq!(GateType::Xnor.to_string(), "XNOR");
    }

    #[test]
    fn gate_label_and_width() {
        let mut g = Gate::new("n10", GateType::Nand);
        g.double_width = 5;
        assert_eq!(g.label(), "NAND-n10");
        assert_eq!(g.width(), 2.5);
        assert!(!g.is_placed());
    }

    #[test]
    fn position_physical_x() {
        let p = Position { x2: 7, y: 3 };
        assert_eq!(p.x(), 3.5);
    }
}
