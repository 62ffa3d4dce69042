//! Opaque handle for gates in the circuit arena.

use serde::{Deserialize, Serialize};

/// Copyable index of a [`Gate`](crate::Gate) in its [`Circuit`](crate::Circuit).
///
/// Handles stay valid for the lifetime of the circuit; gates are never
/// removed from the arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct GateId(u32);

impl GateId {
    /// Creates an ID from a raw `u32` index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn raw_roundtrip() {
        assert_eq!(GateId::from_raw(42).as_raw(), 42);
        assert_eq!(GateId::from_raw(42).index(), 42);
    }

    #[test]
    fn hash_in_set() {
        let mut set = HashSet::new();
        set.insert(GateId::from_raw(1));
        set.insert(GateId::from_raw(2));
        set.insert(GateId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", GateId::from_raw(7)), "g7");
    }

    #[test]
    fn serde_roundtrip() {
        let id = GateId::from_raw(55);
        let json = serde_json::to_string(&id).unwrap();
        let restored: GateId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
