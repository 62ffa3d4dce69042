//! Row-based standard-cell placement for gate-level netlists.
//!
//! This crate takes a parsed [`Circuit`](strata_netlist::Circuit) and assigns each gate a position
//! in a stack of capacity-bounded rows. The result minimizes total
//! half-perimeter wire length (HPWL).
//!
//! # Pipeline
//!
//! 1. **Size**: derive row count and capacity from the circuit area
//! 2. **Pack**: randomized bin packing, escalating capacity on repeated failure
//! 3. **Anneal**: calibrate the Boltzmann constant, then swap gates under a
//!    geometric cooling schedule
//!
//! # Usage
//!
//! ```ignore
//! use strata_place::{place, PlacementContext};
//!
//! let mut ctx = PlacementContext::new(config);
//! let report = place(&mut circuit, &mut ctx)?;
//! assert!(circuit.is_fully_placed());
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod layout;
pub mod placement;
pub mod report;
pub mod row;
pub mod surface;

pub use context::{CancelToken, PlacementContext};
pub use error::PlaceError;
pub use layout::{Layout, Slot};
pub use placement::{place, AnnealOutcome, CostEvaluator, InitialPlacement, TemperatureStep};
pub use report::{GatePlacement, PlacementReport};
pub use row::Row;
pub use surface::Surface;
