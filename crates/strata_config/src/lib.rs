//! Parsing and validation of `strata.toml` placer configuration files.
//!
//! Every setting has a default, so an empty file (or no file at all) yields
//! the stock schedule: 40000 -> 0.1 with a 0.95 cooling rate.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
