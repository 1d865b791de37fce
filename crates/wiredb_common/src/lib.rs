//! Shared types for the wiredb FPGA wiring-analysis crates.
//!
//! This crate provides the opaque ID newtypes used to address wires and
//! sites across the workspace, plus the internal-error type reserved for
//! states that indicate a bug rather than bad user input.

#![warn(missing_docs)]

pub mod ids;
pub mod result;

pub use ids::{SiteId, WireId};
pub use result::{InternalError, WireDbResult};
