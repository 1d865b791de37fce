//! Read-only FPGA wiring database with boundary-aware routing projection.
//!
//! This crate describes the elementary routing resources ("wires") of an
//! FPGA fabric and follows a wire from a site back to the site and wire it
//! is physically driven from. A [`WireTable`] is built once, from a
//! family's compiled-in table or from a wiring file, and is immutable
//! afterwards; name resolution, routing, and pip formatting are pure
//! queries over it.
//!
//! Chip geometry is deliberately not modeled here: routing and formatting
//! take a [`ChipTopology`] implementation supplied by the chip-description
//! layer. Bitstream decoding, which produces the (site, wire) pairs fed
//! into routing, is likewise out of scope.
//!
//! # Usage
//!
//! ```
//! use wiredb::{load_wiredb, ChipFamily, WireSource};
//!
//! let table = load_wiredb(&WireSource::Embedded(ChipFamily::Virtex2)).unwrap();
//! let id = table.resolve("E2END0").unwrap();
//! assert_eq!(table.name(id), "E2END0");
//! assert_eq!(table.record(id).unwrap().dx, -2);
//! ```

#![warn(missing_docs)]

pub mod chip;
pub mod error;
pub mod families;
pub mod format;
mod index;
mod keyfile;
pub mod loader;
pub mod route;
pub mod table;

pub use chip::ChipTopology;
pub use error::{LoadError, RouteError};
pub use families::ChipFamily;
pub use format::{pip_to_string, snprint_pip, Pip, SitedPip};
pub use loader::{load_wiredb, WireSource, WIRE_DB_FILE};
pub use route::wire_startpoint;
pub use table::{WireRecord, WireTable, NO_ENDPOINT};
pub use wiredb_common::{SiteId, WireId};
