//! Error types for wiring database construction and routing queries.

use std::path::PathBuf;
use wiredb_common::{InternalError, WireId};

/// Errors that can occur while building a [`WireTable`](crate::WireTable).
///
/// All variants are fatal to the `build` call that produced them: no partial
/// table is ever returned, and everything allocated for the failed load is
/// dropped before the error surfaces.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The wiring database file does not exist at the resolved path.
    #[error("wiring database not found: {0}")]
    FileNotFound(PathBuf),

    /// An I/O error occurred while reading the wiring database file.
    #[error("failed to read wiring database: {0}")]
    Io(#[from] std::io::Error),

    /// The file content could not be parsed, or a field value is malformed.
    #[error("failed to parse wiring database: {0}")]
    Parse(String),

    /// A wire group lacks one of the required keys.
    #[error("wire '{wire}' is missing required field {field}")]
    MissingField {
        /// Name of the wire group.
        wire: String,
        /// The missing key.
        field: &'static str,
    },

    /// A wire declares an ID outside `[0, N)` where `N` is the group count.
    ///
    /// IDs must form a permutation of the table range so that every record
    /// can be placed at its own dense index.
    #[error("wire '{wire}' has id {id}, outside the table range [0, {len})")]
    IdOutOfRange {
        /// Name of the wire group.
        wire: String,
        /// The out-of-range ID as written in the file.
        id: i64,
        /// Number of wires in the table.
        len: usize,
    },

    /// Two wire groups declare the same ID.
    #[error("wire '{wire}' reuses id {id}")]
    DuplicateId {
        /// Name of the second group claiming the ID.
        wire: String,
        /// The contested ID.
        id: u32,
    },

    /// Two wire groups carry the same name.
    ///
    /// The name index is a binary-searched unique mapping, so duplicate
    /// names are rejected at load time rather than left to resolve
    /// arbitrarily.
    #[error("duplicate wire name '{0}'")]
    DuplicateName(String),

    /// An invariant the loader itself establishes was found broken.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Reasons a routing query could not produce a destination.
///
/// The first three variants are expected outcomes of scanning an incomplete
/// wiring database and must not abort a batch of independent queries.
/// [`TopologyMismatch`](RouteError::TopologyMismatch) is different: it means
/// the wiring database and the chip description disagree, and callers must
/// treat it as fatal (see [`is_fatal`](RouteError::is_fatal)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The database marks this wire as unresolved (`ep == id`).
    #[error("wire {0:?} has no known endpoint")]
    UnknownWire(WireId),

    /// The wire's endpoint carries no projection table, but the direct
    /// neighbor site is off the fabric.
    #[error("no projection table for wire {0:?}")]
    NoProjectionTable(WireId),

    /// The projection table exists but holds no endpoint at this distance.
    #[error("projection for wire {wire:?} is undefined at offset {offset}")]
    IncompleteProjection {
        /// The queried wire.
        wire: WireId,
        /// The projection distance reported by the chip topology.
        offset: u32,
    },

    /// The chip topology reported a projection distance beyond the end of
    /// the wire's projection table. The two databases describe different
    /// chips; results from either are untrustworthy.
    #[error(
        "projection offset {offset} out of range for wire {wire:?} \
         (table length {len}): wiring database and chip description disagree"
    )]
    TopologyMismatch {
        /// The queried wire.
        wire: WireId,
        /// The offending projection distance.
        offset: u32,
        /// Length of the projection table that was exceeded.
        len: usize,
    },
}

impl RouteError {
    /// Returns `true` for errors that signal corrupted or mismatched input
    /// databases rather than a normal "no route" outcome.
    ///
    /// Fatal errors must not be swallowed by callers iterating over many
    /// routing queries.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RouteError::TopologyMismatch { .. })
    }
}
