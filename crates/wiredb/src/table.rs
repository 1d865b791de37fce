//! The immutable wire table and its per-wire records.

use crate::index::NameIndex;
use lasso::{RodeoReader, Spur};
use wiredb_common::WireId;

/// Sentinel marking an absent endpoint in a projection table.
///
/// A projection table entry equal to `NO_ENDPOINT` means the source database
/// knows the projected site exists but not which wire is reached there.
pub const NO_ENDPOINT: WireId = WireId::from_raw(u32::MAX);

/// Per-wire attributes, indexed by the wire's dense ID.
///
/// A record's position in its [`WireTable`] is its identity; records are
/// never moved or rewritten after construction.
#[derive(Debug, Clone)]
pub struct WireRecord {
    /// Interned name; resolved through the owning table's pool.
    pub(crate) name: Spur,
    /// Grid offset to the neighboring site this wire leads to.
    pub dx: i32,
    /// Grid offset to the neighboring site this wire leads to.
    pub dy: i32,
    /// Wire reached at the neighbor site, before any edge projection.
    /// `ep` equal to the wire's own ID marks the wire as unresolved.
    pub ep: WireId,
    /// Projection table indexed by edge-projection distance. Empty when the
    /// wire accepts no projections.
    pub fut: Box<[WireId]>,
    /// Classification passed through to callers, uninterpreted here.
    pub kind: i32,
    /// Classification passed through to callers, uninterpreted here.
    pub direction: i32,
    /// Classification passed through to callers, uninterpreted here.
    pub situation: i32,
}

/// A read-only database of the elementary routing wires of one chip family.
///
/// Built once by [`load_wiredb`](crate::load_wiredb) and immutable for its
/// whole lifetime, which makes shared access from multiple threads safe
/// without locking. The table exclusively owns its records, the interned
/// name pool, and every projection table; dropping it releases everything
/// as a unit.
pub struct WireTable {
    records: Vec<WireRecord>,
    pool: RodeoReader,
    index: NameIndex,
}

impl WireTable {
    pub(crate) fn from_parts(records: Vec<WireRecord>, pool: RodeoReader, index: NameIndex) -> Self {
        Self {
            records,
            pool,
            index,
        }
    }

    /// Number of wires in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table holds no wires.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record for `wire`, or `None` if the ID is not from this
    /// table.
    pub fn record(&self, wire: WireId) -> Option<&WireRecord> {
        self.records.get(wire.as_raw() as usize)
    }

    /// Returns the name of `wire`.
    ///
    /// # Panics
    ///
    /// Panics if `wire` is not an ID from this table.
    pub fn name(&self, wire: WireId) -> &str {
        self.pool
            .resolve(&self.records[wire.as_raw() as usize].name)
    }

    /// Resolves a wire name to its ID in `O(log N)` comparisons.
    ///
    /// Returns `None` for names absent from the table; this is an expected
    /// outcome, not an error.
    pub fn resolve(&self, name: &str) -> Option<WireId> {
        self.index.resolve(&self.pool, name)
    }

    /// Iterates over all wires in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (WireId, &WireRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(id, record)| (WireId::from_raw(id as u32), record))
    }
}

impl std::fmt::Debug for WireTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WireTable")
            .field("len", &self.records.len())
            .finish_non_exhaustive()
    }
}
