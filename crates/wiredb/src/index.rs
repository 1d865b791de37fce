//! Sorted name-to-ID index over a wire table.

use crate::error::LoadError;
use crate::table::WireRecord;
use lasso::{RodeoReader, Spur};
use wiredb_common::WireId;

/// A binary-searched mapping from wire names to wire IDs.
///
/// Entries are sorted byte-wise by resolved name at build time; source files
/// carry no ordering guarantee, so the sort is unconditional.
#[derive(Debug)]
pub(crate) struct NameIndex {
    entries: Vec<(Spur, WireId)>,
}

impl NameIndex {
    /// Builds the index for `records`, sorting and rejecting duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateName`] if two records share a name.
    pub(crate) fn build(pool: &RodeoReader, records: &[WireRecord]) -> Result<Self, LoadError> {
        let mut entries: Vec<(Spur, WireId)> = records
            .iter()
            .enumerate()
            .map(|(id, record)| (record.name, WireId::from_raw(id as u32)))
            .collect();

        entries.sort_by(|a, b| {
            pool.resolve(&a.0)
                .as_bytes()
                .cmp(pool.resolve(&b.0).as_bytes())
        });

        // The pool interns, so equal names share a key.
        for pair in entries.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(LoadError::DuplicateName(
                    pool.resolve(&pair[0].0).to_string(),
                ));
            }
        }

        Ok(Self { entries })
    }

    /// Resolves `name` to its wire ID, or `None` if absent.
    pub(crate) fn resolve(&self, pool: &RodeoReader, name: &str) -> Option<WireId> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries
            .binary_search_by(|(spur, _)| pool.resolve(spur).as_bytes().cmp(name.as_bytes()))
            .ok()
            .map(|pos| self.entries[pos].1)
    }
}
