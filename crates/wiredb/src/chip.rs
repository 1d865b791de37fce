//! The chip-topology collaborator interface.
//!
//! The wiring database knows geometric offsets, not the chip itself.
//! Turning `(site, dx, dy)` into a neighboring site, projecting past a
//! fabric edge, and naming sites are the chip description's business, so
//! routing and formatting take an implementation of this trait.

use wiredb_common::SiteId;

/// Geometric queries over one chip's fabric grid.
///
/// Implementations are expected to be pure: identical inputs yield
/// identical answers for the lifetime of the chip description.
pub trait ChipTopology {
    /// Translates `site` by `(dx, dy)` grid units.
    ///
    /// Returns `None` when the target position falls outside the fabric.
    fn translate(&self, site: SiteId, dx: i32, dy: i32) -> Option<SiteId>;

    /// Projects an off-fabric translation onto the fabric boundary.
    ///
    /// Called only after [`translate`](Self::translate) returned `None` for
    /// the same arguments. Returns the boundary site together with the
    /// projection distance, which indexes the wiring database's
    /// per-wire projection tables.
    fn project(&self, site: SiteId, dx: i32, dy: i32) -> (SiteId, u32);

    /// Renders the site's textual name (e.g. for pip printing).
    fn site_name(&self, site: SiteId) -> String;
}
