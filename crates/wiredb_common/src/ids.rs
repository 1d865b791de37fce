//! Opaque ID newtypes for fabric entities.
//!
//! Each ID is a thin `u32` wrapper that is `Copy`, `Hash`, and
//! `Serialize`/`Deserialize`. Wire IDs index the wiring database; site IDs
//! address physical locations in the fabric grid and are interpreted only
//! by the chip-topology collaborator.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub const fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub const fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for a wire in the wiring database.
    ///
    /// A wire ID is a dense index into the table that produced it; IDs from
    /// different tables are not interchangeable.
    WireId
);

define_id!(
    /// Opaque, copyable ID for a site (tile location) in the fabric grid.
    SiteId
);
