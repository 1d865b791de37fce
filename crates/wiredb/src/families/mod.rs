//! Supported chip families and their compiled-in wiring tables.
//!
//! Each family module carries a `const` table of representative interconnect
//! wires (double lines, long lines, clock spines) in dense ID order. The
//! embedded tables let analyses run without an external wiring file; the
//! file-backed loader produces the same table shape from
//! `<datadir>/<family>/wires.db`.

use serde::{Deserialize, Serialize};

mod spartan3;
mod virtex2;
mod virtex4;
mod virtex5;

/// The chip families with a compiled-in wiring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChipFamily {
    /// Xilinx Spartan-3.
    Spartan3,
    /// Xilinx Virtex-II.
    Virtex2,
    /// Xilinx Virtex-4.
    Virtex4,
    /// Xilinx Virtex-5.
    Virtex5,
}

impl ChipFamily {
    /// All supported families, in declaration order.
    pub const ALL: [ChipFamily; 4] = [
        ChipFamily::Spartan3,
        ChipFamily::Virtex2,
        ChipFamily::Virtex4,
        ChipFamily::Virtex5,
    ];

    /// The data-directory name used by the file-backed loader.
    pub fn dir_name(self) -> &'static str {
        match self {
            ChipFamily::Spartan3 => "spartan3",
            ChipFamily::Virtex2 => "virtex2",
            ChipFamily::Virtex4 => "virtex4",
            ChipFamily::Virtex5 => "virtex5",
        }
    }

    /// Parses a family name, accepting common hyphen/underscore spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "spartan3" | "spartan-3" | "spartan_3" => Some(ChipFamily::Spartan3),
            "virtex2" | "virtex-2" | "virtex_2" => Some(ChipFamily::Virtex2),
            "virtex4" | "virtex-4" | "virtex_4" => Some(ChipFamily::Virtex4),
            "virtex5" | "virtex-5" | "virtex_5" => Some(ChipFamily::Virtex5),
            _ => None,
        }
    }

    /// The family's compiled-in wiring table, in ID order.
    pub(crate) fn embedded_table(self) -> &'static [EmbeddedWire] {
        match self {
            ChipFamily::Spartan3 => spartan3::WIRES,
            ChipFamily::Virtex2 => virtex2::WIRES,
            ChipFamily::Virtex4 => virtex4::WIRES,
            ChipFamily::Virtex5 => virtex5::WIRES,
        }
    }
}

impl std::fmt::Display for ChipFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One row of a compiled-in wiring table.
///
/// The row's position in its family table is its wire ID; `ep` and `fut`
/// entries refer to positions in the same table, with [`NO_EP`] marking an
/// absent projection endpoint.
pub(crate) struct EmbeddedWire {
    pub name: &'static str,
    pub dx: i32,
    pub dy: i32,
    pub ep: u32,
    pub fut: &'static [u32],
    pub kind: i32,
    pub direction: i32,
    pub situation: i32,
}

/// Raw sentinel for an absent endpoint inside embedded `fut` tables.
pub(crate) const NO_EP: u32 = u32::MAX;
