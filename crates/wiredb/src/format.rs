//! Textual rendering of sited pips.

use crate::chip::ChipTopology;
use crate::table::WireTable;
use serde::{Deserialize, Serialize};
use wiredb_common::{SiteId, WireId};

/// A directed (source wire, target wire) pair: one programmable
/// interconnect point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pip {
    /// The wire the connection is driven from.
    pub source: WireId,
    /// The wire the connection drives.
    pub target: WireId,
}

/// A pip located at a specific site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SitedPip {
    /// The site where the pip lives.
    pub site: SiteId,
    /// The (source, target) wire pair.
    pub pip: Pip,
}

/// Renders a sited pip into a caller-provided bounded buffer.
///
/// Writes `pip <site-name> <source-wire-name> -> <target-wire-name>` into
/// `buf`, truncating at a UTF-8 boundary if the buffer is too small, and
/// returns the byte length the untruncated rendering needs. A return value
/// larger than `buf.len()` signals truncation, matching the usual bounded
/// formatting contract.
///
/// # Panics
///
/// Panics if either wire ID is not from `table`.
pub fn snprint_pip(
    buf: &mut [u8],
    table: &WireTable,
    chip: &dyn ChipTopology,
    spip: &SitedPip,
) -> usize {
    let text = pip_to_string(table, chip, spip);
    let mut end = buf.len().min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    buf[..end].copy_from_slice(&text.as_bytes()[..end]);
    text.len()
}

/// Renders a sited pip to an owned string.
///
/// # Panics
///
/// Panics if either wire ID is not from `table`.
pub fn pip_to_string(table: &WireTable, chip: &dyn ChipTopology, spip: &SitedPip) -> String {
    format!(
        "pip {} {} -> {}",
        chip.site_name(spip.site),
        table.name(spip.pip.source),
        table.name(spip.pip.target)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    struct NamedChip(&'static str);

    impl ChipTopology for NamedChip {
        fn translate(&self, _site: SiteId, _dx: i32, _dy: i32) -> Option<SiteId> {
            None
        }

        fn project(&self, site: SiteId, _dx: i32, _dy: i32) -> (SiteId, u32) {
            (site, 0)
        }

        fn site_name(&self, _site: SiteId) -> String {
            self.0.to_string()
        }
    }

    fn fixture() -> (WireTable, SitedPip) {
        let src = "\
[INT_A]\nID=0\nDX=-1\nDY=0\nEP=1\nFUT=\nTYPE=1\nDIR=1\nSIT=0\n\
[INT_B]\nID=1\nDX=0\nDY=0\nEP=1\nFUT=\nTYPE=1\nDIR=1\nSIT=2\n";
        let table = loader::load_from_str(src).unwrap();
        let spip = SitedPip {
            site: SiteId::from_raw(7),
            pip: Pip {
                source: table.resolve("INT_A").unwrap(),
                target: table.resolve("INT_B").unwrap(),
            },
        };
        (table, spip)
    }

    #[test]
    fn renders_full_text() {
        let (table, spip) = fixture();
        let chip = NamedChip("SITE_X3Y1");
        assert_eq!(
            pip_to_string(&table, &chip, &spip),
            "pip SITE_X3Y1 INT_A -> INT_B"
        );
    }

    #[test]
    fn exact_fit_buffer() {
        let (table, spip) = fixture();
        let chip = NamedChip("SITE_X3Y1");
        let expected = "pip SITE_X3Y1 INT_A -> INT_B";
        let mut buf = vec![0u8; expected.len()];
        let needed = snprint_pip(&mut buf, &table, &chip, &spip);
        assert_eq!(needed, expected.len());
        assert_eq!(&buf, expected.as_bytes());
    }

    #[test]
    fn small_buffer_truncates_and_reports_full_length() {
        let (table, spip) = fixture();
        let chip = NamedChip("SITE_X3Y1");
        let mut buf = [0u8; 4];
        let needed = snprint_pip(&mut buf, &table, &chip, &spip);
        assert_eq!(needed, "pip SITE_X3Y1 INT_A -> INT_B".len());
        assert_eq!(&buf, b"pip ");
    }

    #[test]
    fn zero_length_buffer() {
        let (table, spip) = fixture();
        let chip = NamedChip("S");
        let mut buf = [0u8; 0];
        let needed = snprint_pip(&mut buf, &table, &chip, &spip);
        assert_eq!(needed, "pip S INT_A -> INT_B".len());
    }

    #[test]
    fn truncation_respects_utf8_boundaries() {
        let (table, spip) = fixture();
        // "pip λ…" puts a two-byte character at byte offset 4.
        let chip = NamedChip("λSITE");
        let mut buf = [0u8; 5];
        let needed = snprint_pip(&mut buf, &table, &chip, &spip);
        assert_eq!(needed, "pip λSITE INT_A -> INT_B".len());
        // The two-byte 'λ' does not fit in one remaining byte; the cut
        // falls back to the previous boundary.
        assert_eq!(&buf[..4], b"pip ");
    }
}
