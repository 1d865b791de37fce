//! Construction of [`WireTable`]s from embedded tables or wiring files.
//!
//! Both sources produce the same immutable value type. The embedded path
//! copies a family's compiled-in constant table and cannot fail in
//! practice; the file path parses `<datadir>/<family>/wires.db` and
//! validates it fully before a table is returned. On any record failure the
//! partially built state is dropped, so a failed load leaves nothing
//! behind.

use crate::error::LoadError;
use crate::families::ChipFamily;
use crate::index::NameIndex;
use crate::keyfile::{self, KeyFileGroup};
use crate::table::{WireRecord, WireTable, NO_ENDPOINT};
use lasso::Rodeo;
use std::path::{Path, PathBuf};
use wiredb_common::{InternalError, WireId};

/// File name of a family's wiring database inside its data directory.
pub const WIRE_DB_FILE: &str = "wires.db";

/// Where a wiring database comes from.
#[derive(Debug, Clone)]
pub enum WireSource {
    /// The family's compiled-in table; no I/O is performed.
    Embedded(ChipFamily),
    /// A wiring file at `<datadir>/<family dir>/wires.db`.
    File {
        /// Root of the wiring data directory tree.
        datadir: PathBuf,
        /// The family whose subdirectory holds the file.
        family: ChipFamily,
    },
}

/// Builds a wire table from the given source.
///
/// This is the only constructor of [`WireTable`]; the result is immutable
/// for its whole lifetime and is released as a unit when dropped.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, parsed, or
/// validated. The embedded path does not fail.
pub fn load_wiredb(source: &WireSource) -> Result<WireTable, LoadError> {
    match source {
        WireSource::Embedded(family) => load_embedded(*family),
        WireSource::File { datadir, family } => load_file(datadir, *family),
    }
}

fn load_embedded(family: ChipFamily) -> Result<WireTable, LoadError> {
    let rows = family.embedded_table();
    log::debug!("loading embedded {family} wiring table, {} wires", rows.len());

    let mut pool = Rodeo::new();
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        debug_assert!((row.ep as usize) < rows.len());
        records.push(WireRecord {
            name: pool.get_or_intern(row.name),
            dx: row.dx,
            dy: row.dy,
            ep: WireId::from_raw(row.ep),
            // NO_EP and NO_ENDPOINT share the same raw value
            fut: row.fut.iter().map(|&w| WireId::from_raw(w)).collect(),
            kind: row.kind,
            direction: row.direction,
            situation: row.situation,
        });
    }

    let pool = pool.into_reader();
    let index = NameIndex::build(&pool, &records)?;
    Ok(WireTable::from_parts(records, pool, index))
}

fn load_file(datadir: &Path, family: ChipFamily) -> Result<WireTable, LoadError> {
    let path = datadir.join(family.dir_name()).join(WIRE_DB_FILE);
    if !path.exists() {
        return Err(LoadError::FileNotFound(path));
    }
    log::debug!("loading wiring data from {}", path.display());
    let content = std::fs::read_to_string(&path)?;
    load_from_str(&content)
}

/// Builds a table from already-read wiring file content.
pub(crate) fn load_from_str(content: &str) -> Result<WireTable, LoadError> {
    let groups = keyfile::parse_keyfile(content).map_err(LoadError::Parse)?;
    build_from_groups(&groups)
}

/// Places each group's record at its declared ID and builds the name index.
///
/// IDs must form a permutation of `[0, N)`: out-of-range and repeated IDs
/// are rejected, which together with the group count guarantees every slot
/// is filled exactly once.
fn build_from_groups(groups: &[KeyFileGroup]) -> Result<WireTable, LoadError> {
    let nwires = groups.len();
    log::debug!("wiring database contains {nwires} wires");

    let mut pool = Rodeo::new();
    let mut slots: Vec<Option<WireRecord>> = Vec::new();
    slots.resize_with(nwires, || None);

    for group in groups {
        let id = require_int(group, "ID")?;
        if id < 0 || id as usize >= nwires {
            return Err(LoadError::IdOutOfRange {
                wire: group.name().to_string(),
                id,
                len: nwires,
            });
        }
        let slot = &mut slots[id as usize];
        if slot.is_some() {
            return Err(LoadError::DuplicateId {
                wire: group.name().to_string(),
                id: id as u32,
            });
        }
        log::debug!("inserting wire {}, id {id}", group.name());
        *slot = Some(parse_record(&mut pool, group, nwires)?);
    }

    let mut records = Vec::with_capacity(nwires);
    for (id, slot) in slots.into_iter().enumerate() {
        // Unreachable after the permutation checks above
        let record = slot.ok_or_else(|| {
            InternalError::new(format!("wire id {id} left unfilled by a full permutation"))
        })?;
        records.push(record);
    }

    let pool = pool.into_reader();
    let index = NameIndex::build(&pool, &records)?;
    Ok(WireTable::from_parts(records, pool, index))
}

fn parse_record(
    pool: &mut Rodeo,
    group: &KeyFileGroup,
    nwires: usize,
) -> Result<WireRecord, LoadError> {
    let dx = require_i32(group, "DX")?;
    let dy = require_i32(group, "DY")?;

    let ep = require_int(group, "EP")?;
    if ep < 0 || ep as usize >= nwires {
        return Err(LoadError::Parse(format!(
            "wire '{}': EP {ep} out of range (table holds {nwires} wires)",
            group.name()
        )));
    }

    let raw_fut = require_raw(group, "FUT")?;
    let fut_values = keyfile::parse_int_list(raw_fut)
        .map_err(|e| LoadError::Parse(format!("wire '{}', field FUT: {e}", group.name())))?;
    let mut fut = Vec::with_capacity(fut_values.len());
    for value in fut_values {
        let target = match value {
            -1 => NO_ENDPOINT,
            v if v >= 0 && (v as usize) < nwires => WireId::from_raw(v as u32),
            v => {
                return Err(LoadError::Parse(format!(
                    "wire '{}': FUT entry {v} out of range",
                    group.name()
                )))
            }
        };
        fut.push(target);
    }

    let kind = require_i32(group, "TYPE")?;
    let direction = require_i32(group, "DIR")?;
    let situation = require_i32(group, "SIT")?;

    Ok(WireRecord {
        name: pool.get_or_intern(group.name()),
        dx,
        dy,
        ep: WireId::from_raw(ep as u32),
        fut: fut.into_boxed_slice(),
        kind,
        direction,
        situation,
    })
}

fn require_raw<'a>(group: &'a KeyFileGroup, field: &'static str) -> Result<&'a str, LoadError> {
    group.get(field).ok_or_else(|| LoadError::MissingField {
        wire: group.name().to_string(),
        field,
    })
}

fn require_int(group: &KeyFileGroup, field: &'static str) -> Result<i64, LoadError> {
    let raw = require_raw(group, field)?;
    raw.parse::<i64>()
        .map_err(|e| LoadError::Parse(format!("wire '{}', field {field}: {e}", group.name())))
}

fn require_i32(group: &KeyFileGroup, field: &'static str) -> Result<i32, LoadError> {
    let value = require_int(group, field)?;
    i32::try_from(value).map_err(|_| {
        LoadError::Parse(format!(
            "wire '{}', field {field}: value {value} out of range",
            group.name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn embedded_families_all_load() {
        for family in ChipFamily::ALL {
            let table = load_wiredb(&WireSource::Embedded(family)).unwrap();
            assert_eq!(table.len(), 16, "{family}");
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn embedded_resolve_roundtrip() {
        for family in ChipFamily::ALL {
            let table = load_wiredb(&WireSource::Embedded(family)).unwrap();
            for (id, _) in table.iter() {
                assert_eq!(table.resolve(table.name(id)), Some(id), "{family}");
            }
        }
    }

    #[test]
    fn embedded_endpoints_in_range() {
        for family in ChipFamily::ALL {
            let table = load_wiredb(&WireSource::Embedded(family)).unwrap();
            for (_, record) in table.iter() {
                assert!(table.record(record.ep).is_some(), "{family}");
                for &target in record.fut.iter() {
                    assert!(
                        target == NO_ENDPOINT || table.record(target).is_some(),
                        "{family}"
                    );
                }
            }
        }
    }

    const WIRE_A: &str = "[INT_A]\nID=0\nDX=-1\nDY=0\nEP=1\nFUT=\nTYPE=1\nDIR=1\nSIT=0\n";
    const WIRE_B: &str = "[INT_B]\nID=1\nDX=0\nDY=0\nEP=1\nFUT=0;-1;\nTYPE=1\nDIR=1\nSIT=2\n";

    #[test]
    fn load_from_str_places_records_by_id() {
        // File order is B then A; IDs must win over file order.
        let table = load_from_str(&format!("{WIRE_B}{WIRE_A}")).unwrap();
        assert_eq!(table.len(), 2);
        let a = table.resolve("INT_A").unwrap();
        let b = table.resolve("INT_B").unwrap();
        assert_eq!(a.as_raw(), 0);
        assert_eq!(b.as_raw(), 1);
        assert_eq!(table.record(a).unwrap().dx, -1);
        assert_eq!(table.record(b).unwrap().ep, b);
    }

    #[test]
    fn load_from_str_parses_fut_with_sentinel() {
        let table = load_from_str(&format!("{WIRE_A}{WIRE_B}")).unwrap();
        let b = table.resolve("INT_B").unwrap();
        let fut = &table.record(b).unwrap().fut;
        assert_eq!(fut.len(), 2);
        assert_eq!(fut[0], WireId::from_raw(0));
        assert_eq!(fut[1], NO_ENDPOINT);
    }

    #[test]
    fn missing_field_aborts_load() {
        let src = "[W0]\nID=0\nDX=0\nDY=0\nEP=0\nTYPE=0\nDIR=0\nSIT=0\n";
        let err = load_from_str(src).unwrap_err();
        match err {
            LoadError::MissingField { wire, field } => {
                assert_eq!(wire, "W0");
                assert_eq!(field, "FUT");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn malformed_int_aborts_load() {
        let src = "[W0]\nID=0\nDX=abc\nDY=0\nEP=0\nFUT=\nTYPE=0\nDIR=0\nSIT=0\n";
        let err = load_from_str(src).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "{err:?}");
    }

    #[test]
    fn id_out_of_range_rejected() {
        let src = "[W0]\nID=5\nDX=0\nDY=0\nEP=0\nFUT=\nTYPE=0\nDIR=0\nSIT=0\n";
        let err = load_from_str(src).unwrap_err();
        match err {
            LoadError::IdOutOfRange { wire, id, len } => {
                assert_eq!(wire, "W0");
                assert_eq!(id, 5);
                assert_eq!(len, 1);
            }
            other => panic!("expected IdOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn negative_id_rejected() {
        let src = "[W0]\nID=-1\nDX=0\nDY=0\nEP=0\nFUT=\nTYPE=0\nDIR=0\nSIT=0\n";
        let err = load_from_str(src).unwrap_err();
        assert!(matches!(err, LoadError::IdOutOfRange { id: -1, .. }), "{err:?}");
    }

    #[test]
    fn repeated_id_rejected() {
        let dup = WIRE_B.replace("ID=1", "ID=0");
        let err = load_from_str(&format!("{WIRE_A}{dup}")).unwrap_err();
        match err {
            LoadError::DuplicateId { wire, id } => {
                assert_eq!(wire, "INT_B");
                assert_eq!(id, 0);
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_name_rejected() {
        let clash = WIRE_B.replace("[INT_B]", "[INT_A]");
        let err = load_from_str(&format!("{WIRE_A}{clash}")).unwrap_err();
        match err {
            LoadError::DuplicateName(name) => assert_eq!(name, "INT_A"),
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn ep_out_of_range_rejected() {
        let src = "[W0]\nID=0\nDX=0\nDY=0\nEP=7\nFUT=\nTYPE=0\nDIR=0\nSIT=0\n";
        let err = load_from_str(src).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "{err:?}");
        assert!(format!("{err}").contains("EP 7 out of range"));
    }

    #[test]
    fn fut_entry_out_of_range_rejected() {
        let src = "[W0]\nID=0\nDX=0\nDY=0\nEP=0\nFUT=3\nTYPE=0\nDIR=0\nSIT=0\n";
        let err = load_from_str(src).unwrap_err();
        assert!(format!("{err}").contains("FUT entry 3 out of range"));
    }

    #[test]
    fn empty_file_is_an_empty_table() {
        let table = load_from_str("# nothing here\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve("ANY"), None);
    }

    #[test]
    fn load_file_missing_is_file_not_found() {
        let datadir = tempdir("missing_db");
        let err = load_wiredb(&WireSource::File {
            datadir,
            family: ChipFamily::Virtex2,
        })
        .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)), "{err:?}");
    }

    #[test]
    fn load_file_roundtrip() {
        let datadir = tempdir("file_roundtrip");
        let family_dir = datadir.join(ChipFamily::Virtex2.dir_name());
        fs::create_dir_all(&family_dir).unwrap();
        fs::write(family_dir.join(WIRE_DB_FILE), format!("{WIRE_B}{WIRE_A}")).unwrap();

        let table = load_wiredb(&WireSource::File {
            datadir,
            family: ChipFamily::Virtex2,
        })
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("INT_A"), Some(WireId::from_raw(0)));
        assert_eq!(table.resolve("INT_X"), None);
    }

    /// Creates a unique temporary directory and returns its path.
    fn tempdir(suffix: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("wiredb_test_{}_{suffix}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }
}
