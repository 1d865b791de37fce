//! Following a wire from a site back to its startpoint.
//!
//! A wire observed at a site was driven from a neighboring site; this
//! module walks the wiring database's geometric offset to find that
//! neighbor and the wire it connects to there, falling back to the
//! boundary projection tables when the neighbor is off the fabric.

use crate::chip::ChipTopology;
use crate::error::RouteError;
use crate::table::{WireTable, NO_ENDPOINT};
use wiredb_common::{SiteId, WireId};

/// Computes the site and wire a wire at `site` is physically driven from.
///
/// The wire's `(dx, dy)` offset is followed backwards: the chip topology
/// translates `site` by `(-dx, -dy)`, and the wire's recorded endpoint is
/// reached there. When the direct neighbor does not exist (fabric edge),
/// the endpoint's projection table, indexed by the chip's projection
/// distance, supplies the boundary-specialized answer.
///
/// The function is pure over its immutable inputs; identical arguments
/// always yield identical results.
///
/// # Errors
///
/// Returns a non-fatal [`RouteError`] for wires the database cannot route
/// (unknown wires, missing or incomplete projections). Returns the fatal
/// [`RouteError::TopologyMismatch`] when the chip description reports a
/// projection distance beyond the wire's table; see
/// [`RouteError::is_fatal`].
pub fn wire_startpoint(
    table: &WireTable,
    chip: &dyn ChipTopology,
    site: SiteId,
    wire: WireId,
) -> Result<(SiteId, WireId), RouteError> {
    let record = table.record(wire).ok_or(RouteError::UnknownWire(wire))?;
    log::debug!("getting startpoint of wire {}", table.name(wire));

    // This is how the database marks unknown wires
    if record.ep == wire {
        return Err(RouteError::UnknownWire(wire));
    }

    if let Some(neighbor) = chip.translate(site, -record.dx, -record.dy) {
        return Ok((neighbor, record.ep));
    }

    // Fabric edge: the endpoint's projection table takes over
    let ep_record = table
        .record(record.ep)
        .ok_or(RouteError::UnknownWire(record.ep))?;
    if ep_record.fut.is_empty() {
        log::warn!("no projection for wire {}", table.name(wire));
        return Err(RouteError::NoProjectionTable(wire));
    }

    let (projected, offset) = chip.project(site, -record.dx, -record.dy);
    let Some(&target) = ep_record.fut.get(offset as usize) else {
        return Err(RouteError::TopologyMismatch {
            wire,
            offset,
            len: ep_record.fut.len(),
        });
    };

    if target == NO_ENDPOINT {
        log::warn!("undefined projection for wire {}", table.name(wire));
        return Err(RouteError::IncompleteProjection { wire, offset });
    }

    log::warn!(
        "found projection for wire {}, {}",
        table.name(wire),
        table.name(target)
    );
    Ok((projected, target))
}
