//! Compiled-in wiring table for the Virtex-II family.
//!
//! A representative interconnect subset: two eastbound double lines, one
//! northbound and one westbound double line, a horizontal long line pair,
//! and two clock spines. BEG segments and clock wires have no known
//! endpoint (`ep` equals their own ID); BEG segments carry the projection
//! tables consulted when a MID/END segment runs off the fabric edge.

use super::{EmbeddedWire, NO_EP};

pub(super) const WIRES: &[EmbeddedWire] = &[
    // 0..=5: eastbound double lines 0 and 1
    EmbeddedWire { name: "E2BEG0", dx: 0, dy: 0, ep: 0, fut: &[2, 1], kind: 1, direction: 1, situation: 0 },
    EmbeddedWire { name: "E2MID0", dx: -1, dy: 0, ep: 0, fut: &[], kind: 1, direction: 1, situation: 1 },
    EmbeddedWire { name: "E2END0", dx: -2, dy: 0, ep: 0, fut: &[], kind: 1, direction: 1, situation: 2 },
    EmbeddedWire { name: "E2BEG1", dx: 0, dy: 0, ep: 3, fut: &[5, 4], kind: 1, direction: 1, situation: 0 },
    EmbeddedWire { name: "E2MID1", dx: -1, dy: 0, ep: 3, fut: &[], kind: 1, direction: 1, situation: 1 },
    EmbeddedWire { name: "E2END1", dx: -2, dy: 0, ep: 3, fut: &[], kind: 1, direction: 1, situation: 2 },
    // 6..=8: northbound double line 0; the projection at distance 1 is not
    // yet catalogued upstream
    EmbeddedWire { name: "N2BEG0", dx: 0, dy: 0, ep: 6, fut: &[8, NO_EP], kind: 1, direction: 2, situation: 0 },
    EmbeddedWire { name: "N2MID0", dx: 0, dy: 1, ep: 6, fut: &[], kind: 1, direction: 2, situation: 1 },
    EmbeddedWire { name: "N2END0", dx: 0, dy: 2, ep: 6, fut: &[], kind: 1, direction: 2, situation: 2 },
    // 9..=11: westbound double line 0, no projection table
    EmbeddedWire { name: "W2BEG0", dx: 0, dy: 0, ep: 9, fut: &[], kind: 1, direction: 3, situation: 0 },
    EmbeddedWire { name: "W2MID0", dx: -1, dy: 0, ep: 9, fut: &[], kind: 1, direction: 3, situation: 1 },
    EmbeddedWire { name: "W2END0", dx: -2, dy: 0, ep: 9, fut: &[], kind: 1, direction: 3, situation: 2 },
    // 12..=13: horizontal long line
    EmbeddedWire { name: "LH0", dx: 0, dy: 0, ep: 12, fut: &[13, 13, 13], kind: 2, direction: 0, situation: 0 },
    EmbeddedWire { name: "LH6", dx: 6, dy: 0, ep: 12, fut: &[], kind: 2, direction: 0, situation: 1 },
    // 14..=15: clock spines, unresolved in the wiring data
    EmbeddedWire { name: "CLK0", dx: 0, dy: 0, ep: 14, fut: &[], kind: 3, direction: 0, situation: 0 },
    EmbeddedWire { name: "CLK1", dx: 0, dy: 0, ep: 15, fut: &[], kind: 3, direction: 0, situation: 0 },
];
