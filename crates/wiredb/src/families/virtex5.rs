//! Compiled-in wiring table for the Virtex-5 family.
//!
//! Uses the EL2/NL2/WL2 double-line names and the longer LH12 long-line
//! reach of the Virtex-5 interconnect.

use super::{EmbeddedWire, NO_EP};

pub(super) const WIRES: &[EmbeddedWire] = &[
    // 0..=5: eastbound double lines 0 and 1
    EmbeddedWire { name: "EL2BEG0", dx: 0, dy: 0, ep: 0, fut: &[2, 1], kind: 1, direction: 1, situation: 0 },
    EmbeddedWire { name: "EL2MID0", dx: -1, dy: 0, ep: 0, fut: &[], kind: 1, direction: 1, situation: 1 },
    EmbeddedWire { name: "EL2END0", dx: -2, dy: 0, ep: 0, fut: &[], kind: 1, direction: 1, situation: 2 },
    EmbeddedWire { name: "EL2BEG1", dx: 0, dy: 0, ep: 3, fut: &[5, 4], kind: 1, direction: 1, situation: 0 },
    EmbeddedWire { name: "EL2MID1", dx: -1, dy: 0, ep: 3, fut: &[], kind: 1, direction: 1, situation: 1 },
    EmbeddedWire { name: "EL2END1", dx: -2, dy: 0, ep: 3, fut: &[], kind: 1, direction: 1, situation: 2 },
    // 6..=8: northbound double line 0
    EmbeddedWire { name: "NL2BEG0", dx: 0, dy: 0, ep: 6, fut: &[8, NO_EP], kind: 1, direction: 2, situation: 0 },
    EmbeddedWire { name: "NL2MID0", dx: 0, dy: 1, ep: 6, fut: &[], kind: 1, direction: 2, situation: 1 },
    EmbeddedWire { name: "NL2END0", dx: 0, dy: 2, ep: 6, fut: &[], kind: 1, direction: 2, situation: 2 },
    // 9..=11: westbound double line 0
    EmbeddedWire { name: "WL2BEG0", dx: 0, dy: 0, ep: 9, fut: &[], kind: 1, direction: 3, situation: 0 },
    EmbeddedWire { name: "WL2MID0", dx: -1, dy: 0, ep: 9, fut: &[], kind: 1, direction: 3, situation: 1 },
    EmbeddedWire { name: "WL2END0", dx: -2, dy: 0, ep: 9, fut: &[], kind: 1, direction: 3, situation: 2 },
    // 12..=13: horizontal long line
    EmbeddedWire { name: "LH0", dx: 0, dy: 0, ep: 12, fut: &[13, 13, 13], kind: 2, direction: 0, situation: 0 },
    EmbeddedWire { name: "LH12", dx: 12, dy: 0, ep: 12, fut: &[], kind: 2, direction: 0, situation: 1 },
    // 14..=15: global clock spines
    EmbeddedWire { name: "GCLK0", dx: 0, dy: 0, ep: 14, fut: &[], kind: 3, direction: 0, situation: 0 },
    EmbeddedWire { name: "GCLK1", dx: 0, dy: 0, ep: 15, fut: &[], kind: 3, direction: 0, situation: 0 },
];
