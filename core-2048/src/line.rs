use serde::{Deserialize, Serialize};

use crate::{board::MAX_TILE, orientation::Line};

/// Two equal tiles combining into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeEvent {
    pub sources: [u32; 2],
    pub merged: u32,
}

impl MergeEvent {
    pub const fn new(value: u32) -> Self {
        Self {
            sources: [value, value],
            merged: value * 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineResolution {
    pub line: Line,
    pub score_gained: u32,
    pub merges: Vec<MergeEvent>,
}

/// Equal non-empty neighbours merge, except a pair of `MAX_TILE`s, whose sum no board can hold.
pub const fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Moves every non-zero value toward index 0, keeping their order.
pub fn slide(line: Line) -> Line {
    let mut slid = [0; 4];

    for (slot, value) in slid.iter_mut().zip(line.into_iter().filter(|&value| value != 0)) {
        *slot = value;
    }

    slid
}

/// One left-to-right merge pass. A merged cell is skipped over, so it never merges twice.
fn combine(line: Line) -> (Line, Vec<MergeEvent>) {
    let mut combined = line;
    let mut merges = Vec::new();

    let mut i = 0;
    while i + 1 < combined.len() {
        if can_merge(combined[i], combined[i + 1]) {
            let merge = MergeEvent::new(combined[i]);

            combined[i] = merge.merged;
            combined[i + 1] = 0;
            merges.push(merge);

            i += 2;
        } else {
            i += 1;
        }
    }

    (combined, merges)
}

/// Slides a line toward index 0, merges equal neighbours once each, and closes the gaps.
pub fn resolve_line(line: Line) -> LineResolution {
    let (combined, merges) = combine(slide(line));
    let score_gained = merges.iter().map(|merge| merge.merged).sum();

    LineResolution {
        line: slide(combined),
        score_gained,
        merges,
    }
}
