// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    gray::Cell,
    group::Group,
    kmap::{empty_cell_bits, CellBits, KMap},
};
use itertools::Itertools;
use log::debug;

/// Candidate group shapes as `(height, width)`, largest first.
///
/// Heights are halved from `rows` down to 1 in the outer loop and widths from `cols` down
/// to 1 in the inner loop.
pub fn group_sizes(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let halvings = |start: usize| {
        std::iter::successors(Some(start), |&n| (n > 1).then(|| n / 2))
    };
    halvings(rows).cartesian_product(halvings(cols).collect::<Vec<_>>()).collect()
}

/// Finds the candidate implicants of `kmap`: every power-of-two rectangle of true cells,
/// wrapping around the grid edges, once per distinct cell set.
///
/// Rectangles inside larger ones are kept, so every true cell has at least its own 1x1
/// group. Candidates are visited by decreasing size and then by row-major anchor, and the
/// result keeps that order. This order decides tie-breaks later on, so it must stay stable.
pub fn find_primes(kmap: &KMap) -> Vec<Group> {
    let layout = kmap.layout();
    let mut found: Vec<Group> = Vec::new();

    for (height, width) in group_sizes(layout.rows(), layout.cols()) {
        for anchor in layout.cells() {
            let cells = match rectangle(kmap, anchor, height, width) {
                Some(cells) => cells,
                None => continue,
            };
            // Anchors in the same wrapped rectangle produce the same cell set.
            if found.iter().any(|group| group.bits() == &cells) {
                continue;
            }
            let group = Group::from_bits(kmap.variables(), cells);
            debug!(
                "{}x{} group at {}: {}",
                height,
                width,
                anchor,
                group.term()
            );
            found.push(group);
        }
    }

    debug!(
        "{} candidate groups: {}",
        found.len(),
        found.iter().map(Group::term).join(", ")
    );
    found
}

/// Returns the cells of the `height`×`width` rectangle anchored at `anchor` if every one
/// of them is true.
fn rectangle(kmap: &KMap, anchor: Cell, height: usize, width: usize) -> Option<CellBits> {
    let layout = kmap.layout();
    let mut cells = empty_cell_bits();
    for (dr, dc) in (0..height).cartesian_product(0..width) {
        let cell = Cell::new(
            (anchor.row + dr) % layout.rows(),
            (anchor.col + dc) % layout.cols(),
        );
        if !kmap.is_true(cell) {
            return None;
        }
        cells.set(layout.cell_index(cell), true);
    }
    Some(cells)
}
