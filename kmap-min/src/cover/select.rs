// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    gray::Cell,
    group::Group,
    kmap::{empty_cell_bits, CellBits, KMap},
};
use log::debug;

/// Returns the essential prime implicants of `kmap`, in the order their minterms are met.
///
/// A prime is essential if it is the only one covering some true cell that no earlier
/// essential prime has already covered. Since every true cell has its own 1x1 group, only
/// isolated cells have essential primes.
pub fn essential_primes(kmap: &KMap, primes: &[Group]) -> Vec<Group> {
    let mut covered = empty_cell_bits();
    collect_essentials(kmap, primes, &mut covered)
        .into_iter()
        .map(|ix| primes[ix].clone())
        .collect()
}

/// Picks a set of prime implicants covering every true cell of `kmap`.
///
/// Essential primes are taken first. The remaining cells are covered greedily, always
/// taking the prime that covers the most uncovered cells (the earliest prime on ties).
/// This is a valid cover but not necessarily the one with the fewest terms.
///
/// The result is sorted by term text and holds each term once.
pub fn select_cover(kmap: &KMap, primes: &[Group]) -> Vec<Group> {
    let total = kmap.true_count();
    let mut covered = empty_cell_bits();
    let mut selected = vec![false; primes.len()];

    for ix in collect_essentials(kmap, primes, &mut covered) {
        selected[ix] = true;
    }

    while covered.count_ones() < total {
        let mut best: Option<(usize, usize)> = None;
        for (ix, prime) in primes.iter().enumerate() {
            if selected[ix] {
                continue;
            }
            let gain = prime.uncovered_count(&covered);
            if gain > best.map_or(0, |(_, best_gain)| best_gain) {
                best = Some((ix, gain));
            }
        }

        match best {
            Some((ix, gain)) => {
                debug!("greedy pick {} (+{} cells)", primes[ix].term(), gain);
                primes[ix].mark_covered(&mut covered);
                selected[ix] = true;
            }
            None => {
                debug!(
                    "no prime covers the remaining {} cells",
                    total - covered.count_ones()
                );
                break;
            }
        }
    }

    let mut cover: Vec<Group> = primes
        .iter()
        .zip(&selected)
        .filter_map(|(prime, &selected)| selected.then(|| prime.clone()))
        .collect();
    cover.sort_by_cached_key(|group| group.term().to_string());
    cover.dedup_by(|a, b| a.term() == b.term());
    cover
}

/// Marks essential primes in `covered` and returns their indexes.
fn collect_essentials(kmap: &KMap, primes: &[Group], covered: &mut CellBits) -> Vec<usize> {
    let layout = kmap.layout();
    let mut essentials = Vec::new();

    for minterm in kmap.true_cells() {
        let containing: Vec<usize> = primes
            .iter()
            .enumerate()
            .filter_map(|(ix, prime)| prime.contains(minterm).then(|| ix))
            .collect();
        if let [ix] = containing[..] {
            if !covered[layout.cell_index(minterm)] {
                debug!("essential prime {} (covers {})", primes[ix].term(), minterm);
                primes[ix].mark_covered(covered);
                essentials.push(ix);
            }
        }
    }
    essentials
}

/// The true cell of `kmap` that no group in `cover` contains, if any.
pub fn first_uncovered(kmap: &KMap, cover: &[Group]) -> Option<Cell> {
    kmap.true_cells()
        .find(|&cell| !cover.iter().any(|group| group.contains(cell)))
}
