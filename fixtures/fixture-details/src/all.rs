// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    details::{CheckFailure, CheckSummary, Law},
    value_generator::ValueGenerator,
};
use color_eyre::Result;
use kmap_min::{
    proptest_helpers::MintermSet,
    variable::{MAX_VARIABLES, MIN_VARIABLES},
};
use log::debug;

pub struct AllFixtures;

impl AllFixtures {
    /// Generates `count` random K-maps for every supported variable count and checks the
    /// round-trip and coverage laws on each.
    pub fn check_all(count: usize, seed: &str) -> Result<Vec<CheckSummary>> {
        (MIN_VARIABLES..=MAX_VARIABLES)
            .map(|variable_count| Self::check(variable_count, count, seed))
            .collect()
    }

    pub fn check(variable_count: usize, count: usize, seed: &str) -> Result<CheckSummary> {
        let mut value_gen = ValueGenerator::from_seed((seed, variable_count));
        let mut summary = CheckSummary {
            variable_count,
            ..CheckSummary::default()
        };

        for _ in 0..count {
            let mut gen = value_gen.partial_clone();
            let set = gen.generate(MintermSet::strategy_for(variable_count))?;
            let solver = set.solver()?;
            let minimized = solver.minimized_expression();
            debug!("minterms {:?} -> {}", set.minterms, minimized);

            summary.checked += 1;
            if solver.kmap().is_all_false() {
                summary.all_false += 1;
            } else if solver.kmap().is_all_true() {
                summary.all_true += 1;
            }

            let broken = match solver.check_logically_equivalent() {
                Err(cell) => Some((Law::RoundTrip, cell)),
                Ok(()) => solver
                    .check_coverage()
                    .err()
                    .map(|cell| (Law::Coverage, cell)),
            };
            if let Some((law, cell)) = broken {
                summary.failures.push(CheckFailure {
                    set,
                    minimized,
                    law,
                    cell,
                });
            }
        }

        Ok(summary)
    }
}
