// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::Result,
    kmap::KMap,
    solver::Solver,
    variable::{Variables, MAX_VARIABLES, MIN_VARIABLES},
};
use proptest::prelude::*;

/// A random function given by its variable count and true minterms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintermSet {
    pub variable_count: usize,
    pub minterms: Vec<usize>,
}

impl MintermSet {
    /// Strategy for functions of exactly `variable_count` variables.
    pub fn strategy_for(variable_count: usize) -> BoxedStrategy<Self> {
        any::<u16>()
            .prop_map(move |mask| Self::from_mask(variable_count, mask))
            .boxed()
    }

    /// Takes minterm `i` as true if bit `i` of `mask` is set. Bits past the grid are ignored.
    pub fn from_mask(variable_count: usize, mask: u16) -> Self {
        let minterms = (0..1usize << variable_count)
            .filter(|bit| mask & (1 << bit) != 0)
            .collect();
        Self {
            variable_count,
            minterms,
        }
    }

    pub fn to_kmap(&self) -> Result<KMap> {
        let variables = Variables::first_n(self.variable_count)?;
        KMap::from_minterms(&variables, self.minterms.iter().copied())
    }

    pub fn solver(&self) -> Result<Solver> {
        Solver::from_minterms(self.variable_count, self.minterms.iter().copied())
    }
}

impl Arbitrary for MintermSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (MIN_VARIABLES..=MAX_VARIABLES, any::<u16>())
            .prop_map(|(variable_count, mask)| Self::from_mask(variable_count, mask))
            .boxed()
    }
}
