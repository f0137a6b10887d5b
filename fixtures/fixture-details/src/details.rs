// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use kmap_min::{gray::Cell, proptest_helpers::MintermSet};
use std::fmt;

/// The law a generated K-map broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Law {
    /// The minimized expression evaluates differently from the map at some cell.
    RoundTrip,
    /// A true cell is outside every group of the cover.
    Coverage,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RoundTrip => write!(f, "round-trip"),
            Self::Coverage => write!(f, "coverage"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckFailure {
    pub set: MintermSet,
    pub minimized: String,
    pub law: Law,
    pub cell: Cell,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} law broken at {} for minterms {:?} ({} variables): {}",
            self.law, self.cell, self.set.minterms, self.set.variable_count, self.minimized
        )
    }
}

/// Results of checking generated K-maps of one variable count.
#[derive(Clone, Debug, Default)]
pub struct CheckSummary {
    pub variable_count: usize,
    pub checked: usize,
    pub all_false: usize,
    pub all_true: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} variables: {} checked ({} all false, {} all true), {} failures",
            self.variable_count,
            self.checked,
            self.all_false,
            self.all_true,
            self.failures.len()
        )
    }
}
