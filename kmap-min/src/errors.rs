// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while parsing equations, building K-maps or addressing cells.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A letter in the equation is not part of the resolved variable set.
    #[error("variable {variable} is outside the variable set {allowed}")]
    VariableRange { variable: char, allowed: String },

    /// Evaluation reached a variable that has no value in the assignment.
    #[error("variable {0} not found in variable mapping")]
    UnknownVariable(char),

    /// Fewer than 2 or more than 4 variables were resolved.
    #[error("{0} variables resolved, but only 2, 3 or 4 variables are supported")]
    UnsupportedVariableCount(usize),

    /// A minterm or a cell coordinate lies outside the grid.
    #[error("{kind} {value} is outside the range 0..{bound}")]
    Range {
        kind: RangeKind,
        value: usize,
        bound: usize,
    },

    /// An explicitly supplied variable is not an uppercase letter, or appears twice.
    #[error("invalid variable {0:?}: variables are distinct uppercase letters")]
    InvalidVariable(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeKind {
    Minterm,
    Row,
    Column,
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Minterm => write!(f, "minterm"),
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}
