// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{Error, Result},
    gray::Layout,
};
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::{collections::BTreeMap, fmt, ops::Index};

pub const MIN_VARIABLES: usize = 2;
pub const MAX_VARIABLES: usize = 4;

/// A boolean input, named by a single uppercase letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(char);

impl Variable {
    pub fn new(name: char) -> Result<Self> {
        if name.is_ascii_uppercase() {
            Ok(Self(name))
        } else {
            Err(Error::InvalidVariable(name))
        }
    }

    /// Returns the `ix`th letter of the alphabet, starting from `A`.
    pub fn nth(ix: usize) -> Option<Self> {
        (ix < 26).then(|| Self((b'A' + ix as u8) as char))
    }

    #[inline]
    pub fn name(self) -> char {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values given to each variable for one evaluation.
pub type Assignment = BTreeMap<Variable, bool>;

/// How the variable set of an equation is determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariableSpec {
    /// Use the distinct letters that appear in the equation, sorted.
    Auto,
    /// Use the first `n` letters of the alphabet.
    Count(usize),
    /// Use exactly these letters, sorted.
    Explicit(Vec<char>),
}

impl Default for VariableSpec {
    fn default() -> Self {
        Self::Auto
    }
}

/// An ordered set of 2 to 4 distinct variables.
///
/// The position of a variable decides where it lands on the K-map: the first variables
/// address rows and the rest address columns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variables {
    list: ArrayVec<Variable, MAX_VARIABLES>,
}

impl Variables {
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Result<Self> {
        let variables: Vec<_> = variables.into_iter().collect();
        if let Some(dup) = variables.iter().duplicates().next() {
            return Err(Error::InvalidVariable(dup.name()));
        }
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&variables.len()) {
            return Err(Error::UnsupportedVariableCount(variables.len()));
        }
        Ok(Self {
            list: variables.into_iter().collect(),
        })
    }

    /// The variables `A`, `B`, ... up to `count` of them.
    pub fn first_n(count: usize) -> Result<Self> {
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&count) {
            return Err(Error::UnsupportedVariableCount(count));
        }
        Self::new((0..count).filter_map(Variable::nth))
    }

    /// Resolves the variable set for `equation`, then checks that every letter in the
    /// equation belongs to it.
    pub fn resolve(equation: &str, spec: &VariableSpec) -> Result<Self> {
        let variables = match spec {
            VariableSpec::Auto => {
                let detected = equation
                    .chars()
                    .filter(char::is_ascii_uppercase)
                    .unique()
                    .sorted()
                    .map(Variable);
                Self::new(detected)?
            }
            VariableSpec::Count(count) => Self::first_n(*count)?,
            VariableSpec::Explicit(names) => {
                let mut list = names
                    .iter()
                    .map(|&name| Variable::new(name))
                    .collect::<Result<Vec<_>>>()?;
                list.sort_unstable();
                Self::new(list)?
            }
        };

        let outside = equation
            .chars()
            .filter(char::is_ascii_alphabetic)
            .find(|&letter| !variables.iter().any(|v| v.name() == letter));
        match outside {
            Some(variable) => Err(Error::VariableRange {
                variable,
                allowed: variables.to_string(),
            }),
            None => Ok(variables),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Variable] {
        &self.list
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        self.list.iter().copied()
    }

    /// The grid layout for this many variables.
    #[inline]
    pub fn layout(&self) -> Layout {
        Layout::for_variables(self)
    }
}

impl Index<usize> for Variables {
    type Output = Variable;

    fn index(&self, ix: usize) -> &Variable {
        &self.list[ix]
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.list.iter().join(","))
    }
}
