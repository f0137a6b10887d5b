// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{assemble, first_uncovered, select_cover},
    errors::Result,
    expression::Expression,
    gray::Cell,
    group::Group,
    kmap::KMap,
    primes::find_primes,
    variable::{VariableSpec, Variables},
};
use log::debug;
use once_cell::sync::OnceCell;

/// Minimizes one function: owns its K-map and lazily derives primes and the cover from it.
#[derive(Clone, Debug)]
pub struct Solver {
    kmap: KMap,
    primes: OnceCell<Vec<Group>>,
    cover: OnceCell<Vec<Group>>,
}

impl Solver {
    /// Parses `equation`, resolves its variables according to `spec` and builds the K-map.
    pub fn from_equation(equation: &str, spec: &VariableSpec) -> Result<Self> {
        let variables = Variables::resolve(equation, spec)?;
        let expression = Expression::parse(equation);
        debug!("solving `{}` over [{}]", expression, variables);
        Ok(Self::new(KMap::generate(&expression, &variables)?))
    }

    /// Builds the K-map from minterm indexes over the variables `A`, `B`, ...
    pub fn from_minterms(
        variable_count: usize,
        minterms: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let variables = Variables::first_n(variable_count)?;
        Ok(Self::new(KMap::from_minterms(&variables, minterms)?))
    }

    pub fn new(kmap: KMap) -> Self {
        Self {
            kmap,
            primes: OnceCell::new(),
            cover: OnceCell::new(),
        }
    }

    #[inline]
    pub fn kmap(&self) -> &KMap {
        &self.kmap
    }

    #[inline]
    pub fn variables(&self) -> &Variables {
        self.kmap.variables()
    }

    pub fn prime_implicants(&self) -> &[Group] {
        self.primes.get_or_init(|| find_primes(&self.kmap))
    }

    /// The selected groups, sorted by term.
    pub fn minimal_cover(&self) -> &[Group] {
        self.cover
            .get_or_init(|| select_cover(&self.kmap, self.prime_implicants()))
    }

    /// The minimized sum of products.
    ///
    /// A map without any true cell reads as `0`: an empty cover would otherwise assemble
    /// to `1`.
    pub fn minimized_expression(&self) -> String {
        if self.kmap.is_all_false() {
            return "0".to_owned();
        }
        assemble(self.minimal_cover())
    }

    /// Checks that the minimized expression has the same truth table as the K-map.
    ///
    /// Returns the first cell where they disagree.
    pub fn check_logically_equivalent(&self) -> Result<(), Cell> {
        let minimized = self.minimized_expression();
        let layout = self.kmap.layout();
        for cell in layout.cells() {
            let expected = self.kmap.is_true(cell);
            let actual = match minimized.as_str() {
                "0" => Ok(false),
                text => {
                    Expression::parse(text).evaluate(&layout.assignment(self.variables(), cell))
                }
            };
            if actual != Ok(expected) {
                return Err(cell);
            }
        }
        Ok(())
    }

    /// Checks that every true cell lies in some group of the cover.
    pub fn check_coverage(&self) -> Result<(), Cell> {
        match first_uncovered(&self.kmap, self.minimal_cover()) {
            Some(cell) => Err(cell),
            None => Ok(()),
        }
    }
}

/// Builds the K-map for `equation`.
pub fn solve(equation: &str, spec: &VariableSpec) -> Result<(KMap, Variables)> {
    let solver = Solver::from_equation(equation, spec)?;
    let variables = solver.variables().clone();
    Ok((solver.kmap, variables))
}

/// Runs the whole pipeline and returns the minimized expression.
pub fn minimized_expression(equation: &str, spec: &VariableSpec) -> Result<String> {
    Ok(Solver::from_equation(equation, spec)?.minimized_expression())
}

/// Runs the whole pipeline and returns the groups of the minimal cover.
pub fn minimal_cover_groups(equation: &str, spec: &VariableSpec) -> Result<Vec<Group>> {
    Ok(Solver::from_equation(equation, spec)?.minimal_cover().to_vec())
}
