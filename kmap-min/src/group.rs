// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    display::GroupDisplay,
    errors::Result,
    expression::{Literal, Term},
    gray::{Cell, Layout},
    kmap::{empty_cell_bits, CellBits},
    variable::Variables,
};
use itertools::Itertools;

/// A set of K-map cells together with the product term it stands for.
///
/// Groups have two notions of identity. The cell set is the structural key used while
/// enumerating candidates, and the term is the textual key used once a cover has been
/// picked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group {
    layout: Layout,
    cells: CellBits,
    term: Term,
}

impl Group {
    pub(crate) fn from_bits(variables: &Variables, cells: CellBits) -> Self {
        let layout = variables.layout();
        let term = name_term(layout, variables, &cells);
        Self {
            layout,
            cells,
            term,
        }
    }

    /// Builds a group from explicit coordinates, checking that they lie on the grid.
    pub fn from_cells(variables: &Variables, cells: impl IntoIterator<Item = Cell>) -> Result<Self> {
        let layout = variables.layout();
        let mut bits = empty_cell_bits();
        for cell in cells {
            layout.check_cell(cell)?;
            bits.set(layout.cell_index(cell), true);
        }
        Ok(Self::from_bits(variables, bits))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        self.cells
            .iter_ones()
            .map(|ix| self.layout.cell_at(ix))
            .collect()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.count_ones()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.layout.check_cell(cell).is_ok() && self.cells[self.layout.cell_index(cell)]
    }

    #[inline]
    pub fn term(&self) -> &Term {
        &self.term
    }

    #[inline]
    pub fn display(&self) -> GroupDisplay<'_> {
        GroupDisplay::new(self)
    }

    #[inline]
    pub(crate) fn bits(&self) -> &CellBits {
        &self.cells
    }

    /// Number of cells in this group not yet marked in `covered`.
    pub(crate) fn uncovered_count(&self, covered: &CellBits) -> usize {
        self.cells.iter_ones().filter(|&ix| !covered[ix]).count()
    }

    pub(crate) fn mark_covered(&self, covered: &mut CellBits) {
        for ix in self.cells.iter_ones() {
            covered.set(ix, true);
        }
    }
}

/// Names the product term for a set of cells.
///
/// A variable appears in the term iff it takes the same value in every cell, complemented
/// when that value is false. Groups where every variable varies yield the empty term, `1`.
fn name_term(layout: Layout, variables: &Variables, cells: &CellBits) -> Term {
    let literals = variables
        .iter()
        .enumerate()
        .filter_map(|(var_ix, variable)| {
            let values: Vec<bool> = cells
                .iter_ones()
                .map(|ix| layout.variable_bit(layout.cell_at(ix), var_ix))
                .collect();
            match values.first() {
                Some(&value) if values.iter().all_equal() => {
                    Some(Literal::new(variable, !value))
                }
                _ => None,
            }
        });
    Term::new(literals)
}
