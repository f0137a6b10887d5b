// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    display::KMapDisplay,
    errors::Result,
    expression::Expression,
    gray::{Cell, Layout},
    variable::{Assignment, Variables},
};
use bitvec::prelude::*;
use log::debug;

/// One bit per cell of the largest (4×4) grid, indexed row-major.
pub(crate) type CellBits = BitArray<[u16; 1], Lsb0>;

#[inline]
pub(crate) fn empty_cell_bits() -> CellBits {
    BitArray::new([0])
}

/// The truth table of a function, laid out as a Karnaugh map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KMap {
    variables: Variables,
    layout: Layout,
    cells: CellBits,
}

impl KMap {
    /// Evaluates `expression` at every cell of the grid for `variables`.
    pub fn generate(expression: &Expression, variables: &Variables) -> Result<Self> {
        let layout = variables.layout();
        let mut cells = empty_cell_bits();
        for cell in layout.cells() {
            let assignment = layout.assignment(variables, cell);
            if expression.evaluate(&assignment)? {
                cells.set(layout.cell_index(cell), true);
            }
        }

        debug!(
            "generated {}x{} K-map for `{}` over [{}]: {} true cells",
            layout.rows(),
            layout.cols(),
            expression,
            variables,
            cells.count_ones()
        );
        Ok(Self {
            variables: variables.clone(),
            layout,
            cells,
        })
    }

    /// Marks each of `minterms` true. Repeated minterms are allowed.
    pub fn from_minterms(
        variables: &Variables,
        minterms: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let layout = variables.layout();
        let mut cells = empty_cell_bits();
        for minterm in minterms {
            let cell = layout.minterm_to_cell(minterm)?;
            cells.set(layout.cell_index(cell), true);
        }

        debug!(
            "built {}x{} K-map over [{}] from {} minterms",
            layout.rows(),
            layout.cols(),
            variables,
            cells.count_ones()
        );
        Ok(Self {
            variables: variables.clone(),
            layout,
            cells,
        })
    }

    #[inline]
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    pub fn get(&self, cell: Cell) -> Result<bool> {
        self.layout.check_cell(cell)?;
        Ok(self.is_true(cell))
    }

    /// Like `get`, for cells already known to be on the grid.
    #[inline]
    pub(crate) fn is_true(&self, cell: Cell) -> bool {
        self.cells[self.layout.cell_index(cell)]
    }

    /// True cells in row-major order.
    pub fn true_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter_ones()
            .map(move |ix| self.layout.cell_at(ix))
    }

    #[inline]
    pub fn true_count(&self) -> usize {
        self.cells.count_ones()
    }

    #[inline]
    pub fn is_all_false(&self) -> bool {
        self.true_count() == 0
    }

    #[inline]
    pub fn is_all_true(&self) -> bool {
        self.true_count() == self.layout.cell_count()
    }

    /// Minterm indexes of the true cells, ascending.
    pub fn minterms(&self) -> Vec<usize> {
        let mut minterms: Vec<_> = self
            .true_cells()
            .filter_map(|cell| self.layout.cell_to_minterm(cell).ok())
            .collect();
        minterms.sort_unstable();
        minterms
    }

    /// The assignment that a cell stands for.
    pub fn assignment(&self, cell: Cell) -> Result<Assignment> {
        self.layout.check_cell(cell)?;
        Ok(self.layout.assignment(&self.variables, cell))
    }

    /// The table as nested rows, for front ends that draw it themselves.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows())
            .map(|row| {
                (0..self.cols())
                    .map(|col| self.is_true(Cell::new(row, col)))
                    .collect()
            })
            .collect()
    }

    #[inline]
    pub fn display(&self) -> KMapDisplay<'_> {
        KMapDisplay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, proptest_helpers::MintermSet, variable::VariableSpec};
    use proptest::prelude::*;
    use test_log::test;

    fn generate(equation: &str, spec: VariableSpec) -> KMap {
        let variables = Variables::resolve(equation, &spec).unwrap();
        KMap::generate(&Expression::parse(equation), &variables).unwrap()
    }

    #[test]
    fn test_generate_two_variables() {
        let kmap = generate("A", VariableSpec::Count(2));
        assert_eq!(kmap.to_rows(), [[false, false], [true, true]]);
        assert_eq!(kmap.minterms(), [2, 3]);
    }

    #[test]
    fn test_generate_three_variables() {
        // AB + BC: rows are Gray-coded AB (00, 01, 11, 10), columns are C.
        let kmap = generate("AB + BC", VariableSpec::Auto);
        assert_eq!(
            kmap.to_rows(),
            [[false, false], [false, true], [true, true], [false, false]]
        );
        assert_eq!(kmap.minterms(), [3, 6, 7]);
    }

    #[test]
    fn test_generate_matches_direct_evaluation() {
        let expression = Expression::parse("A'BD + AC' + B'CD'");
        let variables = Variables::first_n(4).unwrap();
        let kmap = KMap::generate(&expression, &variables).unwrap();
        for cell in kmap.layout().cells() {
            let assignment = kmap.assignment(cell).unwrap();
            assert_eq!(
                kmap.get(cell).unwrap(),
                expression.evaluate(&assignment).unwrap(),
                "cell {}",
                cell
            );
        }
    }

    #[test]
    fn test_from_minterms() {
        let variables = Variables::first_n(4).unwrap();
        let kmap = KMap::from_minterms(&variables, [0, 1, 2, 3, 3]).unwrap();
        assert_eq!(kmap.true_count(), 4);
        assert_eq!(kmap.to_rows()[0], [true, true, true, true]);
        assert_eq!(kmap.minterms(), [0, 1, 2, 3]);

        assert!(matches!(
            KMap::from_minterms(&variables, [16]),
            Err(Error::Range { value: 16, .. })
        ));
    }

    #[test]
    fn test_get_out_of_range() {
        let kmap = generate("AB", VariableSpec::Auto);
        assert!(kmap.get(Cell::new(2, 0)).is_err());
        assert!(kmap.assignment(Cell::new(0, 5)).is_err());
    }

    proptest! {
        #[test]
        fn proptest_minterms_survive_layout(set in any::<MintermSet>()) {
            let kmap = set.to_kmap().unwrap();
            prop_assert_eq!(kmap.minterms(), set.minterms.clone());
            prop_assert_eq!(kmap.true_count(), set.minterms.len());
            for cell in kmap.true_cells() {
                let minterm = kmap.layout().cell_to_minterm(cell).unwrap();
                prop_assert!(set.minterms.contains(&minterm));
            }
        }
    }
}
