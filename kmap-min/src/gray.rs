// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{Error, RangeKind, Result},
    variable::{Assignment, Variables},
};
use std::fmt;

/// Returns the reflected binary Gray code of `n`.
///
/// # Examples
///
/// ```
/// use kmap_min::gray::{gray_code, inverse_gray_code};
///
/// let codes: Vec<_> = (0..4).map(gray_code).collect();
/// assert_eq!(codes, [0, 1, 3, 2]);
/// assert_eq!(inverse_gray_code(3), 2);
/// ```
#[inline]
pub fn gray_code(n: usize) -> usize {
    n ^ (n >> 1)
}

/// Recovers `n` from `gray_code(n)`.
pub fn inverse_gray_code(gray: usize) -> usize {
    let mut n = gray;
    let mut shifted = gray >> 1;
    while shifted != 0 {
        n ^= shifted;
        shifted >>= 1;
    }
    n
}

/// A K-map cell, addressed by plain 0-based row and column indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid shape and Gray-code addressing for a given variable count.
///
/// The leading variables are encoded by the Gray code of the row index and the trailing
/// ones by the Gray code of the column index:
///
/// | variables | grid | row bits   | column bits |
/// |-----------|------|------------|-------------|
/// | 2         | 2×2  | `A`        | `B`         |
/// | 3         | 4×2  | `A B`      | `C`         |
/// | 4         | 4×4  | `A B`      | `C D`       |
///
/// Minterm indexes put the first variable in the most significant bit, so
/// `minterm = gray(row) << column_bits | gray(col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    variable_count: usize,
}

impl Layout {
    pub fn new(variable_count: usize) -> Result<Self> {
        match variable_count {
            2..=4 => Ok(Self { variable_count }),
            _ => Err(Error::UnsupportedVariableCount(variable_count)),
        }
    }

    #[inline]
    pub(crate) fn for_variables(variables: &Variables) -> Self {
        debug_assert!((2..=4).contains(&variables.len()));
        Self {
            variable_count: variables.len(),
        }
    }

    #[inline]
    pub fn variable_count(self) -> usize {
        self.variable_count
    }

    #[inline]
    pub fn row_bits(self) -> usize {
        if self.variable_count == 2 {
            1
        } else {
            2
        }
    }

    #[inline]
    pub fn col_bits(self) -> usize {
        self.variable_count - self.row_bits()
    }

    #[inline]
    pub fn rows(self) -> usize {
        1 << self.row_bits()
    }

    #[inline]
    pub fn cols(self) -> usize {
        1 << self.col_bits()
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        1 << self.variable_count
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let cols = self.cols();
        (0..self.cell_count()).map(move |ix| Cell::new(ix / cols, ix % cols))
    }

    pub fn check_cell(self, cell: Cell) -> Result<()> {
        if cell.row >= self.rows() {
            return Err(Error::Range {
                kind: RangeKind::Row,
                value: cell.row,
                bound: self.rows(),
            });
        }
        if cell.col >= self.cols() {
            return Err(Error::Range {
                kind: RangeKind::Column,
                value: cell.col,
                bound: self.cols(),
            });
        }
        Ok(())
    }

    pub fn minterm_to_cell(self, minterm: usize) -> Result<Cell> {
        if minterm >= self.cell_count() {
            return Err(Error::Range {
                kind: RangeKind::Minterm,
                value: minterm,
                bound: self.cell_count(),
            });
        }
        let col_mask = self.cols() - 1;
        Ok(Cell::new(
            inverse_gray_code(minterm >> self.col_bits()),
            inverse_gray_code(minterm & col_mask),
        ))
    }

    pub fn cell_to_minterm(self, cell: Cell) -> Result<usize> {
        self.check_cell(cell)?;
        Ok(self.minterm_of(cell))
    }

    /// Value of the variable at position `var_ix` inside `cell`.
    pub fn variable_bit(self, cell: Cell, var_ix: usize) -> bool {
        debug_assert!(var_ix < self.variable_count);
        let shift = self.variable_count - 1 - var_ix;
        (self.minterm_of(cell) >> shift) & 1 == 1
    }

    /// The assignment of `variables` that `cell` stands for.
    pub fn assignment(self, variables: &Variables, cell: Cell) -> Assignment {
        debug_assert_eq!(variables.len(), self.variable_count);
        variables
            .iter()
            .enumerate()
            .map(|(var_ix, variable)| (variable, self.variable_bit(cell, var_ix)))
            .collect()
    }

    /// Row header: the row's Gray code as one binary digit for 2 variables, two otherwise.
    pub fn row_label(self, row: usize) -> String {
        format!("{:0width$b}", gray_code(row), width = self.row_bits())
    }

    /// Column header: the Gray-code value of the column index.
    pub fn col_label(self, col: usize) -> String {
        gray_code(col).to_string()
    }

    #[inline]
    pub(crate) fn cell_index(self, cell: Cell) -> usize {
        cell.row * self.cols() + cell.col
    }

    #[inline]
    pub(crate) fn cell_at(self, ix: usize) -> Cell {
        Cell::new(ix / self.cols(), ix % self.cols())
    }

    #[inline]
    fn minterm_of(self, cell: Cell) -> usize {
        (gray_code(cell.row) << self.col_bits()) | gray_code(cell.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Variable;
    use proptest::prelude::*;

    #[test]
    fn test_shapes() {
        let shapes: Vec<_> = (2..=4)
            .map(|n| {
                let layout = Layout::new(n).unwrap();
                (layout.rows(), layout.cols())
            })
            .collect();
        assert_eq!(shapes, [(2, 2), (4, 2), (4, 4)]);

        assert_eq!(Layout::new(1), Err(Error::UnsupportedVariableCount(1)));
        assert_eq!(Layout::new(5), Err(Error::UnsupportedVariableCount(5)));
    }

    #[test]
    fn test_bit_layout() {
        // 3 variables: row Gray bits are (A, B), column Gray bit is C.
        let layout = Layout::new(3).unwrap();
        let variables = Variables::first_n(3).unwrap();
        let assignment = layout.assignment(&variables, Cell::new(2, 1));
        let a = Variable::new('A').unwrap();
        let b = Variable::new('B').unwrap();
        let c = Variable::new('C').unwrap();
        // gray(2) = 0b11, gray(1) = 0b1
        assert_eq!(assignment[&a], true);
        assert_eq!(assignment[&b], true);
        assert_eq!(assignment[&c], true);

        let assignment = layout.assignment(&variables, Cell::new(3, 0));
        // gray(3) = 0b10
        assert_eq!(assignment[&a], true);
        assert_eq!(assignment[&b], false);
        assert_eq!(assignment[&c], false);
    }

    #[test]
    fn test_minterm_mapping() {
        let layout = Layout::new(4).unwrap();
        // minterm 0b1101: row Gray 0b11 is row 2, column Gray 0b01 is column 1
        assert_eq!(layout.minterm_to_cell(13), Ok(Cell::new(2, 1)));
        // minterm 0b0010: row 0, column Gray 0b10 is column 3
        assert_eq!(layout.minterm_to_cell(2), Ok(Cell::new(0, 3)));

        let layout = Layout::new(2).unwrap();
        assert_eq!(layout.minterm_to_cell(2), Ok(Cell::new(1, 0)));
        assert_eq!(
            layout.minterm_to_cell(4),
            Err(Error::Range {
                kind: RangeKind::Minterm,
                value: 4,
                bound: 4,
            })
        );
        assert_eq!(
            layout.cell_to_minterm(Cell::new(0, 2)),
            Err(Error::Range {
                kind: RangeKind::Column,
                value: 2,
                bound: 2,
            })
        );
    }

    #[test]
    fn test_labels() {
        let layout = Layout::new(2).unwrap();
        assert_eq!(layout.row_label(1), "1");
        let layout = Layout::new(4).unwrap();
        let rows: Vec<_> = (0..4).map(|row| layout.row_label(row)).collect();
        assert_eq!(rows, ["00", "01", "11", "10"]);
        let cols: Vec<_> = (0..4).map(|col| layout.col_label(col)).collect();
        assert_eq!(cols, ["0", "1", "3", "2"]);
    }

    #[test]
    fn test_gray_round_trip_per_grid() {
        for n in 2..=4 {
            let layout = Layout::new(n).unwrap();
            for ix in 0..layout.rows().max(layout.cols()) {
                assert_eq!(inverse_gray_code(gray_code(ix)), ix);
                assert_eq!(gray_code(inverse_gray_code(ix)), ix);
            }
            for minterm in 0..layout.cell_count() {
                let cell = layout.minterm_to_cell(minterm).unwrap();
                assert_eq!(layout.cell_to_minterm(cell), Ok(minterm));
            }
        }
    }

    proptest! {
        #[test]
        fn proptest_gray_inverse(n in 0usize..(1 << 20)) {
            prop_assert_eq!(inverse_gray_code(gray_code(n)), n);
            prop_assert_eq!(gray_code(inverse_gray_code(n)), n);
        }

        #[test]
        fn proptest_adjacent_codes_differ_in_one_bit(n in 0usize..(1 << 20)) {
            prop_assert_eq!((gray_code(n) ^ gray_code(n + 1)).count_ones(), 1);
        }
    }
}
