// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{gray::Cell, group::Group, kmap::KMap};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// Renders a K-map as a text grid.
///
/// Column headers are the Gray-code values of the column indexes and row headers are the
/// Gray codes of the row indexes in binary:
///
/// ```text
///        0   1
///  00 |   0   0
///  01 |   0   1
///  11 |   1   1
///  10 |   0   0
/// ```
#[derive(Clone, Debug)]
pub struct KMapDisplay<'a> {
    kmap: &'a KMap,
    legend: bool,
}

impl<'a> KMapDisplay<'a> {
    pub fn new(kmap: &'a KMap) -> Self {
        Self { kmap, legend: true }
    }

    /// Whether to print which variables the rows and columns encode. On by default.
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }
}

impl<'a> fmt::Display for KMapDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let layout = self.kmap.layout();

        write!(f, "    ")?;
        for col in 0..layout.cols() {
            write!(f, "{:>4}", layout.col_label(col))?;
        }
        writeln!(f)?;

        for row in 0..layout.rows() {
            write!(f, "{:>2} |", layout.row_label(row))?;
            for col in 0..layout.cols() {
                let value = self.kmap.is_true(Cell::new(row, col));
                write!(f, "{:>4}", if value { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }

        if self.legend {
            let variables = self.kmap.variables().as_slice();
            let (row_vars, col_vars) = variables.split_at(layout.row_bits());
            writeln!(f)?;
            writeln!(f, "Variable Mapping:")?;
            writeln!(
                f,
                "Rows: {} (in Gray code order)",
                row_vars.iter().join("")
            )?;
            if col_vars.len() > 1 || layout.variable_count() == 2 {
                writeln!(
                    f,
                    "Columns: {} (in Gray code order)",
                    col_vars.iter().join("")
                )?;
            } else {
                writeln!(f, "Columns: {}", col_vars.iter().join(""))?;
            }
        }
        Ok(())
    }
}

/// Renders a group as its term followed by its cells, e.g. `A: (1, 0), (1, 1)`.
#[derive(Clone, Copy, Debug)]
pub struct GroupDisplay<'a> {
    group: &'a Group,
}

impl<'a> GroupDisplay<'a> {
    pub fn new(group: &'a Group) -> Self {
        Self { group }
    }
}

impl<'a> fmt::Display for GroupDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.group.term(),
            self.group.cells().iter().join(", ")
        )
    }
}

/// Renders a list of groups, one per line by default.
#[derive(Clone, Debug)]
pub struct CoverDisplay<'a> {
    groups: &'a [Group],
    separator: (Cow<'a, str>, bool),
}

impl<'a> CoverDisplay<'a> {
    pub fn new(groups: &'a [Group]) -> Self {
        Self {
            groups,
            separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>, print_last: bool) -> Self {
        self.separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for CoverDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.groups.is_empty() {
            return write!(f, "(none)");
        }
        let (separator, print_last) = &self.separator;
        for group in self.groups.iter().with_position() {
            match group {
                Position::First(group) | Position::Middle(group) => {
                    write!(f, "{}{}", group.display(), separator)?;
                }
                Position::Last(group) | Position::Only(group) => {
                    write!(f, "{}", group.display())?;
                    if *print_last {
                        write!(f, "{}", separator)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::Expression,
        variable::{VariableSpec, Variables},
    };

    fn kmap(equation: &str, spec: VariableSpec) -> KMap {
        let variables = Variables::resolve(equation, &spec).unwrap();
        KMap::generate(&Expression::parse(equation), &variables).unwrap()
    }

    #[test]
    fn test_three_variable_grid() {
        let kmap = kmap("AB + BC", VariableSpec::Auto);
        let expected = "       0   1\n\
                        00 |   0   0\n\
                        01 |   0   1\n\
                        11 |   1   1\n\
                        10 |   0   0\n\
                        \n\
                        Variable Mapping:\n\
                        Rows: AB (in Gray code order)\n\
                        Columns: C\n";
        assert_eq!(kmap.display().to_string(), expected);
    }

    #[test]
    fn test_two_variable_grid() {
        let kmap = kmap("A", VariableSpec::Count(2));
        let expected = "       0   1\n \
                        0 |   0   0\n \
                        1 |   1   1\n";
        assert_eq!(kmap.display().with_legend(false).to_string(), expected);
    }

    #[test]
    fn test_four_variable_legend() {
        let kmap = kmap("BD", VariableSpec::Count(4));
        let rendered = kmap.display().to_string();
        assert!(rendered.starts_with("       0   1   3   2\n"));
        assert!(rendered.contains("Rows: AB (in Gray code order)\n"));
        assert!(rendered.contains("Columns: CD (in Gray code order)\n"));
    }

    #[test]
    fn test_group_and_cover_display() {
        let variables = Variables::first_n(2).unwrap();
        let group = Group::from_cells(&variables, [Cell::new(1, 0), Cell::new(1, 1)]).unwrap();
        assert_eq!(group.display().to_string(), "A: (1, 0), (1, 1)");

        let groups = [group.clone(), group];
        assert_eq!(
            CoverDisplay::new(&groups)
                .with_separator("; ", false)
                .to_string(),
            "A: (1, 0), (1, 1); A: (1, 0), (1, 1)"
        );
        assert_eq!(CoverDisplay::new(&[]).to_string(), "(none)");
    }
}
