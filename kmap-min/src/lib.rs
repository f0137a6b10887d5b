// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Karnaugh-map minimization of boolean functions of 2 to 4 variables.
//!
//! A function is given either as a sum-of-products equation such as `AB + A'C` or as a list
//! of minterms. [`solver::Solver`] lays it out as a Gray-coded [`kmap::KMap`], finds the
//! power-of-two rectangles of true cells (wrapping around the edges) and picks a cover from
//! them.
//!
//! ```
//! use kmap_min::{solver::Solver, variable::VariableSpec};
//!
//! let solver = Solver::from_equation("AB + A'C + BC", &VariableSpec::Auto).unwrap();
//! assert_eq!(solver.minimized_expression(), "A'C + AB");
//! ```

pub mod cover;
pub mod display;
pub mod errors;
pub mod expression;
pub mod gray;
pub mod group;
pub mod kmap;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
pub mod solver;
pub mod variable;
