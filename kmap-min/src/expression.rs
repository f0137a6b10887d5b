// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sum-of-products equations such as `AB' + C`.
//!
//! The grammar is deliberately permissive: `+` separates terms, each uppercase letter is a
//! literal, and an apostrophe right after a letter complements it. Every other character
//! is skipped, so malformed input produces a degenerate expression rather than an error.

use crate::{
    errors::{Error, Result},
    variable::{Assignment, Variable, VariableSpec, Variables},
};
use itertools::Itertools;
use std::fmt;

/// A variable reference, asserted or complemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub variable: Variable,
    pub complemented: bool,
}

impl Literal {
    #[inline]
    pub fn new(variable: Variable, complemented: bool) -> Self {
        Self {
            variable,
            complemented,
        }
    }

    pub fn evaluate(self, assignment: &Assignment) -> Result<bool> {
        let value = assignment
            .get(&self.variable)
            .ok_or_else(|| Error::UnknownVariable(self.variable.name()))?;
        Ok(*value != self.complemented)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.complemented {
            write!(f, "{}'", self.variable)
        } else {
            write!(f, "{}", self.variable)
        }
    }
}

/// A conjunction of literals. The empty term is always true and displays as `1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    /// Scans a single term, left to right.
    pub fn parse(text: &str) -> Self {
        let mut literals = Vec::new();
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            let Ok(variable) = Variable::new(ch) else {
                continue;
            };
            let complemented = chars.next_if_eq(&'\'').is_some();
            literals.push(Literal::new(variable, complemented));
        }
        Self { literals }
    }

    #[inline]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    #[inline]
    pub fn is_tautology(&self) -> bool {
        self.literals.is_empty()
    }

    /// ANDs every literal. All literals are looked up, so a missing variable is reported
    /// even after a false literal.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool> {
        let mut value = true;
        for literal in &self.literals {
            value &= literal.evaluate(assignment)?;
        }
        Ok(value)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "1");
        }
        for literal in &self.literals {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// A disjunction of terms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    pub fn new(terms: impl IntoIterator<Item = Term>) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    pub fn parse(text: &str) -> Self {
        Self::new(text.split('+').map(Term::parse))
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Distinct variables referenced by this expression, in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.terms
            .iter()
            .flat_map(|term| term.literals.iter().map(|literal| literal.variable))
            .unique()
    }

    /// ORs every term.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool> {
        let mut value = false;
        for term in &self.terms {
            value |= term.evaluate(assignment)?;
        }
        Ok(value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.terms.iter().join(" + "))
    }
}

/// Resolves and validates the variable set of `equation`.
pub fn parse(equation: &str, spec: &VariableSpec) -> Result<Variables> {
    Variables::resolve(equation, spec)
}

/// Evaluates `equation` under `assignment`.
pub fn evaluate(equation: &str, assignment: &Assignment) -> Result<bool> {
    Expression::parse(equation).evaluate(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn var(name: char) -> Variable {
        Variable::new(name).unwrap()
    }

    fn assign(pairs: &[(char, bool)]) -> Assignment {
        pairs.iter().map(|&(name, value)| (var(name), value)).collect()
    }

    #[test]
    fn test_parse_terms() {
        let expr = Expression::parse("AB' + C");
        assert_eq!(expr.terms().len(), 2);
        assert_eq!(
            expr.terms()[0].literals(),
            &[Literal::new(var('A'), false), Literal::new(var('B'), true)]
        );
        assert_eq!(expr.to_string(), "AB' + C");
    }

    #[test]
    fn test_evaluate_and_or() {
        let values = assign(&[('A', true), ('B', false), ('C', false)]);
        assert_eq!(evaluate("AB' + C", &values), Ok(true));
        assert_eq!(evaluate("AB + C", &values), Ok(false));
        assert_eq!(evaluate("A'", &values), Ok(false));
        assert_eq!(evaluate("B' C'", &values), Ok(true));
    }

    #[test]
    fn test_permissive_grammar() {
        let values = assign(&[('A', true), ('B', true)]);
        // Operators, digits and parentheses are skipped by the literal scan.
        assert_eq!(evaluate("(A*B)", &values), Ok(true));
        assert_eq!(evaluate("A & 0", &values), Ok(true));
        // A second apostrophe is not a double negation.
        assert_eq!(evaluate("A''", &values), Ok(false));
    }

    #[test]
    fn test_empty_term_is_true() {
        let values = assign(&[('A', false), ('B', false)]);
        assert_eq!(evaluate("AB + ", &values), Ok(true));
        assert_eq!(evaluate("A ++ B", &values), Ok(true));
        assert_eq!(evaluate("", &values), Ok(true));
        assert_eq!(Term::default().to_string(), "1");
    }

    #[test]
    fn test_unknown_variable() {
        let values = assign(&[('A', false), ('B', true)]);
        assert_eq!(evaluate("AC", &values), Err(Error::UnknownVariable('C')));
        assert_eq!(evaluate("B + D'", &values), Err(Error::UnknownVariable('D')));
    }

    #[test]
    fn test_expression_variables() {
        let expr = Expression::parse("CB + A'C");
        let order: String = expr.variables().map(Variable::name).collect();
        assert_eq!(order, "CBA");
    }
}
