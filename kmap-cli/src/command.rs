// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::{eyre::bail, Result};
use fixture_details::AllFixtures;
use kmap_min::{display::CoverDisplay, solver::Solver, variable::VariableSpec};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Minimize boolean functions of 2 to 4 variables with Karnaugh maps.
#[derive(Debug, Parser)]
#[command(name = "kmap")]
pub struct KMapApp {
    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: KMapCommand,
}

#[derive(Debug, Subcommand)]
pub enum KMapCommand {
    /// Minimize a sum-of-products equation such as "AB + A'C"
    Solve {
        equation: String,

        #[command(flatten)]
        variables: VariableArgs,

        /// Also list the cells of each group in the cover
        #[arg(long)]
        groups: bool,
    },
    /// Minimize a function given by its true minterms, e.g. "0,1,5,7"
    Minterms {
        #[arg(value_delimiter = ',')]
        minterms: Vec<usize>,

        /// Number of variables (2 to 4)
        #[arg(long = "vars", value_name = "N")]
        variable_count: usize,

        /// Also list the cells of each group in the cover
        #[arg(long)]
        groups: bool,
    },
    /// Minimize random K-maps and check the results against their truth tables
    Check {
        /// Number of K-maps per variable count
        #[arg(long, short, default_value_t = 64)]
        count: usize,

        #[arg(long, default_value = "kmap-min")]
        seed: String,
    },
}

#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct VariableArgs {
    /// Use the first N letters A, B, ... as variables
    #[arg(long = "vars", value_name = "N")]
    count: Option<usize>,

    /// Use these letters as variables (e.g. "A,B,C" or "WXYZ"); they are laid out sorted
    #[arg(long, value_name = "LIST")]
    variables: Option<String>,
}

impl VariableArgs {
    pub fn to_spec(&self) -> VariableSpec {
        match (&self.count, &self.variables) {
            (Some(count), _) => VariableSpec::Count(*count),
            (None, Some(list)) => VariableSpec::Explicit(
                list.chars().filter(|ch| !matches!(ch, ',' | ' ')).collect(),
            ),
            (None, None) => VariableSpec::Auto,
        }
    }
}

impl KMapApp {
    pub fn exec(self) -> Result<()> {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )?;
        self.command.exec()
    }
}

impl KMapCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Solve {
                equation,
                variables,
                groups,
            } => {
                let spec = variables.to_spec();
                let solver = Solver::from_equation(&equation, &spec)?;
                println!("K-map for equation: {}", equation);
                if spec != VariableSpec::Auto {
                    println!(
                        "Using {} variables ({})",
                        solver.variables().len(),
                        solver.variables()
                    );
                }
                print_solution(&solver, groups);
                Ok(())
            }
            Self::Minterms {
                minterms,
                variable_count,
                groups,
            } => {
                let solver = Solver::from_minterms(variable_count, minterms.iter().copied())?;
                let listed: Vec<String> = minterms.iter().map(usize::to_string).collect();
                println!("K-map for minterms: {}", listed.join(","));
                println!(
                    "Using {} variables ({})",
                    solver.variables().len(),
                    solver.variables()
                );
                print_solution(&solver, groups);
                Ok(())
            }
            Self::Check { count, seed } => {
                let summaries = AllFixtures::check_all(count, &seed)?;
                let mut failures = 0;
                for summary in &summaries {
                    println!("{}", summary);
                    for failure in &summary.failures {
                        println!("  {}", failure);
                    }
                    failures += summary.failures.len();
                }
                if failures > 0 {
                    bail!("{} generated K-maps were minimized incorrectly", failures);
                }
                Ok(())
            }
        }
    }
}

fn print_solution(solver: &Solver, groups: bool) {
    print!("{}", solver.kmap().display());
    println!("Minimized Expression: {}", solver.minimized_expression());
    if groups {
        println!();
        println!("Groups:");
        println!(
            "{}",
            CoverDisplay::new(solver.minimal_cover()).with_separator("\n", false)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_spec(args: &[&str]) -> VariableSpec {
        let app = KMapApp::try_parse_from(args.iter().copied()).unwrap();
        match app.command {
            KMapCommand::Solve { variables, .. } => variables.to_spec(),
            other => panic!("expected solve, got {:?}", other),
        }
    }

    #[test]
    fn test_variable_args() {
        assert_eq!(solve_spec(&["kmap", "solve", "AB"]), VariableSpec::Auto);
        assert_eq!(
            solve_spec(&["kmap", "solve", "A", "--vars", "3"]),
            VariableSpec::Count(3)
        );
        assert_eq!(
            solve_spec(&["kmap", "solve", "XY", "--variables", "X, Y,Z"]),
            VariableSpec::Explicit(vec!['X', 'Y', 'Z'])
        );
        assert!(
            KMapApp::try_parse_from(["kmap", "solve", "A", "--vars", "2", "--variables", "AB"])
                .is_err()
        );
    }

    #[test]
    fn test_minterm_list() {
        let app = KMapApp::try_parse_from(["kmap", "-vv", "minterms", "0,1,5", "--vars", "3"])
            .unwrap();
        assert_eq!(app.verbose, 2);
        match app.command {
            KMapCommand::Minterms {
                minterms,
                variable_count,
                groups,
            } => {
                assert_eq!(minterms, [0, 1, 5]);
                assert_eq!(variable_count, 3);
                assert!(!groups);
            }
            other => panic!("expected minterms, got {:?}", other),
        }
    }
}
