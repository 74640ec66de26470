// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

use std::error;
use std::fmt;

/// Configuration errors found while loading a grammar, or when solver
/// inputs do not belong together.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The builder finished without a single rule.
    NoRules,
    /// The designated start symbol has no rule.
    UndefinedStartSymbol(String),
    /// A production references a non-terminal that has no rule.
    UndefinedNonTerminal { lhs: String, symbol: String },
    /// A rule key that is not a non-terminal, e.g. `a` or `$`.
    InvalidLhs(String),
    /// A production without any symbols.
    EmptyProduction(String),
    /// `epsilon` next to other symbols in one production.
    MisplacedEpsilon(String),
    /// `$` inside a production.
    EndOfInputInProduction(String),
    /// A symbol string names a non-terminal the sets know nothing about.
    UnknownNonTerminal(String),
    /// Sets built for one grammar were handed a different one.
    GrammarMismatch,
    /// FOLLOW sets were asked for before FIRST sets reached their fixed
    /// point.
    FirstSetsNotConverged,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoRules => write!(f, "grammar has no rules"),
            Error::UndefinedStartSymbol(start) => {
                write!(f, "start symbol '{}' has no productions", start)
            }
            Error::UndefinedNonTerminal { lhs, symbol } => write!(
                f,
                "a production of '{}' references undefined non-terminal '{}'",
                lhs, symbol
            ),
            Error::InvalidLhs(name) => {
                write!(f, "'{}' cannot be the left hand side of a rule", name)
            }
            Error::EmptyProduction(lhs) => write!(
                f,
                "'{}' has an empty production, use 'epsilon' instead",
                lhs
            ),
            Error::MisplacedEpsilon(lhs) => write!(
                f,
                "a production of '{}' mixes 'epsilon' with other symbols",
                lhs
            ),
            Error::EndOfInputInProduction(lhs) => {
                write!(f, "a production of '{}' contains '$'", lhs)
            }
            Error::UnknownNonTerminal(name) => {
                write!(f, "'{}' is not a non-terminal of this grammar", name)
            }
            Error::GrammarMismatch => {
                write!(f, "sets were built for a different grammar")
            }
            Error::FirstSetsNotConverged => {
                write!(f, "FOLLOW sets need converged FIRST sets")
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
