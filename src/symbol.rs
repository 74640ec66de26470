// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

use std::fmt;

/// Token that marks an empty production.
pub const EPSILON: &str = "epsilon";
/// Token that marks the end of input in FOLLOW sets.
pub const END_OF_INPUT: &str = "$";

/// A grammar symbol, classified once when the grammar is loaded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Terminal(String),
    NonTerminal(String),
    Epsilon,
    EndOfInput,
}

impl Symbol {
    /// Classifies a token by the usual textbook convention.
    ///
    /// `epsilon` and `$` are the two reserved tokens. Any other token that
    /// has no uppercase letters in it is a terminal, so `id`, `+` and `(`
    /// are terminals, while `E` and `E'` are non-terminals.
    pub fn classify(token: &str) -> Self {
        match token {
            EPSILON => Symbol::Epsilon,
            END_OF_INPUT => Symbol::EndOfInput,
            _ if token.to_lowercase() == token => Symbol::Terminal(token.to_string()),
            _ => Symbol::NonTerminal(token.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    /// The token as it would be written in a grammar.
    pub fn as_str(&self) -> &str {
        match self {
            Symbol::Terminal(text) | Symbol::NonTerminal(text) => text,
            Symbol::Epsilon => EPSILON,
            Symbol::EndOfInput => END_OF_INPUT,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
