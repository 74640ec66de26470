// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

use std::fmt;

use hashbrown::{HashMap, HashSet};
use log::debug;

use crate::error::{Error, Result};
use crate::symbol::Symbol;

/// One right hand side of a rule.
pub type Production = Vec<Symbol>;

/// A non-terminal together with all of its productions.
#[derive(Clone, Debug)]
pub struct Rule {
    lhs: String,
    productions: Vec<Production>,
}

impl Rule {
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }
}

/// A read-only context-free grammar.
///
/// Rules keep the order in which their non-terminals were first named, so
/// every walk over the grammar, and every report built from one, comes out
/// the same way each time.
#[derive(Clone, Debug)]
pub struct Grammar {
    start: String,
    rules: Vec<Rule>,
    positions: HashMap<String, usize>,
    num_terminals: usize,
}

impl Grammar {
    /// Start describing a grammar whose start symbol is `start`.
    pub fn builder(start: &str) -> GrammarBuilder {
        GrammarBuilder::new(start)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// Non-terminal names in grammar order.
    pub fn non_terminals(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.lhs())
    }

    /// Productions of a non-terminal, `None` if it has no rule.
    pub fn productions(&self, non_terminal: &str) -> Option<&[Production]> {
        self.position(non_terminal)
            .map(|pos| self.rules[pos].productions())
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of non-terminals.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of distinct terminals used in productions.
    pub fn num_terminals(&self) -> usize {
        self.num_terminals
    }

    /// Upper bound on solver passes. Every pass but the last grows some set,
    /// and no set can hold more than the terminals plus one marker.
    pub(crate) fn max_passes(&self) -> usize {
        self.len() * (self.num_terminals + 2) + 1
    }

    /// Index of a non-terminal in grammar order.
    pub(crate) fn position(&self, non_terminal: &str) -> Option<usize> {
        self.positions.get(non_terminal).copied()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{} ->", rule.lhs)?;
            for (i, production) in rule.productions.iter().enumerate() {
                if i > 0 {
                    write!(f, " |")?;
                }
                for symbol in production {
                    write!(f, " {}", symbol)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Collects rules as plain tokens. Nothing is classified or checked until
/// [`GrammarBuilder::build`].
#[derive(Clone, Debug)]
pub struct GrammarBuilder {
    start: String,
    rules: Vec<(String, Vec<Vec<String>>)>,
}

impl GrammarBuilder {
    pub fn new(start: &str) -> Self {
        GrammarBuilder {
            start: start.to_string(),
            rules: Vec::new(),
        }
    }

    /// Select `lhs` for the following `rhs` calls. Naming a non-terminal
    /// again appends to its existing productions.
    pub fn rule(mut self, lhs: &str) -> RuleBuilder {
        let pos = match self.rules.iter().position(|(name, _)| name == lhs) {
            Some(pos) => pos,
            None => {
                self.rules.push((lhs.to_string(), Vec::new()));
                self.rules.len() - 1
            }
        };
        RuleBuilder { grammar: self, pos }
    }

    /// Classify every token and check that the grammar is closed.
    pub fn build(self) -> Result<Grammar> {
        if self.rules.is_empty() {
            return Err(Error::NoRules);
        }

        let mut positions = HashMap::with_capacity(self.rules.len());
        for (pos, (lhs, _)) in self.rules.iter().enumerate() {
            if !Symbol::classify(lhs).is_non_terminal() {
                return Err(Error::InvalidLhs(lhs.clone()));
            }
            positions.insert(lhs.clone(), pos);
        }
        if !positions.contains_key(&self.start) {
            return Err(Error::UndefinedStartSymbol(self.start));
        }

        let mut terminals = HashSet::new();
        let mut rules = Vec::with_capacity(self.rules.len());
        for (lhs, raw_productions) in self.rules {
            let mut productions = Vec::with_capacity(raw_productions.len());
            for tokens in raw_productions {
                let production: Production =
                    tokens.iter().map(|token| Symbol::classify(token)).collect();
                check_production(&lhs, &production, &positions)?;
                for symbol in &production {
                    if let Symbol::Terminal(text) = symbol {
                        terminals.insert(text.clone());
                    }
                }
                productions.push(production);
            }
            rules.push(Rule { lhs, productions });
        }

        debug!(
            "loaded grammar with {} non-terminals and {} terminals",
            rules.len(),
            terminals.len()
        );
        Ok(Grammar {
            start: self.start,
            rules,
            positions,
            num_terminals: terminals.len(),
        })
    }
}

fn check_production(
    lhs: &str,
    production: &[Symbol],
    positions: &HashMap<String, usize>,
) -> Result<()> {
    if production.is_empty() {
        return Err(Error::EmptyProduction(lhs.to_string()));
    }
    for symbol in production {
        match symbol {
            Symbol::NonTerminal(name) if !positions.contains_key(name) => {
                return Err(Error::UndefinedNonTerminal {
                    lhs: lhs.to_string(),
                    symbol: name.clone(),
                });
            }
            Symbol::Epsilon if production.len() > 1 => {
                return Err(Error::MisplacedEpsilon(lhs.to_string()));
            }
            Symbol::EndOfInput => {
                return Err(Error::EndOfInputInProduction(lhs.to_string()));
            }
            _ => (),
        }
    }
    Ok(())
}

/// Adds productions to one non-terminal of a [`GrammarBuilder`].
#[derive(Clone, Debug)]
pub struct RuleBuilder {
    grammar: GrammarBuilder,
    pos: usize,
}

impl RuleBuilder {
    /// Append a production made of `tokens`.
    pub fn rhs<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let production = tokens
            .into_iter()
            .map(|token| token.as_ref().to_string())
            .collect();
        self.grammar.rules[self.pos].1.push(production);
        self
    }

    /// Switch to another non-terminal.
    pub fn rule(self, lhs: &str) -> RuleBuilder {
        self.grammar.rule(lhs)
    }

    pub fn build(self) -> Result<Grammar> {
        self.grammar.build()
    }
}
