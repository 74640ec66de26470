// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

//! Containers for FIRST and FOLLOW sets.

use std::fmt;
use std::iter::FromIterator;
use std::slice;

use hashbrown::HashMap;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// A set of symbols that remembers insertion order.
///
/// Sets here stay small (bounded by the terminal alphabet), so membership is
/// a linear scan and iteration order is whatever order the solver found the
/// symbols in, which is the same on every run over the same grammar.
#[derive(Clone, Debug, Default)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the symbol was not already present.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.contains(&symbol) {
            false
        } else {
            self.symbols.push(symbol);
            true
        }
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn contains_epsilon(&self) -> bool {
        self.contains(&Symbol::Epsilon)
    }

    /// Adds every symbol of `other`. Returns `true` if this set grew.
    pub fn union(&mut self, other: &SymbolSet) -> bool {
        let prev_cardinality = self.len();
        for symbol in &other.symbols {
            self.insert(symbol.clone());
        }
        prev_cardinality != self.len()
    }

    /// Adds every symbol of `other` except epsilon. Returns `true` if this
    /// set grew.
    pub fn union_without_epsilon(&mut self, other: &SymbolSet) -> bool {
        let prev_cardinality = self.len();
        for symbol in &other.symbols {
            if *symbol != Symbol::Epsilon {
                self.insert(symbol.clone());
            }
        }
        prev_cardinality != self.len()
    }

    /// True if every symbol of `other` is also in `self`.
    pub fn is_superset(&self, other: &SymbolSet) -> bool {
        other.symbols.iter().all(|symbol| self.contains(symbol))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}

/// Order does not matter for equality.
impl PartialEq for SymbolSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

impl Eq for SymbolSet {}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolSet::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{ {} }}", joined)
    }
}

/// One set per non-terminal, in grammar order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerSymbolSets {
    names: Vec<String>,
    sets: Vec<SymbolSet>,
    positions: HashMap<String, usize>,
}

impl PerSymbolSets {
    /// An empty set for every non-terminal of `grammar`.
    pub fn new(grammar: &Grammar) -> Self {
        let names: Vec<String> = grammar.non_terminals().map(str::to_string).collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(pos, name)| (name.clone(), pos))
            .collect();
        PerSymbolSets {
            sets: vec![SymbolSet::new(); names.len()],
            names,
            positions,
        }
    }

    pub fn get(&self, non_terminal: &str) -> Option<&SymbolSet> {
        self.positions.get(non_terminal).map(|&pos| &self.sets[pos])
    }

    /// `(non-terminal, set)` pairs in grammar order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolSet)> {
        self.names.iter().map(String::as_str).zip(self.sets.iter())
    }

    /// True if these sets were laid out for exactly the non-terminals of
    /// `grammar`, in the same order.
    pub fn matches(&self, grammar: &Grammar) -> bool {
        self.names.iter().map(String::as_str).eq(grammar.non_terminals())
    }

    /// True if no set of `self` is missing a symbol of the same set in
    /// `earlier`.
    pub fn is_superset(&self, earlier: &PerSymbolSets) -> bool {
        earlier
            .iter()
            .all(|(name, set)| self.get(name).map_or(false, |own| own.is_superset(set)))
    }

    pub(crate) fn at(&self, pos: usize) -> &SymbolSet {
        &self.sets[pos]
    }

    pub(crate) fn at_mut(&mut self, pos: usize) -> &mut SymbolSet {
        &mut self.sets[pos]
    }
}

/// Renders `NAME: { a, b }`, one line per non-terminal.
impl fmt::Display for PerSymbolSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, set) in self.iter() {
            writeln!(f, "{}: {}", name, set)?;
        }
        Ok(())
    }
}
