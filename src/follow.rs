// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

//! FOLLOW sets.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::first::FirstSets;
use crate::grammar::Grammar;
use crate::sets::{PerSymbolSets, SymbolSet};
use crate::symbol::Symbol;

/// FOLLOW sets of every non-terminal.
#[derive(Clone, Debug)]
pub struct FollowSets {
    map: PerSymbolSets,
    passes: usize,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar. `first_sets` must be the
    /// converged FIRST sets of the same grammar.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Result<Self> {
        check_first_sets(grammar, first_sets)?;
        let mut this = FollowSets::empty(grammar);
        let max_passes = grammar.max_passes();
        while this.pass(grammar, first_sets)? {
            debug_assert!(
                this.passes <= max_passes,
                "FOLLOW sets still growing after {} passes",
                this.passes
            );
        }
        debug!("FOLLOW sets converged after {} passes", this.passes);
        Ok(this)
    }

    /// The initial state: empty sets, except `$` for the start symbol.
    pub fn empty(grammar: &Grammar) -> Self {
        let mut map = PerSymbolSets::new(grammar);
        if let Some(pos) = grammar.position(grammar.start()) {
            map.at_mut(pos).insert(Symbol::EndOfInput);
        }
        FollowSets { map, passes: 0 }
    }

    /// One pass over every production of every non-terminal. Returns `true`
    /// if any set grew. Both `grammar` and `first_sets` must match what
    /// these sets were made for, and `first_sets` must have converged.
    ///
    /// Each production is read right to left while carrying the set of
    /// symbols that can follow the current position. It starts as
    /// FOLLOW of the left hand side, is replaced by a terminal, and absorbs
    /// FIRST of every non-terminal passed, being reset first unless that
    /// non-terminal is nullable.
    pub fn sweep(&mut self, grammar: &Grammar, first_sets: &FirstSets) -> Result<bool> {
        if !self.map.matches(grammar) {
            return Err(Error::GrammarMismatch);
        }
        check_first_sets(grammar, first_sets)?;
        self.pass(grammar, first_sets)
    }

    fn pass(&mut self, grammar: &Grammar, first_sets: &FirstSets) -> Result<bool> {
        let mut changed = false;
        for (pos, rule) in grammar.rules().enumerate() {
            for production in rule.productions() {
                let mut trailer = self.map.at(pos).clone();

                for symbol in production.iter().rev() {
                    match symbol {
                        Symbol::Terminal(_) => {
                            trailer.clear();
                            trailer.insert(symbol.clone());
                        }
                        Symbol::NonTerminal(name) => {
                            let followed = grammar
                                .position(name)
                                .ok_or_else(|| Error::UnknownNonTerminal(name.clone()))?;
                            if self.map.at_mut(followed).union(&trailer) {
                                trace!("FOLLOW({}) = {}", name, self.map.at(followed));
                                changed = true;
                            }
                            let first_set = first_sets
                                .get(name)
                                .ok_or_else(|| Error::UnknownNonTerminal(name.clone()))?;
                            absorb_first(&mut trailer, first_set);
                        }
                        Symbol::Epsilon | Symbol::EndOfInput => (),
                    }
                }
            }
        }
        self.passes += 1;
        Ok(changed)
    }

    pub fn get(&self, non_terminal: &str) -> Option<&SymbolSet> {
        self.map.get(non_terminal)
    }

    /// Returns a reference to FOLLOW sets.
    pub fn sets(&self) -> &PerSymbolSets {
        &self.map
    }

    pub fn passes(&self) -> usize {
        self.passes
    }
}

fn check_first_sets(grammar: &Grammar, first_sets: &FirstSets) -> Result<()> {
    if !first_sets.sets().matches(grammar) {
        return Err(Error::GrammarMismatch);
    }
    if !first_sets.is_converged() {
        return Err(Error::FirstSetsNotConverged);
    }
    Ok(())
}

fn absorb_first(trailer: &mut SymbolSet, first_set: &SymbolSet) {
    if !first_set.contains_epsilon() {
        trailer.clear();
    }
    trailer.union_without_epsilon(first_set);
}
