// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

//! FIRST sets.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::sets::{PerSymbolSets, SymbolSet};
use crate::symbol::Symbol;

/// FIRST sets of every non-terminal.
#[derive(Clone, Debug)]
pub struct FirstSets {
    map: PerSymbolSets,
    passes: usize,
    converged: bool,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// FIRST(N) holds every terminal that can begin a string derived from
    /// N, plus epsilon iff N can derive the empty string. Sets start empty
    /// and only grow; the loop stops after the first pass in which no set
    /// grew.
    pub fn new(grammar: &Grammar) -> Result<Self> {
        let mut this = FirstSets::empty(grammar);
        let max_passes = grammar.max_passes();
        while this.pass(grammar)? {
            debug_assert!(
                this.passes <= max_passes,
                "FIRST sets still growing after {} passes",
                this.passes
            );
        }
        debug!("FIRST sets converged after {} passes", this.passes);
        Ok(this)
    }

    /// The initial state: an empty set for every non-terminal.
    pub fn empty(grammar: &Grammar) -> Self {
        FirstSets {
            map: PerSymbolSets::new(grammar),
            passes: 0,
            converged: false,
        }
    }

    /// One pass over every production of every non-terminal. Returns `true`
    /// if any set grew. `grammar` must be the one these sets were made for.
    pub fn sweep(&mut self, grammar: &Grammar) -> Result<bool> {
        if !self.map.matches(grammar) {
            return Err(Error::GrammarMismatch);
        }
        self.pass(grammar)
    }

    fn pass(&mut self, grammar: &Grammar) -> Result<bool> {
        let mut changed = false;
        for (pos, rule) in grammar.rules().enumerate() {
            for production in rule.productions() {
                let lookahead = self.first_of(production)?;
                if self.map.at_mut(pos).union(&lookahead) {
                    trace!("FIRST({}) = {}", rule.lhs(), self.map.at(pos));
                    changed = true;
                }
            }
        }
        self.passes += 1;
        self.converged = !changed;
        Ok(changed)
    }

    /// FIRST set of a string of symbols.
    ///
    /// Scans left to right. A terminal ends the scan; a non-terminal
    /// contributes its FIRST set without epsilon and ends the scan unless
    /// it is nullable. Epsilon is in the result only when every symbol can
    /// vanish, which includes the empty string and the lone epsilon
    /// production.
    pub fn first_of(&self, symbols: &[Symbol]) -> Result<SymbolSet> {
        let mut result = SymbolSet::new();
        for symbol in symbols {
            match symbol {
                Symbol::Terminal(_) | Symbol::EndOfInput => {
                    result.insert(symbol.clone());
                    return Ok(result);
                }
                Symbol::Epsilon => (),
                Symbol::NonTerminal(name) => {
                    let set = self
                        .map
                        .get(name)
                        .ok_or_else(|| Error::UnknownNonTerminal(name.clone()))?;
                    result.union_without_epsilon(set);
                    if !set.contains_epsilon() {
                        return Ok(result);
                    }
                }
            }
        }
        result.insert(Symbol::Epsilon);
        Ok(result)
    }

    pub fn get(&self, non_terminal: &str) -> Option<&SymbolSet> {
        self.map.get(non_terminal)
    }

    /// Whether the non-terminal derives the empty string.
    pub fn is_nullable(&self, non_terminal: &str) -> bool {
        self.get(non_terminal)
            .map_or(false, SymbolSet::contains_epsilon)
    }

    /// Returns a reference to FIRST sets.
    pub fn sets(&self) -> &PerSymbolSets {
        &self.map
    }

    /// Passes run so far, including the final one that changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// True once a pass has finished without growing any set.
    pub fn is_converged(&self) -> bool {
        self.converged
    }
}
