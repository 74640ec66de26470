// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

use std::fmt;

use crate::error::Result;
use crate::first::FirstSets;
use crate::follow::FollowSets;
use crate::grammar::Grammar;

/// Which sets to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    First,
    FirstAndFollow,
}

/// Results of running the solver over one grammar.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub first: FirstSets,
    pub follow: Option<FollowSets>,
}

/// FIRST sets, then FOLLOW sets on top of them when `mode` asks for it.
pub fn analyze(grammar: &Grammar, mode: Mode) -> Result<Analysis> {
    let first = FirstSets::new(grammar)?;
    let follow = match mode {
        Mode::First => None,
        Mode::FirstAndFollow => Some(FollowSets::new(grammar, &first)?),
    };
    Ok(Analysis { first, follow })
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FIRST sets:")?;
        write!(f, "{}", self.first.sets())?;
        if let Some(follow) = &self.follow {
            writeln!(f)?;
            writeln!(f, "FOLLOW sets:")?;
            write!(f, "{}", follow.sets())?;
        }
        Ok(())
    }
}
