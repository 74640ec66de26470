//! FIRST and FOLLOW sets of context-free grammars, as used to build
//! predictive (LL) parsers.
//!
//! ```
//! use first_follow::{analyze, Grammar, Mode};
//!
//! let grammar = Grammar::builder("S")
//!     .rule("S").rhs(["A", "b"])
//!     .rule("A").rhs(["a"]).rhs(["epsilon"])
//!     .build()?;
//! let analysis = analyze(&grammar, Mode::FirstAndFollow)?;
//! assert!(analysis.first.is_nullable("A"));
//! println!("{}", analysis);
//! # Ok::<(), first_follow::Error>(())
//! ```
// This file is part of "first-follow", which is free software: you
// can redistribute it and/or modify it under the terms of the GNU General
// Public License version 3 as published by the Free Software Foundation. See
// <https://www.gnu.org/licenses/> for a copy.

mod analysis;
mod error;
pub mod first;
pub mod follow;
pub mod grammar;
pub mod sets;
pub mod symbol;

pub use crate::analysis::{analyze, Analysis, Mode};
pub use crate::error::{Error, Result};
pub use crate::first::FirstSets;
pub use crate::follow::FollowSets;
pub use crate::grammar::{Grammar, GrammarBuilder, Production};
pub use crate::sets::{PerSymbolSets, SymbolSet};
pub use crate::symbol::Symbol;
