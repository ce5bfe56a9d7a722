//! Snowball-style stemming automaton
//!
//! [`SnowballEnv`] holds one word and the cursors rule programs move over it.
//! Programs are `static` [`RuleProgram`] values built from [`AmongTable`]s and
//! [`GroupingSet`]s; [`hungarian`] is the bundled example.

pub mod among;
pub mod env;
pub mod grouping;
pub mod hungarian;
pub mod program;

pub use among::{Among, AmongTable, Direction, RuleFn};
pub use env::SnowballEnv;
pub use grouping::GroupingSet;
pub use program::{Action, Outcome, RegionFn, Rule, RuleProgram, Step, SuffixRule};
