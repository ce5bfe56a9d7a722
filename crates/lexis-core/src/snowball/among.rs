//! Affix tables searched by [`SnowballEnv::find_among`](super::SnowballEnv::find_among)

use std::cmp::Ordering;

use super::env::SnowballEnv;
use crate::error::{LexisError, Result};

/// A rule step or guard: runs against the buffer and the program's own state,
/// reporting whether it matched. `Err` is reserved for invariant violations.
pub type RuleFn<C> = fn(&mut SnowballEnv, &mut C) -> Result<bool>;

/// One candidate affix.
pub struct Among<C: 'static> {
    /// Literal text of the affix
    pub literal: &'static str,
    /// Index of the longest shorter entry this literal extends, or -1
    pub substring_i: i32,
    /// Outcome tag returned on a match
    pub result: i32,
    /// Extra condition checked after the literal matched
    pub guard: Option<RuleFn<C>>,
}

impl<C: 'static> Among<C> {
    pub const fn new(literal: &'static str, substring_i: i32, result: i32) -> Self {
        Among {
            literal,
            substring_i,
            result,
            guard: None,
        }
    }

    pub const fn guarded(
        literal: &'static str,
        substring_i: i32,
        result: i32,
        guard: RuleFn<C>,
    ) -> Self {
        Among {
            literal,
            substring_i,
            result,
            guard: Some(guard),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.literal.len()
    }

    pub(crate) fn byte(&self, i: usize) -> u8 {
        self.literal.as_bytes()[i]
    }

    pub(crate) fn back_link(&self) -> Option<usize> {
        usize::try_from(self.substring_i).ok()
    }
}

/// Which end of the word a table is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Prefixes, matched forward from the cursor
    Forward,
    /// Suffixes, matched backward from the cursor
    Backward,
}

/// An immutable, ordered table of affixes.
///
/// Entries must be sorted by their UTF-8 bytes (reversed bytes for backward
/// tables), and every back-link must name an earlier entry whose literal is a
/// prefix (forward) or suffix (backward) of the linking entry. [`validate`]
/// checks both; rule programs call it once before first use.
///
/// [`validate`]: AmongTable::validate
pub struct AmongTable<C: 'static> {
    name: &'static str,
    direction: Direction,
    entries: &'static [Among<C>],
}

impl<C: 'static> AmongTable<C> {
    pub const fn forward(name: &'static str, entries: &'static [Among<C>]) -> Self {
        AmongTable {
            name,
            direction: Direction::Forward,
            entries,
        }
    }

    pub const fn backward(name: &'static str, entries: &'static [Among<C>]) -> Self {
        AmongTable {
            name,
            direction: Direction::Backward,
            entries,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entry(&self, i: usize) -> &Among<C> {
        &self.entries[i]
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.direction {
            Direction::Forward => a.as_bytes().cmp(b.as_bytes()),
            Direction::Backward => a.bytes().rev().cmp(b.bytes().rev()),
        }
    }

    fn extends(&self, literal: &str, base: &str) -> bool {
        match self.direction {
            Direction::Forward => literal.starts_with(base),
            Direction::Backward => literal.ends_with(base),
        }
    }

    /// Check ordering and back-link structure.
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                let previous = self.entries[index - 1].literal;
                if self.compare(previous, entry.literal) != Ordering::Less {
                    return Err(LexisError::UnsortedAmongTable {
                        table: self.name.to_string(),
                        index,
                    });
                }
            }

            if entry.substring_i < -1 {
                return Err(self.broken_chain(index));
            }
            if let Some(link) = entry.back_link() {
                // Links pointing backwards guarantee every chain terminates.
                if link >= index || !self.extends(entry.literal, self.entries[link].literal) {
                    return Err(self.broken_chain(index));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn broken_chain(&self, index: usize) -> LexisError {
        LexisError::BrokenAmongChain {
            table: self.name.to_string(),
            index,
        }
    }
}

impl<C: 'static> std::fmt::Debug for AmongTable<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmongTable")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SUFFIXES: [Among<()>; 4] = [
        Among::new("n", -1, 1),
        Among::new("an", 0, 2),
        Among::new("ban", 1, 3),
        Among::new("en", 0, 4),
    ];

    #[test]
    fn test_valid_backward_table() {
        let table = AmongTable::backward("suffixes", &SUFFIXES);
        assert!(table.validate().is_ok());
        assert_eq!(table.len(), 4);
        assert_eq!(table.direction(), Direction::Backward);
    }

    #[test]
    fn test_backward_table_rejects_forward_order() {
        static WRONG: [Among<()>; 2] = [Among::new("ab", -1, 1), Among::new("ba", -1, 2)];
        let err = AmongTable::backward("wrong", &WRONG).validate().unwrap_err();
        assert!(matches!(
            err,
            LexisError::UnsortedAmongTable { index: 1, .. }
        ));
        assert!(AmongTable::forward("wrong", &WRONG).validate().is_ok());
    }

    #[test]
    fn test_forward_link_is_broken_chain() {
        static LOOPING: [Among<()>; 2] = [Among::new("a", 1, 1), Among::new("b", -1, 2)];
        let err = AmongTable::forward("looping", &LOOPING)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LexisError::BrokenAmongChain { index: 0, .. }));
    }

    #[test]
    fn test_link_to_non_suffix_is_broken_chain() {
        static MISLINKED: [Among<()>; 2] = [Among::new("k", -1, 1), Among::new("an", 0, 2)];
        let err = AmongTable::backward("mislinked", &MISLINKED)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LexisError::BrokenAmongChain { index: 1, .. }));
    }
}
