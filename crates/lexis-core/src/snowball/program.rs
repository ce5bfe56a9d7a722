//! Declarative rule programs
//!
//! A [`RuleProgram`] is a `static` description of a stemmer: a forward pass that
//! computes region boundaries, followed by an ordered list of backward steps. Most
//! steps are plain "find a suffix, check the region, act on the outcome tag" rules
//! and are expressed as data ([`SuffixRule`]); anything more unusual can drop down to
//! a hand-written [`RuleFn`].

use tracing::trace;

use super::among::{AmongTable, RuleFn};
use super::env::SnowballEnv;
use crate::error::Result;

/// Region predicate evaluated with the cursor at the start of the matched suffix.
pub type RegionFn<C> = fn(&SnowballEnv, &C) -> bool;

/// What a suffix step does once its suffix matched inside the region.
pub enum Action<C: 'static> {
    /// Delete the suffix
    Delete,
    /// Replace the suffix with a literal
    Replace(&'static str),
    /// Delete the suffix, then try a follow-up rule on what is left
    DeleteThen(&'static SuffixRule<C>),
    /// Delete the suffix, then collapse a doubled consonant that now ends the word.
    /// Does nothing unless the text before the suffix ends in a doubled consonant.
    Undouble,
    /// Hand off to custom code
    Call(RuleFn<C>),
}

/// Mapping from a table's outcome tags to actions.
pub enum Outcome<C: 'static> {
    /// Every tag gets the same action
    Always(Action<C>),
    /// `actions[tag - 1]`; tags past the end match without changing the word
    ByTag(&'static [Action<C>]),
}

impl<C: 'static> Outcome<C> {
    fn action(&self, tag: i32) -> Option<&Action<C>> {
        match self {
            Outcome::Always(action) => Some(action),
            Outcome::ByTag(actions) => usize::try_from(tag - 1)
                .ok()
                .and_then(|index| actions.get(index)),
        }
    }
}

/// Find the longest suffix from `table`, require it to start inside `region`,
/// then apply the action its tag selects.
pub struct SuffixRule<C: 'static> {
    pub table: &'static AmongTable<C>,
    pub region: RegionFn<C>,
    pub outcome: Outcome<C>,
}

pub enum Rule<C: 'static> {
    Suffix(SuffixRule<C>),
    Custom(RuleFn<C>),
}

/// One named backward step.
pub struct Step<C: 'static> {
    pub name: &'static str,
    pub rule: Rule<C>,
}

/// A complete stemmer expressed as data.
///
/// `C` is the program's per-word state (region boundaries and the like). It is
/// created fresh for every word, which keeps the program itself immutable and
/// shareable.
pub struct RuleProgram<C: 'static> {
    pub name: &'static str,
    /// Forward pass run first; its result is ignored but its state changes stick
    pub mark_regions: RuleFn<C>,
    /// Table of doubled consonants used by [`Action::Undouble`]
    pub doubles: Option<&'static AmongTable<C>>,
    /// Every table the program uses, for [`validate`](Self::validate)
    pub tables: &'static [&'static AmongTable<C>],
    /// Backward steps in execution order
    pub steps: &'static [Step<C>],
}

impl<C: 'static> RuleProgram<C> {
    /// Check every table's ordering and back-links.
    pub fn validate(&self) -> Result<()> {
        self.tables.iter().try_for_each(|table| table.validate())
    }

    /// Run only the region pass, leaving the cursor where it was. Returns whether
    /// a region was found; `ctx` holds the boundaries either way.
    pub fn mark(&self, env: &mut SnowballEnv, ctx: &mut C) -> Result<bool> {
        let start = env.cursor();
        let found = (self.mark_regions)(env, ctx)?;
        env.set_cursor(start);
        Ok(found)
    }

    /// Run the program on the word loaded in `env`.
    ///
    /// Every step sees the word as left by the steps before it; a step that fails
    /// to match leaves the word untouched and the next step starts from the end of
    /// the word again. Only invariant violations produce `Err`.
    pub fn run(&self, env: &mut SnowballEnv, ctx: &mut C) -> Result<()> {
        self.mark(env, ctx)?;

        env.begin_backward();
        for step in self.steps {
            let saved = env.offset_from_limit();
            let matched = match &step.rule {
                Rule::Suffix(rule) => self.apply_suffix(rule, env, ctx)?,
                Rule::Custom(rule) => rule(env, ctx)?,
            };
            trace!(
                program = self.name,
                step = step.name,
                matched,
                word = env.current(),
                "rule step"
            );
            env.restore_from_limit(saved);
        }
        env.set_cursor(env.limit_backward());
        Ok(())
    }

    fn apply_suffix(
        &self,
        rule: &SuffixRule<C>,
        env: &mut SnowballEnv,
        ctx: &mut C,
    ) -> Result<bool> {
        env.mark_ket();
        let tag = env.find_among_b(rule.table, ctx)?;
        if tag == 0 {
            return Ok(false);
        }
        env.mark_bra();
        if !(rule.region)(env, ctx) {
            return Ok(false);
        }
        match rule.outcome.action(tag) {
            Some(action) => self.apply_action(action, env, ctx),
            None => Ok(true),
        }
    }

    fn apply_action(
        &self,
        action: &Action<C>,
        env: &mut SnowballEnv,
        ctx: &mut C,
    ) -> Result<bool> {
        match action {
            Action::Delete => {
                env.slice_del()?;
                Ok(true)
            }
            Action::Replace(s) => {
                env.slice_from(s)?;
                Ok(true)
            }
            Action::DeleteThen(next) => {
                env.slice_del()?;
                let saved = env.offset_from_limit();
                self.apply_suffix(next, env, ctx)?;
                env.restore_from_limit(saved);
                Ok(true)
            }
            Action::Undouble => {
                if !self.double(env, ctx)? {
                    return Ok(false);
                }
                env.slice_del()?;
                self.undouble(env)
            }
            Action::Call(rule) => rule(env, ctx),
        }
    }

    /// Test whether the text before the cursor ends in a doubled consonant,
    /// leaving the cursor where it was.
    fn double(&self, env: &mut SnowballEnv, ctx: &mut C) -> Result<bool> {
        let Some(doubles) = self.doubles else {
            return Ok(false);
        };
        let saved = env.offset_from_limit();
        if env.find_among_b(doubles, ctx)? == 0 {
            return Ok(false);
        }
        env.restore_from_limit(saved);
        Ok(true)
    }

    /// Drop one character of the doubled consonant before the cursor.
    fn undouble(&self, env: &mut SnowballEnv) -> Result<bool> {
        if !env.prev() {
            return Ok(false);
        }
        env.mark_ket();
        if !env.hop_back(1) {
            return Ok(false);
        }
        env.mark_bra();
        env.slice_del()?;
        Ok(true)
    }
}

impl<C: 'static> std::fmt::Debug for RuleProgram<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleProgram")
            .field("name", &self.name)
            .field("tables", &self.tables.len())
            .field(
                "steps",
                &self.steps.iter().map(|step| step.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
