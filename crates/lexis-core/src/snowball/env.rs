//! The word buffer and the scan primitives rule programs are built from
//!
//! The buffer holds one word as UTF-8. Every cursor is a byte offset that sits on a
//! character boundary; the primitives only ever move by whole characters or by whole
//! literals, so that property holds for any rule program built on this API.
//!
//! Cursor layout: `limit_backward <= bra <= ket <= limit <= current.len()`, and while a
//! rule runs, `limit_backward <= cursor <= limit`.

use tracing::trace;

use super::among::AmongTable;
use super::grouping::GroupingSet;
use crate::error::{LexisError, Result};

#[derive(Debug, Clone)]
pub struct SnowballEnv {
    current: String,
    cursor: usize,
    limit: usize,
    limit_backward: usize,
    bra: usize,
    ket: usize,
}

impl Default for SnowballEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowballEnv {
    pub fn new() -> Self {
        SnowballEnv {
            current: String::with_capacity(8),
            cursor: 0,
            limit: 0,
            limit_backward: 0,
            bra: 0,
            ket: 0,
        }
    }

    /// Load a word, reusing the existing allocation, and reset all cursors.
    pub fn set_current(&mut self, word: &str) {
        self.current.clear();
        self.current.push_str(word);
        self.cursor = 0;
        self.limit = word.len();
        self.limit_backward = 0;
        self.bra = 0;
        self.ket = self.limit;
    }

    /// The valid content, `[0, limit)`.
    pub fn current(&self) -> &str {
        &self.current[..self.limit]
    }

    /// Owned copy of the valid content.
    pub fn assign_to(&self) -> String {
        self.current().to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn limit_backward(&self) -> usize {
        self.limit_backward
    }

    pub fn bra(&self) -> usize {
        self.bra
    }

    pub fn ket(&self) -> usize {
        self.ket
    }

    /// Restore a previously saved cursor position.
    pub fn set_cursor(&mut self, cursor: usize) {
        debug_assert!(cursor <= self.limit, "cursor {cursor} past limit {}", self.limit);
        self.cursor = cursor.min(self.limit);
    }

    /// Distance from the cursor to `limit`. Backward rules save this rather than
    /// the cursor itself because deletions move `limit`.
    pub fn offset_from_limit(&self) -> usize {
        self.limit - self.cursor
    }

    pub fn restore_from_limit(&mut self, offset: usize) {
        self.cursor = self.limit.saturating_sub(offset).max(self.limit_backward);
    }

    /// Switch to backward scanning: everything before the cursor becomes off limits
    /// and scanning starts from the end of the word.
    pub fn begin_backward(&mut self) {
        self.limit_backward = self.cursor;
        self.cursor = self.limit;
    }

    /// `[`: the replaced slice starts at the cursor
    pub fn mark_bra(&mut self) {
        self.bra = self.cursor;
    }

    /// `]`: the replaced slice ends at the cursor
    pub fn mark_ket(&mut self) {
        self.ket = self.cursor;
    }

    fn char_at_cursor(&self) -> Option<char> {
        self.current[self.cursor..self.limit].chars().next()
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.current[self.limit_backward..self.cursor]
            .chars()
            .next_back()
    }

    /// Step forward over one character.
    pub fn next(&mut self) -> bool {
        match self.char_at_cursor() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Step backward over one character.
    pub fn prev(&mut self) -> bool {
        match self.char_before_cursor() {
            Some(ch) => {
                self.cursor -= ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Move forward `n` characters, or not at all if fewer remain.
    pub fn hop(&mut self, n: usize) -> bool {
        let start = self.cursor;
        for _ in 0..n {
            if !self.next() {
                self.cursor = start;
                return false;
            }
        }
        true
    }

    /// Move backward `n` characters, or not at all if fewer remain.
    pub fn hop_back(&mut self, n: usize) -> bool {
        let start = self.cursor;
        for _ in 0..n {
            if !self.prev() {
                self.cursor = start;
                return false;
            }
        }
        true
    }

    pub fn in_grouping(&mut self, set: &GroupingSet) -> bool {
        self.step_forward_if(|ch| set.contains(ch))
    }

    pub fn out_grouping(&mut self, set: &GroupingSet) -> bool {
        self.step_forward_if(|ch| !set.contains(ch))
    }

    pub fn in_grouping_b(&mut self, set: &GroupingSet) -> bool {
        self.step_backward_if(|ch| set.contains(ch))
    }

    pub fn out_grouping_b(&mut self, set: &GroupingSet) -> bool {
        self.step_backward_if(|ch| !set.contains(ch))
    }

    pub fn in_range(&mut self, min: char, max: char) -> bool {
        self.step_forward_if(|ch| (min..=max).contains(&ch))
    }

    pub fn out_range(&mut self, min: char, max: char) -> bool {
        self.step_forward_if(|ch| !(min..=max).contains(&ch))
    }

    pub fn in_range_b(&mut self, min: char, max: char) -> bool {
        self.step_backward_if(|ch| (min..=max).contains(&ch))
    }

    pub fn out_range_b(&mut self, min: char, max: char) -> bool {
        self.step_backward_if(|ch| !(min..=max).contains(&ch))
    }

    fn step_forward_if(&mut self, test: impl Fn(char) -> bool) -> bool {
        match self.char_at_cursor() {
            Some(ch) if test(ch) => {
                self.cursor += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn step_backward_if(&mut self, test: impl Fn(char) -> bool) -> bool {
        match self.char_before_cursor() {
            Some(ch) if test(ch) => {
                self.cursor -= ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Match `s` at the cursor, consuming it on success.
    pub fn eq_s(&mut self, s: &str) -> bool {
        if self.current.as_bytes()[self.cursor..self.limit].starts_with(s.as_bytes()) {
            self.cursor += s.len();
            true
        } else {
            false
        }
    }

    /// Match `s` ending at the cursor, consuming it on success.
    pub fn eq_s_b(&mut self, s: &str) -> bool {
        if self.current.as_bytes()[self.limit_backward..self.cursor].ends_with(s.as_bytes()) {
            self.cursor -= s.len();
            true
        } else {
            false
        }
    }

    /// Find the longest entry of `table` that matches at the cursor.
    ///
    /// Binary search over the sorted table. `common_i`/`common_j` hold how many bytes
    /// are already known to match at the low and high bounds, so no byte is compared
    /// more than a bounded number of times over the whole search. Once the literal of
    /// the surviving entry is confirmed, its guard (if any) runs with the cursor just
    /// past the literal; a failing guard falls back along the entry's back-link.
    ///
    /// Returns the entry's outcome tag with the cursor past the literal, or 0 with the
    /// cursor where it started.
    pub fn find_among<C: 'static>(&mut self, table: &AmongTable<C>, ctx: &mut C) -> Result<i32> {
        if table.is_empty() {
            return Ok(0);
        }
        let bytes = self.current.as_bytes();
        let c = self.cursor;
        let l = self.limit;

        let mut i = 0;
        let mut j = table.len();
        let mut common_i = 0;
        let mut common_j = 0;
        let mut first_key_inspected = false;

        loop {
            let k = i + ((j - i) >> 1);
            let w = table.entry(k);
            let mut diff: i32 = 0;
            let mut common = common_i.min(common_j);
            while common < w.len() {
                if c + common == l {
                    diff = -1;
                    break;
                }
                diff = i32::from(bytes[c + common]) - i32::from(w.byte(common));
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                // Go round once more so the first entry gets compared too.
                first_key_inspected = true;
            }
        }

        loop {
            let w = table.entry(i);
            if common_i >= w.len() {
                self.cursor = c + w.len();
                let Some(guard) = w.guard else {
                    return Ok(w.result);
                };
                let accepted = guard(self, ctx)?;
                self.cursor = c + w.len();
                if accepted {
                    return Ok(w.result);
                }
                trace!(table = table.name(), entry = w.literal, "among guard rejected");
            }
            // Links only ever point to earlier entries, which bounds the walk.
            i = match w.back_link() {
                Some(link) if link < i => link,
                Some(_) => {
                    self.cursor = c;
                    return Err(table.broken_chain(i));
                }
                None => {
                    self.cursor = c;
                    return Ok(0);
                }
            };
        }
    }

    /// Backward counterpart of [`find_among`](Self::find_among): matches suffixes
    /// ending at the cursor and leaves the cursor before the matched literal.
    pub fn find_among_b<C: 'static>(&mut self, table: &AmongTable<C>, ctx: &mut C) -> Result<i32> {
        if table.is_empty() {
            return Ok(0);
        }
        let bytes = self.current.as_bytes();
        let c = self.cursor;
        let lb = self.limit_backward;

        let mut i = 0;
        let mut j = table.len();
        let mut common_i = 0;
        let mut common_j = 0;
        let mut first_key_inspected = false;

        loop {
            let k = i + ((j - i) >> 1);
            let w = table.entry(k);
            let mut diff: i32 = 0;
            let mut common = common_i.min(common_j);
            while common < w.len() {
                if c - common == lb {
                    diff = -1;
                    break;
                }
                diff = i32::from(bytes[c - 1 - common]) - i32::from(w.byte(w.len() - 1 - common));
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                first_key_inspected = true;
            }
        }

        loop {
            let w = table.entry(i);
            if common_i >= w.len() {
                self.cursor = c - w.len();
                let Some(guard) = w.guard else {
                    return Ok(w.result);
                };
                let accepted = guard(self, ctx)?;
                self.cursor = c - w.len();
                if accepted {
                    return Ok(w.result);
                }
                trace!(table = table.name(), entry = w.literal, "among guard rejected");
            }
            // Links only ever point to earlier entries, which bounds the walk.
            i = match w.back_link() {
                Some(link) if link < i => link,
                Some(_) => {
                    self.cursor = c;
                    return Err(table.broken_chain(i));
                }
                None => {
                    self.cursor = c;
                    return Ok(0);
                }
            };
        }
    }

    /// Replace `[c_bra, c_ket)` with `s`, returning the change in length.
    ///
    /// `limit` follows the edit; a cursor at or past `c_ket` shifts with the text
    /// after it and a cursor inside the replaced range is pulled back to `c_bra`.
    pub fn replace_s(&mut self, c_bra: usize, c_ket: usize, s: &str) -> Result<isize> {
        if c_bra > c_ket
            || c_ket > self.limit
            || !self.current.is_char_boundary(c_bra)
            || !self.current.is_char_boundary(c_ket)
        {
            return Err(LexisError::FaultySlice {
                bra: c_bra,
                ket: c_ket,
                limit: self.limit,
            });
        }

        let adjustment = s.len() as isize - (c_ket - c_bra) as isize;
        self.current.replace_range(c_bra..c_ket, s);
        self.limit = self.limit.saturating_add_signed(adjustment);
        if self.cursor >= c_ket {
            self.cursor = self.cursor.saturating_add_signed(adjustment);
        } else if self.cursor > c_bra {
            self.cursor = c_bra;
        }
        Ok(adjustment)
    }

    fn slice_check(&self) -> Result<()> {
        if self.bra > self.ket
            || self.ket > self.limit
            || !self.current.is_char_boundary(self.bra)
            || !self.current.is_char_boundary(self.ket)
        {
            return Err(LexisError::FaultySlice {
                bra: self.bra,
                ket: self.ket,
                limit: self.limit,
            });
        }
        Ok(())
    }

    /// Replace the marked slice `[bra, ket)` with `s`.
    pub fn slice_from(&mut self, s: &str) -> Result<()> {
        self.slice_check()?;
        self.replace_s(self.bra, self.ket, s)?;
        Ok(())
    }

    /// Delete the marked slice `[bra, ket)`.
    pub fn slice_del(&mut self) -> Result<()> {
        self.slice_from("")
    }

    /// Copy of the marked slice.
    pub fn slice_to(&self) -> Result<String> {
        self.slice_check()?;
        Ok(self.current[self.bra..self.ket].to_string())
    }

    /// Replace `[c_bra, c_ket)` with `s`, shifting `bra`/`ket` when they lie at or
    /// after the edit so the marked slice keeps pointing at the same text.
    pub fn insert(&mut self, c_bra: usize, c_ket: usize, s: &str) -> Result<()> {
        let adjustment = self.replace_s(c_bra, c_ket, s)?;
        if c_bra <= self.bra {
            self.bra = self.bra.saturating_add_signed(adjustment);
        }
        if c_bra <= self.ket {
            self.ket = self.ket.saturating_add_signed(adjustment);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snowball::among::Among;

    static VOWELS: GroupingSet = GroupingSet::new(&[17, 65, 16], 'a', 'u');

    fn env(word: &str) -> SnowballEnv {
        let mut env = SnowballEnv::new();
        env.set_current(word);
        env
    }

    #[test]
    fn test_set_current_resets_cursors() {
        let mut e = env("alma");
        e.next();
        e.set_current("körte");
        assert_eq!(e.cursor(), 0);
        assert_eq!(e.limit(), "körte".len());
        assert_eq!(e.limit_backward(), 0);
        assert_eq!(e.bra(), 0);
        assert_eq!(e.ket(), e.limit());
        assert_eq!(e.current(), "körte");
    }

    #[test]
    fn test_grouping_forward_and_backward() {
        let mut e = env("abc");
        assert!(e.in_grouping(&VOWELS));
        assert_eq!(e.cursor(), 1);
        assert!(!e.in_grouping(&VOWELS));
        assert!(e.out_grouping(&VOWELS));
        assert_eq!(e.cursor(), 2);

        e.set_cursor(e.limit());
        assert!(e.out_grouping_b(&VOWELS));
        assert!(e.out_grouping_b(&VOWELS));
        assert!(e.in_grouping_b(&VOWELS));
        assert_eq!(e.cursor(), 0);
        assert!(!e.in_grouping_b(&VOWELS));
    }

    #[test]
    fn test_grouping_outside_range_is_non_member() {
        let mut e = env("ő");
        assert!(!e.in_grouping(&VOWELS));
        assert!(e.out_grouping(&VOWELS));
        assert_eq!(e.cursor(), "ő".len());
    }

    #[test]
    fn test_ranges() {
        let mut e = env("m9");
        assert!(e.in_range('a', 'z'));
        assert!(!e.in_range('a', 'z'));
        assert!(e.out_range('a', 'z'));
        assert!(e.in_range_b('0', '9'));
        assert!(e.out_range_b('0', '9'));
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn test_eq_s_consumes_on_match_only() {
        let mut e = env("házban");
        assert!(!e.eq_s("ban"));
        assert!(e.eq_s("ház"));
        assert_eq!(e.cursor(), "ház".len());

        e.set_cursor(e.limit());
        assert!(!e.eq_s_b("ház"));
        assert!(e.eq_s_b("ban"));
        assert_eq!(e.cursor(), "ház".len());
    }

    #[test]
    fn test_hop_is_all_or_nothing() {
        let mut e = env("kéz");
        assert!(e.hop(2));
        assert_eq!(e.cursor(), "ké".len());
        assert!(!e.hop(2));
        assert_eq!(e.cursor(), "ké".len());
        assert!(e.hop_back(2));
        assert_eq!(e.cursor(), 0);
        assert!(!e.prev());
    }

    static CASES: [Among<()>; 6] = [
        Among::new("n", -1, 1),
        Among::new("an", 0, 2),
        Among::new("ban", 1, 3),
        Among::new("en", 0, 4),
        Among::new("ben", 3, 5),
        Among::new("t", -1, 6),
    ];
    static CASE_TABLE: AmongTable<()> = AmongTable::backward("cases", &CASES);

    #[test]
    fn test_find_among_b_prefers_longest_match() {
        let mut e = env("házban");
        e.set_cursor(e.limit());
        assert_eq!(e.find_among_b(&CASE_TABLE, &mut ()).unwrap(), 3);
        assert_eq!(e.cursor(), "ház".len());

        let mut e = env("ablakon");
        e.set_cursor(e.limit());
        assert_eq!(e.find_among_b(&CASE_TABLE, &mut ()).unwrap(), 1);
        assert_eq!(e.cursor(), "ablako".len());
    }

    #[test]
    fn test_find_among_b_miss_leaves_cursor() {
        let mut e = env("ház");
        e.set_cursor(e.limit());
        assert_eq!(e.find_among_b(&CASE_TABLE, &mut ()).unwrap(), 0);
        assert_eq!(e.cursor(), e.limit());
    }

    #[test]
    fn test_find_among_b_respects_limit_backward() {
        let mut e = env("ban");
        e.set_cursor(1);
        e.begin_backward();
        // Only "an" is visible.
        assert_eq!(e.find_among_b(&CASE_TABLE, &mut ()).unwrap(), 2);
        assert_eq!(e.cursor(), 1);
    }

    static DIGRAPHS: [Among<()>; 3] = [
        Among::new("cs", -1, 1),
        Among::new("dzs", -1, 2),
        Among::new("gy", -1, 3),
    ];
    static DIGRAPH_TABLE: AmongTable<()> = AmongTable::forward("digraphs", &DIGRAPHS);

    #[test]
    fn test_find_among_forward() {
        let mut e = env("dzsungel");
        assert_eq!(e.find_among(&DIGRAPH_TABLE, &mut ()).unwrap(), 2);
        assert_eq!(e.cursor(), 3);

        let mut e = env("csak");
        assert_eq!(e.find_among(&DIGRAPH_TABLE, &mut ()).unwrap(), 1);

        let mut e = env("g");
        assert_eq!(e.find_among(&DIGRAPH_TABLE, &mut ()).unwrap(), 0);
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn test_single_entry_table() {
        static ONE: [Among<()>; 1] = [Among::new("ok", -1, 9)];
        static ONE_TABLE: AmongTable<()> = AmongTable::backward("one", &ONE);
        let mut e = env("bok");
        e.set_cursor(e.limit());
        assert_eq!(e.find_among_b(&ONE_TABLE, &mut ()).unwrap(), 9);
        let mut e = env("bak");
        e.set_cursor(e.limit());
        assert_eq!(e.find_among_b(&ONE_TABLE, &mut ()).unwrap(), 0);
    }

    /// Counts guard calls and only accepts when the flag is set.
    fn accept_when_flagged(env: &mut SnowballEnv, ctx: &mut (bool, usize)) -> Result<bool> {
        ctx.1 += 1;
        // A guard that moves the cursor must not leak that move.
        env.prev();
        Ok(ctx.0)
    }

    static GUARDED: [Among<(bool, usize)>; 2] = [
        Among::new("k", -1, 1),
        Among::guarded("ek", 0, 2, accept_when_flagged),
    ];
    static GUARDED_TABLE: AmongTable<(bool, usize)> = AmongTable::backward("guarded", &GUARDED);

    #[test]
    fn test_guard_failure_falls_back_along_link() {
        let mut e = env("kertek");
        e.set_cursor(e.limit());
        let mut ctx = (false, 0);
        assert_eq!(e.find_among_b(&GUARDED_TABLE, &mut ctx).unwrap(), 1);
        assert_eq!(ctx.1, 1);
        assert_eq!(e.cursor(), "kerte".len());
    }

    #[test]
    fn test_guard_success_restores_post_match_cursor() {
        let mut e = env("kertek");
        e.set_cursor(e.limit());
        let mut ctx = (true, 0);
        assert_eq!(e.find_among_b(&GUARDED_TABLE, &mut ctx).unwrap(), 2);
        assert_eq!(e.cursor(), "kert".len());
    }

    #[test]
    fn test_guard_failure_without_fallback_rewinds() {
        static ONLY_GUARDED: [Among<(bool, usize)>; 1] =
            [Among::guarded("ek", -1, 2, accept_when_flagged)];
        static TABLE: AmongTable<(bool, usize)> = AmongTable::backward("only", &ONLY_GUARDED);
        let mut e = env("kertek");
        e.set_cursor(e.limit());
        let mut ctx = (false, 0);
        assert_eq!(e.find_among_b(&TABLE, &mut ctx).unwrap(), 0);
        assert_eq!(e.cursor(), e.limit());
    }

    fn reject(_: &mut SnowballEnv, _: &mut (bool, usize)) -> Result<bool> {
        Ok(false)
    }

    #[test]
    fn test_self_link_is_broken_chain() {
        static SELF_LINKED: [Among<(bool, usize)>; 1] = [Among::guarded("k", 0, 1, reject)];
        static TABLE: AmongTable<(bool, usize)> = AmongTable::backward("self", &SELF_LINKED);
        let mut e = env("ak");
        e.set_cursor(e.limit());
        let err = e.find_among_b(&TABLE, &mut (false, 0)).unwrap_err();
        assert!(matches!(err, LexisError::BrokenAmongChain { index: 0, .. }));
        assert_eq!(e.cursor(), e.limit());
    }

    #[test]
    fn test_out_of_range_link_is_broken_chain() {
        static DANGLING: [Among<(bool, usize)>; 1] = [Among::guarded("k", 5, 1, reject)];
        static TABLE: AmongTable<(bool, usize)> = AmongTable::backward("dangling", &DANGLING);
        let mut e = env("ak");
        e.set_cursor(e.limit());
        let err = e.find_among_b(&TABLE, &mut (false, 0)).unwrap_err();
        assert!(matches!(err, LexisError::BrokenAmongChain { index: 0, .. }));
    }

    #[test]
    fn test_forward_self_link_is_broken_chain() {
        static SELF_LINKED: [Among<(bool, usize)>; 1] = [Among::guarded("k", 0, 1, reject)];
        static TABLE: AmongTable<(bool, usize)> = AmongTable::forward("self", &SELF_LINKED);
        let mut e = env("ka");
        let err = e.find_among(&TABLE, &mut (false, 0)).unwrap_err();
        assert!(matches!(err, LexisError::BrokenAmongChain { index: 0, .. }));
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn test_slice_from_shrinks_and_grows() {
        let mut e = env("almát");
        e.set_cursor(e.limit());
        e.mark_ket();
        assert!(e.eq_s_b("át"));
        e.mark_bra();
        e.slice_from("a").unwrap();
        assert_eq!(e.current(), "alma");
        assert_eq!(e.limit(), 4);
        assert_eq!(e.cursor(), "alm".len());

        e.set_cursor(e.limit());
        e.mark_ket();
        e.prev();
        e.mark_bra();
        e.slice_from("ához").unwrap();
        assert_eq!(e.current(), "almához");
        assert_eq!(e.limit(), "almához".len());
    }

    #[test]
    fn test_cursor_after_ket_shifts() {
        let mut e = env("abcdef");
        e.set_cursor(5);
        e.replace_s(1, 3, "").unwrap();
        assert_eq!(e.current(), "adef");
        assert_eq!(e.cursor(), 3);
    }

    #[test]
    fn test_cursor_inside_slice_clamps_to_bra() {
        let mut e = env("abcdef");
        e.set_cursor(2);
        e.replace_s(1, 4, "xy").unwrap();
        assert_eq!(e.current(), "axyef");
        assert_eq!(e.cursor(), 1);
    }

    #[test]
    fn test_faulty_slice_is_error() {
        let mut e = env("abc");
        e.set_cursor(2);
        e.mark_bra();
        e.set_cursor(1);
        e.mark_ket();
        let err = e.slice_del().unwrap_err();
        assert!(matches!(
            err,
            LexisError::FaultySlice {
                bra: 2,
                ket: 1,
                limit: 3
            }
        ));
        assert_eq!(e.current(), "abc");
    }

    #[test]
    fn test_replace_inside_character_is_error() {
        let mut e = env("é");
        assert!(e.replace_s(0, 1, "e").is_err());
        assert_eq!(e.current(), "é");
    }

    #[test]
    fn test_insert_shifts_marks() {
        let mut e = env("kert");
        e.set_cursor(2);
        e.mark_bra();
        e.set_cursor(4);
        e.mark_ket();
        e.insert(0, 0, "vi").unwrap();
        assert_eq!(e.current(), "vikert");
        assert_eq!(e.slice_to().unwrap(), "rt");
        assert_eq!(e.cursor(), 6);
    }

    #[test]
    fn test_assign_to_and_slice_to() {
        let mut e = env("kertek");
        e.set_cursor(4);
        e.mark_bra();
        e.set_cursor(6);
        e.mark_ket();
        assert_eq!(e.slice_to().unwrap(), "ek");
        assert_eq!(e.assign_to(), "kertek");
    }

    #[test]
    fn test_restore_from_limit_after_deletion() {
        let mut e = env("kertek");
        e.begin_backward();
        let saved = e.offset_from_limit();
        e.replace_s(4, 6, "").unwrap();
        e.restore_from_limit(saved);
        assert_eq!(e.cursor(), e.limit());
        assert_eq!(e.current(), "kert");
    }
}
