//! Bit-set membership over a contiguous code-point range

/// A class of characters (for example "vowels") stored as a bit pattern over
/// `[min, max]`. Bit `n` of the pattern is set when `min + n` is a member.
///
/// Sets are declared as `static` items next to the rule program that uses them
/// and are read-only afterwards, so they can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingSet {
    bits: &'static [u8],
    min: u32,
    max: u32,
}

impl GroupingSet {
    pub const fn new(bits: &'static [u8], min: char, max: char) -> Self {
        GroupingSet {
            bits,
            min: min as u32,
            max: max as u32,
        }
    }

    /// O(1) membership test. Characters outside `[min, max]` are never members.
    pub fn contains(&self, ch: char) -> bool {
        let code = ch as u32;
        if code < self.min || code > self.max {
            return false;
        }
        let offset = (code - self.min) as usize;
        self.bits
            .get(offset >> 3)
            .is_some_and(|byte| byte & (1 << (offset & 0x7)) != 0)
    }

    pub fn min(&self) -> char {
        char::from_u32(self.min).unwrap_or(char::MAX)
    }

    pub fn max(&self) -> char {
        char::from_u32(self.max).unwrap_or(char::MAX)
    }

    /// All members in ascending order
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        (self.min..=self.max)
            .filter_map(char::from_u32)
            .filter(|ch| self.contains(*ch))
    }
}
