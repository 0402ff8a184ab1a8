use std::ops::Range;

use strum::EnumIter;

/// One of the four difficulty partitions of the word bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Tier {
    /// Short everyday words, levels 1-5.
    Simple,
    /// Longer words, levels 6-10.
    Medium,
    /// Long technical words, levels 11-15.
    Complex,
    /// Whole phrases, levels 16 and up.
    Phrase,
}

/// Number of word bank slots reserved for each of the first three tiers.
const TIER_WIDTH: usize = 10;

impl Tier {
    /// The tier a given level draws its words from.
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=5 => Tier::Simple,
            6..=10 => Tier::Medium,
            11..=15 => Tier::Complex,
            _ => Tier::Phrase,
        }
    }

    /// First word bank index belonging to this tier.
    pub fn start_index(&self) -> usize {
        match self {
            Tier::Simple => 0,
            Tier::Medium => TIER_WIDTH,
            Tier::Complex => 2 * TIER_WIDTH,
            Tier::Phrase => 3 * TIER_WIDTH,
        }
    }

    /// The range of word bank indices to draw from, for a bank of
    /// `bank_len` entries.
    ///
    /// Always non-empty, and clamped so a bank smaller than the nominal
    /// tier layout never yields an out-of-range start. Callers must still
    /// clamp the drawn index to `bank_len - 1`, since a partially filled
    /// tier keeps its nominal width.
    pub fn index_range(&self, bank_len: usize) -> Range<usize> {
        let start = self.start_index();
        let width = match self {
            Tier::Phrase => bank_len.saturating_sub(start).max(1),
            _ => bank_len.saturating_sub(start).clamp(1, TIER_WIDTH),
        };
        start..start + width
    }
}
