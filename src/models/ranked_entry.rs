use crate::types::{Rank, Word, WordFrequency};

/// A word selected by the competition ranker, with its count and shared rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: Word,
    pub frequency: WordFrequency,
    pub rank: Rank,
}

impl RankedEntry {
    pub fn new(word: &str, frequency: WordFrequency, rank: Rank) -> Self {
        RankedEntry {
            word: word.to_string(),
            frequency,
            rank,
        }
    }

    /// The `(word, count)` pair, without the rank.
    pub fn as_pair(&self) -> (&str, WordFrequency) {
        (&self.word, self.frequency)
    }
}
