use crate::types::{TokenRef, Word, WordFrequency};
use std::collections::HashMap;

/// An ordered mapping of distinct words to their occurrence counts.
///
/// Iteration follows first-seen insertion order until `sort_by_count` is called,
/// after which it follows count order. Ties keep their previous relative order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyMap {
    entries: Vec<(Word, WordFrequency)>,
    index: HashMap<Word, usize>,
}

impl WordFrequencyMap {
    pub fn new() -> Self {
        WordFrequencyMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds one occurrence of `word`, inserting it with a count of 1 if unseen.
    pub fn increment(&mut self, word: &TokenRef) {
        if let Some(&position) = self.index.get(word) {
            self.entries[position].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1));
        }
    }

    /// Sets the count for `word`. An existing word keeps its position.
    pub fn insert(&mut self, word: &TokenRef, frequency: WordFrequency) {
        if let Some(&position) = self.index.get(word) {
            self.entries[position].1 = frequency;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), frequency));
        }
    }

    pub fn get(&self, word: &TokenRef) -> Option<WordFrequency> {
        self.index
            .get(word)
            .map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of tokens that were counted.
    pub fn total_count(&self) -> WordFrequency {
        self.entries.iter().map(|(_, frequency)| frequency).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenRef, WordFrequency)> {
        self.entries
            .iter()
            .map(|(word, frequency)| (word.as_str(), *frequency))
    }

    /// Reorders the entries by count (stable), ascending unless `descending` is set.
    pub fn sort_by_count(&mut self, descending: bool) {
        if descending {
            self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        } else {
            self.entries.sort_by(|a, b| a.1.cmp(&b.1));
        }

        for (position, (word, _)) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(word) {
                *slot = position;
            }
        }
    }

    pub fn into_vec(self) -> Vec<(Word, WordFrequency)> {
        self.entries
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl PartialEq for WordFrequencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for WordFrequencyMap {}

impl<W: AsRef<str>> FromIterator<(W, WordFrequency)> for WordFrequencyMap {
    fn from_iter<I: IntoIterator<Item = (W, WordFrequency)>>(iter: I) -> Self {
        let mut word_frequency_map = WordFrequencyMap::new();
        for (word, frequency) in iter {
            word_frequency_map.insert(word.as_ref(), frequency);
        }
        word_frequency_map
    }
}
