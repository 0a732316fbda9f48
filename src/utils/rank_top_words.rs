use crate::models::{RankedEntry, WordFrequencyMap};
use crate::types::{Rank, WordFrequency};

/// Selects the top words using standard competition ("1224") ranking.
///
/// The map must already be ordered by count, most frequent first; no sorting
/// happens here. Tied words share a rank and the next distinct count skips
/// ahead by the size of the tie group. Iteration stops at the first word whose
/// rank exceeds `max_rank`.
///
/// Because the rank only advances at the start of a tie group, a group is kept
/// or dropped as a whole, so the result may hold more than `max_rank` words.
///
/// # Example
/// ```
/// use top_words::{rank_top_words, WordFrequencyMap};
///
/// let frequencies: WordFrequencyMap = [("a", 3), ("b", 3), ("c", 2), ("d", 1)]
///     .into_iter()
///     .collect();
///
/// let ranks: Vec<usize> = rank_top_words(&frequencies, 10)
///     .iter()
///     .map(|entry| entry.rank)
///     .collect();
/// assert_eq!(ranks, vec![1, 1, 3, 4]);
/// ```
pub fn rank_top_words(frequencies: &WordFrequencyMap, max_rank: Rank) -> Vec<RankedEntry> {
    let mut rank: Rank = 0;
    let mut previous_frequency: Option<WordFrequency> = None;
    let mut tie_group_size: usize = 1;
    let mut ranked_entries = Vec::new();

    for (word, frequency) in frequencies.iter() {
        if previous_frequency != Some(frequency) {
            rank += tie_group_size;
            previous_frequency = Some(frequency);
            tie_group_size = 1;
        } else {
            tie_group_size += 1;
        }

        if rank > max_rank {
            break;
        }

        ranked_entries.push(RankedEntry::new(word, frequency, rank));
    }

    ranked_entries
}
