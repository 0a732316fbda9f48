use crate::models::WordFrequencyMap;

/// Counts the frequency of words in the given list.
///
/// # Arguments
/// * `words` - A slice of tokens to analyze.
/// * `sort_by_count` - When `false`, words keep their first-seen order.
/// * `descending` - With `sort_by_count`, order from most to least frequent
///   instead of the reverse.
///
/// # Returns
/// * A `WordFrequencyMap` where the keys are words and the values are their
///   respective frequencies. Words with equal counts keep their first-seen
///   relative order.
///
/// # Example
/// ```
/// use top_words::count_word_frequencies;
///
/// let words = vec!["hello", "world", "hello", "python", "python", "python"];
/// let frequencies = count_word_frequencies(&words, true, true);
///
/// assert_eq!(
///     frequencies.iter().collect::<Vec<_>>(),
///     vec![("python", 3), ("hello", 2), ("world", 1)]
/// );
/// ```
pub fn count_word_frequencies<T: AsRef<str>>(
    words: &[T],
    sort_by_count: bool,
    descending: bool,
) -> WordFrequencyMap {
    let mut frequencies = WordFrequencyMap::new();

    for word in words {
        frequencies.increment(word.as_ref());
    }

    if sort_by_count {
        frequencies.sort_by_count(descending);
    }

    frequencies
}
