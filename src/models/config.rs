#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopWordsConfig {
    /// Highest competition rank kept in the results. Ranking stops at the first
    /// word whose rank exceeds this value.
    pub max_rank: usize,
}

impl Default for TopWordsConfig {
    fn default() -> Self {
        *crate::DEFAULT_TOP_WORDS_CONFIG
    }
}
