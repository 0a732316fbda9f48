use crate::models::TopWordsConfig;

/// Words ranked beyond this position are excluded from the results.
pub const DEFAULT_MAX_RANK: usize = 10;

pub const DEFAULT_TOP_WORDS_CONFIG: &TopWordsConfig = &TopWordsConfig {
    max_rank: DEFAULT_MAX_RANK,
};

pub const RESULT_HTML_FILE_NAME: &str = "result.html";

pub const RESULT_TEXT_FILE_NAME: &str = "result.txt";

pub const REPORT_TITLE: &str = "Top most frequent words";

pub const FETCH_FAILURE_MESSAGE: &str = "Could not get html data";
