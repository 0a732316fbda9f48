mod constants;
pub use constants::{
    DEFAULT_MAX_RANK, DEFAULT_TOP_WORDS_CONFIG, RESULT_HTML_FILE_NAME, RESULT_TEXT_FILE_NAME,
};
pub mod models;
#[cfg(feature = "fetch")]
pub use models::HttpPageFetcher;
pub use models::{
    Error, PageFetcher, RankedEntry, ReportPaths, ReportWriter, TopWordsConfig, UrlReport,
    WordFrequencyMap,
};
pub mod types;
mod utils;
pub use types::{PlainText, Rank, RawMarkup, Token, TokenRef, Word, WordFrequency};
pub use utils::{
    clean_tokens, count_word_frequencies, file_url, generate_report_from_url, normalize_html,
    open_in_browser, rank_top_words, tokenize, Opener,
};

use constants::FETCH_FAILURE_MESSAGE;
use log::{debug, info};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Ranks the most frequent words of an HTML document, keeping ranks 1 through 10.
pub fn top_words(raw: &str) -> Vec<RankedEntry> {
    top_words_with_custom_config(DEFAULT_TOP_WORDS_CONFIG, raw)
}

pub fn top_words_with_custom_config(config: &TopWordsConfig, raw: &str) -> Vec<RankedEntry> {
    info!("Normalizing...");
    let plain_text = normalize_html(raw);

    info!("Tokenizing...");
    let tokens = clean_tokens(&tokenize(&plain_text));

    info!("Counting word frequencies...");
    let frequencies = count_word_frequencies(&tokens, true, true);
    debug!(
        "{} tokens, {} distinct words",
        tokens.len(),
        frequencies.len()
    );

    info!("Ranking...");
    rank_top_words(&frequencies, config.max_rank)
}

/// Fetches `url` and ranks the most frequent words of the returned page.
///
/// Fails with `Error::FetchError` when the fetcher yields no content; nothing is
/// normalized in that case.
pub fn get_most_frequent_words_from_url<F: PageFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<Vec<RankedEntry>, Error> {
    get_most_frequent_words_from_url_with_custom_config(DEFAULT_TOP_WORDS_CONFIG, fetcher, url)
}

pub fn get_most_frequent_words_from_url_with_custom_config<F: PageFetcher + ?Sized>(
    config: &TopWordsConfig,
    fetcher: &F,
    url: &str,
) -> Result<Vec<RankedEntry>, Error> {
    let html_content = fetcher
        .fetch(url)?
        .ok_or_else(|| Error::FetchError(FETCH_FAILURE_MESSAGE.to_string()))?;

    Ok(top_words_with_custom_config(config, &html_content))
}
