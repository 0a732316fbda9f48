pub mod config;
pub use config::TopWordsConfig;

pub mod error;
pub use error::Error;

pub mod page_fetcher;
#[cfg(feature = "fetch")]
pub use page_fetcher::HttpPageFetcher;
pub use page_fetcher::PageFetcher;

pub mod ranked_entry;
pub use ranked_entry::RankedEntry;

pub mod report_writer;
pub use report_writer::{ReportPaths, ReportWriter, UrlReport};

pub mod word_frequency_map;
pub use word_frequency_map::WordFrequencyMap;
