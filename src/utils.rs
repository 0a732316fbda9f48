pub mod count_word_frequencies;
pub mod generate_report_from_url;
pub mod normalize_html;
pub mod open_in_browser;
pub mod rank_top_words;
pub mod tokenize;

pub use count_word_frequencies::count_word_frequencies;
pub use generate_report_from_url::{generate_report_from_url, Opener};
pub use normalize_html::normalize_html;
pub use open_in_browser::{file_url, open_in_browser};
pub use rank_top_words::rank_top_words;
pub use tokenize::{clean_tokens, tokenize};
