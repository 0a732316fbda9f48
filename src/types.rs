// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the raw units produced by splitting
/// normalized text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a distinct, lowercase word as an owned `String`.
pub type Word = String;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// Represents a competition rank (1-based). Tied words share the same rank.
pub type Rank = usize;

/// Raw HTML markup, as returned by a `PageFetcher`.
pub type RawMarkup = String;

/// Text with all markup constructs removed.
pub type PlainText = String;
