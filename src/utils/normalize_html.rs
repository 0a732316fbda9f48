use crate::types::PlainText;
use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script.*?>.*?</script>").expect("SCRIPT_ELEMENT_RE should compile")
});
static STYLE_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<style.*?>.*?</style>").expect("STYLE_ELEMENT_RE should compile")
});
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT_RE should compile"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG_RE should compile"));
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[^;]+;").expect("ENTITY_RE should compile"));
// Letters, numbers and `_` only; combining marks and connector punctuation are removed.
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("NON_WORD_RE should compile"));

/// Strips markup from raw HTML, leaving plain text.
///
/// The passes run in a fixed order, each on the output of the previous one:
/// script elements, style elements, comments, remaining tags, entities, then
/// every character that is neither a letter, a number, `_` nor whitespace.
///
/// Removed constructs are replaced with nothing, so text on either side of a
/// tag is joined without a space.
///
/// # Example
/// ```
/// use top_words::normalize_html;
///
/// assert_eq!(normalize_html("<p>This is a paragraph.</p>"), "This is a paragraph");
/// assert_eq!(normalize_html("<b>bold</b><i>italic</i>"), "bolditalic");
/// ```
pub fn normalize_html(raw: &str) -> PlainText {
    let passes: [&LazyLock<Regex>; 6] = [
        &SCRIPT_ELEMENT_RE,
        &STYLE_ELEMENT_RE,
        &COMMENT_RE,
        &TAG_RE,
        &ENTITY_RE,
        &NON_WORD_RE,
    ];

    passes.iter().fold(raw.to_string(), |text, re| {
        re.replace_all(&text, "").into_owned()
    })
}
