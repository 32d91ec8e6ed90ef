// Text normalizer: turns raw captions and hashtags into a canonical form.
//
// The cleaned form is lowercase ASCII letters separated by single spaces.
// Everything downstream (profile text, the vector space) assumes this shape,
// so captions and hashtags must both go through `normalize` before they are
// concatenated.

use std::sync::LazyLock;

use regex_lite::Regex;

/// URLs are removed up to the next whitespace character.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid URL regex"));

/// Emoji blocks stripped before the letter filter: emoticons, misc symbols
/// and pictographs, transport and map symbols, regional indicators.
const EMOJI_RANGES: [(u32, u32); 4] = [
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
];

/// Clean a piece of free text.
///
/// Steps, in order: strip URLs, strip the emoji blocks in `EMOJI_RANGES`,
/// drop anything that isn't an ASCII letter or whitespace, lowercase, then
/// collapse whitespace runs and trim. Idempotent.
pub fn normalize(text: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(text, "");

    let letters: String = without_urls
        .chars()
        .filter(|c| !is_targeted_emoji(*c))
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a field that may be absent. Absent values clean to "".
pub fn normalize_field(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

fn is_targeted_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}
