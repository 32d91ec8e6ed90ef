// Tokenizer and n-gram builder for the TF-IDF space.
//
// A token is a run of two or more word characters (letters, digits,
// underscore), lowercased. Single-character tokens are dropped. Stop words
// are removed before n-grams are formed, so "beauty and skincare" yields the
// bigram "beauty skincare".

use std::collections::HashSet;

/// Split text into lowercase word tokens of length >= 2.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

/// Analyze a document into its terms: tokens, stop words removed, then all
/// n-grams for n in `min_n..=max_n`. Unigrams come first, then bigrams, etc.
pub fn analyze(text: &str, stop_words: &HashSet<String>, ngram_range: (usize, usize)) -> Vec<String> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| !stop_words.contains(t))
        .collect();

    let (min_n, max_n) = ngram_range;
    let min_n = min_n.max(1);
    let mut terms = Vec::new();

    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        if n == 1 {
            terms.extend(tokens.iter().cloned());
            continue;
        }
        terms.extend(tokens.windows(n).map(|w| w.join(" ")));
    }

    terms
}
