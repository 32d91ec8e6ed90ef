// Query expansion: densify short business descriptions with related terms.
//
// A one-line description like "eco fashion brand" only has a handful of
// terms, which gives a very sparse query vector. Appending the synonyms of
// every category the description mentions gives the vector space more to
// match against. Terms are only ever appended, never removed, and duplicates
// are left in place.

/// Category keyword -> terms appended when the keyword appears.
/// Table order is the order expansions are appended in.
pub const CATEGORY_EXPANSIONS: &[(&str, &[&str])] = &[
    (
        "fashion",
        &["style", "clothing", "apparel", "outfit", "wear", "design", "trend", "clothes"],
    ),
    (
        "sustainable",
        &["eco", "green", "organic", "natural", "environment", "ethical", "conscious"],
    ),
    (
        "beauty",
        &["makeup", "cosmetics", "skincare", "glow", "skin", "beauty", "treatment"],
    ),
    (
        "food",
        &["restaurant", "cuisine", "meal", "cooking", "recipe", "eat", "dining", "taste"],
    ),
    (
        "fitness",
        &["workout", "exercise", "gym", "health", "training", "sport", "active"],
    ),
    (
        "tech",
        &["technology", "app", "digital", "software", "innovation", "gadget"],
    ),
    (
        "travel",
        &["tourism", "vacation", "trip", "destination", "journey", "adventure"],
    ),
    (
        "lifestyle",
        &["living", "daily", "routine", "life", "personal", "home", "family"],
    ),
];

const DEMOGRAPHIC_TRIGGERS: &[&str] = &["young", "women", "female", "girl"];
const DEMOGRAPHIC_TERMS: &[&str] = &["women", "female", "girl", "lady", "feminine"];

const LUXURY_TRIGGERS: &[&str] = &["luxury", "premium", "high-end"];
const LUXURY_TERMS: &[&str] = &["luxury", "premium", "expensive", "high-end", "exclusive"];

/// Expand a business description for vectorization.
///
/// Returns the lowercased description followed by the terms of every matched
/// category, space-joined. Matching is plain substring containment, so
/// "technical" triggers the `tech` category.
pub fn expand(description: &str) -> String {
    let lowered = description.to_lowercase();
    let mut parts: Vec<&str> = vec![lowered.as_str()];

    for (keyword, terms) in CATEGORY_EXPANSIONS {
        if lowered.contains(keyword) {
            parts.extend_from_slice(terms);
        }
    }

    if DEMOGRAPHIC_TRIGGERS.iter().any(|t| lowered.contains(t)) {
        parts.extend_from_slice(DEMOGRAPHIC_TERMS);
    }

    if LUXURY_TRIGGERS.iter().any(|t| lowered.contains(t)) {
        parts.extend_from_slice(LUXURY_TERMS);
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_only_lowercases() {
        assert_eq!(expand("Local Plumbing Services"), "local plumbing services");
    }

    #[test]
    fn beauty_keeps_duplicate_term() {
        let out = expand("Beauty brand");
        assert_eq!(
            out,
            "beauty brand makeup cosmetics skincare glow skin beauty treatment"
        );
    }

    #[test]
    fn categories_append_in_table_order() {
        let out = expand("travel and fashion");
        let style_at = out.find("style").unwrap();
        let tourism_at = out.find("tourism").unwrap();
        assert!(style_at < tourism_at);
    }

    #[test]
    fn demographic_and_luxury_sets() {
        let out = expand("High-End jewelry for young professionals");
        assert!(out.ends_with(
            "women female girl lady feminine luxury premium expensive high-end exclusive"
        ));
    }

    #[test]
    fn substring_match_triggers_category() {
        assert!(expand("fintech startup").contains("gadget"));
    }
}
