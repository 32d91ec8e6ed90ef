// Recommendation pipeline: orchestrates one request end to end.
//
// Given a business description, this module:
// 1. Loads the preprocessed posts
// 2. Builds one profile per influencer
// 3. Expands the description with category synonyms
// 4. Fits a fresh TF-IDF space over the profiles plus the expanded query
// 5. Ranks the profiles by blended relevance and engagement
//
// Nothing survives between calls: every request refits its own space, so
// concurrent requests over different data files can't interfere.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::data::artifact::load_cleaned_posts;
use crate::data::posts::CleanedPost;
use crate::error::Result;
use crate::scoring::profile::build_profiles;
use crate::scoring::ranking::{self, RankWeights, RankedResult};
use crate::text::expand::expand;
use crate::vectorize::tfidf::TfIdfVectorizer;
use crate::vectorize::traits::Vectorizer;

/// Vectorizer settings and ranking weights for a recommendation run.
pub struct Recommender {
    vectorizer: TfIdfVectorizer,
    weights: RankWeights,
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            vectorizer: TfIdfVectorizer::default(),
            weights: RankWeights::default(),
        }
    }
}

impl Recommender {
    pub fn new(vectorizer: TfIdfVectorizer, weights: RankWeights) -> Self {
        Self {
            vectorizer,
            weights,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TfIdfVectorizer::with_max_features(config.max_features),
            RankWeights::default(),
        )
    }

    /// Recommend from a preprocessed data file.
    pub fn recommend_file(
        &self,
        data_path: &Path,
        description: &str,
        top_n: usize,
    ) -> Result<Vec<RankedResult>> {
        let posts = load_cleaned_posts(data_path)?;
        self.recommend_posts(&posts, description, top_n)
    }

    /// Recommend from posts already in memory.
    pub fn recommend_posts(
        &self,
        posts: &[CleanedPost],
        description: &str,
        top_n: usize,
    ) -> Result<Vec<RankedResult>> {
        recommend(posts, description, top_n, &self.vectorizer, &self.weights)
    }
}

/// Run the full pipeline over `posts`.
///
/// No posts (or no profiles) is not an error: the result is simply empty.
pub fn recommend(
    posts: &[CleanedPost],
    description: &str,
    top_n: usize,
    vectorizer: &dyn Vectorizer,
    weights: &RankWeights,
) -> Result<Vec<RankedResult>> {
    let profiles = build_profiles(posts);
    if profiles.is_empty() || top_n == 0 {
        info!(
            influencers = profiles.len(),
            top_n, "Nothing to rank"
        );
        return Ok(Vec::new());
    }

    let expanded = expand(description);
    info!(
        description_len = description.len(),
        expanded_len = expanded.len(),
        "Expanded business description"
    );

    let corpus: Vec<String> = profiles.iter().map(|p| p.profile_text.clone()).collect();
    let space = vectorizer.fit_transform(&corpus, &expanded)?;

    ranking::rank(
        &profiles,
        &space.profile_vectors,
        &space.query_vector,
        top_n,
        weights,
    )
}
