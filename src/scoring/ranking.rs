// Similarity & ranking: blend text relevance with engagement.
//
// For each profile:
//   raw        = cosine(query, profile)
//   normalized = min-max scaled raw similarity across this result set
//   engagement = likes_weight * likes / max_likes
//              + comments_weight * comments / max_comments
//   final      = similarity_weight * normalized + engagement_weight * engagement
//
// Results are sorted by final score (stable, so ties keep profile order) and
// truncated to top_n. The raw similarity is kept on each result for display;
// it is not the ranking key.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::profile::InfluencerProfile;
use crate::error::{RecommendError, Result};
use crate::vectorize::similarity::{cosine, TermVector};

/// Configurable weights for the final score.
pub struct RankWeights {
    /// Share of the final score from normalized similarity (default 0.7)
    pub similarity_weight: f64,
    /// Share of the final score from engagement (default 0.3)
    pub engagement_weight: f64,
    /// Share of engagement from average likes (default 0.7)
    pub likes_weight: f64,
    /// Share of engagement from average comments (default 0.3)
    pub comments_weight: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            similarity_weight: 0.7,
            engagement_weight: 0.3,
            likes_weight: 0.7,
            comments_weight: 0.3,
        }
    }
}

/// One ranked influencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub username: String,
    /// Raw cosine similarity against the query
    pub similarity_score: f64,
    pub normalized_similarity: f64,
    pub engagement_score: f64,
    /// The ranking key
    pub final_score: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
}

/// Min-max scale similarities into [0, 1].
///
/// Left unchanged when the maximum is not positive (nothing matched) or
/// when every value is identical, so this never divides by zero.
pub fn normalize_similarities(raw: &[f64]) -> Vec<f64> {
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);

    if max > 0.0 && max > min {
        raw.iter().map(|s| (s - min) / (max - min)).collect()
    } else {
        raw.to_vec()
    }
}

/// Engagement score per profile.
///
/// All zeros when no profile has any likes, regardless of comments. When
/// likes exist but comments don't, the comments term contributes 0.
pub fn engagement_scores(profiles: &[InfluencerProfile], weights: &RankWeights) -> Vec<f64> {
    let max_likes = profiles.iter().map(|p| p.avg_likes).fold(0.0, f64::max);
    let max_comments = profiles.iter().map(|p| p.avg_comments).fold(0.0, f64::max);

    if max_likes <= 0.0 {
        return vec![0.0; profiles.len()];
    }

    profiles
        .iter()
        .map(|p| {
            let comments_share = if max_comments > 0.0 {
                p.avg_comments / max_comments
            } else {
                0.0
            };
            weights.likes_weight * (p.avg_likes / max_likes)
                + weights.comments_weight * comments_share
        })
        .collect()
}

/// Rank profiles against the query vector and keep the best `top_n`.
///
/// `profile_vectors[i]` must be the vector of `profiles[i]`.
pub fn rank(
    profiles: &[InfluencerProfile],
    profile_vectors: &[TermVector],
    query_vector: &TermVector,
    top_n: usize,
    weights: &RankWeights,
) -> Result<Vec<RankedResult>> {
    if profiles.len() != profile_vectors.len() {
        return Err(RecommendError::processing(format!(
            "{} profiles but {} profile vectors",
            profiles.len(),
            profile_vectors.len()
        )));
    }

    let raw: Vec<f64> = profile_vectors
        .iter()
        .map(|v| cosine(query_vector, v))
        .collect();
    let normalized = normalize_similarities(&raw);
    let engagement = engagement_scores(profiles, weights);

    let mut results: Vec<RankedResult> = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| RankedResult {
            username: p.username.clone(),
            similarity_score: raw[i],
            normalized_similarity: normalized[i],
            engagement_score: engagement[i],
            final_score: weights.similarity_weight * normalized[i]
                + weights.engagement_weight * engagement[i],
            avg_likes: p.avg_likes,
            avg_comments: p.avg_comments,
        })
        .collect();

    // Vec::sort_by is stable: equal scores keep profile order
    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(top_n);

    if let Some(top) = results.first() {
        info!(
            candidates = profiles.len(),
            returned = results.len(),
            top = top.username.as_str(),
            top_score = format!("{:.3}", top.final_score),
            "Ranked influencers"
        );
    }

    Ok(results)
}
