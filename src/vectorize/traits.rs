// Vectorizer trait: the seam between text and numbers.
//
// The pipeline only needs "give me comparable vectors for these profiles and
// this query". TF-IDF is the implementation today; anything that can fit a
// shared space over a corpus plus one query can slot in here.

use super::similarity::TermVector;
use crate::error::Result;

/// The output of one fit: a vocabulary and vectors in that vocabulary's space.
///
/// Vectors from different fits live in different spaces and must never be
/// compared with each other.
#[derive(Debug, Clone)]
pub struct FittedSpace {
    /// Term for each dimension, in dimension order
    pub vocabulary: Vec<String>,
    /// One vector per corpus document, in corpus order
    pub profile_vectors: Vec<TermVector>,
    pub query_vector: TermVector,
}

/// Fit a term space over a corpus plus a query and project both into it.
pub trait Vectorizer {
    fn fit_transform(&self, corpus: &[String], query: &str) -> Result<FittedSpace>;
}
