// TF-IDF vector space over influencer profiles plus the business query.
//
// The space is fit on every request over all profile texts *and* the
// expanded query. Including the query means its terms count towards
// document frequency (shifting IDF for rare terms) and can enter the
// vocabulary; recommendations depend on that, so the query stays in the fit.
//
// Weighting, per term t in document d:
//   tf  = 1 + ln(count(t, d))                    (sublinear)
//   idf = ln((1 + n_docs) / (1 + df(t))) + 1     (smoothed)
//   w   = tf * idf
// Vectors are left unnormalized; cosine similarity takes care of length.
//
// Stop words come from the stop-words crate's English list, which is larger
// than sklearn's built-in list (it also drops words like "home").

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::similarity::TermVector;
use super::tokenize::analyze;
use super::traits::{FittedSpace, Vectorizer};
use crate::error::{RecommendError, Result};

/// Default vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 10_000;

/// TF-IDF vectorizer settings. Holds no fitted state; every call to
/// `fit_transform` builds a fresh space.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Keep at most this many terms, by total count across the fit corpus
    pub max_features: usize,
    /// Drop terms present in more than this fraction of documents
    pub max_df: f64,
    /// Drop terms present in fewer than this many documents
    pub min_df: usize,
    /// Inclusive n-gram lengths
    pub ngram_range: (usize, usize),
    /// Use 1 + ln(tf) instead of raw counts
    pub sublinear_tf: bool,
    pub stop_words: HashSet<String>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::with_max_features(DEFAULT_MAX_FEATURES)
    }
}

/// Per-term corpus statistics gathered during the fit.
#[derive(Debug, Default, Clone, Copy)]
struct TermStats {
    doc_freq: usize,
    total_count: usize,
}

impl TfIdfVectorizer {
    /// Recommender defaults (English stop words, unigrams + bigrams,
    /// sublinear tf, max_df 0.95) with a custom vocabulary cap.
    pub fn with_max_features(max_features: usize) -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self {
            max_features,
            max_df: 0.95,
            min_df: 1,
            ngram_range: (1, 2),
            sublinear_tf: true,
            stop_words: stop_words.into_iter().collect(),
        }
    }

    /// Fit the vocabulary and IDF weights over `documents`.
    ///
    /// Returns the vocabulary (alphabetical, one entry per dimension) and the
    /// matching IDF weights.
    fn fit(&self, documents: &[Vec<String>]) -> Result<(Vec<String>, Vec<f64>)> {
        let n_docs = documents.len();

        let mut stats: HashMap<&str, TermStats> = HashMap::new();
        for terms in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in terms {
                let entry = stats.entry(term.as_str()).or_default();
                entry.total_count += 1;
                if seen.insert(term.as_str()) {
                    entry.doc_freq += 1;
                }
            }
        }

        let max_doc_count = self.max_df * n_docs as f64;
        if max_doc_count < self.min_df as f64 {
            return Err(RecommendError::processing(format!(
                "max_df {} over {n_docs} documents keeps fewer documents than min_df {}",
                self.max_df, self.min_df
            )));
        }

        let mut kept: Vec<(&str, TermStats)> = stats
            .into_iter()
            .filter(|(_, s)| s.doc_freq >= self.min_df && (s.doc_freq as f64) <= max_doc_count)
            .collect();

        if kept.len() > self.max_features {
            // Most frequent first, alphabetical among equals
            kept.sort_by(|a, b| match b.1.total_count.cmp(&a.1.total_count) {
                Ordering::Equal => a.0.cmp(b.0),
                other => other,
            });
            kept.truncate(self.max_features);
        }

        if kept.is_empty() {
            return Err(RecommendError::processing(
                "no terms remain after pruning; try a more descriptive business description",
            ));
        }

        kept.sort_by(|a, b| a.0.cmp(b.0));

        let idf = kept
            .iter()
            .map(|(_, s)| ((1.0 + n_docs as f64) / (1.0 + s.doc_freq as f64)).ln() + 1.0)
            .collect();
        let vocabulary = kept.into_iter().map(|(t, _)| t.to_string()).collect();

        Ok((vocabulary, idf))
    }

    /// Project one analyzed document into a fitted space.
    fn transform(&self, terms: &[String], index: &HashMap<&str, usize>, idf: &[f64]) -> TermVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for term in terms {
            if let Some(&dim) = index.get(term.as_str()) {
                *counts.entry(dim).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(dim, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + (count as f64).ln()
                } else {
                    count as f64
                };
                (dim, tf * idf[dim])
            })
            .collect();

        TermVector::from_entries(entries)
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn fit_transform(&self, corpus: &[String], query: &str) -> Result<FittedSpace> {
        let mut documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| analyze(doc, &self.stop_words, self.ngram_range))
            .collect();
        documents.push(analyze(query, &self.stop_words, self.ngram_range));

        let (vocabulary, idf) = self.fit(&documents)?;
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let mut vectors: Vec<TermVector> = documents
            .iter()
            .map(|terms| self.transform(terms, &index, &idf))
            .collect();
        let query_vector = vectors.pop().unwrap_or_default();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            query_terms = query_vector.entries().len(),
            "Fitted TF-IDF space"
        );

        Ok(FittedSpace {
            vocabulary,
            profile_vectors: vectors,
            query_vector,
        })
    }
}
