use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::vectorize::tfidf::DEFAULT_MAX_FEATURES;

/// Default location of the preprocessed post data.
pub const DEFAULT_DATA_PATH: &str = "data/combined_preprocessed_influencer_data.csv";

/// Default location of the precomputed scorecard table.
pub const DEFAULT_SCORES_PATH: &str = "data/influencer_scores.csv";

/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 5;

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so an empty environment is valid. The .env
/// file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Preprocessed post data the recommender reads (INZLUENZE_DATA_PATH)
    pub data_path: PathBuf,
    /// Scorecard table for username lookups (INZLUENZE_SCORES_PATH)
    pub scores_path: PathBuf,
    /// Vocabulary cap for the TF-IDF space (INZLUENZE_MAX_FEATURES)
    pub max_features: usize,
    /// Recommendations returned when a request doesn't say (INZLUENZE_TOP_N)
    pub default_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            max_features: DEFAULT_MAX_FEATURES,
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            data_path: env::var("INZLUENZE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            scores_path: env::var("INZLUENZE_SCORES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scores_path),
            max_features: parse_var("INZLUENZE_MAX_FEATURES")?.unwrap_or(defaults.max_features),
            default_top_n: parse_var("INZLUENZE_TOP_N")?.unwrap_or(defaults.default_top_n),
        })
    }

    /// Check that the vectorizer settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            anyhow::bail!(
                "INZLUENZE_MAX_FEATURES must be at least 1.\n\
                 Unset it to use the default of {DEFAULT_MAX_FEATURES}."
            );
        }
        Ok(())
    }
}

/// Read a numeric env var. Unset is Ok(None); set but invalid is an error.
fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a positive integer, got {raw:?}")),
        Err(_) => Ok(None),
    }
}
