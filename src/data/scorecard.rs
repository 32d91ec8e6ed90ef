// Precomputed influencer scorecards.
//
// The scorecard table is produced elsewhere and only read here. Lookup is a
// case-insensitive exact match on username; unlike profile grouping, which
// is case-sensitive. Both behaviors are intentional and kept separate.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{open_csv, parse_count, parse_float, Columns};
use crate::error::{RecommendError, Result};

/// One row of the scorecard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerScoreRecord {
    pub username: String,
    pub score: f64,
    pub avg_likes: f64,
    pub total_likes: u64,
    pub post_count: u64,
    pub total_comments: u64,
    pub avg_comments: f64,
}

/// All scorecards, in file order.
#[derive(Debug, Clone, Default)]
pub struct ScorecardTable {
    records: Vec<InfluencerScoreRecord>,
}

impl ScorecardTable {
    pub fn new(records: Vec<InfluencerScoreRecord>) -> Self {
        Self { records }
    }

    /// Load the table from CSV. A missing `username` column is a schema violation.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = open_csv(path)?;
        let columns = Columns::from_headers(reader.headers()?);

        if !columns.has("username") {
            return Err(RecommendError::SchemaViolation {
                column: "username".to_string(),
            });
        }

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            records.push(InfluencerScoreRecord {
                username: columns.text(&record, "username"),
                score: parse_float(columns.field(&record, "score")),
                avg_likes: parse_float(columns.field(&record, "avg_likes")),
                total_likes: parse_count(columns.field(&record, "total_likes")),
                post_count: parse_count(columns.field(&record, "post_count")),
                total_comments: parse_count(columns.field(&record, "total_comments")),
                avg_comments: parse_float(columns.field(&record, "avg_comments")),
            });
        }

        info!(path = %path.display(), records = records.len(), "Loaded scorecards");
        Ok(Self { records })
    }

    /// First record whose username matches `name` ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&InfluencerScoreRecord> {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .find(|r| r.username.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
