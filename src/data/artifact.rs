// Pipeline input artifact: the preprocessed CSV the recommender reads.
//
// The two cleaned text columns are the contract: without them there is no
// profile text, so their absence is a schema violation rather than something
// to paper over. Every other column defaults to empty / 0.

use std::path::Path;

use tracing::{debug, info};

use super::posts::{CleanedPost, Post};
use super::{open_csv, parse_count, Columns};
use crate::error::{RecommendError, Result};

/// Columns the artifact must carry.
pub const REQUIRED_TEXT_COLUMNS: [&str; 2] = ["cleaned_caption", "cleaned_hashtags"];

/// Load cleaned posts from an artifact CSV.
pub fn load_cleaned_posts(path: &Path) -> Result<Vec<CleanedPost>> {
    let mut reader = open_csv(path)?;
    let columns = Columns::from_headers(reader.headers()?);

    if let Some(column) = REQUIRED_TEXT_COLUMNS.iter().find(|c| !columns.has(c)) {
        return Err(RecommendError::SchemaViolation {
            column: column.to_string(),
        });
    }

    for optional in ["username", "likes", "comments"] {
        if !columns.has(optional) {
            debug!(column = optional, "Artifact column absent, defaulting");
        }
    }

    let mut posts = Vec::new();
    for record in reader.records() {
        let record = record?;
        posts.push(CleanedPost {
            post: Post {
                platform: columns.text(&record, "platform"),
                username: columns.text(&record, "username"),
                post_date: columns.text(&record, "post_date"),
                caption_text: columns.text(&record, "caption_text"),
                post_type: columns.text(&record, "post_type"),
                likes: parse_count(columns.field(&record, "likes")),
                comments: parse_count(columns.field(&record, "comments")),
                hashtags: columns.text(&record, "hashtags"),
            },
            cleaned_caption: columns.text(&record, "cleaned_caption"),
            cleaned_hashtags: columns.text(&record, "cleaned_hashtags"),
        });
    }

    info!(path = %path.display(), rows = posts.len(), "Loaded preprocessed data");
    Ok(posts)
}
