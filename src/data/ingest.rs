// Ingestion: turn a raw influencer export into the pipeline input artifact.
//
// Raw exports come from spreadsheets with inconsistent headers ("Caption
// Text", "Likes"), free-form dates and non-numeric counts. This stage fixes
// all of that once:
//   1. normalize headers and synthesize missing columns as empty
//   2. re-render post_date as DD/MM/YYYY (empty when unparseable)
//   3. coerce likes/comments to integers (0 on failure)
//   4. clean caption and hashtags
//   5. drop duplicate posts
//   6. write the artifact CSV the recommender reads

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};

use super::posts::{dedup_posts, CleanedPost, Post};
use super::{open_csv, parse_count, Columns};
use crate::error::Result;

/// Columns every post row is expected to carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "platform",
    "username",
    "post_date",
    "caption_text",
    "post_type",
    "likes",
    "comments",
    "hashtags",
];

/// Output date layout for `post_date`.
const DATE_OUTPUT_FORMAT: &str = "%d/%m/%Y";

/// Date-only layouts tried in order. Month-first wins for ambiguous
/// slash dates; day-first is the fallback when the month would be > 12.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// What a preprocessing run did.
#[derive(Debug, Clone, Default)]
pub struct PreprocessSummary {
    pub rows_read: usize,
    pub rows_written: usize,
    /// Required columns that were absent from the raw file
    pub synthesized_columns: Vec<String>,
}

/// Row layout of the artifact CSV.
#[derive(Serialize)]
struct ArtifactRow<'a> {
    platform: &'a str,
    username: &'a str,
    post_date: &'a str,
    caption_text: &'a str,
    post_type: &'a str,
    likes: u64,
    comments: u64,
    hashtags: &'a str,
    cleaned_caption: &'a str,
    cleaned_hashtags: &'a str,
}

/// Read a raw export into typed posts.
///
/// Returns the posts and the names of required columns that were missing
/// (their fields are left empty / 0).
pub fn load_raw_posts(path: &Path) -> Result<(Vec<Post>, Vec<String>)> {
    let mut reader = open_csv(path)?;
    let columns = Columns::from_headers(reader.headers()?);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !columns.has(c))
        .map(|c| c.to_string())
        .collect();
    for column in &missing {
        warn!(column = column.as_str(), "Added missing column");
    }

    let mut posts = Vec::new();
    for record in reader.records() {
        let record = record?;
        posts.push(Post {
            platform: columns.text(&record, "platform"),
            username: columns.text(&record, "username"),
            post_date: columns
                .field(&record, "post_date")
                .map(normalize_post_date)
                .unwrap_or_default(),
            caption_text: columns.text(&record, "caption_text"),
            post_type: columns.text(&record, "post_type"),
            likes: parse_count(columns.field(&record, "likes")),
            comments: parse_count(columns.field(&record, "comments")),
            hashtags: columns.text(&record, "hashtags"),
        });
    }

    info!(path = %path.display(), rows = posts.len(), "Loaded raw posts");
    Ok((posts, missing))
}

/// Full ingestion: raw export in, cleaned and deduplicated artifact out.
pub fn preprocess(raw_path: &Path, output_path: &Path) -> Result<PreprocessSummary> {
    let (posts, synthesized_columns) = load_raw_posts(raw_path)?;
    let rows_read = posts.len();

    let cleaned: Vec<CleanedPost> = posts.into_iter().map(CleanedPost::from_post).collect();
    let cleaned = dedup_posts(cleaned);

    if cleaned.is_empty() {
        warn!(path = %raw_path.display(), "No rows loaded; writing an empty artifact");
    }

    write_artifact(&cleaned, output_path)?;

    info!(
        rows_read,
        rows_written = cleaned.len(),
        output = %output_path.display(),
        "Preprocessing complete"
    );

    Ok(PreprocessSummary {
        rows_read,
        rows_written: cleaned.len(),
        synthesized_columns,
    })
}

/// Write cleaned posts in the artifact layout, creating parent directories.
pub fn write_artifact(posts: &[CleanedPost], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    if posts.is_empty() {
        // serde only emits the header with the first row
        writer.write_record(
            REQUIRED_COLUMNS
                .iter()
                .chain(["cleaned_caption", "cleaned_hashtags"].iter()),
        )?;
    }
    for p in posts {
        writer.serialize(ArtifactRow {
            platform: &p.post.platform,
            username: &p.post.username,
            post_date: &p.post.post_date,
            caption_text: &p.post.caption_text,
            post_type: &p.post.post_type,
            likes: p.post.likes,
            comments: p.post.comments,
            hashtags: &p.post.hashtags,
            cleaned_caption: &p.cleaned_caption,
            cleaned_hashtags: &p.cleaned_hashtags,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Re-render a source date as `DD/MM/YYYY`. Unparseable dates become "".
pub fn normalize_post_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_OUTPUT_FORMAT).to_string();
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format(DATE_OUTPUT_FORMAT).to_string();
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return d.format(DATE_OUTPUT_FORMAT).to_string();
        }
    }

    String::new()
}
