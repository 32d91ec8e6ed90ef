// Typed post records.
//
// A `Post` is one row of influencer content exactly as ingested (after
// coercion). A `CleanedPost` carries the normalized caption and hashtags
// alongside it; the profile builder only ever consumes cleaned posts.

use std::collections::HashSet;

use crate::text::normalize::normalize;

/// One social-media post.
///
/// Text fields are empty when the source had no value; counts are 0 when the
/// source value could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub platform: String,
    pub username: String,
    /// `DD/MM/YYYY`, or empty when the source date was missing or unparseable
    pub post_date: String,
    pub caption_text: String,
    pub post_type: String,
    pub likes: u64,
    pub comments: u64,
    /// Raw hashtag text, e.g. "#ootd #style"
    pub hashtags: String,
}

/// A post with its caption and hashtags normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedPost {
    pub post: Post,
    pub cleaned_caption: String,
    pub cleaned_hashtags: String,
}

impl CleanedPost {
    /// Derive the cleaned fields from a raw post.
    pub fn from_post(post: Post) -> Self {
        let cleaned_caption = normalize(&post.caption_text);
        let cleaned_hashtags = normalize(&post.hashtags);
        Self {
            post,
            cleaned_caption,
            cleaned_hashtags,
        }
    }

    /// The per-post text that feeds an influencer profile.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {}",
            normalize(&self.cleaned_caption),
            normalize(&self.cleaned_hashtags)
        )
    }
}

/// Drop repeated imports of the same post.
///
/// Two rows are the same post when username, post_date and caption_text all
/// match exactly. The first occurrence is kept and order is preserved.
pub fn dedup_posts(posts: Vec<CleanedPost>) -> Vec<CleanedPost> {
    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    posts
        .into_iter()
        .filter(|p| {
            seen.insert((
                p.post.username.clone(),
                p.post.post_date.clone(),
                p.post.caption_text.clone(),
            ))
        })
        .collect()
}
