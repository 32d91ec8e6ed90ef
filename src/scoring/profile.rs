// Profile builder: one text profile and engagement average per influencer.
//
// Given cleaned posts, this module:
// 1. Skips posts with no username and repeated imports of the same post
// 2. Groups posts by exact username (case-sensitive, no trimming)
// 3. Joins each group's combined post texts in row order
// 4. Averages likes and comments per group

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::posts::CleanedPost;

/// Aggregated view of one influencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerProfile {
    pub username: String,
    /// All of the influencer's combined post texts, space-joined in row order
    pub profile_text: String,
    pub avg_likes: f64,
    pub avg_comments: f64,
}

struct Group<'a> {
    username: &'a str,
    texts: Vec<String>,
    likes: f64,
    comments: f64,
}

/// Build one profile per username, in order of each username's first post.
///
/// Rows with the same (username, post_date, caption_text) as an earlier row
/// are ignored so repeated imports don't over-weight a post.
pub fn build_profiles(posts: &[CleanedPost]) -> Vec<InfluencerProfile> {
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();
    let mut duplicates = 0usize;
    let mut anonymous = 0usize;

    for p in posts {
        // A post without an author can't be recommended
        if p.post.username.is_empty() {
            anonymous += 1;
            continue;
        }

        let key = (
            p.post.username.as_str(),
            p.post.post_date.as_str(),
            p.post.caption_text.as_str(),
        );
        if !seen.insert(key) {
            duplicates += 1;
            continue;
        }

        let slot = *index.entry(p.post.username.as_str()).or_insert_with(|| {
            groups.push(Group {
                username: &p.post.username,
                texts: Vec::new(),
                likes: 0.0,
                comments: 0.0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.texts.push(p.combined_text());
        group.likes += p.post.likes as f64;
        group.comments += p.post.comments as f64;
    }

    let profiles: Vec<InfluencerProfile> = groups
        .into_iter()
        .map(|g| {
            let count = g.texts.len() as f64;
            InfluencerProfile {
                username: g.username.to_string(),
                profile_text: g.texts.join(" "),
                avg_likes: g.likes / count,
                avg_comments: g.comments / count,
            }
        })
        .collect();

    if anonymous > 0 {
        debug!(anonymous, "Skipped posts with no username");
    }

    info!(
        posts = posts.len(),
        duplicates,
        influencers = profiles.len(),
        "Built influencer profiles"
    );

    profiles
}
