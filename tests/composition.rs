// Composition tests: the pipeline stages wired together.
//
// Covers ingestion into the artifact, artifact into recommendations, the
// error kinds callers branch on, and scorecard lookups from disk. Fixtures
// are small CSV files written into a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use inzluenze::data::artifact::load_cleaned_posts;
use inzluenze::data::ingest::preprocess;
use inzluenze::data::posts::{CleanedPost, Post};
use inzluenze::data::scorecard::ScorecardTable;
use inzluenze::error::RecommendError;
use inzluenze::pipeline::recommend::Recommender;
use inzluenze::scoring::profile::build_profiles;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn post(username: &str, caption: &str, likes: u64, comments: u64) -> CleanedPost {
    CleanedPost::from_post(Post {
        platform: "instagram".to_string(),
        username: username.to_string(),
        caption_text: caption.to_string(),
        likes,
        comments,
        ..Post::default()
    })
}

const ARTIFACT_HEADER: &str =
    "platform,username,post_date,caption_text,post_type,likes,comments,hashtags,cleaned_caption,cleaned_hashtags";

fn beauty_and_burgers_artifact(dir: &TempDir) -> PathBuf {
    let body = format!(
        "{ARTIFACT_HEADER}\n\
         instagram,glowgirl,01/02/2024,Organic skincare!,image,100,10,#glow #beauty,organic skincare,glow beauty\n\
         instagram,burgerking99,02/02/2024,Fast food deal,video,50,5,#burger,fast food deal,burger\n"
    );
    write_file(dir, "artifact.csv", &body)
}

// ============================================================
// End to end
// ============================================================

#[test]
fn relevant_influencer_ranks_first() {
    let posts = vec![
        post("glowgirl", "organic skincare glow beauty", 100, 10),
        post("burgerking99", "fast food burger deal", 50, 5),
    ];

    let results = Recommender::default()
        .recommend_posts(&posts, "beauty and skincare brand", 5)
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].username, "glowgirl");
    assert!(results[0].similarity_score > 0.0);
    assert!(results[0].final_score > results[1].final_score);
}

#[test]
fn recommend_from_artifact_file() {
    let dir = TempDir::new().unwrap();
    let path = beauty_and_burgers_artifact(&dir);

    let results = Recommender::default()
        .recommend_file(&path, "skincare for women", 1)
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].username, "glowgirl");
    assert_eq!(results[0].avg_likes, 100.0);
    assert_eq!(results[0].avg_comments, 10.0);
}

#[test]
fn profile_averages_engagement() {
    let posts = vec![
        post("runner", "morning run", 10, 1),
        post("runner", "trail run", 20, 2),
        post("runner", "race day", 30, 3),
    ];
    let profiles = build_profiles(&posts);
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].avg_likes, 20.0);
    assert_eq!(profiles[0].avg_comments, 2.0);
}

#[test]
fn repeated_posts_do_not_skew_averages() {
    let posts = vec![
        post("chef", "pasta night", 100, 0),
        post("chef", "pasta night", 100, 0),
        post("chef", "taco tuesday", 10, 0),
    ];
    let profiles = build_profiles(&posts);
    assert_eq!(profiles[0].avg_likes, 55.0);
}

#[test]
fn posts_without_username_are_never_recommended() {
    let dir = TempDir::new().unwrap();
    let body = format!(
        "{ARTIFACT_HEADER}\n\
         instagram,,01/02/2024,Glow up,image,900,90,#beauty,organic skincare glow,beauty\n\
         instagram,glowgirl,02/02/2024,Skincare,image,100,10,#glow,skincare routine,glow\n\
         instagram,chef,03/02/2024,Pasta,video,50,5,#food,pasta night,food\n"
    );
    let path = write_file(&dir, "artifact.csv", &body);

    let results = Recommender::default()
        .recommend_file(&path, "beauty skincare", 5)
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| !r.username.is_empty()));
    assert_eq!(results[0].username, "glowgirl");
}

#[test]
fn export_without_username_column_recommends_nothing() {
    let dir = TempDir::new().unwrap();
    let raw = write_file(&dir, "raw.csv", "caption_text,likes\nskincare glow,40\n");
    let artifact = dir.path().join("processed.csv");

    let summary = preprocess(&raw, &artifact).unwrap();
    assert!(summary.synthesized_columns.iter().any(|c| c == "username"));

    let results = Recommender::default()
        .recommend_file(&artifact, "skincare", 5)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn empty_post_set_recommends_nothing() {
    let results = Recommender::default()
        .recommend_posts(&[], "anything at all", 5)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn top_n_zero_recommends_nothing() {
    let posts = vec![post("a", "coffee beans", 1, 1)];
    let results = Recommender::default()
        .recommend_posts(&posts, "coffee", 0)
        .unwrap();
    assert!(results.is_empty());
}

// ============================================================
// Ingestion
// ============================================================

#[test]
fn preprocess_then_recommend() {
    let dir = TempDir::new().unwrap();
    let raw = write_file(
        &dir,
        "raw.csv",
        "Platform,Username,Post Date,Caption Text,Post Type,Likes,Comments,Hashtags\n\
         instagram,glowgirl,2024-03-15,Loving my new skincare routine 😍 https://shop.example,image,120,12,#Skincare #Beauty\n\
         instagram,glowgirl,2024-03-15,Loving my new skincare routine 😍 https://shop.example,image,120,12,#Skincare #Beauty\n\
         tiktok,gearhead,03/04/2024,New gadget unboxing!,video,80.9,not-a-number,#tech\n",
    );
    let artifact = dir.path().join("out").join("processed.csv");

    let summary = preprocess(&raw, &artifact).unwrap();
    assert_eq!(summary.rows_read, 3);
    assert_eq!(summary.rows_written, 2);
    assert!(summary.synthesized_columns.is_empty());

    let posts = load_cleaned_posts(&artifact).unwrap();
    assert_eq!(posts.len(), 2);

    let glow = &posts[0];
    assert_eq!(glow.post.post_date, "15/03/2024");
    assert_eq!(glow.cleaned_caption, "loving my new skincare routine");
    assert_eq!(glow.cleaned_hashtags, "skincare beauty");

    let gear = &posts[1];
    // Month-first reading of an ambiguous slash date
    assert_eq!(gear.post.post_date, "04/03/2024");
    assert_eq!(gear.post.likes, 80);
    assert_eq!(gear.post.comments, 0);

    let results = Recommender::default()
        .recommend_file(&artifact, "beauty skincare brand", 5)
        .unwrap();
    assert_eq!(results[0].username, "glowgirl");
}

#[test]
fn preprocess_synthesizes_missing_columns() {
    let dir = TempDir::new().unwrap();
    let raw = write_file(
        &dir,
        "raw.csv",
        "username,caption_text,likes\nyogi,sunrise flow,40\n",
    );
    let artifact = dir.path().join("processed.csv");

    let summary = preprocess(&raw, &artifact).unwrap();
    for column in ["platform", "post_date", "post_type", "comments", "hashtags"] {
        assert!(
            summary.synthesized_columns.iter().any(|c| c == column),
            "expected {column} to be synthesized"
        );
    }

    let posts = load_cleaned_posts(&artifact).unwrap();
    assert_eq!(posts[0].post.username, "yogi");
    assert_eq!(posts[0].post.hashtags, "");
    assert_eq!(posts[0].cleaned_caption, "sunrise flow");
}

#[test]
fn preprocess_empty_export_writes_readable_artifact() {
    let dir = TempDir::new().unwrap();
    let raw = write_file(
        &dir,
        "raw.csv",
        "platform,username,post_date,caption_text,post_type,likes,comments,hashtags\n",
    );
    let artifact = dir.path().join("processed.csv");

    let summary = preprocess(&raw, &artifact).unwrap();
    assert_eq!(summary.rows_written, 0);

    let results = Recommender::default()
        .recommend_file(&artifact, "anything", 5)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn preprocess_missing_raw_file() {
    let dir = TempDir::new().unwrap();
    let err = preprocess(&dir.path().join("nope.csv"), &dir.path().join("out.csv")).unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================
// Error kinds
// ============================================================

#[test]
fn missing_artifact_is_data_source_not_found() {
    let err = Recommender::default()
        .recommend_file(Path::new("/definitely/not/here.csv"), "coffee", 5)
        .unwrap_err();
    assert!(matches!(err, RecommendError::DataSourceNotFound(_)));
}

#[test]
fn artifact_without_cleaned_caption_is_schema_violation() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad.csv",
        "username,likes,comments,cleaned_hashtags\nx,1,1,tag\n",
    );

    let err = Recommender::default()
        .recommend_file(&path, "coffee", 5)
        .unwrap_err();
    match err {
        RecommendError::SchemaViolation { column } => assert_eq!(column, "cleaned_caption"),
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn header_only_artifact_recommends_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.csv", &format!("{ARTIFACT_HEADER}\n"));

    let results = Recommender::default()
        .recommend_file(&path, "coffee", 5)
        .unwrap();
    assert!(results.is_empty());
}

// ============================================================
// Scorecards
// ============================================================

#[test]
fn scorecard_lookup_ignores_case() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "scores.csv",
        "username,score,avg_likes,total_likes,post_count,total_comments,avg_comments\n\
         janedoe,87.5,120.5,1205,10,300,30.0\n\
         JANEDOE,1.0,1.0,1,1,1,1.0\n",
    );

    let table = ScorecardTable::load(&path).unwrap();
    let record = table.lookup("JaneDoe").unwrap();

    assert_eq!(record.username, "janedoe");
    assert_eq!(record.score, 87.5);
    assert_eq!(record.avg_likes, 120.5);
    assert_eq!(record.total_likes, 1205);
    assert_eq!(record.post_count, 10);
    assert_eq!(record.total_comments, 300);
    assert_eq!(record.avg_comments, 30.0);
}

#[test]
fn scorecard_miss_is_none() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "scores.csv", "username,score\nsomeone,1.0\n");
    let table = ScorecardTable::load(&path).unwrap();
    assert!(table.lookup("nobody").is_none());
}

#[test]
fn scorecard_missing_file_is_not_found() {
    let err = ScorecardTable::load(Path::new("/no/such/scores.csv")).unwrap_err();
    assert!(err.is_not_found());
}
