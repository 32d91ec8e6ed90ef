// Colored terminal output for ranked recommendations and scorecards.
//
// The CLI's display functions delegate here. The library itself never
// prints; only `main.rs` calls into this module.

use colored::Colorize;

use crate::data::scorecard::InfluencerScoreRecord;
use crate::scoring::ranking::RankedResult;

/// Display a ranked recommendation list in the terminal.
pub fn display_recommendations(description: &str, results: &[RankedResult]) {
    if results.is_empty() {
        println!("No recommendations found for the given description.");
        println!("  Check that the data file has posts (run `inzluenze preprocess` first).");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} influencers ===", results.len()).bold()
    );
    println!("  {}", super::truncate_chars(description, 70).dimmed());
    println!();

    println!(
        "  {:>4}  {:<28} {:>6}  {:>6}  {:>6}  {:>9}  {:>8}",
        "Rank".dimmed(),
        "Username".dimmed(),
        "Final".dimmed(),
        "Sim".dimmed(),
        "Engage".dimmed(),
        "Likes".dimmed(),
        "Comments".dimmed(),
    );
    println!("  {}", "-".repeat(80).dimmed());

    for (i, r) in results.iter().enumerate() {
        let final_str = format!("{:>6.3}", r.final_score);
        println!(
            "  {:>4}. @{:<26} {}  {:>6.3}  {:>6.3}  {:>9.1}  {:>8.1}",
            i + 1,
            super::truncate_chars(&r.username, 23),
            colorize_score(r.final_score, &final_str),
            r.similarity_score,
            r.engagement_score,
            r.avg_likes,
            r.avg_comments,
        );
    }
    println!();
}

/// Display one influencer's precomputed scorecard.
pub fn display_scorecard(record: &InfluencerScoreRecord) {
    println!(
        "\n{}",
        format!("=== Scorecard for @{} ===", record.username).bold()
    );
    println!("  Score: {:.3}", record.score);
    println!("  Posts: {}", record.post_count);
    println!(
        "  Likes: {} total, {:.1} avg",
        record.total_likes, record.avg_likes
    );
    println!(
        "  Comments: {} total, {:.1} avg",
        record.total_comments, record.avg_comments
    );
    println!();
}

/// Colour a formatted final score by band.
fn colorize_score(score: f64, formatted: &str) -> colored::ColoredString {
    if score >= 0.7 {
        formatted.bright_green().bold()
    } else if score >= 0.4 {
        formatted.bright_yellow()
    } else {
        formatted.normal()
    }
}
