use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use inzluenze::config::Config;
use inzluenze::data::ingest;
use inzluenze::data::scorecard::ScorecardTable;
use inzluenze::output::terminal;
use inzluenze::pipeline::recommend::Recommender;

/// Inzluenze: influencer recommendations for a business.
///
/// Matches a free-text business description against influencers' post
/// history and ranks them by relevance blended with engagement.
#[derive(Parser)]
#[command(name = "inzluenze", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw post export into the recommender's input file
    Preprocess {
        /// Raw CSV export (one row per post)
        input: PathBuf,

        /// Where to write the preprocessed CSV (default: INZLUENZE_DATA_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Recommend influencers for a business description
    Recommend {
        /// Free-text description of the business
        description: String,

        /// Number of influencers to return (default: INZLUENZE_TOP_N or 5)
        #[arg(long)]
        top_n: Option<usize>,

        /// Preprocessed data file (default: INZLUENZE_DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Look up an influencer's precomputed scorecard
    Score {
        /// Username, matched case-insensitively
        username: String,

        /// Scorecard table (default: INZLUENZE_SCORES_PATH)
        #[arg(long)]
        scores: Option<PathBuf>,
    },

    /// Run the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inzluenze=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    config.validate()?;

    match cli.command {
        Commands::Preprocess { input, output } => {
            let output = output.unwrap_or_else(|| config.data_path.clone());
            info!(input = %input.display(), output = %output.display(), "Preprocessing");

            let summary = ingest::preprocess(&input, &output)?;

            for column in &summary.synthesized_columns {
                println!("{}", format!("Added missing column: '{column}'").yellow());
            }
            println!(
                "Preprocessed {} rows ({} after removing duplicates)",
                summary.rows_read, summary.rows_written
            );
            println!("Saved to: {}", output.display());
        }

        Commands::Recommend {
            description,
            top_n,
            data,
        } => {
            let data_path = data.unwrap_or_else(|| config.data_path.clone());
            let top_n = top_n.unwrap_or(config.default_top_n);

            let recommender = Recommender::from_config(&config);
            let results = recommender.recommend_file(&data_path, &description, top_n)?;
            terminal::display_recommendations(&description, &results);
        }

        Commands::Score { username, scores } => {
            let scores_path = scores.unwrap_or_else(|| config.scores_path.clone());
            let table = ScorecardTable::load(&scores_path)?;

            match table.lookup(&username) {
                Some(record) => terminal::display_scorecard(record),
                None => {
                    println!(
                        "{}",
                        format!("Influencer '{username}' not found in the dataset").yellow()
                    );
                    println!("  Searched {} scorecards in {}", table.len(), scores_path.display());
                }
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            inzluenze::web::run_server(config, port, &bind).await?;
        }
    }

    Ok(())
}
