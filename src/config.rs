use std::path::PathBuf;

use clap::Parser;

pub const SENTIMENT_FILE: &str = "fear_greed_index.csv";
pub const TRADES_FILE: &str = "historical_data.csv";

/// Correlate closed-trade performance with the daily Fear & Greed index.
#[derive(Debug, Clone, Parser)]
#[command(name = "sentiment", version)]
pub struct Args {
    /// Daily sentiment index CSV (date, classification, value)
    #[arg(long, default_value = SENTIMENT_FILE)]
    pub sentiment: PathBuf,

    /// Trade log CSV (needs `Timestamp IST` and `Closed PnL`)
    #[arg(long, default_value = TRADES_FILE)]
    pub trades: PathBuf,

    /// Directory the PNG charts are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Where the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub sentiment_path: PathBuf,
    pub trades_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            sentiment_path: PathBuf::from(SENTIMENT_FILE),
            trades_path: PathBuf::from(TRADES_FILE),
            output_dir: PathBuf::from("."),
        }
    }
}

impl From<Args> for AnalysisConfig {
    fn from(args: Args) -> Self {
        AnalysisConfig {
            sentiment_path: args.sentiment,
            trades_path: args.trades,
            output_dir: args.output_dir,
        }
    }
}
