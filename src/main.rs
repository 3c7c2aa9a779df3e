use std::process;

use anyhow::Result;
use clap::Parser;
use sentiment::config::{AnalysisConfig, Args, SENTIMENT_FILE, TRADES_FILE};
use sentiment::error::AnalysisError;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AnalysisConfig::from(Args::parse());

    match sentiment::run(&config) {
        Ok(charts) => {
            let names = charts
                .iter()
                .map(|p| format!("'{}'", p.display()))
                .collect::<Vec<_>>();
            println!(
                "\nAnalysis Complete! Two charts ({}) have been saved.",
                names.join(" and ")
            );
            Ok(())
        }
        Err(AnalysisError::MissingInput { path }) => {
            println!(
                "Error: {} not found. Make sure '{}' and '{}' are in the same folder as this program.",
                path.display(),
                SENTIMENT_FILE,
                TRADES_FILE
            );
            process::exit(0);
        }
        Err(err) => Err(err.into()),
    }
}
