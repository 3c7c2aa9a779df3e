use std::path::PathBuf;

use tracing::info;

pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod report;

use config::AnalysisConfig;
use error::Result;
use model::summary::SummaryRecord;

/// Load, clean, join and aggregate. Nothing is printed or written.
pub fn analyze(config: &AnalysisConfig) -> Result<Vec<SummaryRecord>> {
    let data = loader::load(&config.sentiment_path, &config.trades_path)?;
    analysis::summarize(&data.trades, &data.sentiment)
}

/// The whole run: summary table on stdout, then both charts. Returns the
/// chart paths.
pub fn run(config: &AnalysisConfig) -> Result<Vec<PathBuf>> {
    let summaries = analyze(config)?;
    report::print_summary(&summaries);

    let charts = chart::render(&summaries, &config.output_dir)?;
    info!(charts = charts.len(), "analysis complete");
    Ok(charts)
}
