use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::model::sentiment::{RawSentimentRow, SentimentRecord};
use crate::model::trade::{RawTradeRow, TradeRecord};
use crate::normalize::{normalize_sentiment, normalize_trade};

#[derive(Debug, Clone)]
pub struct LoadedData {
    pub sentiment: Vec<SentimentRecord>,
    pub trades: Vec<TradeRecord>,
}

/// Fails with [`AnalysisError::MissingInput`] for the first path that does not exist.
pub fn ensure_inputs_exist(paths: &[&Path]) -> Result<()> {
    match paths.iter().find(|p| !p.exists()) {
        Some(path) => Err(AnalysisError::MissingInput {
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}

/// Reads every row of `path`, handing each one to `normalize` with its line number.
fn read_rows<R, T, F>(path: &Path, mut normalize: F) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    F: FnMut(u64, R) -> Result<T>,
{
    let csv_error = |source| AnalysisError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(csv_error)? {
        let line = record.position().map_or(0, |p| p.line());
        let raw: R = record.deserialize(Some(&headers)).map_err(csv_error)?;
        rows.push(normalize(line, raw)?);
    }
    Ok(rows)
}

pub fn load_sentiment(path: &Path) -> Result<Vec<SentimentRecord>> {
    let records = read_rows(path, |line, raw: RawSentimentRow| {
        normalize_sentiment(line, &raw)
    })?;
    debug!(path = %path.display(), rows = records.len(), "sentiment index read");
    Ok(records)
}

pub fn load_trades(path: &Path) -> Result<Vec<TradeRecord>> {
    let records = read_rows(path, normalize_trade)?;
    debug!(
        path = %path.display(),
        rows = records.len(),
        missing_timestamp = records.iter().filter(|t| t.timestamp.is_none()).count(),
        "trade log read"
    );
    Ok(records)
}

pub fn load(sentiment_path: &Path, trades_path: &Path) -> Result<LoadedData> {
    ensure_inputs_exist(&[sentiment_path, trades_path])?;

    let sentiment = load_sentiment(sentiment_path)?;
    let trades = load_trades(trades_path)?;
    info!(
        sentiment_rows = sentiment.len(),
        trade_rows = trades.len(),
        "Data loaded successfully."
    );

    Ok(LoadedData { sentiment, trades })
}
