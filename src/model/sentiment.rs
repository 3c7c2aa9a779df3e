use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::classification::Classification;

/// Row of `fear_greed_index.csv` as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSentimentRow {
    pub date: String,
    pub classification: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
    pub date: NaiveDate,
    pub classification: Classification,
    pub value: Decimal,
}
