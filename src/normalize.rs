//! Field parsing for both inputs.
//!
//! Every column is parsed under an explicit [`ParseMode`]. Strict columns
//! abort the run on a malformed value; lenient columns turn it into `None`
//! and let the row fall out at the join.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::{Asia::Kolkata, Tz};
use rust_decimal::Decimal;

use crate::error::{AnalysisError, Result};
use crate::model::classification::Classification;
use crate::model::decimal::parse_decimal;
use crate::model::sentiment::{RawSentimentRow, SentimentRecord};
use crate::model::trade::{RawTradeRow, TradeRecord};

pub const SENTIMENT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const TRADE_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Strict,
    Lenient,
}

/// One input column: its header and how malformed values are treated.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub mode: ParseMode,
}

pub const SENTIMENT_DATE: Column = Column { name: "date", mode: ParseMode::Strict };
pub const SENTIMENT_VALUE: Column = Column { name: "value", mode: ParseMode::Strict };
pub const TRADE_TIMESTAMP: Column = Column { name: "Timestamp IST", mode: ParseMode::Lenient };
pub const TRADE_CLOSED_PNL: Column = Column { name: "Closed PnL", mode: ParseMode::Strict };

impl Column {
    /// Applies `parse` to `raw`. Failures are an error in strict mode and
    /// `Ok(None)` in lenient mode.
    pub fn parse<T, E, F>(&self, line: u64, raw: &str, parse: F) -> Result<Option<T>>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: std::fmt::Display,
    {
        match parse(raw) {
            Ok(v) => Ok(Some(v)),
            Err(_) if self.mode == ParseMode::Lenient => Ok(None),
            Err(err) => Err(AnalysisError::InvalidField {
                line,
                column: self.name,
                value: raw.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Like [`Column::parse`] for columns that can never be lenient.
    fn require<T, E, F>(&self, line: u64, raw: &str, parse: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: std::fmt::Display,
    {
        self.parse(line, raw, parse)?
            .ok_or_else(|| AnalysisError::InvalidField {
                line,
                column: self.name,
                value: raw.to_string(),
                reason: "value is required".to_string(),
            })
    }
}

pub fn parse_sentiment_date(raw: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), SENTIMENT_DATE_FORMAT)
}

/// Parses an IST wall-clock timestamp such as `02-12-2024 22:50`.
pub fn parse_trade_timestamp(raw: &str) -> std::result::Result<DateTime<Tz>, String> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), TRADE_TIMESTAMP_FORMAT)
        .map_err(|e| e.to_string())?;
    Kolkata
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("{naive} is not a valid IST time"))
}

pub fn normalize_sentiment(line: u64, row: &RawSentimentRow) -> Result<SentimentRecord> {
    let date = SENTIMENT_DATE.require(line, &row.date, parse_sentiment_date)?;
    let value: Decimal = SENTIMENT_VALUE.require(line, &row.value, parse_decimal)?;

    Ok(SentimentRecord {
        date,
        classification: Classification::from_label(&row.classification),
        value,
    })
}

pub fn normalize_trade(line: u64, row: RawTradeRow) -> Result<TradeRecord> {
    let timestamp = TRADE_TIMESTAMP.parse(line, &row.timestamp_ist, parse_trade_timestamp)?;
    let closed_pnl = TRADE_CLOSED_PNL.require(line, &row.closed_pnl, parse_decimal)?;

    Ok(TradeRecord {
        timestamp,
        closed_pnl,
        account: row.account,
        coin: row.coin,
        side: row.side,
    })
}
