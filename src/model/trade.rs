use std::fmt;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::classification::Classification;

/// Row of `historical_data.csv`. Only the timestamp and closed PnL drive the
/// analysis; the remaining columns are carried along untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTradeRow {
    #[serde(rename = "Timestamp IST", default)]
    pub timestamp_ist: String,
    #[serde(rename = "Closed PnL")]
    pub closed_pnl: String,
    #[serde(rename = "Account", default)]
    pub account: Option<String>,
    #[serde(rename = "Coin", default)]
    pub coin: Option<String>,
    #[serde(rename = "Side", default)]
    pub side: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct TradeRecord {
    /// `None` when the source timestamp could not be parsed.
    pub timestamp: Option<DateTime<Tz>>,
    pub closed_pnl: Decimal,
    pub account: Option<String>,
    pub coin: Option<String>,
    pub side: Option<String>,
}

impl TradeRecord {
    pub fn day_key(&self) -> Option<NaiveDate> {
        self.timestamp.map(|t| t.date_naive())
    }

    pub fn is_closed(&self) -> bool {
        !self.closed_pnl.is_zero()
    }

    pub fn is_winner(&self) -> bool {
        self.closed_pnl > Decimal::ZERO
    }
}

impl fmt::Debug for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let t = self
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string());

        f.debug_struct("TradeRecord")
            .field("timestamp", &t)
            .field("closed_pnl", &self.closed_pnl)
            .field("coin", &self.coin)
            .field("side", &self.side)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub trade: TradeRecord,
    pub classification: Classification,
    pub sentiment_value: Decimal,
}
