use std::collections::HashMap;

use chrono::NaiveDate;
use itertools::Itertools;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{AnalysisError, Result};
use crate::model::decimal::round_report;
use crate::model::sentiment::SentimentRecord;
use crate::model::summary::SummaryRecord;
use crate::model::trade::{MergedRecord, TradeRecord};

pub fn filter_closed(trades: &[TradeRecord]) -> Vec<TradeRecord> {
    let closed = trades
        .iter()
        .filter(|t| t.is_closed())
        .cloned()
        .collect::<Vec<_>>();
    debug!(
        kept = closed.len(),
        dropped = trades.len() - closed.len(),
        "zero PnL trades removed"
    );
    closed
}

/// Indexes sentiment by day. A day listed twice is an error rather than a
/// silent fan-out of every trade on that day.
pub fn index_sentiment(sentiment: &[SentimentRecord]) -> Result<HashMap<NaiveDate, &SentimentRecord>> {
    let mut by_date = HashMap::with_capacity(sentiment.len());
    for record in sentiment {
        if by_date.insert(record.date, record).is_some() {
            return Err(AnalysisError::DuplicateSentimentDate { date: record.date });
        }
    }
    Ok(by_date)
}

/// Pairs every trade with its day's sentiment. Trades without a day key or
/// without sentiment for that day are dropped.
pub fn join(trades: &[TradeRecord], sentiment: &[SentimentRecord]) -> Result<Vec<MergedRecord>> {
    let by_date = index_sentiment(sentiment)?;

    let mut missing_timestamp = 0usize;
    let mut unmatched = 0usize;
    let merged = trades
        .iter()
        .filter_map(|trade| {
            let Some(day) = trade.day_key() else {
                missing_timestamp += 1;
                return None;
            };
            let Some(s) = by_date.get(&day) else {
                unmatched += 1;
                return None;
            };
            Some(MergedRecord {
                trade: trade.clone(),
                classification: s.classification.clone(),
                sentiment_value: s.value,
            })
        })
        .collect::<Vec<_>>();

    debug!(missing_timestamp, unmatched, "trades without sentiment removed");
    info!(
        "Data merged successfully. Total closed trades for analysis: {}",
        merged.len()
    );
    Ok(merged)
}

pub fn aggregate(merged: &[MergedRecord]) -> Vec<SummaryRecord> {
    merged
        .iter()
        .into_group_map_by(|m| m.classification.clone())
        .into_iter()
        .map(|(classification, group)| {
            let trade_count = group.len();
            let total: Decimal = group.iter().map(|m| m.trade.closed_pnl).sum();
            let wins = group.iter().filter(|m| m.trade.is_winner()).count();
            let count = Decimal::from(trade_count);

            SummaryRecord {
                classification,
                total_pnl: round_report(total),
                average_pnl: round_report(total / count),
                trade_count,
                win_rate: round_report(Decimal::from(wins) * Decimal::ONE_HUNDRED / count),
            }
        })
        .collect()
}

/// Sorts summaries from Extreme Fear to Extreme Greed. Unknown labels go last.
pub fn order(mut summaries: Vec<SummaryRecord>) -> Vec<SummaryRecord> {
    summaries.sort_by(|a, b| a.classification.cmp(&b.classification));
    for s in summaries.iter().filter(|s| !s.classification.is_known()) {
        warn!(label = s.classification.label(), "unrecognized sentiment classification");
    }
    summaries
}

pub fn summarize(trades: &[TradeRecord], sentiment: &[SentimentRecord]) -> Result<Vec<SummaryRecord>> {
    let closed = filter_closed(trades);
    let merged = join(&closed, sentiment)?;
    Ok(order(aggregate(&merged)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::classification::Classification;
    use crate::normalize::parse_trade_timestamp;
    use lazy_static::lazy_static;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn next_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    lazy_static! {
        static ref FEAR_THEN_GREED: Vec<SentimentRecord> = vec![
            sentiment_on(day(), "Fear", 30),
            sentiment_on(next_day(), "Greed", 60),
        ];
    }

    fn sentiment_on(date: NaiveDate, label: &str, value: i64) -> SentimentRecord {
        SentimentRecord {
            date,
            classification: Classification::from_label(label),
            value: Decimal::from(value),
        }
    }

    fn trade(timestamp: &str, pnl: Decimal) -> TradeRecord {
        TradeRecord {
            timestamp: parse_trade_timestamp(timestamp).ok(),
            closed_pnl: pnl,
            account: None,
            coin: None,
            side: None,
        }
    }

    fn merged(label: &str, pnl: Decimal) -> MergedRecord {
        MergedRecord {
            trade: trade("01-01-2024 12:00", pnl),
            classification: Classification::from_label(label),
            sentiment_value: dec!(50),
        }
    }

    #[test]
    fn test_fear_day_scenario() {
        let sentiment = vec![sentiment_on(day(), "Fear", 20)];
        let trades = vec![
            trade("01-01-2024 09:15", dec!(100)),
            trade("01-01-2024 13:40", dec!(-50)),
            trade("01-01-2024 23:59", dec!(0)),
        ];

        let summaries = summarize(&trades, &sentiment).unwrap();
        assert_eq!(
            summaries,
            vec![SummaryRecord {
                classification: Classification::Fear,
                total_pnl: dec!(50.00),
                average_pnl: dec!(25.00),
                trade_count: 2,
                win_rate: dec!(50.00),
            }]
        );
    }

    #[test]
    fn test_filter_closed_drops_zero_pnl() {
        let trades = vec![
            trade("01-01-2024 09:15", dec!(0)),
            trade("01-01-2024 09:16", dec!(-0.01)),
            trade("01-01-2024 09:17", dec!(0.00)),
        ];
        let closed = filter_closed(&trades);
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].closed_pnl, dec!(-0.01));
    }

    #[test]
    fn test_unparseable_timestamp_is_excluded() {
        let sentiment = vec![sentiment_on(day(), "Greed", 70)];
        let trades = vec![
            trade("01-01-2024 10:00", dec!(10)),
            trade("2024-01-01T10:00", dec!(999)),
        ];

        let merged = join(&trades, &sentiment).unwrap();
        assert_eq!(merged.len(), 1);

        let summaries = summarize(&trades, &sentiment).unwrap();
        assert_eq!(summaries[0].trade_count, 1);
        assert_eq!(summaries[0].total_pnl, dec!(10));
    }

    #[test]
    fn test_join_drops_days_without_sentiment() {
        let sentiment = vec![sentiment_on(day(), "Neutral", 50)];
        let trades = vec![
            trade("01-01-2024 10:00", dec!(1)),
            trade("02-01-2024 10:00", dec!(2)),
        ];

        let merged = join(&trades, &sentiment).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].classification, Classification::Neutral);
        assert_eq!(merged[0].sentiment_value, dec!(50));
    }

    #[test]
    fn test_join_uses_ist_calendar_day() {
        let trades = vec![
            trade("01-01-2024 23:59", dec!(1)),
            trade("02-01-2024 00:00", dec!(1)),
        ];

        let merged = join(&trades, &FEAR_THEN_GREED).unwrap();
        assert_eq!(merged[0].classification, Classification::Fear);
        assert_eq!(merged[1].classification, Classification::Greed);
    }

    #[test]
    fn test_duplicate_sentiment_date_fails() {
        let sentiment = vec![sentiment_on(day(), "Fear", 30), sentiment_on(day(), "Greed", 60)];
        let trades = vec![trade("01-01-2024 10:00", dec!(1))];

        match join(&trades, &sentiment) {
            Err(AnalysisError::DuplicateSentimentDate { date }) => assert_eq!(date, day()),
            other => panic!("expected DuplicateSentimentDate, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregate_counts_and_sums_per_class() {
        let records = vec![
            merged("Greed", dec!(10.10)),
            merged("Fear", dec!(-4)),
            merged("Greed", dec!(20.20)),
            merged("Greed", dec!(-0.30)),
            merged("Fear", dec!(-6)),
        ];

        let summaries = order(aggregate(&records));
        assert_eq!(summaries.len(), 2);

        let fear = &summaries[0];
        assert_eq!(fear.classification, Classification::Fear);
        assert_eq!(fear.trade_count, 2);
        assert_eq!(fear.total_pnl, dec!(-10));
        assert_eq!(fear.average_pnl, dec!(-5));
        assert_eq!(fear.win_rate, dec!(0));

        let greed = &summaries[1];
        assert_eq!(greed.trade_count, 3);
        assert_eq!(greed.total_pnl, dec!(30.00));
        assert_eq!(greed.average_pnl, dec!(10.00));
        assert_eq!(greed.win_rate, dec!(66.67));
    }

    #[test]
    fn test_average_rounds_half_to_even() {
        let records = vec![
            merged("Fear", dec!(0.125)),
            merged("Greed", dec!(0.01)),
            merged("Greed", dec!(0.02)),
        ];
        let summaries = order(aggregate(&records));
        assert_eq!(summaries[0].average_pnl, dec!(0.12));
        assert_eq!(summaries[1].average_pnl, dec!(0.02));
    }

    #[test]
    fn test_order_is_fixed_and_omits_absent_labels() {
        let records = vec![
            merged("Extreme Greed", dec!(5)),
            merged("Neutral", dec!(-500)),
            merged("Extreme Fear", dec!(1)),
            merged("Euphoria", dec!(3)),
        ];

        let labels = order(aggregate(&records))
            .into_iter()
            .map(|s| s.classification.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Extreme Fear", "Neutral", "Extreme Greed", "Euphoria"]);
    }

    #[test]
    fn test_sentiment_fixture_days_are_distinct() {
        let by_date = index_sentiment(&FEAR_THEN_GREED).unwrap();
        assert_eq!(by_date.len(), 2);
        assert_eq!(by_date[&next_day()].classification, Classification::Greed);
    }

    #[test]
    fn test_win_rate_bounds() {
        let records = vec![
            merged("Fear", dec!(1)),
            merged("Fear", dec!(2)),
            merged("Greed", dec!(-1)),
        ];
        for s in aggregate(&records) {
            assert!(s.win_rate >= Decimal::ZERO && s.win_rate <= Decimal::ONE_HUNDRED);
        }
    }
}
