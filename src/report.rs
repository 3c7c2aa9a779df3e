use std::fmt;

use crate::model::decimal::REPORT_DP;
use crate::model::summary::SummaryRecord;

pub const TITLE: &str = "PERFORMANCE SUMMARY BY MARKET SENTIMENT CLASSIFICATION";
const RULE_WIDTH: usize = 60;
const HEADERS: [&str; 5] = [
    "classification",
    "Total_PnL",
    "Average_PnL",
    "Trade_Count",
    "Win_Rate",
];

/// The bordered summary printed to stdout.
pub struct SummaryTable<'a>(pub &'a [SummaryRecord]);

impl SummaryTable<'_> {
    fn cells(&self) -> Vec<[String; 5]> {
        let dp = REPORT_DP as usize;
        self.0
            .iter()
            .map(|s| {
                [
                    s.classification.label().to_string(),
                    format!("{:.dp$}", s.total_pnl),
                    format!("{:.dp$}", s.average_pnl),
                    s.trade_count.to_string(),
                    format!("{:.dp$}", s.win_rate),
                ]
            })
            .collect()
    }
}

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.cells();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{TITLE}")?;

        let header = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{h:>w$}"))
            .collect::<Vec<_>>();
        writeln!(f, "{}", header.join("  "))?;
        for row in &rows {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:>w$}"))
                .collect::<Vec<_>>();
            writeln!(f, "{}", line.join("  "))?;
        }
        write!(f, "{rule}")
    }
}

pub fn print_summary(summaries: &[SummaryRecord]) {
    println!("{}", SummaryTable(summaries));
}
