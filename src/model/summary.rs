use rust_decimal::Decimal;

use super::classification::Classification;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub classification: Classification,
    pub total_pnl: Decimal,
    pub average_pnl: Decimal,
    pub trade_count: usize,
    /// Percentage in `[0, 100]`.
    pub win_rate: Decimal,
}

impl SummaryRecord {
    pub fn is_profitable(&self) -> bool {
        self.average_pnl > Decimal::ZERO
    }
}
