use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub const REPORT_DP: u32 = 2;

/// Rounds half to even, the mode used for all reported figures.
pub fn round_report(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REPORT_DP, RoundingStrategy::MidpointNearestEven)
}

/// Parses plain (`-12.5`) and scientific (`1.2e-3`) notation.
pub fn parse_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let raw = raw.trim();
    Decimal::from_str(raw).or_else(|err| {
        if raw.contains(['e', 'E']) {
            Decimal::from_scientific(raw)
        } else {
            Err(err)
        }
    })
}

/// Chart boundary conversion; the analysis itself never leaves `Decimal`.
pub fn to_chart_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
