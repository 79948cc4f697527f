use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One chart bucket, keyed by day-of-month (1-31).
///
/// Records from different months that share a day number land in the same
/// bucket. Existing charts depend on this, so the default bucketing keeps
/// it; `DatedChartPoint` is the alternate mode that separates months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub day: u32,
    pub gmv: Decimal,
    pub sales: i64,
    pub commission: Decimal,
}

impl ChartPoint {
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            gmv: Decimal::ZERO,
            sales: 0,
            commission: Decimal::ZERO,
        }
    }
}

/// One chart bucket keyed by full calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedChartPoint {
    pub date: NaiveDate,
    pub gmv: Decimal,
    pub sales: i64,
    pub commission: Decimal,
}

impl DatedChartPoint {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            gmv: Decimal::ZERO,
            sales: 0,
            commission: Decimal::ZERO,
        }
    }
}
