use rust_decimal::Decimal;
use serde::Serialize;

/// Single-region reduction of a record set, native currency.
///
/// Recomputed in full on every filter change; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_gmv: Decimal,
    pub total_sales: i64,
    pub total_commission_primary: Decimal,
    pub total_commission_secondary: Decimal,
}

/// Cross-region reduction, already converted into the reporting currency.
///
/// The two commission tiers collapse into a single column here: once
/// converted, the regions are no longer distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsolidatedTotals {
    pub total_gmv: Decimal,
    pub total_sales: i64,
    pub total_commission: Decimal,
}

/// Cash bonuses paid through the region's sentinel bonus account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BonusTotals {
    pub total_bonus: Decimal,
}
