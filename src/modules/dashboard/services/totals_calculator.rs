use rust_decimal::Decimal;

use crate::core::{CrossRates, Region};
use crate::modules::dashboard::models::{AccountFilter, BonusTotals, ConsolidatedTotals, Totals};
use crate::modules::records::models::RevenueRecord;

/// Reduce a single region's records into native-currency totals.
///
/// The region's bonus account is excluded from GMV (its gmv is a cash
/// bonus, not merchandise) but its sales and commission columns still
/// count. An empty record set reduces to all zeros.
pub fn calculate_totals(
    records: &[RevenueRecord],
    account_filter: &AccountFilter,
    region: Region,
) -> Totals {
    let bonus_account_id = region.bonus_account_id();
    let mut totals = Totals::default();

    for record in records
        .iter()
        .filter(|r| account_filter.matches(&r.account_id))
    {
        if record.account_id != bonus_account_id {
            totals.total_gmv += record.gmv;
        }
        totals.total_sales += record.sales;
        totals.total_commission_primary += record.commission_primary;
        totals.total_commission_secondary += record.commission_secondary;
    }

    totals
}

/// Reduce a cross-region record set into reporting-currency totals.
///
/// Each record's region is inferred from its account-id prefix rather than
/// from the tagged account list, so rows older than the region tag still
/// aggregate correctly. The commission tier and cross-rate follow the
/// inferred region; the two tiers collapse into one converted column.
/// Sales are counts and are never converted.
pub fn calculate_consolidated_totals(
    records: &[RevenueRecord],
    account_filter: &AccountFilter,
    base_rate: Decimal,
) -> ConsolidatedTotals {
    let rates = CrossRates::from_base(base_rate);
    let mut totals = ConsolidatedTotals::default();

    for record in records
        .iter()
        .filter(|r| account_filter.matches(&r.account_id))
    {
        let region = Region::from_account_id(&record.account_id);
        let rate = rates.for_region(region);

        totals.total_gmv += record.gmv * rate;
        totals.total_sales += record.sales;
        totals.total_commission += record.regional_commission(region) * rate;
    }

    totals
}

/// Sum the cash bonuses paid through the region's sentinel account.
pub fn calculate_bonus_totals(records: &[RevenueRecord], region: Region) -> BonusTotals {
    let bonus_account_id = region.bonus_account_id();
    let total_bonus = records
        .iter()
        .filter(|r| r.account_id == bonus_account_id)
        .map(|r| r.gmv)
        .sum();

    BonusTotals { total_bonus }
}
