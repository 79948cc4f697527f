// Property: the consolidated reduction must equal the sum of per-region
// reductions with each region's derived cross-rate applied afterwards.
// Decimal arithmetic makes the comparison exact. Bonus accounts are kept
// out of the generated data; the two modes treat bonus GMV differently by
// design.

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use helpers::record;
use revboard::core::{CrossRates, Region};
use revboard::modules::dashboard::models::AccountFilter;
use revboard::modules::dashboard::services::{calculate_consolidated_totals, calculate_totals};
use revboard::modules::records::models::RevenueRecord;

fn arbitrary_record() -> impl Strategy<Value = RevenueRecord> {
    (
        0usize..3,
        1u32..40,
        0u64..1_000_000,
        0i64..500,
        0u64..50_000,
        1u32..=28,
    )
        .prop_map(|(region_idx, account_num, gmv_cents, sales, commission_cents, day)| {
            let region = Region::ALL[region_idx];
            let account_id = match region {
                Region::Usa => format!("C-{:03}", account_num),
                Region::Uk => format!("UK-{:03}", account_num),
                Region::Ale => format!("ALE-{:03}", account_num),
            };
            let gmv = Decimal::new(gmv_cents as i64, 2);
            let commission = Decimal::new(commission_cents as i64, 2);
            // The populated commission column follows the region convention
            let (primary, secondary) = match region {
                Region::Usa => (commission, Decimal::ZERO),
                Region::Uk | Region::Ale => (Decimal::ZERO, commission),
            };
            record(
                &account_id,
                NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
                gmv,
                sales,
                primary,
                secondary,
            )
        })
}

proptest! {
    #[test]
    fn test_consolidated_equals_converted_per_region_sums(
        records in proptest::collection::vec(arbitrary_record(), 0..50),
        base_rate_tenths in 1u32..200,
    ) {
        let base_rate = Decimal::new(base_rate_tenths as i64, 1);
        let rates = CrossRates::from_base(base_rate);

        let consolidated =
            calculate_consolidated_totals(&records, &AccountFilter::All, base_rate);

        let mut expected_gmv = Decimal::ZERO;
        let mut expected_commission = Decimal::ZERO;
        let mut expected_sales = 0i64;

        for region in Region::ALL {
            let regional: Vec<RevenueRecord> = records
                .iter()
                .filter(|r| Region::from_account_id(&r.account_id) == region)
                .cloned()
                .collect();
            let totals = calculate_totals(&regional, &AccountFilter::All, region);
            let rate = rates.for_region(region);

            expected_gmv += totals.total_gmv * rate;
            expected_commission += match region {
                Region::Usa => totals.total_commission_primary * rate,
                Region::Uk | Region::Ale => totals.total_commission_secondary * rate,
            };
            expected_sales += totals.total_sales;
        }

        prop_assert_eq!(consolidated.total_gmv, expected_gmv);
        prop_assert_eq!(consolidated.total_commission, expected_commission);
        prop_assert_eq!(consolidated.total_sales, expected_sales);
    }

    #[test]
    fn test_consolidated_totals_scale_with_the_base_rate(
        records in proptest::collection::vec(arbitrary_record(), 0..30),
    ) {
        let at_base = calculate_consolidated_totals(
            &records, &AccountFilter::All, Decimal::new(56, 1));
        let doubled = calculate_consolidated_totals(
            &records, &AccountFilter::All, Decimal::new(112, 1));

        prop_assert_eq!(doubled.total_gmv, at_base.total_gmv * Decimal::from(2));
        prop_assert_eq!(doubled.total_commission, at_base.total_commission * Decimal::from(2));
        prop_assert_eq!(doubled.total_sales, at_base.total_sales);
    }
}
