// Single-region and consolidated reductions, bonus handling included.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{date, record};
use rust_decimal_macros::dec;

use revboard::core::Region;
use revboard::modules::dashboard::models::AccountFilter;
use revboard::modules::dashboard::services::{
    calculate_bonus_totals, calculate_consolidated_totals, calculate_totals,
};

#[test]
fn test_empty_record_set_reduces_to_zero() {
    let totals = calculate_totals(&[], &AccountFilter::All, Region::Usa);
    assert_eq!(totals.total_gmv, dec!(0));
    assert_eq!(totals.total_sales, 0);
    assert_eq!(totals.total_commission_primary, dec!(0));
    assert_eq!(totals.total_commission_secondary, dec!(0));

    let consolidated = calculate_consolidated_totals(&[], &AccountFilter::All, dec!(5.6));
    assert_eq!(consolidated.total_gmv, dec!(0));
    assert_eq!(consolidated.total_sales, 0);
    assert_eq!(consolidated.total_commission, dec!(0));
}

#[test]
fn test_uk_single_region_scenario() {
    let records = vec![record(
        "UK-001",
        date(2026, 8, 10),
        dec!(100),
        1,
        dec!(0),
        dec!(30),
    )];

    let totals = calculate_totals(&records, &AccountFilter::All, Region::Uk);

    assert_eq!(totals.total_gmv, dec!(100));
    assert_eq!(totals.total_sales, 1);
    assert_eq!(totals.total_commission_primary, dec!(0));
    assert_eq!(totals.total_commission_secondary, dec!(30));
}

#[test]
fn test_bonus_account_gmv_excluded_but_commissions_kept() {
    // Bonus entries carry a synthetic sales of 1 and zero commission
    let records = vec![
        record("C-001", date(2026, 8, 10), dec!(200), 4, dec!(29), dec!(0)),
        record("C-BONUSES", date(2026, 8, 10), dec!(50), 1, dec!(0), dec!(0)),
    ];

    let totals = calculate_totals(&records, &AccountFilter::All, Region::Usa);

    assert_eq!(totals.total_gmv, dec!(200));
    assert_eq!(totals.total_sales, 5);
    assert_eq!(totals.total_commission_primary, dec!(29));
}

#[test]
fn test_uk_bonus_sentinel_differs_from_usa() {
    let records = vec![
        record("UK-001", date(2026, 8, 10), dec!(80), 2, dec!(0), dec!(24)),
        record("UK-BONUSES", date(2026, 8, 10), dec!(10), 1, dec!(0), dec!(0)),
        // A USA-style bonus id is not the UK sentinel and counts as GMV here
        record("C-BONUSES", date(2026, 8, 10), dec!(5), 1, dec!(0), dec!(0)),
    ];

    let totals = calculate_totals(&records, &AccountFilter::All, Region::Uk);

    assert_eq!(totals.total_gmv, dec!(85));
}

#[test]
fn test_bonus_totals_sum_sentinel_gmv_only() {
    let records = vec![
        record("C-001", date(2026, 8, 10), dec!(200), 4, dec!(29), dec!(0)),
        record("C-BONUSES", date(2026, 8, 10), dec!(50), 1, dec!(0), dec!(0)),
        record("C-BONUSES", date(2026, 8, 11), dec!(25), 1, dec!(0), dec!(0)),
    ];

    let bonus = calculate_bonus_totals(&records, Region::Usa);

    assert_eq!(bonus.total_bonus, dec!(75));
}

#[test]
fn test_account_filter_narrows_the_reduction() {
    let records = vec![
        record("C-001", date(2026, 8, 10), dec!(100), 1, dec!(10), dec!(0)),
        record("C-002", date(2026, 8, 10), dec!(300), 2, dec!(30), dec!(0)),
    ];

    let totals = calculate_totals(
        &records,
        &AccountFilter::Id("C-002".to_string()),
        Region::Usa,
    );

    assert_eq!(totals.total_gmv, dec!(300));
    assert_eq!(totals.total_sales, 2);
    assert_eq!(totals.total_commission_primary, dec!(30));
}

#[test]
fn test_consolidated_scenario_at_base_rate_5_6() {
    let records = vec![
        record("C-001", date(2026, 8, 10), dec!(100), 1, dec!(29), dec!(0)),
        record("UK-001", date(2026, 8, 10), dec!(50), 1, dec!(0), dec!(15)),
    ];

    let totals = calculate_consolidated_totals(&records, &AccountFilter::All, dec!(5.6));

    // 100 * 5.6 + 50 * (5.6 * 1.36) = 560 + 380.8
    assert_eq!(totals.total_gmv, dec!(940.8));
    // 29 * 5.6 + 15 * 7.616 = 162.4 + 114.24
    assert_eq!(totals.total_commission, dec!(276.64));
    assert_eq!(totals.total_sales, 2);
}

#[test]
fn test_consolidated_region_inference_ignores_missing_tags() {
    // ALE records convert at the EUR rate and use the secondary tier
    let records = vec![record(
        "ALE-001",
        date(2026, 8, 10),
        dec!(100),
        1,
        dec!(0),
        dec!(20),
    )];

    let totals = calculate_consolidated_totals(&records, &AccountFilter::All, dec!(5));

    assert_eq!(totals.total_gmv, dec!(100) * dec!(5.9));
    assert_eq!(totals.total_commission, dec!(20) * dec!(5.9));
}

#[test]
fn test_consolidated_sales_are_never_converted() {
    let records = vec![
        record("C-001", date(2026, 8, 10), dec!(10), 7, dec!(1), dec!(0)),
        record("UK-001", date(2026, 8, 10), dec!(10), 5, dec!(0), dec!(1)),
        record("ALE-001", date(2026, 8, 10), dec!(10), 3, dec!(0), dec!(1)),
    ];

    let totals = calculate_consolidated_totals(&records, &AccountFilter::All, dec!(5.6));

    assert_eq!(totals.total_sales, 15);
}
