use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::core::{CrossRates, Region};
use crate::modules::dashboard::models::{ChartPoint, DatedChartPoint};
use crate::modules::records::models::RevenueRecord;

/// Bucket records by day-of-month into chart-ready points, ascending by day.
///
/// Without `rates`, gmv is summed raw and commission is the plain sum of
/// both tiers, valid only when the record set is known to belong to one
/// region. With `rates`, the per-record rate and commission tier follow the
/// consolidated-totals logic.
///
/// Bucketing is by the day number alone: the 5th of two different months
/// merges into one bucket. Existing charts depend on this, so it stays;
/// use `prepare_chart_data_by_date` to keep months apart.
pub fn prepare_chart_data(
    records: &[RevenueRecord],
    rates: Option<&CrossRates>,
) -> Vec<ChartPoint> {
    let mut buckets: BTreeMap<u32, ChartPoint> = BTreeMap::new();

    for record in records {
        let day = record.date.day();
        let (gmv, commission) = contribution(record, rates);

        let point = buckets.entry(day).or_insert_with(|| ChartPoint::empty(day));
        point.gmv += gmv;
        point.sales += record.sales;
        point.commission += commission;
    }

    buckets.into_values().collect()
}

/// Alternate bucketing keyed by full calendar date, ascending.
pub fn prepare_chart_data_by_date(
    records: &[RevenueRecord],
    rates: Option<&CrossRates>,
) -> Vec<DatedChartPoint> {
    let mut buckets: BTreeMap<chrono::NaiveDate, DatedChartPoint> = BTreeMap::new();

    for record in records {
        let (gmv, commission) = contribution(record, rates);

        let point = buckets
            .entry(record.date)
            .or_insert_with(|| DatedChartPoint::empty(record.date));
        point.gmv += gmv;
        point.sales += record.sales;
        point.commission += commission;
    }

    buckets.into_values().collect()
}

fn contribution(record: &RevenueRecord, rates: Option<&CrossRates>) -> (Decimal, Decimal) {
    match rates {
        None => (
            record.gmv,
            record.commission_primary + record.commission_secondary,
        ),
        Some(rates) => {
            let region = Region::from_account_id(&record.account_id);
            let rate = rates.for_region(region);
            (record.gmv * rate, record.regional_commission(region) * rate)
        }
    }
}
