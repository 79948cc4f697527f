use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::modules::accounts::models::Account;
use crate::modules::dashboard::models::{DateFilter, DateRange, RecordFilter, StatusFilter};
use crate::modules::records::models::RevenueRecord;

/// Apply the account, status, and date predicates to a record set.
///
/// Pure over its inputs: returns a new vector, never mutates, and evaluates
/// every date window against the supplied `today` (callers pass the current
/// date at request time, so results shift across calendar-day boundaries).
pub fn filter_records(
    records: &[RevenueRecord],
    accounts: &[Account],
    filter: &RecordFilter,
    today: NaiveDate,
) -> Vec<RevenueRecord> {
    records
        .iter()
        .filter(|record| filter.account.matches(&record.account_id))
        .filter(|record| matches_status(record, accounts, filter.status))
        .filter(|record| matches_date(record.date, filter.date, &filter.range, today))
        .cloned()
        .collect()
}

/// A record whose owning account cannot be found counts as active.
fn matches_status(record: &RevenueRecord, accounts: &[Account], status: StatusFilter) -> bool {
    let account = accounts
        .iter()
        .find(|account| account.account_id == record.account_id);

    match status {
        StatusFilter::All => true,
        StatusFilter::Active => account.map(Account::is_active).unwrap_or(true),
        StatusFilter::Inactive => account.map(|a| !a.is_active()).unwrap_or(false),
    }
}

fn matches_date(
    date: NaiveDate,
    filter: DateFilter,
    range: &DateRange,
    today: NaiveDate,
) -> bool {
    match filter {
        DateFilter::All => true,
        DateFilter::Yesterday => today.pred_opt().map(|y| date == y).unwrap_or(false),
        DateFilter::ThisMonth => same_month(date, today),
        DateFilter::LastMonth => today
            .checked_sub_months(Months::new(1))
            .map(|last_month| same_month(date, last_month))
            .unwrap_or(false),
        DateFilter::Last7Days => date > today - Duration::days(7),
        DateFilter::Last14Days => date > today - Duration::days(14),
        DateFilter::Last30Days => date > today - Duration::days(30),
        // Fail-open when either bound is missing, matching the behavior
        // existing dashboards rely on.
        DateFilter::Custom => match (range.from, range.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => true,
        },
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.year() == b.year()
}
