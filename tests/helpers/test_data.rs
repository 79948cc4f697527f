use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use revboard::modules::accounts::models::Account;
use revboard::modules::records::models::RevenueRecord;

pub fn account(account_id: &str, is_active: Option<bool>) -> Account {
    Account {
        id: Uuid::new_v4().to_string(),
        account_id: account_id.to_string(),
        name: format!("Conta {}", account_id),
        is_active,
        region: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn record(
    account_id: &str,
    date: NaiveDate,
    gmv: Decimal,
    sales: i64,
    commission_primary: Decimal,
    commission_secondary: Decimal,
) -> RevenueRecord {
    RevenueRecord {
        id: Uuid::new_v4().to_string(),
        date,
        account_id: account_id.to_string(),
        gmv,
        sales,
        commission_primary,
        commission_secondary,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A record with zeroed money columns, for date-predicate tests.
pub fn dated_record(account_id: &str, date: NaiveDate) -> RevenueRecord {
    record(account_id, date, Decimal::ZERO, 1, Decimal::ZERO, Decimal::ZERO)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
