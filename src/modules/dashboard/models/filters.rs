use chrono::NaiveDate;
use serde::Deserialize;

/// Narrow a record set to one account, or keep all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountFilter {
    #[default]
    All,
    Id(String),
}

impl AccountFilter {
    /// The UI sends `"all"` (or nothing) for the unfiltered view and an
    /// exact account id otherwise.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("all") | Some("") => AccountFilter::All,
            Some(id) => AccountFilter::Id(id.to_string()),
        }
    }

    pub fn matches(&self, account_id: &str) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Id(id) => id == account_id,
        }
    }
}

/// Keep records whose owning account is active, inactive, or either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

/// Fixed vocabulary of time windows, all evaluated against "now" at
/// filter-evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DateFilter {
    #[serde(rename = "yesterday")]
    Yesterday,
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "lastMonth")]
    LastMonth,
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "14days")]
    Last14Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "custom")]
    Custom,
}

/// Bounds for `DateFilter::Custom`. The comparison is inclusive on both
/// ends; if either bound is absent the predicate passes everything
/// (fail-open, preserved from the original behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// The complete filter set a dashboard request carries.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub account: AccountFilter,
    pub status: StatusFilter,
    pub date: DateFilter,
    pub range: DateRange,
}
