use serde::Serialize;

use crate::modules::accounts::models::Account;
use crate::modules::records::models::RevenueRecord;

/// One fully loaded dataset: the accounts and records of a single region,
/// or of all three concatenated for the consolidated view.
///
/// Each load owns its collections outright; nothing is shared between
/// concurrent loads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardData {
    pub accounts: Vec<Account>,
    pub records: Vec<RevenueRecord>,
}
