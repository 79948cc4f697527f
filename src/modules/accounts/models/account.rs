use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::Region;

/// A seller account within one regional ledger.
///
/// The `account_id` is unique within its region and encodes the region by
/// prefix convention (`C-###` USA, `UK-###` UK, `ALE-###` ALE). The `region`
/// tag is assigned by the data loader at load time; the backing tables do
/// not store it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Row id (UUID)
    pub id: String,

    /// Business identifier, unique within the region
    pub account_id: String,

    /// Display name
    pub name: String,

    /// Active flag; `None` means the column was never set and the account
    /// counts as active
    pub is_active: Option<bool>,

    /// Origin region, tagged by the loader (not stored)
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Accounts are active unless explicitly flagged inactive.
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }
}

/// Request body for account creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub account_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for account rename
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}
