use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::Region;

/// One day of revenue for one account.
///
/// `gmv` and the commission columns are in the account's native currency.
/// The two commission columns are mutually exclusive: USA populates
/// `commission_primary`, UK and ALE populate `commission_secondary`. The
/// `date` is a plain calendar date and is never timezone-shifted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevenueRecord {
    /// Row id (UUID)
    pub id: String,

    /// Calendar date of the revenue
    pub date: NaiveDate,

    /// Owning account's business identifier
    pub account_id: String,

    /// Gross merchandise value, native currency
    pub gmv: Decimal,

    /// Sales count (a synthetic 1 is used for pure bonus entries)
    pub sales: i64,

    /// Commission at the primary tier (USA)
    pub commission_primary: Decimal,

    /// Commission at the secondary tier (UK / ALE)
    pub commission_secondary: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RevenueRecord {
    /// The commission column a region's records actually populate.
    pub fn regional_commission(&self, region: Region) -> Decimal {
        match region {
            Region::Usa => self.commission_primary,
            Region::Uk | Region::Ale => self.commission_secondary,
        }
    }
}

/// Request body for record creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub date: NaiveDate,
    pub account_id: String,
    pub gmv: Decimal,
    pub sales: i64,
    #[serde(default)]
    pub commission_primary: Decimal,
    #[serde(default)]
    pub commission_secondary: Decimal,
}

/// Partial update for an existing record; only provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecordRequest {
    pub date: Option<NaiveDate>,
    pub account_id: Option<String>,
    pub gmv: Option<Decimal>,
    pub sales: Option<i64>,
    pub commission_primary: Option<Decimal>,
    pub commission_secondary: Option<Decimal>,
}

impl CreateRecordRequest {
    pub fn validate(&self) -> crate::core::Result<()> {
        if self.gmv < Decimal::ZERO {
            return Err(crate::core::AppError::validation("gmv cannot be negative"));
        }
        if self.sales < 0 {
            return Err(crate::core::AppError::validation(
                "sales cannot be negative",
            ));
        }
        Ok(())
    }
}
