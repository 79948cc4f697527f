use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Singleton configuration row holding the operator-editable base exchange
/// rate (USD -> BRL) and its audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DashboardSettings {
    pub id: String,
    pub exchange_rate: Decimal,
    pub last_updated: DateTime<Utc>,
    pub updated_by: String,
}

/// Request body for updating the base rate
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExchangeRateRequest {
    pub exchange_rate: Decimal,
    #[serde(default)]
    pub updated_by: Option<String>,
}
