use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::exchange::default_base_rate;
use crate::core::{AppError, Result};
use crate::modules::settings::models::DashboardSettings;

const SETTINGS_TABLE: &str = "dashboard_settings";

/// Repository for the dashboard settings singleton.
///
/// Exactly one live row should exist. Reads self-heal: duplicates are
/// discarded (keeping the first row returned) and a default row is
/// synthesized when none exists.
pub struct SettingsRepository {
    pool: MySqlPool,
}

impl SettingsRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row, healing duplicates and synthesizing a
    /// default when the table is empty.
    pub async fn get_or_create(&self) -> Result<DashboardSettings> {
        let sql = format!(
            "SELECT id, exchange_rate, last_updated, updated_by FROM {} ORDER BY last_updated DESC",
            SETTINGS_TABLE
        );
        let rows: Vec<DashboardSettings> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::unknown(format!("Failed to fetch settings: {}", e)))?;

        match split_singleton(rows) {
            None => self.create_default().await,
            Some((settings, stale_ids)) => {
                if !stale_ids.is_empty() {
                    warn!(
                        "Found {} duplicate settings rows, discarding extras",
                        stale_ids.len()
                    );
                    self.delete_rows(&stale_ids).await?;
                }
                Ok(settings)
            }
        }
    }

    /// Update the base exchange rate, creating the row first if absent.
    pub async fn update_exchange_rate(
        &self,
        rate: Decimal,
        updated_by: &str,
    ) -> Result<DashboardSettings> {
        if rate <= Decimal::ZERO {
            return Err(AppError::validation("Exchange rate must be positive"));
        }

        let current = self.get_or_create().await?;

        let sql = format!(
            "UPDATE {} SET exchange_rate = ?, last_updated = ?, updated_by = ? WHERE id = ?",
            SETTINGS_TABLE
        );
        let now = Utc::now();
        sqlx::query(&sql)
            .bind(rate)
            .bind(now)
            .bind(updated_by)
            .bind(&current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::unknown(format!("Failed to update exchange rate: {}", e)))?;

        info!("Exchange rate updated to {} by {}", rate, updated_by);

        Ok(DashboardSettings {
            exchange_rate: rate,
            last_updated: now,
            updated_by: updated_by.to_string(),
            ..current
        })
    }

    async fn create_default(&self) -> Result<DashboardSettings> {
        let settings = DashboardSettings {
            id: Uuid::new_v4().to_string(),
            exchange_rate: default_base_rate(),
            last_updated: Utc::now(),
            updated_by: "System".to_string(),
        };

        let sql = format!(
            "INSERT INTO {} (id, exchange_rate, last_updated, updated_by) VALUES (?, ?, ?, ?)",
            SETTINGS_TABLE
        );
        sqlx::query(&sql)
            .bind(&settings.id)
            .bind(settings.exchange_rate)
            .bind(settings.last_updated)
            .bind(&settings.updated_by)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::unknown(format!("Failed to create default settings: {}", e)))?;

        info!(
            "No settings row found, created default with rate {}",
            settings.exchange_rate
        );

        Ok(settings)
    }

    async fn delete_rows(&self, ids: &[String]) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", SETTINGS_TABLE);
        for id in ids {
            sqlx::query(&sql)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::unknown(format!("Failed to discard duplicate settings: {}", e))
                })?;
        }
        Ok(())
    }
}

/// Resolve the singleton invariant over whatever rows the table holds:
/// `None` when empty, otherwise the first row plus the ids to discard.
fn split_singleton(
    rows: Vec<DashboardSettings>,
) -> Option<(DashboardSettings, Vec<String>)> {
    let mut iter = rows.into_iter();
    let first = iter.next()?;
    let stale_ids = iter.map(|row| row.id).collect();
    Some((first, stale_ids))
}
