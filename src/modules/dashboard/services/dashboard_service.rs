use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::try_join;
use tracing::info;

use crate::core::{Region, Result};
use crate::modules::accounts::models::Account;
use crate::modules::dashboard::models::DashboardData;
use crate::modules::store::RegionStore;

/// A long-decommissioned account that still has rows in the USA tables.
/// It is scrubbed from every load; this is data cleanup, not a preference.
const LEGACY_ACCOUNT_ID: &str = "C-040";

/// Loads dashboard datasets from the region store.
///
/// Reads only; mutations go through the store directly from the
/// controllers. A failed load returns an error without any partial result,
/// so callers can clear and replace their visible dataset atomically.
pub struct DashboardService {
    store: Arc<dyn RegionStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn RegionStore>) -> Self {
        Self { store }
    }

    /// Load one region's accounts and records, tagging accounts with their
    /// origin region.
    pub async fn load_region(&self, region: Region) -> Result<DashboardData> {
        let (accounts, records) = try_join!(
            self.store.list_accounts(region),
            self.store.list_records(region),
        )?;

        let accounts = tag_and_scrub(vec![(region, accounts)]);

        info!(
            "Loaded {} accounts and {} records for {}",
            accounts.len(),
            records.len(),
            region
        );

        Ok(DashboardData { accounts, records })
    }

    /// Load all three regions concurrently and merge into one dataset.
    ///
    /// All-or-nothing: if any region's fetch fails the whole load fails and
    /// no partial merge is returned. The ALE-missing-table case never gets
    /// this far; the store already absorbs it.
    pub async fn load_consolidated(&self) -> Result<DashboardData> {
        let (usa_accounts, uk_accounts, ale_accounts, usa_records, uk_records, ale_records) = try_join!(
            self.store.list_accounts(Region::Usa),
            self.store.list_accounts(Region::Uk),
            self.store.list_accounts(Region::Ale),
            self.store.list_records(Region::Usa),
            self.store.list_records(Region::Uk),
            self.store.list_records(Region::Ale),
        )?;

        let accounts = tag_and_scrub(vec![
            (Region::Usa, usa_accounts),
            (Region::Uk, uk_accounts),
            (Region::Ale, ale_accounts),
        ]);

        let mut records = usa_records;
        records.extend(uk_records);
        records.extend(ale_records);

        info!(
            "Loaded consolidated dataset: {} accounts, {} records",
            accounts.len(),
            records.len()
        );

        Ok(DashboardData { accounts, records })
    }

    /// Most recent record change in a region, for the "last update" badge.
    pub async fn last_update(&self, region: Region) -> Result<Option<DateTime<Utc>>> {
        self.store.last_update_time(region).await
    }
}

/// Tag each account with its source region and drop the legacy account.
fn tag_and_scrub(tagged: Vec<(Region, Vec<Account>)>) -> Vec<Account> {
    tagged
        .into_iter()
        .flat_map(|(region, accounts)| {
            accounts.into_iter().map(move |mut account| {
                account.region = Some(region);
                account
            })
        })
        .filter(|account| account.account_id != LEGACY_ACCOUNT_ID)
        .collect()
}
