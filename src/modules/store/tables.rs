use crate::core::Region;

/// The backing table pair for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RegionTables {
    pub accounts: &'static str,
    pub records: &'static str,
}

/// Finite region-to-table lookup. Table names are never built by string
/// concatenation; an unknown region cannot reach a table at all.
pub(super) fn tables_for(region: Region) -> RegionTables {
    match region {
        Region::Usa => RegionTables {
            accounts: "accounts",
            records: "revenue_records",
        },
        Region::Uk => RegionTables {
            accounts: "accounts_uk",
            records: "revenue_records_uk",
        },
        Region::Ale => RegionTables {
            accounts: "accounts_ale",
            records: "revenue_records_ale",
        },
    }
}
