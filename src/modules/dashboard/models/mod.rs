mod chart;
mod dataset;
mod filters;
mod totals;

pub use chart::{ChartPoint, DatedChartPoint};
pub use dataset::DashboardData;
pub use filters::{AccountFilter, DateFilter, DateRange, RecordFilter, StatusFilter};
pub use totals::{BonusTotals, ConsolidatedTotals, Totals};
