// The aggregation core: loading, filtering, totals, and chart bucketing.

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    AccountFilter, BonusTotals, ChartPoint, ConsolidatedTotals, DashboardData, DateFilter,
    DateRange, DatedChartPoint, RecordFilter, StatusFilter, Totals,
};
pub use services::DashboardService;
