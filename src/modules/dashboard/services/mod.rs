pub mod chart_data;
pub mod dashboard_service;
pub mod record_filter;
pub mod totals_calculator;

pub use chart_data::{prepare_chart_data, prepare_chart_data_by_date};
pub use dashboard_service::DashboardService;
pub use record_filter::filter_records;
pub use totals_calculator::{
    calculate_bonus_totals, calculate_consolidated_totals, calculate_totals,
};
