mod dashboard_settings;

pub use dashboard_settings::{DashboardSettings, UpdateExchangeRateRequest};
