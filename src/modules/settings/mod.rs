// Operator-editable dashboard settings (singleton exchange rate)

pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::DashboardSettings;
pub use repositories::SettingsRepository;
