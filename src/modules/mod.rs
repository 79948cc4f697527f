pub mod accounts;
pub mod dashboard;
pub mod records;
pub mod settings;
pub mod store;
