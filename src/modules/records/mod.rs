// Daily revenue records per regional ledger

pub mod controllers;
pub mod models;

pub use models::RevenueRecord;
