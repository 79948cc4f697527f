// Seller accounts per regional ledger

pub mod controllers;
pub mod models;

pub use models::Account;
