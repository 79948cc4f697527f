//! Revboard: multi-region revenue reporting backend
//!
//! Aggregates three independent regional ledgers (USA, UK, ALE) into
//! per-region and consolidated dashboard views.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::accounts;
pub use modules::dashboard;
pub use modules::records;
pub use modules::settings;
pub use modules::store;
