// Shared test infrastructure: an in-memory RegionStore with the same
// contract as the MySQL adapter, plus factories for seed data.
#![allow(dead_code)]

pub mod test_data;

pub use memory_store::InMemoryRegionStore;
pub use test_data::*;
