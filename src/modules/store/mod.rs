// Region store adapter: the only place region tags resolve to physical
// tables. Everything above this module talks in terms of `Region`.

mod region_store;
mod tables;

pub use region_store::{MySqlRegionStore, RegionStore};
