pub mod error;
pub mod exchange;
pub mod region;

pub use error::{AppError, Result};
pub use exchange::CrossRates;
pub use region::Region;
