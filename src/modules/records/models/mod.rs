mod revenue_record;

pub use revenue_record::{CreateRecordRequest, RevenueRecord, UpdateRecordRequest};
