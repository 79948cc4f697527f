mod account;

pub use account::{Account, CreateAccountRequest, UpdateAccountRequest};
