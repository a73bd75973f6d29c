//! Application layer: use cases over the parameter store boundary

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
