//! Application services
//!
//! Concrete service implementations that orchestrate domain logic against
//! the `ParameterStore` boundary trait.

mod params;

pub use params::{CreateAction, CreateOutcome, ParamService};
