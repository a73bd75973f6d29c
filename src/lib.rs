//! ssm-param: bulk manager for AWS SSM Parameter Store hierarchies
//!
//! Layers:
//! - `domain`: pure parsing and diff logic, no I/O
//! - `application`: `ParamService` use cases over the store boundary
//! - `infrastructure`: AWS session construction and the `ParameterStore` trait
//! - `cli`: argument surface, dispatch, terminal output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod util;
