//! Infrastructure layer: AWS session construction and the store boundary

pub mod error;
pub mod session;
pub mod store;

pub use error::{SessionError, StoreError, StoreResult};
pub use session::{connect, Session};
pub use store::{ParameterStore, SsmStore};
