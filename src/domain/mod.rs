//! Domain layer: entities and parsing logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no AWS types).

pub mod entities;

pub use entities::*;
