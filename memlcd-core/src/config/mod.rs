//! Configuration types
//!
//! Board-agnostic panel configuration. With the `serde` feature enabled the
//! structures can be stored as postcard binary data next to other settings.

pub mod types;

pub use types::*;
