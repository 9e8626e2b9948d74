//! Data models
//!
//! Shared between the variant editor and the storefront/admin API.

pub mod combination;
pub mod option;
pub mod variant;

// Re-exports
pub use combination::*;
pub use option::*;
pub use variant::*;
