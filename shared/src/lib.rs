//! Shared types for the marketplace backend
//!
//! Common types used across crates: error types, product variant models
//! and small parsing/ID utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
