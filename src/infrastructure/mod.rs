//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON file and in-memory sources

pub mod repositories;

// Re-export for convenience
pub use repositories::{InMemorySource, JsonCategoryRepository, JsonMenuRepository};
