//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json;
mod memory;

pub use json::{JsonCategoryRepository, JsonMenuRepository};
pub use memory::InMemorySource;
