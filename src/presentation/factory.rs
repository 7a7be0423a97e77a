//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::NavigationUseCase;
use crate::infrastructure::{JsonCategoryRepository, JsonMenuRepository};

/// Type alias for the file-backed NavigationUseCase
pub type ConcreteNavigationUseCase = NavigationUseCase<JsonMenuRepository, JsonCategoryRepository>;

/// Create a navigation use case reading JSON exports from disk
pub fn create_navigation_use_case() -> ConcreteNavigationUseCase {
    NavigationUseCase::new(JsonMenuRepository::new(), JsonCategoryRepository::new())
}
