//! Navigation Use Case
//!
//! Orchestrates loading the menu and category exports and building the
//! navigation outputs.
//!
//! This module handles:
//! - Loading inputs through the source ports
//! - Building the category url map once per call
//! - Building the nested tree, the mega menu and the navbar roots

mod options;
mod result;
mod use_case;

pub use options::NavigationOptions;
pub use result::{MegaMenuResult, RootSummary, TreeResult};
pub use use_case::NavigationUseCase;
