//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `NavigationUseCase` - Load exports, build tree, mega menu and navbar roots
//! - `HoverScript` - Replay a pointer timeline through the hover panel

pub mod hover;
pub mod navigation;

pub use hover::{HoverScript, HoverStep, HoverTransition};
pub use navigation::{
    MegaMenuResult, NavigationOptions, NavigationUseCase, RootSummary, TreeResult,
};
