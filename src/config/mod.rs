//! Configuration module for navweave
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NAVWEAVE_*)
//! 3. Project config (./navweave.toml)
//! 4. User config (~/.config/navweave/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, candidate_paths, load_layered, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, HoverConfig, MegaMenuConfig, NavigationConfig, OutputConfig};
