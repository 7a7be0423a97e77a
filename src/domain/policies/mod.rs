//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain entities.

mod href;

pub use href::{normalize_url_key, resolve_href, PLACEHOLDER_HREF};
