//! Domain Layer
//!
//! The core of navweave - menu reshaping without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Menu nodes, categories and the output shapes
//! - `value_objects/` - Parent keys, node kinds, category uid decoding
//! - `services/` - Index, tree builder, mega menu grouper, hover panel
//! - `policies/` - Href resolution rule
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Builders take inputs and return fresh outputs
//! 3. **Ports & Adapters** - All loading goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
