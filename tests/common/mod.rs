//! Common test utilities for navweave contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and config directories plus CLI helpers
//! - Fixtures: menu and category payloads shared across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
