//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - `.segduty.toml` workspace files and TOML task catalogs

pub mod toml;
