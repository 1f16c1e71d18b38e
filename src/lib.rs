//! segduty - Segregation-of-duties risk scoring for small organizations
//!
//! This library holds the task catalog, role and scenario models, the risk
//! scorer and recommender, and the TOML/JSON persistence used by the CLI.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod builtin;
pub mod config;
pub mod core;
pub mod export;
pub mod output;
pub mod paths;
