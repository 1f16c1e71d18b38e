//! Core domain logic for segduty
//!
//! This module contains pure business logic with no I/O dependencies.
//! Persistence is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Role, AssignmentMap, RiskReport, ...)
//! - `services/` - Scoring and recommendation logic
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
