//! Shindig events directory - core types and configuration.
//!
//! Minimal-dependency foundation shared by every other crate in the
//! workspace: the core error type, shared domain types, configuration
//! loading, and workspace-wide constants.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
