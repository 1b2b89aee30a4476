//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling and the default HTTP error handler
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
