//! # Cronkit Core
//!
//! Shared error type and configuration for the Cronkit crates.

pub mod config;
pub mod error;

pub use config::{CronkitConfig, LogConfig, OutputConfig, OutputFormat};
pub use error::{CronError, Result};
