//! PI-Lead Common Library
//!
//! Shared parameter types and configuration loading utilities for the
//! PI-lead controller workspace crates.
//!
//! # Module Structure
//!
//! - [`control`] - Controller parameters and parameter validation errors
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use pilead_common::prelude::*;
//!
//! let config = ControllerConfig::new(1.0, 0.5, 0.1, 0.05, 0.01);
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod control;
pub mod prelude;
