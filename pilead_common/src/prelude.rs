//! Prelude module for common re-exports.
//!
//! ```rust
//! use pilead_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Controller Parameters ──────────────────────────────────────────
pub use crate::control::{ControllerConfig, ParameterError};
