//! # PI-Lead Control Library
//!
//! Discrete proportional-integral law cascaded into a first-order lead
//! compensator discretized with the bilinear (Tustin) transform. One
//! [`DiscreteController`] per axis, stepped once per sample period by the
//! host's control loop.
//!
//! ```
//! use pilead_control::DiscreteController;
//!
//! let mut pan = DiscreteController::from_parts(1.0, 0.5, 0.1, 0.05, 0.01).unwrap();
//! let u = pan.update(0.2);
//! assert!((u - 0.21 * 0.201 / 0.11).abs() < 1e-12);
//! ```
//!
//! ## Real-time contract
//!
//! `update` is a fixed handful of floating-point operations: no allocation,
//! no I/O, no logging, no input validation. Parameters are validated once,
//! at construction. Non-finite error samples propagate through the state
//! until `reset`; wrap the core in [`LimitedController`] to contain them.

#![deny(clippy::disallowed_types)]

pub mod config;
pub mod control;

pub use control::{
    ControllerState, DiscreteController, FilterCharacter, LeadCoefficients, LimitedController,
    OutputLimits,
};
pub use pilead_common::control::{ControllerConfig, ParameterError};
