//! Controller parameter types.
//!
//! Defines [`ControllerConfig`], the immutable parameter set of a PI + lead
//! controller, and [`ParameterError`], raised when a parameter set cannot
//! produce a well-defined difference equation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-time parameter rejection.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// A parameter is outside the domain where the controller is defined.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in configuration.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
}

impl ParameterError {
    /// Name of the rejected parameter.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => *name,
        }
    }
}

/// Reject NaN and infinities.
#[inline]
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

/// Sample period must be finite and strictly positive. NaN is rejected.
#[inline]
pub fn ensure_sample_period(dt: f64) -> Result<f64, ParameterError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(ParameterError::InvalidParameter {
            name: "dt",
            value: dt,
            reason: "sample period must be finite and > 0",
        })
    }
}

/// PI gains, lead-filter time constants and sample period.
///
/// `t1 > t2 >= 0` gives phase lead. Other orderings are accepted and turn the
/// compensator into a lag (`t1 < t2`) or a passthrough (`t1 == t2`).
///
/// # TOML Example
///
/// ```toml
/// kp = 1.0
/// ki = 0.5
/// t1 = 0.1
/// t2 = 0.05
/// dt = 0.01
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain (0 = integral disabled).
    #[serde(default)]
    pub ki: f64,
    /// Lead zero time constant [s].
    #[serde(default)]
    pub t1: f64,
    /// Lead pole time constant [s].
    #[serde(default)]
    pub t2: f64,
    /// Sample period [s].
    #[serde(alias = "sample_time")]
    pub dt: f64,
}

impl ControllerConfig {
    pub const fn new(kp: f64, ki: f64, t1: f64, t2: f64, dt: f64) -> Self {
        Self { kp, ki, t1, t2, dt }
    }

    /// Check every rule a controller enforces at construction.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when any value is non-finite, `dt <= 0`, or the
    /// lead denominator `2·t2 + dt` is zero.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ensure_finite("kp", self.kp)?;
        ensure_finite("ki", self.ki)?;
        ensure_finite("t1", self.t1)?;
        ensure_finite("t2", self.t2)?;
        ensure_sample_period(self.dt)?;

        let a0 = 2.0 * self.t2 + self.dt;
        if a0 == 0.0 {
            return Err(ParameterError::InvalidParameter {
                name: "t2",
                value: self.t2,
                reason: "2·t2 + dt must be non-zero",
            });
        }
        Ok(())
    }

    /// Sample rate [Hz].
    #[inline]
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.dt
    }
}
