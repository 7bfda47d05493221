//! Output saturation and non-finite containment around a [`DiscreteController`].
//!
//! Caller-side policy: the wrapped core keeps its unchecked contract. Clamping
//! happens after the core update, so the inner integrator keeps accumulating
//! while the output sits at a limit (no anti-windup).

use pilead_common::control::ParameterError;
use tracing::warn;

use super::controller::DiscreteController;

/// Inclusive output bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputLimits {
    min: f64,
    max: f64,
}

impl OutputLimits {
    /// # Errors
    ///
    /// `InvalidParameter` if either bound is NaN or `min > max`.
    /// Infinite bounds are allowed and leave that side open.
    pub fn new(min: f64, max: f64) -> Result<Self, ParameterError> {
        if min.is_nan() {
            return Err(ParameterError::InvalidParameter {
                name: "min",
                value: min,
                reason: "must not be NaN",
            });
        }
        if max.is_nan() {
            return Err(ParameterError::InvalidParameter {
                name: "max",
                value: max,
                reason: "must not be NaN",
            });
        }
        if min > max {
            return Err(ParameterError::InvalidParameter {
                name: "min",
                value: min,
                reason: "must not exceed max",
            });
        }
        Ok(Self { min, max })
    }

    /// Symmetric bounds `[-limit, limit]`.
    pub fn symmetric(limit: f64) -> Result<Self, ParameterError> {
        Self::new(-limit, limit)
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// [`DiscreteController`] with clamped output and NaN/Inf containment.
#[derive(Debug, Clone, Copy)]
pub struct LimitedController {
    inner: DiscreteController,
    limits: OutputLimits,
    faulted: bool,
}

impl LimitedController {
    pub fn new(inner: DiscreteController, limits: OutputLimits) -> Self {
        Self {
            inner,
            limits,
            faulted: false,
        }
    }

    /// Run one core update and apply the output policy.
    ///
    /// A non-finite core result resets the core, latches the fault flag and
    /// yields `0.0`. Otherwise the result is clamped to the limits.
    pub fn update(&mut self, error: f64) -> f64 {
        let raw = self.inner.update(error);
        if !raw.is_finite() {
            warn!(error, raw, "non-finite control output, controller state reset");
            self.inner.reset();
            self.faulted = true;
            return 0.0;
        }
        self.limits.clamp(raw)
    }

    /// Reset the core and clear the fault flag.
    pub fn reset(&mut self) {
        self.inner.reset();
        self.faulted = false;
    }

    /// True once a non-finite output was contained since the last reset.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    #[inline]
    pub fn limits(&self) -> &OutputLimits {
        &self.limits
    }

    #[inline]
    pub fn inner(&self) -> &DiscreteController {
        &self.inner
    }

    pub fn into_inner(self) -> DiscreteController {
        self.inner
    }
}
