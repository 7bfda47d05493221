//! First-order lead compensator discretized with the bilinear (Tustin) transform.
//!
//! Continuous prototype with zero time constant `t1` and pole time constant `t2`:
//! ```text
//! C(s) = (t1·s + 1) / (t2·s + 1)
//! ```
//! Substituting `s ≈ (2/dt)·(1 − z⁻¹)/(1 + z⁻¹)` and clearing fractions gives
//! ```text
//! a0·y[n] + a1·y[n-1] = b0·x[n] + b1·x[n-1]
//! a0 = 2·t2 + dt    a1 = dt − 2·t2
//! b0 = 2·t1 + dt    b1 = dt − 2·t1
//! ```
//! The coefficients are kept unnormalized; `a0` divides once per sample.

use pilead_common::control::{ParameterError, ensure_finite, ensure_sample_period};

// ─── Coefficients ───────────────────────────────────────────────────

/// Tustin lead/lag coefficients, fixed once derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadCoefficients {
    a0: f64,
    a1: f64,
    b0: f64,
    b1: f64,
}

impl LeadCoefficients {
    /// Derive coefficients from continuous time constants.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `t1`/`t2` are non-finite, `dt` is not a finite
    /// positive number, or `a0 = 2·t2 + dt` is zero.
    pub fn tustin(t1: f64, t2: f64, dt: f64) -> Result<Self, ParameterError> {
        let t1 = ensure_finite("t1", t1)?;
        let t2 = ensure_finite("t2", t2)?;
        let dt = ensure_sample_period(dt)?;

        let a0 = 2.0 * t2 + dt;
        if a0 == 0.0 {
            return Err(ParameterError::InvalidParameter {
                name: "t2",
                value: t2,
                reason: "2·t2 + dt must be non-zero",
            });
        }

        Ok(Self {
            a0,
            a1: dt - 2.0 * t2,
            b0: 2.0 * t1 + dt,
            b1: dt - 2.0 * t1,
        })
    }

    #[inline]
    pub fn a0(&self) -> f64 {
        self.a0
    }

    #[inline]
    pub fn a1(&self) -> f64 {
        self.a1
    }

    #[inline]
    pub fn b0(&self) -> f64 {
        self.b0
    }

    #[inline]
    pub fn b1(&self) -> f64 {
        self.b1
    }

    /// Gain at z = 1: `(b0 + b1) / (a0 + a1)`.
    ///
    /// Both sums reduce to `2·dt`, so this is 1 up to rounding.
    pub fn dc_gain(&self) -> f64 {
        (self.b0 + self.b1) / (self.a0 + self.a1)
    }

    /// Discrete pole location `−a1/a0`. Inside the unit circle iff `t2 > 0`.
    pub fn pole(&self) -> f64 {
        -self.a1 / self.a0
    }

    /// Discrete zero location `−b1/b0`.
    ///
    /// Undefined (infinite) when `b0 == 0`, i.e. `t1 = −dt/2`.
    pub fn zero(&self) -> f64 {
        -self.b1 / self.b0
    }
}

// ─── Character ──────────────────────────────────────────────────────

/// Whether the compensator advances or retards phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCharacter {
    /// `t1 > t2`: phase advance.
    Lead,
    /// `t1 < t2`: phase lag.
    Lag,
    /// `t1 == t2`: unity transfer function.
    Passthrough,
}

impl FilterCharacter {
    pub fn classify(t1: f64, t2: f64) -> Self {
        if t1 > t2 {
            Self::Lead
        } else if t1 < t2 {
            Self::Lag
        } else {
            Self::Passthrough
        }
    }
}

// ─── State ──────────────────────────────────────────────────────────

/// Recursion memory of the lead filter (Direct Form I).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeadState {
    x_prev: f64, // x[n-1]
    y_prev: f64, // y[n-1]
}

impl LeadState {
    /// Reset filter memory to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Previous filter input.
    #[inline]
    pub fn x_prev(&self) -> f64 {
        self.x_prev
    }

    /// Previous filter output.
    #[inline]
    pub fn y_prev(&self) -> f64 {
        self.y_prev
    }
}

/// Apply one sample through the lead filter.
///
/// ```text
/// y[n] = (b0·x[n] + b1·x[n-1] − a1·y[n-1]) / a0
/// ```
/// Memory is read before it is overwritten.
#[inline]
pub fn lead_apply(state: &mut LeadState, coeffs: &LeadCoefficients, input: f64) -> f64 {
    let output =
        (coeffs.b0 * input + coeffs.b1 * state.x_prev - coeffs.a1 * state.y_prev) / coeffs.a0;

    state.x_prev = input;
    state.y_prev = output;

    output
}

// ─── Tests ──────────────────────────────────────────────────────────
