//! PI law cascaded into the Tustin lead compensator.
//!
//! [`DiscreteController`] owns a validated [`ControllerConfig`], the derived
//! [`LeadCoefficients`], and the recursive state of both stages. Construction
//! is the only checked boundary: `update` is unchecked arithmetic that never
//! allocates, logs, or branches on its input, so a non-finite error sample
//! poisons the state until [`DiscreteController::reset`].

use pilead_common::control::{ControllerConfig, ParameterError};
use static_assertions::assert_impl_all;
use tracing::{debug, trace, warn};

use super::lead::{FilterCharacter, LeadCoefficients, LeadState, lead_apply};
use super::pi::{PiGains, PiState, pi_compute};

/// Snapshot of the recursive state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    /// Running sum of `error · dt`.
    pub integral: f64,
    /// Previous PI output (lead-filter input at the prior step).
    pub x_prev: f64,
    /// Previous lead-filter output (last returned control signal).
    pub y_prev: f64,
}

/// Discrete PI + lead controller for one axis.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteController {
    config: ControllerConfig,
    gains: PiGains,
    coeffs: LeadCoefficients,
    pi: PiState,
    lead: LeadState,
}

assert_impl_all!(DiscreteController: Send, Sync, Copy);

impl DiscreteController {
    /// Validate `config` and derive the lead coefficients.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for non-finite parameters, `dt <= 0`, or a zero
    /// lead denominator. A non-lead ordering of `t1`/`t2` is accepted and
    /// logged at `warn`.
    pub fn new(config: ControllerConfig) -> Result<Self, ParameterError> {
        config.validate()?;
        let coeffs = LeadCoefficients::tustin(config.t1, config.t2, config.dt)?;

        debug!(
            kp = config.kp,
            ki = config.ki,
            t1 = config.t1,
            t2 = config.t2,
            dt = config.dt,
            a0 = coeffs.a0(),
            a1 = coeffs.a1(),
            b0 = coeffs.b0(),
            b1 = coeffs.b1(),
            "PI-lead controller constructed"
        );

        let character = FilterCharacter::classify(config.t1, config.t2);
        if character != FilterCharacter::Lead {
            warn!(
                t1 = config.t1,
                t2 = config.t2,
                ?character,
                "t1 <= t2: compensator provides no phase lead"
            );
        }

        Ok(Self {
            config,
            gains: PiGains {
                kp: config.kp,
                ki: config.ki,
            },
            coeffs,
            pi: PiState::default(),
            lead: LeadState::default(),
        })
    }

    /// Shorthand for [`DiscreteController::new`] with positional parameters.
    pub fn from_parts(kp: f64, ki: f64, t1: f64, t2: f64, dt: f64) -> Result<Self, ParameterError> {
        Self::new(ControllerConfig::new(kp, ki, t1, t2, dt))
    }

    /// Compute the control signal for one sample.
    ///
    /// Accumulates `error·dt`, forms `kp·error + ki·integral`, and passes that
    /// through `y = (b0·u + b1·x_prev − a1·y_prev) / a0`.
    #[inline]
    pub fn update(&mut self, error: f64) -> f64 {
        let u_pi = pi_compute(&mut self.pi, &self.gains, error, self.config.dt);
        lead_apply(&mut self.lead, &self.coeffs, u_pi)
    }

    /// Discard all history. Configuration and coefficients are untouched.
    pub fn reset(&mut self) {
        self.pi.reset();
        self.lead.reset();
        trace!("PI-lead controller state reset");
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[inline]
    pub fn coefficients(&self) -> &LeadCoefficients {
        &self.coeffs
    }

    /// Current recursive state.
    #[inline]
    pub fn state(&self) -> ControllerState {
        ControllerState {
            integral: self.pi.integral(),
            x_prev: self.lead.x_prev(),
            y_prev: self.lead.y_prev(),
        }
    }

    #[inline]
    pub fn character(&self) -> FilterCharacter {
        FilterCharacter::classify(self.config.t1, self.config.t2)
    }

    /// Steady-state gain of the lead stage (1 up to rounding).
    #[inline]
    pub fn dc_gain(&self) -> f64 {
        self.coeffs.dc_gain()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
