//! PI stage with forward rectangular integration.
//!
//! The accumulator integrates raw error (`Σ error·dt`); `ki` scales it on the
//! way out, so changing `ki` between calls rescales the whole history.

/// Internal state of the PI stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PiState {
    /// Running sum of `error · dt`.
    integral: f64,
}

impl PiState {
    /// Reset the accumulator to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Accumulated `Σ error·dt` since the last reset.
    #[inline]
    pub fn integral(&self) -> f64 {
        self.integral
    }
}

/// PI gains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiGains {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain (0 = no integral contribution).
    pub ki: f64,
}

/// Compute one PI cycle.
///
/// # Arguments
/// - `state`: Mutable PI state (integral accumulator).
/// - `gains`: Proportional and integral gains.
/// - `error`: Current error (setpoint − measurement).
/// - `dt`: Sample period [s], validated by the caller.
///
/// # Returns
/// `kp·error + ki·Σ(error·dt)`, with the current sample already accumulated.
#[inline]
pub fn pi_compute(state: &mut PiState, gains: &PiGains, error: f64, dt: f64) -> f64 {
    state.integral += error * dt;
    gains.kp * error + gains.ki * state.integral
}

// ─── Tests ──────────────────────────────────────────────────────────
