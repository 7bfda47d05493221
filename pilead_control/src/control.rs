//! Control engine root.
//!
//! PI stage → Tustin lead stage, composed by [`controller::DiscreteController`].
//! Each stage is also exposed as a free function over explicit state.

pub mod controller;
pub mod lead;
pub mod limit;
pub mod pi;

pub use controller::{ControllerState, DiscreteController};
pub use lead::{FilterCharacter, LeadCoefficients, LeadState, lead_apply};
pub use limit::{LimitedController, OutputLimits};
pub use pi::{PiGains, PiState, pi_compute};
