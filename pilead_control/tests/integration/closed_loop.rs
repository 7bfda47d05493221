//! Closed-loop behaviour against a simulated plant.
//!
//! The controller output commands the velocity of a pure-integrator axis
//! (e.g. a pan stage driven by a speed-controlled motor), the kind of plant a
//! camera-based tracker closes the loop around.

use pilead_control::{DiscreteController, LimitedController, OutputLimits};

const DT: f64 = 0.01;

/// `position += (command + disturbance) · dt`.
struct SimulatedAxis {
    position: f64,
    disturbance: f64,
}

impl SimulatedAxis {
    fn new(disturbance: f64) -> Self {
        Self {
            position: 0.0,
            disturbance,
        }
    }

    fn step(&mut self, command: f64, dt: f64) {
        self.position += (command + self.disturbance) * dt;
    }
}

/// Run `cycles` samples toward `target`; returns the error history.
fn run_step_response(
    controller: &mut DiscreteController,
    axis: &mut SimulatedAxis,
    target: f64,
    cycles: usize,
) -> Vec<f64> {
    let mut errors = Vec::with_capacity(cycles);
    for _ in 0..cycles {
        let error = target - axis.position;
        let command = controller.update(error);
        axis.step(command, DT);
        errors.push(target - axis.position);
    }
    errors
}

fn tracker(ki: f64) -> DiscreteController {
    DiscreteController::from_parts(5.0, ki, 0.1, 0.05, DT).unwrap()
}

#[test]
fn step_response_settles_on_target() {
    let mut c = tracker(2.0);
    let mut axis = SimulatedAxis::new(0.0);
    let errors = run_step_response(&mut c, &mut axis, 1.0, 6000);

    let final_error = errors.last().copied().unwrap();
    assert!(final_error.abs() < 1e-4, "final error {final_error}");
    assert!(errors.iter().all(|e| e.is_finite()));
}

#[test]
fn integral_action_rejects_constant_disturbance() {
    let disturbance = -0.3;

    let mut p_only = tracker(0.0);
    let mut axis = SimulatedAxis::new(disturbance);
    let p_final = *run_step_response(&mut p_only, &mut axis, 1.0, 6000)
        .last()
        .unwrap();
    // P-only equilibrium: kp·e = −d  ⇒  e = 0.3 / 5
    assert!((p_final - 0.06).abs() < 1e-3, "P-only offset {p_final}");

    let mut pi = tracker(2.0);
    let mut axis = SimulatedAxis::new(disturbance);
    let pi_final = *run_step_response(&mut pi, &mut axis, 1.0, 6000)
        .last()
        .unwrap();
    assert!(pi_final.abs() < 1e-4, "PI offset {pi_final}");
}

#[test]
fn reset_restarts_transient() {
    let mut c = tracker(2.0);
    let mut axis = SimulatedAxis::new(0.0);
    let first = run_step_response(&mut c, &mut axis, 1.0, 200);

    c.reset();
    let mut axis = SimulatedAxis::new(0.0);
    let second = run_step_response(&mut c, &mut axis, 1.0, 200);

    assert_eq!(first, second);
}

#[test]
fn saturated_loop_still_converges() {
    let limits = OutputLimits::symmetric(0.5).unwrap();
    let mut c = LimitedController::new(tracker(2.0), limits);
    let mut axis = SimulatedAxis::new(0.0);

    let mut peak_command: f64 = 0.0;
    for _ in 0..20_000 {
        let command = c.update(1.0 - axis.position);
        peak_command = peak_command.max(command.abs());
        axis.step(command, DT);
    }

    assert!(peak_command <= 0.5);
    assert!(!c.is_faulted());
    assert!((1.0 - axis.position).abs() < 1e-3, "position {}", axis.position);
}
