//! Randomized checks: determinism, reset, linearity.

use pilead_control::{ControllerConfig, DiscreteController};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = ControllerConfig> {
    (
        0.1f64..5.0,   // kp
        0.0f64..2.0,   // ki
        0.0f64..1.0,   // t1
        0.001f64..0.5, // t2
        0.001f64..0.05, // dt
    )
        .prop_map(|(kp, ki, t1, t2, dt)| ControllerConfig::new(kp, ki, t1, t2, dt))
}

fn errors_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, 1..200)
}

fn run(config: ControllerConfig, errors: &[f64]) -> Vec<f64> {
    let mut c = DiscreteController::new(config).unwrap();
    errors.iter().map(|&e| c.update(e)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identical_inputs_give_identical_outputs(
        config in config_strategy(),
        errors in errors_strategy(),
    ) {
        prop_assert_eq!(run(config, &errors), run(config, &errors));
    }

    #[test]
    fn reset_matches_fresh_controller(
        config in config_strategy(),
        history in errors_strategy(),
        e in -10.0f64..10.0,
    ) {
        let mut used = DiscreteController::new(config).unwrap();
        for &h in &history {
            used.update(h);
        }
        used.reset();

        let mut fresh = DiscreteController::new(config).unwrap();
        prop_assert_eq!(used.update(e), fresh.update(e));
        prop_assert_eq!(used.state(), fresh.state());
    }

    #[test]
    fn response_is_linear(
        config in config_strategy(),
        pairs in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..200),
        alpha in -3.0f64..3.0,
        beta in -3.0f64..3.0,
    ) {
        let a: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let b: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        let mixed: Vec<f64> = pairs.iter().map(|p| alpha * p.0 + beta * p.1).collect();

        let y_a = run(config, &a);
        let y_b = run(config, &b);
        let y_mixed = run(config, &mixed);

        // Rounding from earlier large samples lingers in the recursion, so
        // tolerance is relative to the largest magnitude seen.
        let scale = y_a
            .iter()
            .zip(&y_b)
            .map(|(ya, yb)| (alpha * ya).abs() + (beta * yb).abs())
            .fold(1.0, f64::max);

        for k in 0..pairs.len() {
            let superposed = alpha * y_a[k] + beta * y_b[k];
            prop_assert!(
                (y_mixed[k] - superposed).abs() <= 1e-9 * scale,
                "step {}: {} vs {}", k, y_mixed[k], superposed
            );
        }
    }
}
