//! Constant-error run of a PI-lead controller.
//!
//! Feeds a constant error of 0.2 for 100 samples at 100 Hz and prints one
//! control signal per line.
//!
//! ```bash
//! cargo run -p pilead_control --example constant_error
//! cargo run -p pilead_control --example constant_error -- tracker.toml
//! RUST_LOG=debug cargo run -p pilead_control --example constant_error
//! ```
//!
//! With a config path, every configured controller is run and its name
//! prefixes each line.

use std::path::PathBuf;

use pilead_common::config::LogLevel;
use pilead_control::config::load_config;
use pilead_control::DiscreteController;
use tracing::info;
use tracing_subscriber::EnvFilter;

const ERROR: f64 = 0.2;
const STEPS: usize = 100;

fn setup_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_tracing_level().as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        setup_tracing(LogLevel::default());
        let mut controller = DiscreteController::from_parts(1.0, 0.5, 0.1, 0.05, 0.01)?;
        for _ in 0..STEPS {
            println!("{}", controller.update(ERROR));
        }
        return Ok(());
    };

    let config = load_config(&path)?;
    setup_tracing(config.shared.log_level);
    info!(service = config.shared.service_name.as_str(), "running constant-error demo");

    for (name, mut controller) in config.build_controllers()? {
        for _ in 0..STEPS {
            println!("{name} {}", controller.update(ERROR));
        }
    }
    Ok(())
}
