//! TOML configuration loader with validation.
//!
//! One `[shared]` section plus one `[controllers.<name>]` table per axis:
//!
//! ```toml
//! [shared]
//! service_name = "ball-tracker"
//!
//! [controllers.pan]
//! kp = 1.0
//! ki = 0.5
//! t1 = 0.1
//! t2 = 0.05
//! dt = 0.01
//! ```
//!
//! Every controller is validated with the same rules as
//! [`DiscreteController::new`] before the bundle is returned.

use std::collections::BTreeMap;
use std::path::Path;

use pilead_common::config::{ConfigError, ConfigLoader, SharedConfig};
use pilead_common::control::ControllerConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::control::DiscreteController;

/// Complete validated configuration bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadedConfig {
    pub shared: SharedConfig,
    /// Controller parameters keyed by axis name.
    pub controllers: BTreeMap<String, ControllerConfig>,
}

impl LoadedConfig {
    /// Check the shared section and every controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.controllers.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one [controllers.<name>] table is required".to_string(),
            ));
        }

        for (name, params) in &self.controllers {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "controller name cannot be empty".to_string(),
                ));
            }
            params
                .validate()
                .map_err(|e| ConfigError::ValidationError(format!("controller '{name}': {e}")))?;
        }
        Ok(())
    }

    /// Construct one fresh controller per configured axis.
    pub fn build_controllers(&self) -> Result<BTreeMap<String, DiscreteController>, ConfigError> {
        self.controllers
            .iter()
            .map(|(name, params)| {
                DiscreteController::new(*params)
                    .map(|c| (name.clone(), c))
                    .map_err(|e| ConfigError::ValidationError(format!("controller '{name}': {e}")))
            })
            .collect()
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    info!("Loading controller configuration from {}", path.display());
    let config = LoadedConfig::load(path)?;
    finish(config)
}

/// Load and validate configuration from a TOML string.
pub fn load_config_from_str(toml: &str) -> Result<LoadedConfig, ConfigError> {
    let config = LoadedConfig::load_str(toml)?;
    finish(config)
}

fn finish(config: LoadedConfig) -> Result<LoadedConfig, ConfigError> {
    config.validate()?;
    for (name, params) in &config.controllers {
        debug!(
            controller = name.as_str(),
            kp = params.kp,
            ki = params.ki,
            t1 = params.t1,
            t2 = params.t2,
            dt = params.dt,
            "controller parameters accepted"
        );
    }
    info!(
        service = config.shared.service_name.as_str(),
        controllers = config.controllers.len(),
        "Controller configuration loaded"
    );
    Ok(config)
}
