//! TOML configuration for the BudgetWise binary.
//!
//! Every section is optional; missing keys fall back to the defaults the
//! dashboard ships with.

use std::fs;
use std::path::{Path, PathBuf};

use budget_core::Dashboard;
use budget_core::calculations::{
    AdviceThresholds, AdviceThresholdsError, CalculationConfig, CalculationConfigError,
};
use budget_core::dashboard::DashboardConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("[calculation] {0}")]
    Calculation(#[from] CalculationConfigError),

    #[error("[advice] {0}")]
    Advice(#[from] AdviceThresholdsError),
}

impl From<DashboardConfigError> for ConfigError {
    fn from(err: DashboardConfigError) -> Self {
        match err {
            DashboardConfigError::Calculation(e) => Self::Calculation(e),
            DashboardConfigError::Advice(e) => Self::Advice(e),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `None` uses the built-in filter.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub calculation: CalculationConfig,
    pub advice: AdviceThresholds,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Defaults when no path is given, otherwise [`Self::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calculation.validate()?;
        self.advice.validate()?;
        Ok(())
    }

    /// A fresh dashboard using the calculation and advice sections.
    pub fn build_dashboard(&self) -> Result<Dashboard, ConfigError> {
        Ok(Dashboard::with_config(
            self.calculation.clone(),
            self.advice.clone(),
        )?)
    }
}
