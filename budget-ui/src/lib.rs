pub mod config;
pub mod logging;
pub mod state;
pub mod utils;
pub mod views;

pub use config::{AppConfig, ConfigError, LoggingConfig};
pub use state::AppState;
