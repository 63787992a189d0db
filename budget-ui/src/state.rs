//! Application state stored in Cursive's user data.

use budget_core::{Dashboard, DashboardError, DashboardEvent, DashboardSnapshot};

use crate::config::{AppConfig, ConfigError};

/// Everything the views read and mutate between screens.
///
/// The dashboard owns all session and wizard data; views dispatch events to
/// it and re-render from a snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
    pub config: AppConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dashboard: Dashboard::new(),
            config: AppConfig::default(),
        }
    }
}

impl AppState {
    /// Builds state from a validated configuration.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            dashboard: config.build_dashboard()?,
            config,
        })
    }

    pub fn dispatch(
        &mut self,
        event: DashboardEvent,
    ) -> Result<(), DashboardError> {
        self.dashboard.handle(event)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.dashboard.snapshot()
    }
}
