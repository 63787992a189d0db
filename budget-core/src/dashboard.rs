//! Top-level dashboard: a session gate in front of the wizard.
//!
//! Every user action arrives as a [`DashboardEvent`]. Wizard events are
//! refused until the session is open, and closing the session resets the
//! wizard so the next sign-in starts from a clean selection step.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::{Advice, AdviceThresholdsError, CalculationConfigError};
use crate::calculations::{
    AdviceThresholds, CalculationConfig, FinancialAdvisor, ResultsCalculator,
};
use crate::session::{Credentials, CredentialsError, Registration, SessionGate};
use crate::wizard::{WizardController, WizardError};
use crate::{
    DerivedInputs, DerivedResults, RawFormValues, SelectionState, StepStatus, WizardPhase,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("sign in before using the dashboard")]
    NotAuthenticated,

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// Rejected dashboard settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardConfigError {
    #[error(transparent)]
    Calculation(#[from] CalculationConfigError),

    #[error(transparent)]
    Advice(#[from] AdviceThresholdsError),
}

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    Login(Credentials),
    Signup(Registration),
    Logout,
    ToggleInput(String),
    ToggleOutput(String),
    SelectInputs(Vec<String>),
    SelectOutputs(Vec<String>),
    ContinueToInput,
    SetField { id: String, value: String },
    SubmitFormValues(RawFormValues),
    GoBack,
    Reset,
}

impl DashboardEvent {
    fn requires_session(&self) -> bool {
        !matches!(self, Self::Login(_) | Self::Signup(_) | Self::Logout)
    }
}

/// Read-only copy of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub authenticated: bool,
    pub phase: WizardPhase,
    pub selection: SelectionState,
    pub form_values: RawFormValues,
    pub derived_inputs: Option<DerivedInputs>,
    pub results: Option<DerivedResults>,
    pub advice: Option<Advice>,
    pub progress: Vec<(WizardPhase, StepStatus)>,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    gate: SessionGate,
    wizard: WizardController,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dashboard with custom calculation and advice settings.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardConfigError`] when either section fails validation.
    pub fn with_config(
        calculation: CalculationConfig,
        thresholds: AdviceThresholds,
    ) -> Result<Self, DashboardConfigError> {
        let calculator = ResultsCalculator::new(calculation)?;
        let advisor = FinancialAdvisor::new(thresholds)?;
        Ok(Self {
            gate: SessionGate::new(),
            wizard: WizardController::new(calculator, advisor),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    /// Applies one event. On error the dashboard is left unchanged, apart
    /// from form text passed with a blocked submission.
    pub fn handle(
        &mut self,
        event: DashboardEvent,
    ) -> Result<(), DashboardError> {
        if event.requires_session() && !self.gate.is_authenticated() {
            warn!(?event, "event refused without a session");
            return Err(DashboardError::NotAuthenticated);
        }

        match event {
            DashboardEvent::Login(credentials) => self.gate.login(&credentials)?,
            DashboardEvent::Signup(registration) => self.gate.signup(&registration)?,
            DashboardEvent::Logout => {
                self.gate.logout();
                self.wizard.reset();
            }
            DashboardEvent::ToggleInput(id) => {
                self.wizard.toggle_input(&id)?;
            }
            DashboardEvent::ToggleOutput(id) => {
                self.wizard.toggle_output(&id)?;
            }
            DashboardEvent::SelectInputs(ids) => self.wizard.select_inputs(ids)?,
            DashboardEvent::SelectOutputs(ids) => self.wizard.select_outputs(ids)?,
            DashboardEvent::ContinueToInput => self.wizard.continue_to_input()?,
            DashboardEvent::SetField { id, value } => self.wizard.set_field(&id, value)?,
            DashboardEvent::SubmitFormValues(values) => {
                self.wizard.submit_form_values(values)?;
            }
            DashboardEvent::GoBack => {
                self.wizard.go_back();
            }
            DashboardEvent::Reset => self.wizard.reset(),
        }

        debug!(phase = %self.wizard.phase(), "event applied");
        Ok(())
    }

    pub fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), DashboardError> {
        self.handle(DashboardEvent::Login(Credentials::new(username, password)))
    }

    pub fn logout(&mut self) -> Result<(), DashboardError> {
        self.handle(DashboardEvent::Logout)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            authenticated: self.gate.is_authenticated(),
            phase: self.wizard.phase(),
            selection: self.wizard.selection().clone(),
            form_values: self.wizard.form_values().clone(),
            derived_inputs: self.wizard.derived_inputs().cloned(),
            results: self.wizard.results().cloned(),
            advice: self.wizard.advice(),
            progress: self.wizard.phase().progress(),
        }
    }
}
