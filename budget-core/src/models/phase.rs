use std::fmt;

use serde::{Deserialize, Serialize};

/// The three mutually exclusive steps of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    #[default]
    Selection,
    Input,
    Results,
}

impl WizardPhase {
    pub fn all() -> &'static [WizardPhase] {
        &[
            WizardPhase::Selection,
            WizardPhase::Input,
            WizardPhase::Results,
        ]
    }

    /// Zero-based position in the flow.
    pub fn index(&self) -> usize {
        match self {
            Self::Selection => 0,
            Self::Input => 1,
            Self::Results => 2,
        }
    }

    /// Label shown in the progress indicator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Selection => "Select Options",
            Self::Input => "Input Data",
            Self::Results => "View Results",
        }
    }

    /// Status of `step` as seen from this phase.
    pub fn status_of(
        &self,
        step: WizardPhase,
    ) -> StepStatus {
        match step.index().cmp(&self.index()) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// One entry per step, in flow order.
    pub fn progress(&self) -> Vec<(WizardPhase, StepStatus)> {
        Self::all()
            .iter()
            .map(|step| (*step, self.status_of(*step)))
            .collect()
    }
}

impl fmt::Display for WizardPhase {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            Self::Selection => "selection",
            Self::Input => "input",
            Self::Results => "results",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}
