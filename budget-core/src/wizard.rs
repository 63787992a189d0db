//! Three-step wizard controller: selection, input, results.
//!
//! ```text
//!  Selection ──continue──▶ Input ──submit──▶ Results
//!      ▲                    │ ▲                │
//!      └──────back──────────┘ └─────back───────┘
//!      ▲                                       │
//!      └────────────────reset──────────────────┘
//! ```
//!
//! The controller owns every piece of wizard data for the lifetime of a
//! session. Forward transitions are guarded; backward transitions and reset
//! always succeed.
//!
//! Going back from `Results` restores the submitted form text so it can be
//! edited and resubmitted. The derived inputs and results are dropped at that
//! point because they no longer describe what is on screen.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculations::{
    Advice, FieldError, FinancialAdvisor, ResultsCalculator, reduce, validate_fields,
};
use crate::{DerivedInputs, DerivedResults, RawFormValues, SelectionState, WizardPhase};

/// Reasons a wizard operation was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("operation requires the {expected} step, wizard is on the {actual} step")]
    WrongPhase {
        expected: WizardPhase,
        actual: WizardPhase,
    },

    #[error("select at least one input and one output ({inputs} inputs, {outputs} outputs selected)")]
    SelectionIncomplete { inputs: usize, outputs: usize },

    #[error("'{0}' is not one of the selected inputs")]
    UnselectedField(String),

    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Debug, Clone, Default)]
pub struct WizardController {
    phase: WizardPhase,
    selection: SelectionState,
    form_values: RawFormValues,
    derived_inputs: Option<DerivedInputs>,
    results: Option<DerivedResults>,
    calculator: ResultsCalculator,
    advisor: FinancialAdvisor,
}

impl WizardController {
    pub fn new(
        calculator: ResultsCalculator,
        advisor: FinancialAdvisor,
    ) -> Self {
        Self {
            calculator,
            advisor,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn form_values(&self) -> &RawFormValues {
        &self.form_values
    }

    pub fn derived_inputs(&self) -> Option<&DerivedInputs> {
        self.derived_inputs.as_ref()
    }

    pub fn results(&self) -> Option<&DerivedResults> {
        self.results.as_ref()
    }

    /// Advice for the current results, if a form has been submitted.
    pub fn advice(&self) -> Option<Advice> {
        let inputs = self.derived_inputs.as_ref()?;
        let results = self.results.as_ref()?;
        Some(self.advisor.advise(inputs, results))
    }

    // ── selection step ──────────────────────────────────────────────────

    /// Toggles an input category. Returns whether it is selected afterwards.
    pub fn toggle_input(&mut self, id: &str) -> Result<bool, WizardError> {
        self.expect_phase(WizardPhase::Selection)?;
        Ok(self.selection.toggle_input(id))
    }

    /// Toggles an output category. Returns whether it is selected afterwards.
    pub fn toggle_output(&mut self, id: &str) -> Result<bool, WizardError> {
        self.expect_phase(WizardPhase::Selection)?;
        Ok(self.selection.toggle_output(id))
    }

    pub fn select_inputs<I>(&mut self, ids: I) -> Result<(), WizardError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.expect_phase(WizardPhase::Selection)?;
        self.selection.set_inputs(ids);
        Ok(())
    }

    pub fn select_outputs<I>(&mut self, ids: I) -> Result<(), WizardError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.expect_phase(WizardPhase::Selection)?;
        self.selection.set_outputs(ids);
        Ok(())
    }

    /// Whether [`Self::continue_to_input`] would succeed.
    pub fn can_continue(&self) -> bool {
        self.phase == WizardPhase::Selection && self.selection.is_complete()
    }

    /// Moves from `Selection` to `Input`, carrying the selection forward.
    pub fn continue_to_input(&mut self) -> Result<(), WizardError> {
        self.expect_phase(WizardPhase::Selection)?;
        if !self.selection.is_complete() {
            let err = WizardError::SelectionIncomplete {
                inputs: self.selection.inputs().len(),
                outputs: self.selection.outputs().len(),
            };
            warn!(%err, "continue blocked");
            return Err(err);
        }

        debug!(
            inputs = ?self.selection.inputs(),
            outputs = ?self.selection.outputs(),
            "selection -> input"
        );
        self.phase = WizardPhase::Input;
        Ok(())
    }

    // ── input step ──────────────────────────────────────────────────────

    /// Records the text typed into one of the selected input fields.
    pub fn set_field(
        &mut self,
        id: &str,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.expect_phase(WizardPhase::Input)?;
        if !self.selection.has_input(id) {
            return Err(WizardError::UnselectedField(id.to_string()));
        }
        self.form_values.set(id, value);
        Ok(())
    }

    /// Checks the current form against the submission gate.
    pub fn validate_form(&self) -> Result<(), FieldError> {
        validate_fields(&self.selection, &self.form_values)
    }

    /// Whether [`Self::submit`] would succeed.
    pub fn is_form_valid(&self) -> bool {
        self.phase == WizardPhase::Input && self.validate_form().is_ok()
    }

    /// Replaces the form contents with `values` and submits them.
    pub fn submit_form_values(
        &mut self,
        values: RawFormValues,
    ) -> Result<&DerivedResults, WizardError> {
        self.expect_phase(WizardPhase::Input)?;
        self.form_values = values;
        self.submit()
    }

    /// Reduces the current form, derives the results and moves to `Results`.
    ///
    /// # Errors
    ///
    /// Refused when the wizard is not on the input step, or when a selected
    /// input is missing or not numeric.
    pub fn submit(&mut self) -> Result<&DerivedResults, WizardError> {
        self.expect_phase(WizardPhase::Input)?;
        if let Err(err) = self.validate_form() {
            warn!(%err, "submission blocked");
            return Err(err.into());
        }

        let inputs = reduce(&self.selection, &self.form_values);
        let results = self.calculator.calculate(&inputs);
        info!(
            profit = %results.profit,
            revenue = %results.revenue,
            expenses = %results.expenses,
            runtime_days = %results.runtime_days,
            "input -> results"
        );

        self.derived_inputs = Some(inputs);
        self.phase = WizardPhase::Results;
        Ok(self.results.insert(results))
    }

    // ── navigation ──────────────────────────────────────────────────────

    /// Steps back one phase and returns the new phase.
    ///
    /// From `Input` the typed values are discarded; from `Results` they are
    /// kept for re-editing. On `Selection` this does nothing.
    pub fn go_back(&mut self) -> WizardPhase {
        match self.phase {
            WizardPhase::Selection => {
                debug!("back on selection step ignored");
            }
            WizardPhase::Input => {
                debug!("input -> selection");
                self.form_values.clear();
                self.phase = WizardPhase::Selection;
            }
            WizardPhase::Results => {
                debug!("results -> input");
                self.derived_inputs = None;
                self.results = None;
                self.phase = WizardPhase::Input;
            }
        }
        self.phase
    }

    /// Discards all wizard data and returns to `Selection`.
    pub fn reset(&mut self) {
        debug!(from = %self.phase, "wizard reset");
        self.phase = WizardPhase::Selection;
        self.selection.clear();
        self.form_values.clear();
        self.derived_inputs = None;
        self.results = None;
    }

    fn expect_phase(
        &self,
        expected: WizardPhase,
    ) -> Result<(), WizardError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(WizardError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::AdviceCategory;

    fn on_input_step(inputs: &[&str]) -> WizardController {
        let mut wizard = WizardController::default();
        wizard.select_inputs(inputs.iter().copied()).unwrap();
        wizard.select_outputs(["profit"]).unwrap();
        wizard.continue_to_input().unwrap();
        wizard
    }

    fn form(pairs: &[(&str, &str)]) -> RawFormValues {
        pairs.iter().copied().collect()
    }

    // =========================================================================
    // selection step
    // =========================================================================

    #[test]
    fn continue_blocked_without_outputs() {
        let mut wizard = WizardController::default();
        wizard.toggle_input("budget").unwrap();

        assert!(!wizard.can_continue());
        assert_eq!(
            wizard.continue_to_input(),
            Err(WizardError::SelectionIncomplete {
                inputs: 1,
                outputs: 0
            })
        );
        assert_eq!(wizard.phase(), WizardPhase::Selection);
    }

    #[test]
    fn continue_blocked_without_inputs() {
        let mut wizard = WizardController::default();
        wizard.toggle_output("profit").unwrap();

        assert!(wizard.continue_to_input().is_err());
        assert_eq!(wizard.phase(), WizardPhase::Selection);
    }

    #[test]
    fn continue_carries_selection_forward() {
        let wizard = on_input_step(&["budget", "expenditure"]);

        assert_eq!(wizard.phase(), WizardPhase::Input);
        assert_eq!(wizard.selection().inputs(), ["budget", "expenditure"]);
        assert_eq!(wizard.selection().outputs(), ["profit"]);
    }

    #[test]
    fn selection_is_frozen_outside_selection_step() {
        let mut wizard = on_input_step(&["budget"]);

        assert_eq!(
            wizard.toggle_input("employees"),
            Err(WizardError::WrongPhase {
                expected: WizardPhase::Selection,
                actual: WizardPhase::Input,
            })
        );
    }

    // =========================================================================
    // input step
    // =========================================================================

    #[test]
    fn set_field_rejects_unselected_id() {
        let mut wizard = on_input_step(&["budget"]);

        assert_eq!(
            wizard.set_field("employees", "4"),
            Err(WizardError::UnselectedField("employees".to_string()))
        );
    }

    #[test]
    fn form_validity_tracks_field_edits() {
        let mut wizard = on_input_step(&["budget", "expenditure"]);

        wizard.set_field("budget", "1000").unwrap();
        assert!(!wizard.is_form_valid());

        wizard.set_field("expenditure", "four hundred").unwrap();
        assert!(!wizard.is_form_valid());

        wizard.set_field("expenditure", "400").unwrap();
        assert!(wizard.is_form_valid());
    }

    #[test]
    fn submit_derives_results() {
        let mut wizard = on_input_step(&["budget", "expenditure"]);

        let results = wizard
            .submit_form_values(form(&[("budget", "1000"), ("expenditure", "400")]))
            .unwrap()
            .clone();

        assert_eq!(results.profit, dec!(600));
        assert_eq!(results.revenue, dec!(1200));
        assert_eq!(results.expenses, dec!(400));
        assert_eq!(results.runtime_days, dec!(75));
        assert_eq!(wizard.phase(), WizardPhase::Results);
        assert_eq!(
            wizard.derived_inputs().and_then(|i| i.budget),
            Some(dec!(1000))
        );
    }

    #[test]
    fn submit_blocked_by_missing_field_stays_on_input() {
        let mut wizard = on_input_step(&["budget", "expenditure"]);

        let result = wizard.submit_form_values(form(&[("budget", "1000")]));

        assert_eq!(
            result.err(),
            Some(WizardError::Field(FieldError::Missing(
                "expenditure".to_string()
            )))
        );
        assert_eq!(wizard.phase(), WizardPhase::Input);
        assert!(wizard.results().is_none());
        // What was typed is kept for further editing.
        assert_eq!(wizard.form_values().get("budget"), Some("1000"));
    }

    #[test]
    fn submit_blocked_by_amount_past_decimal_range() {
        let mut wizard = on_input_step(&["budget"]);

        let result = wizard.submit_form_values(form(&[("budget", "1e29")]));

        assert_eq!(
            result.err(),
            Some(WizardError::Field(FieldError::OutOfRange {
                field: "budget".to_string(),
                value: "1e29".to_string(),
            }))
        );
        assert_eq!(wizard.phase(), WizardPhase::Input);
        assert!(!wizard.is_form_valid());
    }

    #[test]
    fn submit_outside_input_step_is_refused() {
        let mut wizard = WizardController::default();

        assert_eq!(
            wizard.submit().err(),
            Some(WizardError::WrongPhase {
                expected: WizardPhase::Input,
                actual: WizardPhase::Selection,
            })
        );
    }

    #[test]
    fn advice_available_after_submission() {
        let mut wizard = on_input_step(&["budget", "expenditure"]);
        assert!(wizard.advice().is_none());

        wizard
            .submit_form_values(form(&[("budget", "1000"), ("expenditure", "400")]))
            .unwrap();

        assert_eq!(
            wizard.advice().map(|a| a.category),
            Some(AdviceCategory::Excellent)
        );
    }

    // =========================================================================
    // navigation
    // =========================================================================

    #[test]
    fn back_from_input_keeps_selection_and_drops_values() {
        let mut wizard = on_input_step(&["budget"]);
        wizard.set_field("budget", "500").unwrap();

        assert_eq!(wizard.go_back(), WizardPhase::Selection);
        assert_eq!(wizard.selection().inputs(), ["budget"]);
        assert!(wizard.form_values().is_empty());
    }

    #[test]
    fn back_from_results_restores_entered_values() {
        let mut wizard = on_input_step(&["budget"]);
        wizard.submit_form_values(form(&[("budget", "500")])).unwrap();

        assert_eq!(wizard.go_back(), WizardPhase::Input);
        assert_eq!(wizard.form_values().get("budget"), Some("500"));
        assert!(wizard.is_form_valid());
        assert!(wizard.results().is_none());
        assert!(wizard.derived_inputs().is_none());
    }

    #[test]
    fn back_on_selection_is_a_no_op() {
        let mut wizard = WizardController::default();
        wizard.toggle_input("budget").unwrap();

        assert_eq!(wizard.go_back(), WizardPhase::Selection);
        assert!(wizard.selection().has_input("budget"));
    }

    #[test]
    fn reset_from_results_clears_everything() {
        let mut wizard = on_input_step(&["budget"]);
        wizard.submit_form_values(form(&[("budget", "500")])).unwrap();

        wizard.reset();

        assert_eq!(wizard.phase(), WizardPhase::Selection);
        assert!(wizard.selection().is_empty());
        assert!(wizard.form_values().is_empty());
        assert!(wizard.derived_inputs().is_none());
        assert!(wizard.results().is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut wizard = on_input_step(&["budget"]);

        wizard.reset();
        wizard.reset();

        assert_eq!(wizard.phase(), WizardPhase::Selection);
        assert!(wizard.selection().is_empty());
    }
}
