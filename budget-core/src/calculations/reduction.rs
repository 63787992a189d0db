//! Reduction of raw form text into [`DerivedInputs`].
//!
//! Every selected input id is routed through a closed [`FieldRoute`]: the
//! handful of ids with dedicated attributes get their own variant and
//! everything else lands in the open custom-field map. Unparseable text is
//! dropped from the reduction; rejecting a form is the job of
//! [`validate_fields`], which runs separately.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::calculations::reduce;
//! use budget_core::{RawFormValues, SelectionState};
//!
//! let selection = SelectionState::new(["budget", "expenditure", "operational_costs"], ["profit"]);
//! let values: RawFormValues = [
//!     ("budget", "1000"),
//!     ("expenditure", "250"),
//!     ("operational_costs", "150"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let inputs = reduce(&selection, &values);
//!
//! assert_eq!(inputs.budget, Some(dec!(1000)));
//! assert_eq!(inputs.expenditure, Some(dec!(400)));
//! ```

use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{AmountError, parse_amount, try_parse_amount};
use crate::{DerivedInputs, InputCategory, RawFormValues, SelectionState};

/// Attribute of [`DerivedInputs`] a field id contributes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRoute {
    Budget,
    /// Added to the running expenditure total.
    Expenditure,
    Employees,
    Custom(String),
}

impl FieldRoute {
    pub fn for_id(id: &str) -> Self {
        match InputCategory::parse(id) {
            Some(InputCategory::Budget) => Self::Budget,
            Some(InputCategory::Expenditure | InputCategory::OperationalCosts) => Self::Expenditure,
            Some(InputCategory::Employees) => Self::Employees,
            Some(InputCategory::RevenueTarget | InputCategory::ProjectDuration) | None => {
                Self::Custom(id.to_string())
            }
        }
    }
}

/// Why a selected field blocks submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("no value entered for '{0}'")]
    Missing(String),

    #[error("value '{value}' for '{field}' is not a number")]
    NotNumeric { field: String, value: String },

    #[error("value '{value}' for '{field}' is outside the supported range")]
    OutOfRange { field: String, value: String },
}

/// Reduces the values of the selected inputs into [`DerivedInputs`].
///
/// Values are visited in selection order. Ids present in `values` but not
/// selected are ignored, as are values that fail to parse.
pub fn reduce(
    selection: &SelectionState,
    values: &RawFormValues,
) -> DerivedInputs {
    let mut derived = DerivedInputs::default();

    for id in selection.inputs() {
        let Some(amount) = values.get(id).and_then(parse_amount) else {
            debug!(field = %id, "skipping field without a numeric value");
            continue;
        };

        match FieldRoute::for_id(id) {
            FieldRoute::Budget => derived.budget = Some(amount),
            FieldRoute::Expenditure => {
                let running = derived.expenditure.unwrap_or_default();
                derived.expenditure = Some(running.saturating_add(amount));
            }
            FieldRoute::Employees => derived.employees = Some(amount),
            FieldRoute::Custom(key) => {
                derived.custom_fields.insert(key, amount);
            }
        }
    }

    derived
}

/// Checks that every selected input has a value that parses as a number.
///
/// # Errors
///
/// Returns the first offending field in selection order.
pub fn validate_fields(
    selection: &SelectionState,
    values: &RawFormValues,
) -> Result<(), FieldError> {
    for id in selection.inputs() {
        let raw = values.get(id).unwrap_or_default();
        let failure = match try_parse_amount(raw) {
            Ok(Some(_)) => continue,
            Ok(None) => return Err(FieldError::Missing(id.clone())),
            Err(failure) => failure,
        };
        let (field, value) = (id.clone(), raw.to_string());
        return Err(match failure {
            AmountError::NotNumeric => FieldError::NotNumeric { field, value },
            AmountError::OutOfRange => FieldError::OutOfRange { field, value },
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn values(pairs: &[(&str, &str)]) -> RawFormValues {
        pairs.iter().copied().collect()
    }

    // =========================================================================
    // FieldRoute tests
    // =========================================================================

    #[test]
    fn route_sends_expense_like_ids_to_expenditure() {
        assert_eq!(FieldRoute::for_id("expenditure"), FieldRoute::Expenditure);
        assert_eq!(
            FieldRoute::for_id("operational_costs"),
            FieldRoute::Expenditure
        );
    }

    #[test]
    fn route_sends_catalog_ids_without_attribute_to_custom() {
        assert_eq!(
            FieldRoute::for_id("revenue_target"),
            FieldRoute::Custom("revenue_target".to_string())
        );
        assert_eq!(
            FieldRoute::for_id("project_duration"),
            FieldRoute::Custom("project_duration".to_string())
        );
    }

    #[test]
    fn route_sends_unknown_ids_to_custom() {
        assert_eq!(
            FieldRoute::for_id("marketing_spend"),
            FieldRoute::Custom("marketing_spend".to_string())
        );
    }

    // =========================================================================
    // reduce tests
    // =========================================================================

    #[test]
    fn reduce_sums_expenditure_and_operational_costs() {
        let selection = SelectionState::new(["expenditure", "operational_costs"], ["expenses"]);
        let values = values(&[("expenditure", "400"), ("operational_costs", "125.50")]);

        let derived = reduce(&selection, &values);

        assert_eq!(derived.expenditure, Some(dec!(525.50)));
        assert_eq!(derived.budget, None);
    }

    #[test]
    fn reduce_places_unknown_field_in_custom_map() {
        let selection = SelectionState::new(["budget", "marketing_spend"], ["profit"]);
        let values = values(&[("budget", "200"), ("marketing_spend", "50")]);

        let derived = reduce(&selection, &values);

        assert_eq!(derived.budget, Some(dec!(200)));
        assert_eq!(derived.custom_fields.get("marketing_spend"), Some(&dec!(50)));
        assert_eq!(derived.expenditure, None);
        assert_eq!(derived.expenditure_or_zero(), dec!(0));
    }

    #[test]
    fn reduce_skips_unparseable_values() {
        let selection = SelectionState::new(["budget", "employees"], ["profit"]);
        let values = values(&[("budget", "lots"), ("employees", "12")]);

        let derived = reduce(&selection, &values);

        assert_eq!(derived.budget, None);
        assert_eq!(derived.employees, Some(dec!(12)));
    }

    #[test]
    fn reduce_ignores_values_for_unselected_ids() {
        let selection = SelectionState::new(["budget"], ["profit"]);
        let values = values(&[("budget", "100"), ("expenditure", "40")]);

        let derived = reduce(&selection, &values);

        assert_eq!(derived.expenditure, None);
        assert!(derived.custom_fields.is_empty());
    }

    #[test]
    fn reduce_of_empty_form_is_empty() {
        let selection = SelectionState::new(["budget"], ["profit"]);

        let derived = reduce(&selection, &RawFormValues::new());

        assert!(derived.is_empty());
    }

    // =========================================================================
    // validate_fields tests
    // =========================================================================

    #[test]
    fn validate_accepts_when_every_selected_field_is_numeric() {
        let selection = SelectionState::new(["budget", "expenditure"], ["profit"]);
        let values = values(&[("budget", "1000"), ("expenditure", "1,200.50")]);

        assert_eq!(validate_fields(&selection, &values), Ok(()));
    }

    #[test]
    fn validate_reports_missing_field() {
        let selection = SelectionState::new(["budget", "expenditure"], ["profit"]);
        let values = values(&[("budget", "1000")]);

        assert_eq!(
            validate_fields(&selection, &values),
            Err(FieldError::Missing("expenditure".to_string()))
        );
    }

    #[test]
    fn validate_treats_blank_value_as_missing() {
        let selection = SelectionState::new(["budget"], ["profit"]);
        let values = values(&[("budget", "   ")]);

        assert_eq!(
            validate_fields(&selection, &values),
            Err(FieldError::Missing("budget".to_string()))
        );
    }

    #[test]
    fn validate_reports_non_numeric_field() {
        let selection = SelectionState::new(["budget"], ["profit"]);
        let values = values(&[("budget", "a lot")]);

        assert_eq!(
            validate_fields(&selection, &values),
            Err(FieldError::NotNumeric {
                field: "budget".to_string(),
                value: "a lot".to_string(),
            })
        );
    }

    #[test]
    fn validate_reports_underscored_digits_as_non_numeric() {
        let selection = SelectionState::new(["budget"], ["profit"]);
        let values = values(&[("budget", "1_000")]);

        assert_eq!(
            validate_fields(&selection, &values),
            Err(FieldError::NotNumeric {
                field: "budget".to_string(),
                value: "1_000".to_string(),
            })
        );
    }

    #[test]
    fn validate_reports_amounts_past_the_decimal_range() {
        let selection = SelectionState::new(["budget", "expenditure"], ["profit"]);
        let values = values(&[("budget", "1e29"), ("expenditure", "10")]);

        let err = validate_fields(&selection, &values).unwrap_err();

        assert_eq!(
            err,
            FieldError::OutOfRange {
                field: "budget".to_string(),
                value: "1e29".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "value '1e29' for 'budget' is outside the supported range"
        );
    }

    #[test]
    fn validate_accepts_tiny_amounts_in_either_notation() {
        let selection = SelectionState::new(["budget", "expenditure"], ["profit"]);
        let values = values(&[
            ("budget", "1e-30"),
            ("expenditure", "0.000000000000000000000000000001"),
        ]);

        assert_eq!(validate_fields(&selection, &values), Ok(()));
        let inputs = reduce(&selection, &values);
        assert_eq!(inputs.budget, inputs.expenditure);
        assert_eq!(inputs.budget, Some(dec!(0)));
    }
}
