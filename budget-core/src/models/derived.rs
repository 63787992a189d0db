use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numeric record reduced from the raw form values.
///
/// The named amounts stay `None` when the matching field was not selected
/// or did not parse. Formulas treat a missing amount as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedInputs {
    pub budget: Option<Decimal>,

    /// Sum of every expense-like field (expenditure, operational costs).
    pub expenditure: Option<Decimal>,

    pub employees: Option<Decimal>,

    /// Values for ids with no dedicated attribute, keyed by id.
    pub custom_fields: BTreeMap<String, Decimal>,
}

impl DerivedInputs {
    pub fn budget_or_zero(&self) -> Decimal {
        self.budget.unwrap_or(Decimal::ZERO)
    }

    pub fn expenditure_or_zero(&self) -> Decimal {
        self.expenditure.unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.expenditure.is_none()
            && self.employees.is_none()
            && self.custom_fields.is_empty()
    }
}

/// Output metrics computed from [`DerivedInputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedResults {
    /// Budget minus aggregated expenditure.
    pub profit: Decimal,

    /// Budget scaled by the revenue factor.
    pub revenue: Decimal,

    /// Aggregated expenditure.
    pub expenses: Decimal,

    /// Whole number of days the budget lasts, rounded up.
    pub runtime_days: Decimal,
}
