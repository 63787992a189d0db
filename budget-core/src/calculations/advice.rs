//! Canned financial advice keyed on the profit margin.
//!
//! The margin is `profit / budget × 100`, or zero when the budget is not
//! positive. Buckets are checked in order and comparisons are strict, so a
//! margin of exactly 20 is not excellent and exactly 10 is not "positive".
//!
//! | Order | Condition                       | Category             |
//! |-------|---------------------------------|----------------------|
//! | 1     | profit > 0 and margin > 20      | Excellent            |
//! | 2     | profit > 0 and margin > 10      | Positive, improvable |
//! | 3     | profit ≤ 0                      | Action required      |
//! | 4     | otherwise                       | Break-even           |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{round_half_up, saturating_div};
use crate::{DerivedInputs, DerivedResults};

/// Recommendations shown alongside every piece of advice.
pub const KEY_RECOMMENDATIONS: [&str; 3] = [
    "Monitor cash flow regularly to ensure sustainable operations",
    "Consider scenario planning for different budget allocations",
    "Review and optimize expenses quarterly",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdviceThresholdsError {
    #[error("positive margin {positive} exceeds excellent margin {excellent}")]
    InvertedThresholds { positive: Decimal, excellent: Decimal },
}

/// Margin thresholds, in percent, separating the advice buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceThresholds {
    pub excellent_margin: Decimal,
    pub positive_margin: Decimal,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            excellent_margin: Decimal::from(20),
            positive_margin: Decimal::from(10),
        }
    }
}

impl AdviceThresholds {
    pub fn validate(&self) -> Result<(), AdviceThresholdsError> {
        if self.positive_margin > self.excellent_margin {
            return Err(AdviceThresholdsError::InvertedThresholds {
                positive: self.positive_margin,
                excellent: self.excellent_margin,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceCategory {
    Excellent,
    PositiveImprovable,
    ActionRequired,
    BreakEven,
}

/// Visual tone the presentation layer uses for an advice panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceTone {
    Success,
    Info,
    Warning,
}

impl AdviceCategory {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Financial Health",
            Self::PositiveImprovable => "Positive but Room for Improvement",
            Self::ActionRequired => "Action Required",
            Self::BreakEven => "Break-even Analysis",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "Your budget shows strong profitability with healthy margins. \
                 Consider reinvesting profits for growth or expanding your team."
            }
            Self::PositiveImprovable => {
                "You're profitable but margins could be better. Look for cost \
                 optimization opportunities or revenue enhancement strategies."
            }
            Self::ActionRequired => {
                "Current projections show losses. Consider reducing expenses, \
                 increasing revenue, or adjusting your budget allocation."
            }
            Self::BreakEven => {
                "You're close to break-even. Small adjustments in either direction \
                 could significantly impact your bottom line."
            }
        }
    }

    pub fn tone(&self) -> AdviceTone {
        match self {
            Self::Excellent => AdviceTone::Success,
            Self::ActionRequired => AdviceTone::Warning,
            Self::PositiveImprovable | Self::BreakEven => AdviceTone::Info,
        }
    }
}

/// Advice ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub category: AdviceCategory,
    pub title: &'static str,
    pub message: &'static str,
    pub tone: AdviceTone,
    /// Profit margin in percent, rounded to two places.
    pub profit_margin: Decimal,
}

/// Classifier mapping profit and budget onto an [`AdviceCategory`].
#[derive(Debug, Clone, Default)]
pub struct FinancialAdvisor {
    thresholds: AdviceThresholds,
}

impl FinancialAdvisor {
    /// Creates an advisor after validating `thresholds`.
    ///
    /// # Errors
    ///
    /// Returns [`AdviceThresholdsError`] when the positive threshold is above
    /// the excellent one.
    pub fn new(thresholds: AdviceThresholds) -> Result<Self, AdviceThresholdsError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Profit as a percentage of budget; zero when budget is not positive.
    pub fn profit_margin(
        &self,
        profit: Decimal,
        budget: Decimal,
    ) -> Decimal {
        if budget > Decimal::ZERO {
            saturating_div(profit.saturating_mul(Decimal::ONE_HUNDRED), budget)
        } else {
            Decimal::ZERO
        }
    }

    pub fn classify(
        &self,
        profit: Decimal,
        budget: Decimal,
    ) -> AdviceCategory {
        let margin = self.profit_margin(profit, budget);
        let positive = profit > Decimal::ZERO;

        if positive && margin > self.thresholds.excellent_margin {
            AdviceCategory::Excellent
        } else if positive && margin > self.thresholds.positive_margin {
            AdviceCategory::PositiveImprovable
        } else if !positive {
            AdviceCategory::ActionRequired
        } else {
            AdviceCategory::BreakEven
        }
    }

    /// Advice for a completed calculation.
    pub fn advise(
        &self,
        inputs: &DerivedInputs,
        results: &DerivedResults,
    ) -> Advice {
        let budget = inputs.budget_or_zero();
        let category = self.classify(results.profit, budget);

        Advice {
            category,
            title: category.title(),
            message: category.message(),
            tone: category.tone(),
            profit_margin: round_half_up(self.profit_margin(results.profit, budget)),
        }
    }
}
