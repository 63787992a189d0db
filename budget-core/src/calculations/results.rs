//! Result derivation: [`DerivedInputs`] to [`DerivedResults`].
//!
//! # Formulas
//!
//! Missing amounts count as zero.
//!
//! | Metric   | Formula |
//! |----------|---------|
//! | profit   | budget − expenditure |
//! | revenue  | budget × revenue factor (1.2) |
//! | expenses | expenditure |
//! | runtime  | ⌈budget × period (30) ÷ divisor⌉, where divisor is the expenditure, or the fallback divisor (50) when expenditure is zero |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::DerivedInputs;
//! use budget_core::calculations::{CalculationConfig, ResultsCalculator};
//!
//! let inputs = DerivedInputs {
//!     budget: Some(dec!(1000)),
//!     expenditure: Some(dec!(400)),
//!     ..Default::default()
//! };
//!
//! let calculator = ResultsCalculator::new(CalculationConfig::default()).unwrap();
//! let results = calculator.calculate(&inputs);
//!
//! assert_eq!(results.profit, dec!(600));
//! assert_eq!(results.revenue, dec!(1200));
//! assert_eq!(results.expenses, dec!(400));
//! assert_eq!(results.runtime_days, dec!(75));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::saturating_div;
use crate::{DerivedInputs, DerivedResults};

/// Errors raised when a [`CalculationConfig`] is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationConfigError {
    /// The revenue factor must not be negative.
    #[error("revenue factor must be non-negative, got {0}")]
    InvalidRevenueFactor(Decimal),

    /// The fallback divisor replaces a zero expenditure and so cannot be zero itself.
    #[error("fallback divisor must be positive, got {0}")]
    InvalidFallbackDivisor(Decimal),

    /// The runtime period must be positive.
    #[error("runtime period must be positive, got {0}")]
    InvalidRuntimePeriod(Decimal),
}

/// Constants used by the result formulas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Multiplier turning the budget into projected revenue.
    pub revenue_factor: Decimal,

    /// Divisor used for the runtime when expenditure is zero.
    pub fallback_divisor: Decimal,

    /// Length of the period the runtime is scaled to, in days.
    pub runtime_period_days: Decimal,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            revenue_factor: Decimal::new(12, 1),
            fallback_divisor: Decimal::from(50),
            runtime_period_days: Decimal::from(30),
        }
    }
}

impl CalculationConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationConfigError`] if:
    /// - `revenue_factor` is negative
    /// - `fallback_divisor` is zero or negative
    /// - `runtime_period_days` is zero or negative
    pub fn validate(&self) -> Result<(), CalculationConfigError> {
        if self.revenue_factor < Decimal::ZERO {
            return Err(CalculationConfigError::InvalidRevenueFactor(
                self.revenue_factor,
            ));
        }
        if self.fallback_divisor <= Decimal::ZERO {
            return Err(CalculationConfigError::InvalidFallbackDivisor(
                self.fallback_divisor,
            ));
        }
        if self.runtime_period_days <= Decimal::ZERO {
            return Err(CalculationConfigError::InvalidRuntimePeriod(
                self.runtime_period_days,
            ));
        }
        Ok(())
    }
}

/// Calculator applying the result formulas with a validated configuration.
#[derive(Debug, Clone)]
pub struct ResultsCalculator {
    config: CalculationConfig,
}

impl Default for ResultsCalculator {
    fn default() -> Self {
        Self {
            config: CalculationConfig::default(),
        }
    }
}

impl ResultsCalculator {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationConfigError`] if the configuration is invalid.
    pub fn new(config: CalculationConfig) -> Result<Self, CalculationConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// Computes every output metric. Total over its input domain.
    pub fn calculate(
        &self,
        inputs: &DerivedInputs,
    ) -> DerivedResults {
        let budget = inputs.budget_or_zero();
        let expenditure = inputs.expenditure_or_zero();

        DerivedResults {
            profit: self.profit(budget, expenditure),
            revenue: self.revenue(budget),
            expenses: self.expenses(expenditure),
            runtime_days: self.runtime_days(budget, expenditure),
        }
    }

    fn profit(
        &self,
        budget: Decimal,
        expenditure: Decimal,
    ) -> Decimal {
        budget.saturating_sub(expenditure)
    }

    fn revenue(
        &self,
        budget: Decimal,
    ) -> Decimal {
        budget.saturating_mul(self.config.revenue_factor)
    }

    fn expenses(
        &self,
        expenditure: Decimal,
    ) -> Decimal {
        expenditure
    }

    /// Budget lifetime over the configured period, rounded up to whole days.
    ///
    /// The multiplication happens before the division so quotients that are
    /// exact in real arithmetic stay exact.
    fn runtime_days(
        &self,
        budget: Decimal,
        expenditure: Decimal,
    ) -> Decimal {
        let divisor = self.divisor(expenditure);
        let scaled = budget.saturating_mul(self.config.runtime_period_days);
        saturating_div(scaled, divisor).ceil()
    }

    fn divisor(
        &self,
        expenditure: Decimal,
    ) -> Decimal {
        if expenditure.is_zero() {
            self.config.fallback_divisor
        } else {
            expenditure
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn inputs(
        budget: Option<Decimal>,
        expenditure: Option<Decimal>,
    ) -> DerivedInputs {
        DerivedInputs {
            budget,
            expenditure,
            ..Default::default()
        }
    }

    fn calculator() -> ResultsCalculator {
        ResultsCalculator::new(CalculationConfig::default()).unwrap()
    }

    // =========================================================================
    // config tests
    // =========================================================================

    #[test]
    fn default_config_matches_documented_constants() {
        let config = CalculationConfig::default();

        assert_eq!(config.revenue_factor, dec!(1.2));
        assert_eq!(config.fallback_divisor, dec!(50));
        assert_eq!(config.runtime_period_days, dec!(30));
    }

    #[test]
    fn new_rejects_zero_fallback_divisor() {
        let config = CalculationConfig {
            fallback_divisor: dec!(0),
            ..Default::default()
        };

        assert_eq!(
            ResultsCalculator::new(config).err(),
            Some(CalculationConfigError::InvalidFallbackDivisor(dec!(0)))
        );
    }

    #[test]
    fn new_rejects_negative_revenue_factor() {
        let config = CalculationConfig {
            revenue_factor: dec!(-1),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(CalculationConfigError::InvalidRevenueFactor(dec!(-1)))
        );
    }

    #[test]
    fn new_rejects_non_positive_runtime_period() {
        let config = CalculationConfig {
            runtime_period_days: dec!(0),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(CalculationConfigError::InvalidRuntimePeriod(dec!(0)))
        );
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_standard_case() {
        let results = calculator().calculate(&inputs(Some(dec!(1000)), Some(dec!(400))));

        assert_eq!(results.profit, dec!(600));
        assert_eq!(results.revenue, dec!(1200));
        assert_eq!(results.expenses, dec!(400));
        // ceil(1000 / 400 * 30) = 75
        assert_eq!(results.runtime_days, dec!(75));
    }

    #[test]
    fn calculate_zero_expenditure_uses_fallback_divisor() {
        let results = calculator().calculate(&inputs(Some(dec!(500)), Some(dec!(0))));

        // ceil(500 / 50 * 30) = 300
        assert_eq!(results.runtime_days, dec!(300));
        assert_eq!(results.profit, dec!(500));
    }

    #[test]
    fn calculate_missing_expenditure_uses_fallback_divisor() {
        let results = calculator().calculate(&inputs(Some(dec!(500)), None));

        assert_eq!(results.runtime_days, dec!(300));
        assert_eq!(results.expenses, dec!(0));
    }

    #[test]
    fn calculate_rounds_runtime_up() {
        let results = calculator().calculate(&inputs(Some(dec!(1000)), Some(dec!(700))));

        // 1000 * 30 / 700 = 42.857...
        assert_eq!(results.runtime_days, dec!(43));
    }

    #[test]
    fn calculate_exact_thirds_do_not_round_past_whole_day() {
        let results = calculator().calculate(&inputs(Some(dec!(100)), Some(dec!(3))));

        // 100 * 30 / 3 = 1000 exactly
        assert_eq!(results.runtime_days, dec!(1000));
    }

    #[test]
    fn calculate_empty_inputs_is_all_zero() {
        let results = calculator().calculate(&DerivedInputs::default());

        assert_eq!(results, DerivedResults::default());
    }

    #[test]
    fn calculate_loss_produces_negative_profit() {
        let results = calculator().calculate(&inputs(Some(dec!(300)), Some(dec!(450))));

        assert_eq!(results.profit, dec!(-150));
        // 300 * 30 / 450 = 20
        assert_eq!(results.runtime_days, dec!(20));
    }

    #[test]
    fn calculate_uses_configured_constants() {
        let config = CalculationConfig {
            revenue_factor: dec!(1.5),
            fallback_divisor: dec!(100),
            runtime_period_days: dec!(7),
        };
        let calculator = ResultsCalculator::new(config).unwrap();

        let results = calculator.calculate(&inputs(Some(dec!(1000)), None));

        assert_eq!(results.revenue, dec!(1500));
        // 1000 * 7 / 100 = 70
        assert_eq!(results.runtime_days, dec!(70));
    }
}
