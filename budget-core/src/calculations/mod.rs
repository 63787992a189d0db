//! Calculation modules for the dashboard wizard.
//!
//! The pipeline runs raw form text through [`reduction`] into derived inputs,
//! then through [`results`] into the output metrics, with [`advice`] and
//! [`summary`] shaping those metrics for display.

pub mod advice;
pub mod common;
pub mod reduction;
pub mod results;
pub mod summary;

pub use advice::{
    Advice, AdviceCategory, AdviceThresholds, AdviceThresholdsError, AdviceTone,
    FinancialAdvisor, KEY_RECOMMENDATIONS,
};
pub use reduction::{FieldError, FieldRoute, reduce, validate_fields};
pub use results::{CalculationConfig, CalculationConfigError, ResultsCalculator};
pub use summary::{
    BreakdownRow, BreakdownValue, MetricTone, MetricValue, SummaryMetric, breakdown,
    summary_metrics,
};
