//! Figures the results step displays, derived from a finished calculation.
//!
//! Summary metrics are filtered by the selected outputs; only `profit`,
//! `revenue`, `expenses` and `runtime` have a metric, and they always appear
//! in that order regardless of selection order.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{DerivedInputs, DerivedResults, OutputCategory, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricValue {
    Currency(Decimal),
    Days(Decimal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricTone {
    Positive,
    Negative,
    Caution,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetric {
    pub output: OutputCategory,
    pub label: &'static str,
    pub value: MetricValue,
    pub tone: MetricTone,
}

/// Summary metrics for the outputs the user asked for.
pub fn summary_metrics(
    selection: &SelectionState,
    results: &DerivedResults,
) -> Vec<SummaryMetric> {
    let candidates = [
        SummaryMetric {
            output: OutputCategory::Profit,
            label: "Net Profit",
            value: MetricValue::Currency(results.profit),
            tone: if results.profit >= Decimal::ZERO {
                MetricTone::Positive
            } else {
                MetricTone::Negative
            },
        },
        SummaryMetric {
            output: OutputCategory::Revenue,
            label: "Projected Revenue",
            value: MetricValue::Currency(results.revenue),
            tone: MetricTone::Positive,
        },
        SummaryMetric {
            output: OutputCategory::Expenses,
            label: "Total Expenses",
            value: MetricValue::Currency(results.expenses),
            tone: MetricTone::Caution,
        },
        SummaryMetric {
            output: OutputCategory::Runtime,
            label: "Runtime",
            value: MetricValue::Days(results.runtime_days),
            tone: MetricTone::Neutral,
        },
    ];

    candidates
        .into_iter()
        .filter(|m| selection.has_output(m.output.id()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BreakdownValue {
    Currency(Decimal),
    Headcount(Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub value: BreakdownValue,
}

/// Rows of the financial breakdown panel.
///
/// Team size only appears when an employee count was entered and is not zero.
pub fn breakdown(
    inputs: &DerivedInputs,
    results: &DerivedResults,
) -> Vec<BreakdownRow> {
    let mut rows = vec![
        BreakdownRow {
            label: "Initial Budget",
            value: BreakdownValue::Currency(inputs.budget_or_zero()),
        },
        BreakdownRow {
            label: "Total Expenses",
            value: BreakdownValue::Currency(inputs.expenditure_or_zero()),
        },
    ];

    if let Some(employees) = inputs.employees.filter(|e| !e.is_zero()) {
        rows.push(BreakdownRow {
            label: "Team Size",
            value: BreakdownValue::Headcount(employees),
        });
    }

    rows.push(BreakdownRow {
        label: "Net Result",
        value: BreakdownValue::Currency(results.profit),
    });

    rows
}
