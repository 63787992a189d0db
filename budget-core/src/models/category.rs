//! Catalog of the input and output categories offered by the dashboard.
//!
//! Category identifiers travel through the wizard as plain strings so that
//! custom fields can coexist with the built-in ones. The enums here give the
//! known identifiers a closed, typed form plus the display metadata the
//! presentation layer needs.

use serde::{Deserialize, Serialize};

/// Built-in input categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCategory {
    Budget,
    Expenditure,
    Employees,
    RevenueTarget,
    OperationalCosts,
    ProjectDuration,
}

impl InputCategory {
    pub fn all() -> &'static [InputCategory] {
        &[
            InputCategory::Budget,
            InputCategory::Expenditure,
            InputCategory::Employees,
            InputCategory::RevenueTarget,
            InputCategory::OperationalCosts,
            InputCategory::ProjectDuration,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Expenditure => "expenditure",
            Self::Employees => "employees",
            Self::RevenueTarget => "revenue_target",
            Self::OperationalCosts => "operational_costs",
            Self::ProjectDuration => "project_duration",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.id() == id)
    }

    /// Short name shown on the selection screen.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Expenditure => "Expenditure",
            Self::Employees => "Number of Employees",
            Self::RevenueTarget => "Revenue Target",
            Self::OperationalCosts => "Operational Costs",
            Self::ProjectDuration => "Project Duration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Budget => "Total available budget for the project or period",
            Self::Expenditure => "Current or planned expenses and costs",
            Self::Employees => "Team size and hiring plans",
            Self::RevenueTarget => "Expected income goals and targets",
            Self::OperationalCosts => "Monthly operational and overhead expenses",
            Self::ProjectDuration => "Timeline and duration in months",
        }
    }

    /// Label used for the entry field on the input screen.
    pub fn field_label(&self) -> &'static str {
        match self {
            Self::Budget => "Total Budget",
            Self::Expenditure => "Current Expenditure",
            Self::Employees => "Number of Employees",
            Self::RevenueTarget => "Revenue Target",
            Self::OperationalCosts => "Monthly Operational Costs",
            Self::ProjectDuration => "Project Duration (Months)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Budget => "Enter your total budget",
            Self::Expenditure => "Enter current expenses",
            Self::Employees => "Enter employee count",
            Self::RevenueTarget => "Enter target revenue",
            Self::OperationalCosts => "Enter monthly costs",
            Self::ProjectDuration => "Enter duration in months",
        }
    }

    /// Currency prefix, if the field holds a monetary amount.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Budget | Self::Expenditure | Self::RevenueTarget | Self::OperationalCosts => {
                Some("$")
            }
            Self::Employees | Self::ProjectDuration => None,
        }
    }
}

/// Built-in output categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputCategory {
    Profit,
    Loss,
    Revenue,
    Expenses,
    Runtime,
    Roi,
    CashFlow,
    RiskAssessment,
}

impl OutputCategory {
    pub fn all() -> &'static [OutputCategory] {
        &[
            OutputCategory::Profit,
            OutputCategory::Loss,
            OutputCategory::Revenue,
            OutputCategory::Expenses,
            OutputCategory::Runtime,
            OutputCategory::Roi,
            OutputCategory::CashFlow,
            OutputCategory::RiskAssessment,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Profit => "profit",
            Self::Loss => "loss",
            Self::Revenue => "revenue",
            Self::Expenses => "expenses",
            Self::Runtime => "runtime",
            Self::Roi => "roi",
            Self::CashFlow => "cash_flow",
            Self::RiskAssessment => "risk_assessment",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Profit => "Profit Analysis",
            Self::Loss => "Loss Assessment",
            Self::Revenue => "Revenue Projection",
            Self::Expenses => "Expense Breakdown",
            Self::Runtime => "Runtime Analysis",
            Self::Roi => "ROI Calculator",
            Self::CashFlow => "Cash Flow Analysis",
            Self::RiskAssessment => "Risk Assessment",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Profit => "Calculate net profit and profit margins",
            Self::Loss => "Identify potential losses and risk factors",
            Self::Revenue => "Forecast revenue and income streams",
            Self::Expenses => "Detailed analysis of all expenses",
            Self::Runtime => "Project timeline and duration calculations",
            Self::Roi => "Return on investment calculations",
            Self::CashFlow => "Monthly cash flow projections",
            Self::RiskAssessment => "Financial risk analysis and recommendations",
        }
    }
}

/// Human-readable label for any category identifier.
///
/// Known input and output ids use their catalog name; anything else has its
/// first underscore replaced by a space (`"cash_flow"` -> `"cash flow"`).
pub fn display_label(id: &str) -> String {
    if let Some(input) = InputCategory::parse(id) {
        return input.field_label().to_string();
    }
    if let Some(output) = OutputCategory::parse(id) {
        return output.name().to_string();
    }
    id.replacen('_', " ", 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn input_ids_round_trip_through_parse() {
        for category in InputCategory::all() {
            assert_eq!(InputCategory::parse(category.id()), Some(*category));
        }
    }

    #[test]
    fn output_ids_round_trip_through_parse() {
        for category in OutputCategory::all() {
            assert_eq!(OutputCategory::parse(category.id()), Some(*category));
        }
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        assert_eq!(InputCategory::parse("marketing_spend"), None);
        assert_eq!(OutputCategory::parse("budget"), None);
    }

    #[test]
    fn monetary_inputs_carry_dollar_prefix() {
        assert_eq!(InputCategory::Budget.prefix(), Some("$"));
        assert_eq!(InputCategory::OperationalCosts.prefix(), Some("$"));
        assert_eq!(InputCategory::Employees.prefix(), None);
        assert_eq!(InputCategory::ProjectDuration.prefix(), None);
    }

    #[test]
    fn display_label_uses_catalog_then_falls_back() {
        assert_eq!(display_label("budget"), "Total Budget");
        assert_eq!(display_label("cash_flow"), "Cash Flow Analysis");
        assert_eq!(display_label("marketing_spend_q1"), "marketing spend_q1");
    }
}
