//! Caller-side plausibility checks for scenario inputs.
//!
//! The engine accepts any numbers it is given. These checks flag inputs that
//! are probably data-entry mistakes (negative costs, percentages outside
//! 0-100, annual costs that disagree with the monthly ones) before a
//! calculation is trusted.

use serde::Serialize;

use crate::core::{CostMetrics, CurrentMetrics, OperatingMetrics};
use crate::scenario::Scenario;

/// Annual figures may drift from monthly x 12 by this fraction before we warn
const ANNUAL_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `baseline.monthly_labor_cost`
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(field: String, message: String) -> Self {
        Self {
            field,
            message,
            severity: Severity::Error,
        }
    }

    fn warning(field: String, message: String) -> Self {
        Self {
            field,
            message,
            severity: Severity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.field, self.message)
    }
}

/// Check a whole scenario. An empty list means nothing looks suspicious.
pub fn validate_scenario(scenario: &Scenario) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if scenario.implementation_cost < 0.0 {
        issues.push(ValidationIssue::error(
            "implementation_cost".to_string(),
            format!("negative value {}", scenario.implementation_cost),
        ));
    }

    issues.extend(check_operating("baseline", &scenario.baseline.operating));
    issues.extend(check_operating("current", &scenario.current.operating));
    issues.extend(check_solution(&scenario.current));

    issues
}

fn check_operating(prefix: &str, metrics: &OperatingMetrics) -> Vec<ValidationIssue> {
    let cost = &metrics.cost;
    let non_negative = [
        ("monthly_labor_cost", cost.monthly_labor_cost),
        ("annual_labor_cost", cost.annual_labor_cost),
        ("monthly_software_cost", cost.monthly_software_cost),
        ("annual_software_cost", cost.annual_software_cost),
        ("monthly_overhead_cost", cost.monthly_overhead_cost),
        ("monthly_error_cost", cost.monthly_error_cost),
        ("avg_task_completion_time", metrics.time.avg_task_completion_time),
        ("rework_hours_per_week", metrics.time.rework_hours_per_week),
        (
            "quality_control_hours_per_week",
            metrics.quality.quality_control_hours_per_week,
        ),
        ("cost_per_error", metrics.quality.cost_per_error),
        ("avg_deal_size", metrics.revenue.avg_deal_size),
        ("monthly_revenue", metrics.revenue.monthly_revenue),
    ];
    let percentages = [
        ("error_rate_percentage", metrics.quality.error_rate_percentage),
        (
            "accuracy_rate_percentage",
            metrics.quality.accuracy_rate_percentage,
        ),
        (
            "churn_rate_percentage",
            metrics.satisfaction.churn_rate_percentage,
        ),
        (
            "conversion_rate_percentage",
            metrics.revenue.conversion_rate_percentage,
        ),
    ];

    let mut issues: Vec<ValidationIssue> = non_negative
        .iter()
        .filter_map(|(name, value)| check_non_negative(prefix, name, *value))
        .collect();
    issues.extend(
        percentages
            .iter()
            .filter_map(|(name, value)| check_percentage(prefix, name, *value)),
    );
    issues.extend(check_annual_consistency(prefix, cost));
    issues
}

fn check_solution(current: &CurrentMetrics) -> Vec<ValidationIssue> {
    let solution = &current.solution;
    [
        check_non_negative(
            "current",
            "ai_solution_monthly_cost",
            solution.ai_solution_monthly_cost,
        ),
        check_percentage(
            "current",
            "system_uptime_percentage",
            solution.system_uptime_percentage,
        ),
        check_percentage("current", "user_adoption_rate", solution.user_adoption_rate),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_non_negative(prefix: &str, name: &str, value: f64) -> Option<ValidationIssue> {
    (value < 0.0).then(|| {
        ValidationIssue::error(format!("{prefix}.{name}"), format!("negative value {value}"))
    })
}

fn check_percentage(prefix: &str, name: &str, value: f64) -> Option<ValidationIssue> {
    (!(0.0..=100.0).contains(&value)).then(|| {
        ValidationIssue::error(
            format!("{prefix}.{name}"),
            format!("{value} is outside 0-100"),
        )
    })
}

fn check_annual_consistency(prefix: &str, cost: &CostMetrics) -> Vec<ValidationIssue> {
    [
        ("annual_labor_cost", cost.annual_labor_cost, cost.monthly_labor_cost),
        (
            "annual_software_cost",
            cost.annual_software_cost,
            cost.monthly_software_cost,
        ),
    ]
    .into_iter()
    .filter(|(_, annual, monthly)| {
        let expected = monthly * 12.0;
        (annual - expected).abs() > expected.abs() * ANNUAL_TOLERANCE
    })
    .map(|(name, annual, monthly)| {
        ValidationIssue::warning(
            format!("{prefix}.{name}"),
            format!(
                "{annual} differs from 12 x monthly ({})",
                monthly * 12.0
            ),
        )
    })
    .collect()
}
