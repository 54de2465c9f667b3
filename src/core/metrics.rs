//! Operating metrics snapshots.
//!
//! A snapshot captures an organization's cost, time, quality, satisfaction
//! and revenue measurements at one point in time. Baseline and current
//! snapshots share [`OperatingMetrics`]; the current snapshot adds the
//! [`SolutionMetrics`] extension describing the deployed solution.
//!
//! Snapshots perform no validation. Negative costs or percentages outside
//! 0-100 are accepted and flow through the calculation unchanged; see
//! [`crate::validation`] for caller-side checks.

use serde::{Deserialize, Serialize};

/// Unit of time the `volume_per_period` count refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Day,
    Week,
    #[default]
    Month,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly and annual operating costs.
///
/// The annual figures are supplied by the caller and are never derived from
/// the monthly ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostMetrics {
    pub monthly_labor_cost: f64,
    pub annual_labor_cost: f64,
    pub monthly_software_cost: f64,
    pub annual_software_cost: f64,
    #[serde(default)]
    pub monthly_overhead_cost: f64,
    #[serde(default)]
    pub monthly_error_cost: f64,
}

impl CostMetrics {
    /// Sum of the four monthly cost categories
    pub fn monthly_total(&self) -> f64 {
        self.monthly_labor_cost
            + self.monthly_software_cost
            + self.monthly_overhead_cost
            + self.monthly_error_cost
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeMetrics {
    /// Average minutes to complete one task
    pub avg_task_completion_time: f64,
    pub volume_per_period: u32,
    pub period_type: PeriodType,
    #[serde(default)]
    pub rework_hours_per_week: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub error_rate_percentage: f64,
    #[serde(default)]
    pub accuracy_rate_percentage: f64,
    #[serde(default)]
    pub quality_control_hours_per_week: f64,
    #[serde(default)]
    pub cost_per_error: f64,
}

/// Customer satisfaction measurements. NPS and CSAT are optional; an absent
/// score never takes part in an improvement comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nps_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csat_score: Option<f64>,
    #[serde(default)]
    pub complaints_per_month: u32,
    #[serde(default)]
    pub avg_response_time_hours: f64,
    #[serde(default)]
    pub churn_rate_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueMetrics {
    #[serde(default)]
    pub conversion_rate_percentage: f64,
    #[serde(default)]
    pub avg_deal_size: f64,
    #[serde(default)]
    pub sales_cycle_days: u32,
    #[serde(default)]
    pub lead_response_time_hours: f64,
    #[serde(default)]
    pub leads_per_month: u32,
    #[serde(default)]
    pub monthly_revenue: f64,
    #[serde(default)]
    pub estimated_monthly_lost_revenue: f64,
}

/// Field set shared by baseline and current snapshots.
///
/// Groups are flattened on the wire, so documents list every field at the
/// top level of the snapshot table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingMetrics {
    #[serde(flatten)]
    pub cost: CostMetrics,
    #[serde(flatten)]
    pub time: TimeMetrics,
    #[serde(flatten)]
    pub quality: QualityMetrics,
    #[serde(flatten)]
    pub satisfaction: SatisfactionMetrics,
    #[serde(flatten)]
    pub revenue: RevenueMetrics,
}

impl OperatingMetrics {
    /// Weekly hours lost to rework and quality control
    pub fn overhead_hours_per_week(&self) -> f64 {
        self.time.rework_hours_per_week + self.quality.quality_control_hours_per_week
    }
}

fn default_full_percentage() -> f64 {
    100.0
}

/// Fields only tracked once the solution is deployed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionMetrics {
    #[serde(default)]
    pub ai_solution_monthly_cost: f64,
    #[serde(default = "default_full_percentage")]
    pub system_uptime_percentage: f64,
    #[serde(default = "default_full_percentage")]
    pub user_adoption_rate: f64,
}

impl Default for SolutionMetrics {
    fn default() -> Self {
        Self {
            ai_solution_monthly_cost: 0.0,
            system_uptime_percentage: default_full_percentage(),
            user_adoption_rate: default_full_percentage(),
        }
    }
}

impl SolutionMetrics {
    pub fn with_monthly_cost(ai_solution_monthly_cost: f64) -> Self {
        Self {
            ai_solution_monthly_cost,
            ..Self::default()
        }
    }
}

/// Read access common to both snapshot variants
pub trait MetricsSnapshot {
    fn operating(&self) -> &OperatingMetrics;

    /// Total monthly operational cost
    fn total_monthly_cost(&self) -> f64;

    /// Total annual operational cost
    fn total_annual_cost(&self) -> f64 {
        self.total_monthly_cost() * 12.0
    }
}

/// Metrics captured before the change was introduced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineMetrics {
    pub operating: OperatingMetrics,
}

impl BaselineMetrics {
    pub fn new(operating: OperatingMetrics) -> Self {
        Self { operating }
    }
}

impl MetricsSnapshot for BaselineMetrics {
    fn operating(&self) -> &OperatingMetrics {
        &self.operating
    }

    fn total_monthly_cost(&self) -> f64 {
        self.operating.cost.monthly_total()
    }
}

/// Metrics captured after the change, at calculation time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentMetrics {
    #[serde(flatten)]
    pub operating: OperatingMetrics,
    #[serde(flatten)]
    pub solution: SolutionMetrics,
}

impl CurrentMetrics {
    pub fn new(operating: OperatingMetrics, solution: SolutionMetrics) -> Self {
        Self {
            operating,
            solution,
        }
    }

    pub fn ai_solution_monthly_cost(&self) -> f64 {
        self.solution.ai_solution_monthly_cost
    }
}

impl MetricsSnapshot for CurrentMetrics {
    fn operating(&self) -> &OperatingMetrics {
        &self.operating
    }

    fn total_monthly_cost(&self) -> f64 {
        self.operating.cost.monthly_total() + self.solution.ai_solution_monthly_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operating_with_costs(labor: f64, software: f64, overhead: f64, error: f64) -> OperatingMetrics {
        OperatingMetrics {
            cost: CostMetrics {
                monthly_labor_cost: labor,
                annual_labor_cost: labor * 12.0,
                monthly_software_cost: software,
                annual_software_cost: software * 12.0,
                monthly_overhead_cost: overhead,
                monthly_error_cost: error,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_total_monthly_cost_sums_four_categories() {
        let baseline = BaselineMetrics::new(operating_with_costs(18000.0, 500.0, 2000.0, 1500.0));
        assert_eq!(baseline.total_monthly_cost(), 22000.0);
        assert_eq!(baseline.total_annual_cost(), 264000.0);
    }

    #[test]
    fn test_current_total_includes_solution_cost() {
        let current = CurrentMetrics::new(
            operating_with_costs(9000.0, 500.0, 1000.0, 400.0),
            SolutionMetrics::with_monthly_cost(2500.0),
        );
        assert_eq!(current.total_monthly_cost(), 13400.0);
        assert_eq!(current.total_annual_cost(), 160800.0);
    }

    #[test]
    fn test_annual_fields_are_not_derived() {
        let mut operating = operating_with_costs(1000.0, 0.0, 0.0, 0.0);
        operating.cost.annual_labor_cost = 5.0;
        let baseline = BaselineMetrics::new(operating);
        // Totals come from monthly fields only
        assert_eq!(baseline.total_annual_cost(), 12000.0);
        assert_eq!(baseline.operating.cost.annual_labor_cost, 5.0);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let baseline = BaselineMetrics::new(operating_with_costs(-100.0, 0.0, 0.0, 0.0));
        assert_eq!(baseline.total_monthly_cost(), -100.0);
    }

    #[test]
    fn test_solution_defaults() {
        let solution = SolutionMetrics::default();
        assert_eq!(solution.ai_solution_monthly_cost, 0.0);
        assert_eq!(solution.system_uptime_percentage, 100.0);
        assert_eq!(solution.user_adoption_rate, 100.0);
    }

    #[test]
    fn test_deserialize_flat_baseline_applies_defaults() {
        let json = r#"{
            "monthly_labor_cost": 18000,
            "annual_labor_cost": 216000,
            "monthly_software_cost": 500,
            "annual_software_cost": 6000,
            "avg_task_completion_time": 25,
            "volume_per_period": 2000,
            "period_type": "month",
            "error_rate_percentage": 12.0,
            "nps_score": 35
        }"#;
        let baseline: BaselineMetrics = serde_json::from_str(json).unwrap();
        let op = &baseline.operating;
        assert_eq!(op.cost.monthly_labor_cost, 18000.0);
        assert_eq!(op.cost.monthly_overhead_cost, 0.0);
        assert_eq!(op.time.period_type, PeriodType::Month);
        assert_eq!(op.satisfaction.nps_score, Some(35));
        assert_eq!(op.satisfaction.csat_score, None);
        assert_eq!(op.revenue.leads_per_month, 0);
    }

    #[test]
    fn test_deserialize_current_reads_solution_fields() {
        let json = r#"{
            "monthly_labor_cost": 9000,
            "annual_labor_cost": 108000,
            "monthly_software_cost": 500,
            "annual_software_cost": 6000,
            "avg_task_completion_time": 8,
            "volume_per_period": 2800,
            "period_type": "week",
            "error_rate_percentage": 3.5,
            "ai_solution_monthly_cost": 2500,
            "user_adoption_rate": 95.0
        }"#;
        let current: CurrentMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(current.ai_solution_monthly_cost(), 2500.0);
        assert_eq!(current.solution.user_adoption_rate, 95.0);
        assert_eq!(current.solution.system_uptime_percentage, 100.0);
        assert_eq!(current.operating.time.period_type, PeriodType::Week);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{
            "monthly_labor_cost": 9000,
            "annual_labor_cost": 108000,
            "monthly_software_cost": 500,
            "annual_software_cost": 6000,
            "volume_per_period": 2800,
            "period_type": "week",
            "error_rate_percentage": 3.5
        }"#;
        let result: std::result::Result<BaselineMetrics, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_period_type_display() {
        assert_eq!(PeriodType::Day.to_string(), "day");
        assert_eq!(PeriodType::Week.to_string(), "week");
        assert_eq!(PeriodType::Month.to_string(), "month");
    }
}
