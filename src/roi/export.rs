//! Structured export of a calculation.
//!
//! Every numeric leaf is rounded to cents. The payback period is written as
//! `null` when the investment never pays back at the current run rate.
//! The document parses back into [`RoiExport`] without the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::formatting::round_to_cents;
use crate::roi::result::RoiCalculation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiExport {
    pub client_name: String,
    pub project_name: String,
    /// ISO-8601 calendar date
    pub calculation_date: NaiveDate,
    pub period_analyzed: String,
    pub investment: InvestmentExport,
    pub cost_savings: CostSavingsExport,
    pub efficiency_gains: EfficiencyGainsExport,
    pub revenue_impact: RevenueImpactExport,
    pub roi_metrics: RoiMetricsExport,
    pub cumulative: CumulativeExport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentExport {
    pub total_implementation_cost: f64,
    pub monthly_ai_solution_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSavingsExport {
    pub monthly_labor_cost_savings: f64,
    pub monthly_software_cost_savings: f64,
    pub monthly_overhead_savings: f64,
    pub monthly_error_cost_savings: f64,
    pub total_monthly_savings: f64,
    pub total_annual_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyGainsExport {
    pub time_savings_percentage: f64,
    pub time_savings_hours_per_week: f64,
    pub error_reduction_percentage: f64,
    pub quality_improvement_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueImpactExport {
    pub revenue_increase_monthly: f64,
    pub revenue_increase_annual: f64,
    pub conversion_rate_improvement: f64,
    pub customer_satisfaction_improvement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetricsExport {
    pub net_monthly_benefit: f64,
    pub net_annual_benefit: f64,
    pub roi_percentage: f64,
    /// `None` (serialized as `null`) means the investment never pays back
    pub payback_period_months: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeExport {
    pub cumulative_costs: f64,
    pub cumulative_savings: f64,
    pub cumulative_net_benefit: f64,
}

impl RoiCalculation {
    /// Build the rounded, serializable view of this calculation
    pub fn to_export(&self) -> RoiExport {
        let payback = self.roi_metrics.payback_period_months;

        RoiExport {
            client_name: self.client_name.clone(),
            project_name: self.project_name.clone(),
            calculation_date: self.calculation_date,
            period_analyzed: self.period_analyzed.clone(),
            investment: InvestmentExport {
                total_implementation_cost: round_to_cents(
                    self.investment.total_implementation_cost,
                ),
                monthly_ai_solution_cost: round_to_cents(self.investment.monthly_ai_solution_cost),
            },
            cost_savings: CostSavingsExport {
                monthly_labor_cost_savings: round_to_cents(
                    self.cost_savings.monthly_labor_cost_savings,
                ),
                monthly_software_cost_savings: round_to_cents(
                    self.cost_savings.monthly_software_cost_savings,
                ),
                monthly_overhead_savings: round_to_cents(self.cost_savings.monthly_overhead_savings),
                monthly_error_cost_savings: round_to_cents(
                    self.cost_savings.monthly_error_cost_savings,
                ),
                total_monthly_savings: round_to_cents(self.cost_savings.total_monthly_savings),
                total_annual_savings: round_to_cents(self.cost_savings.total_annual_savings),
            },
            efficiency_gains: EfficiencyGainsExport {
                time_savings_percentage: round_to_cents(
                    self.efficiency_gains.time_savings_percentage,
                ),
                time_savings_hours_per_week: round_to_cents(
                    self.efficiency_gains.time_savings_hours_per_week,
                ),
                error_reduction_percentage: round_to_cents(
                    self.efficiency_gains.error_reduction_percentage,
                ),
                quality_improvement_percentage: round_to_cents(
                    self.efficiency_gains.quality_improvement_percentage,
                ),
            },
            revenue_impact: RevenueImpactExport {
                revenue_increase_monthly: round_to_cents(
                    self.revenue_impact.revenue_increase_monthly,
                ),
                revenue_increase_annual: round_to_cents(self.revenue_impact.revenue_increase_annual),
                conversion_rate_improvement: round_to_cents(
                    self.revenue_impact.conversion_rate_improvement,
                ),
                customer_satisfaction_improvement: round_to_cents(
                    self.revenue_impact.customer_satisfaction_improvement,
                ),
            },
            roi_metrics: RoiMetricsExport {
                net_monthly_benefit: round_to_cents(self.roi_metrics.net_monthly_benefit),
                net_annual_benefit: round_to_cents(self.roi_metrics.net_annual_benefit),
                roi_percentage: round_to_cents(self.roi_metrics.roi_percentage),
                payback_period_months: payback.is_finite().then(|| round_to_cents(payback)),
            },
            cumulative: CumulativeExport {
                cumulative_costs: round_to_cents(self.cumulative.cumulative_costs),
                cumulative_savings: round_to_cents(self.cumulative.cumulative_savings),
                cumulative_net_benefit: round_to_cents(self.cumulative.cumulative_net_benefit),
            },
        }
    }

    /// Pretty-printed JSON export document
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_export())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::format_currency;
    use crate::roi::result::*;

    fn calculation(payback: f64) -> RoiCalculation {
        RoiCalculation {
            client_name: "Client".to_string(),
            project_name: "Project".to_string(),
            calculation_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            period_analyzed: "1 year 6 months".to_string(),
            investment: Investment {
                total_implementation_cost: 25000.0,
                monthly_ai_solution_cost: 2500.0,
            },
            cost_savings: CostSavings {
                monthly_labor_cost_savings: 1000.004,
                monthly_software_cost_savings: -0.001,
                monthly_overhead_savings: 0.0,
                monthly_error_cost_savings: 0.0,
                total_monthly_savings: 1000.003,
                total_annual_savings: 12000.036,
            },
            efficiency_gains: EfficiencyGains {
                time_savings_percentage: 33.333_333,
                time_savings_hours_per_week: 0.0,
                error_reduction_percentage: 0.0,
                quality_improvement_percentage: 0.0,
            },
            revenue_impact: RevenueImpact {
                revenue_increase_monthly: 0.0,
                revenue_increase_annual: 0.0,
                conversion_rate_improvement: 0.0,
                customer_satisfaction_improvement: 0.0,
            },
            roi_metrics: RoiMetrics {
                net_monthly_benefit: -1499.997,
                net_annual_benefit: -17999.964,
                roi_percentage: -50.0,
                payback_period_months: payback,
            },
            cumulative: CumulativeFigures {
                cumulative_costs: 70000.0,
                cumulative_savings: 18000.054,
                cumulative_net_benefit: -51999.946,
            },
        }
    }

    #[test]
    fn test_export_rounds_leaves() {
        let export = calculation(f64::INFINITY).to_export();
        assert_eq!(export.cost_savings.monthly_labor_cost_savings, 1000.0);
        assert_eq!(export.cost_savings.monthly_software_cost_savings, 0.0);
        assert_eq!(export.efficiency_gains.time_savings_percentage, 33.33);
        assert_eq!(export.roi_metrics.net_monthly_benefit, -1500.0);
        assert_eq!(export.cumulative.cumulative_net_benefit, -51999.95);
    }

    #[test]
    fn test_export_agrees_with_text_rendering() {
        let mut calc = calculation(f64::INFINITY);
        calc.cost_savings.monthly_labor_cost_savings = 2.675;
        calc.cost_savings.monthly_software_cost_savings = 1.115;
        calc.cost_savings.monthly_error_cost_savings = 8.345;
        let export = calc.to_export();

        let pairs = [
            (export.cost_savings.monthly_labor_cost_savings, 2.675, 2.67),
            (export.cost_savings.monthly_software_cost_savings, 1.115, 1.11),
            (export.cost_savings.monthly_error_cost_savings, 8.345, 8.35),
        ];
        for (exported, stored, expected) in pairs {
            assert_eq!(exported, expected);
            assert_eq!(format_currency(exported), format_currency(stored));
        }
    }

    #[test]
    fn test_infinite_payback_exports_null() {
        let json = calculation(f64::INFINITY).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["roi_metrics"]["payback_period_months"].is_null());
    }

    #[test]
    fn test_finite_payback_exports_number() {
        let json = calculation(2.906_976_744).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["roi_metrics"]["payback_period_months"], 2.91);
    }

    #[test]
    fn test_date_is_iso_calendar_date() {
        let json = calculation(1.0).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["calculation_date"], "2026-01-05");
        assert_eq!(value["period_analyzed"], "1 year 6 months");
    }

    #[test]
    fn test_export_parses_back() {
        let export = calculation(f64::INFINITY).to_export();
        let json = serde_json::to_string(&export).unwrap();
        let parsed: RoiExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, export);
        assert_eq!(parsed.roi_metrics.payback_period_months, None);
    }
}
