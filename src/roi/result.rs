//! The result record produced by one engine invocation.
//!
//! Figures are grouped the same way the structured export groups them.
//! Values are kept at full precision; rounding happens only when rendering.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Investment {
    pub total_implementation_cost: f64,
    pub monthly_ai_solution_cost: f64,
}

/// Monthly savings per cost category (baseline minus current)
#[derive(Debug, Clone, PartialEq)]
pub struct CostSavings {
    pub monthly_labor_cost_savings: f64,
    pub monthly_software_cost_savings: f64,
    pub monthly_overhead_savings: f64,
    pub monthly_error_cost_savings: f64,
    pub total_monthly_savings: f64,
    pub total_annual_savings: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyGains {
    pub time_savings_percentage: f64,
    pub time_savings_hours_per_week: f64,
    /// Point difference in error rate, not a relative change
    pub error_reduction_percentage: f64,
    pub quality_improvement_percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueImpact {
    pub revenue_increase_monthly: f64,
    pub revenue_increase_annual: f64,
    pub conversion_rate_improvement: f64,
    /// Larger of the NPS and CSAT improvements; the two scales are mixed
    pub customer_satisfaction_improvement: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoiMetrics {
    pub net_monthly_benefit: f64,
    pub net_annual_benefit: f64,
    pub roi_percentage: f64,
    /// +infinity when the monthly net benefit is not positive
    pub payback_period_months: f64,
}

impl RoiMetrics {
    /// Whether the implementation cost is ever recovered at the current run rate
    pub fn pays_back(&self) -> bool {
        self.payback_period_months.is_finite()
    }
}

/// Totals accumulated over the whole months-since-deployment window
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeFigures {
    pub cumulative_costs: f64,
    pub cumulative_savings: f64,
    pub cumulative_net_benefit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoiCalculation {
    pub client_name: String,
    pub project_name: String,
    pub calculation_date: NaiveDate,
    pub period_analyzed: String,
    pub investment: Investment,
    pub cost_savings: CostSavings,
    pub efficiency_gains: EfficiencyGains,
    pub revenue_impact: RevenueImpact,
    pub roi_metrics: RoiMetrics,
    pub cumulative: CumulativeFigures,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pays_back() {
        let finite = RoiMetrics {
            net_monthly_benefit: 100.0,
            net_annual_benefit: 1200.0,
            roi_percentage: 0.0,
            payback_period_months: 3.0,
        };
        assert!(finite.pays_back());

        let never = RoiMetrics {
            payback_period_months: f64::INFINITY,
            ..finite
        };
        assert!(!never.pays_back());
    }
}
