use chrono::{Local, NaiveDate};

use crate::core::{
    BaselineMetrics, CurrentMetrics, MetricsSnapshot, OperatingMetrics, SatisfactionMetrics,
};
use crate::roi::period::period_label;
use crate::roi::result::{
    CostSavings, CumulativeFigures, EfficiencyGains, Investment, RevenueImpact, RoiCalculation,
    RoiMetrics,
};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Computes ROI figures for one project from a baseline and a current snapshot.
///
/// The calculator holds only its inputs; every call to [`calculate`] derives
/// a fresh [`RoiCalculation`] from them.
///
/// [`calculate`]: RoiCalculator::calculate
#[derive(Debug, Clone)]
pub struct RoiCalculator {
    client_name: String,
    project_name: String,
    baseline: BaselineMetrics,
    current: CurrentMetrics,
    implementation_cost: f64,
    months_since_deployment: u32,
}

impl RoiCalculator {
    pub fn new(
        client_name: impl Into<String>,
        project_name: impl Into<String>,
        baseline: BaselineMetrics,
        current: CurrentMetrics,
        implementation_cost: f64,
        months_since_deployment: u32,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            project_name: project_name.into(),
            baseline,
            current,
            implementation_cost,
            months_since_deployment,
        }
    }

    pub fn baseline(&self) -> &BaselineMetrics {
        &self.baseline
    }

    pub fn current(&self) -> &CurrentMetrics {
        &self.current
    }

    /// Run the calculation stamped with today's local date
    pub fn calculate(&self) -> RoiCalculation {
        self.calculate_as_of(Local::now().date_naive())
    }

    /// Run the calculation with an explicit calculation date
    pub fn calculate_as_of(&self, calculation_date: NaiveDate) -> RoiCalculation {
        log::debug!(
            "Calculating ROI for {} / {} over {} months",
            self.client_name,
            self.project_name,
            self.months_since_deployment
        );

        let baseline = self.baseline.operating();
        let current = self.current.operating();
        let ai_monthly_cost = self.current.ai_solution_monthly_cost();

        let cost_savings = cost_savings(baseline, current);
        let efficiency_gains = efficiency_gains(baseline, current);
        let revenue_impact = revenue_impact(baseline, current);
        let cumulative = cumulative_figures(
            self.implementation_cost,
            ai_monthly_cost,
            cost_savings.total_monthly_savings,
            revenue_impact.revenue_increase_monthly,
            self.months_since_deployment,
        );
        let roi_metrics = roi_metrics(
            self.implementation_cost,
            ai_monthly_cost,
            cost_savings.total_monthly_savings,
            revenue_impact.revenue_increase_monthly,
            &cumulative,
        );

        if !roi_metrics.pays_back() {
            log::info!(
                "Net monthly benefit is {:.2}; {} does not pay back at the current run rate",
                roi_metrics.net_monthly_benefit,
                self.project_name
            );
        }

        RoiCalculation {
            client_name: self.client_name.clone(),
            project_name: self.project_name.clone(),
            calculation_date,
            period_analyzed: period_label(self.months_since_deployment),
            investment: Investment {
                total_implementation_cost: self.implementation_cost,
                monthly_ai_solution_cost: ai_monthly_cost,
            },
            cost_savings,
            efficiency_gains,
            revenue_impact,
            roi_metrics,
            cumulative,
        }
    }
}

/// Per-category monthly savings, baseline minus current
pub fn cost_savings(baseline: &OperatingMetrics, current: &OperatingMetrics) -> CostSavings {
    let before = &baseline.cost;
    let after = &current.cost;

    let labor = before.monthly_labor_cost - after.monthly_labor_cost;
    let software = before.monthly_software_cost - after.monthly_software_cost;
    let overhead = before.monthly_overhead_cost - after.monthly_overhead_cost;
    let error = before.monthly_error_cost - after.monthly_error_cost;

    let total_monthly_savings = labor + software + overhead + error;

    CostSavings {
        monthly_labor_cost_savings: labor,
        monthly_software_cost_savings: software,
        monthly_overhead_savings: overhead,
        monthly_error_cost_savings: error,
        total_monthly_savings,
        total_annual_savings: total_monthly_savings * MONTHS_PER_YEAR,
    }
}

/// Relative reduction in task completion time; 0 when the baseline time is not positive
pub fn time_savings_percentage(baseline_minutes: f64, current_minutes: f64) -> f64 {
    if baseline_minutes > 0.0 {
        (baseline_minutes - current_minutes) / baseline_minutes * 100.0
    } else {
        0.0
    }
}

pub fn efficiency_gains(baseline: &OperatingMetrics, current: &OperatingMetrics) -> EfficiencyGains {
    EfficiencyGains {
        time_savings_percentage: time_savings_percentage(
            baseline.time.avg_task_completion_time,
            current.time.avg_task_completion_time,
        ),
        time_savings_hours_per_week: baseline.overhead_hours_per_week()
            - current.overhead_hours_per_week(),
        error_reduction_percentage: baseline.quality.error_rate_percentage
            - current.quality.error_rate_percentage,
        quality_improvement_percentage: current.quality.accuracy_rate_percentage
            - baseline.quality.accuracy_rate_percentage,
    }
}

/// Change in monthly revenue plus deals won from a better conversion rate.
///
/// Conversion improvement is only measured against a positive baseline
/// conversion rate; otherwise it is reported as 0 and contributes nothing.
pub fn revenue_impact(baseline: &OperatingMetrics, current: &OperatingMetrics) -> RevenueImpact {
    let before = &baseline.revenue;
    let after = &current.revenue;

    let mut revenue_increase_monthly = after.monthly_revenue - before.monthly_revenue;
    let mut conversion_rate_improvement = 0.0;

    if before.conversion_rate_percentage > 0.0 {
        conversion_rate_improvement =
            after.conversion_rate_percentage - before.conversion_rate_percentage;

        if after.leads_per_month > 0 && after.avg_deal_size > 0.0 {
            let additional_deals =
                f64::from(after.leads_per_month) * (conversion_rate_improvement / 100.0);
            revenue_increase_monthly += additional_deals * after.avg_deal_size;
        }
    }

    RevenueImpact {
        revenue_increase_monthly,
        revenue_increase_annual: revenue_increase_monthly * MONTHS_PER_YEAR,
        conversion_rate_improvement,
        customer_satisfaction_improvement: satisfaction_improvement(
            &baseline.satisfaction,
            &current.satisfaction,
        ),
    }
}

/// Larger of the NPS and CSAT improvements.
///
/// A metric only counts when both snapshots carry it; a missing pair
/// contributes 0. NPS points and CSAT points are compared as plain numbers.
pub fn satisfaction_improvement(
    baseline: &SatisfactionMetrics,
    current: &SatisfactionMetrics,
) -> f64 {
    let nps_improvement = match (baseline.nps_score, current.nps_score) {
        (Some(before), Some(after)) => f64::from(after) - f64::from(before),
        _ => 0.0,
    };
    let csat_improvement = match (baseline.csat_score, current.csat_score) {
        (Some(before), Some(after)) => after - before,
        _ => 0.0,
    };

    nps_improvement.max(csat_improvement)
}

pub fn cumulative_figures(
    implementation_cost: f64,
    ai_monthly_cost: f64,
    total_monthly_savings: f64,
    revenue_increase_monthly: f64,
    months: u32,
) -> CumulativeFigures {
    let months = f64::from(months);
    let cumulative_costs = implementation_cost + ai_monthly_cost * months;
    let cumulative_savings = (total_monthly_savings + revenue_increase_monthly) * months;

    CumulativeFigures {
        cumulative_costs,
        cumulative_savings,
        cumulative_net_benefit: cumulative_savings - cumulative_costs,
    }
}

pub fn roi_metrics(
    implementation_cost: f64,
    ai_monthly_cost: f64,
    total_monthly_savings: f64,
    revenue_increase_monthly: f64,
    cumulative: &CumulativeFigures,
) -> RoiMetrics {
    let net_monthly_benefit = total_monthly_savings + revenue_increase_monthly - ai_monthly_cost;

    let roi_percentage = if cumulative.cumulative_costs > 0.0 {
        (cumulative.cumulative_net_benefit / cumulative.cumulative_costs) * 100.0
    } else {
        0.0
    };

    let payback_period_months = if net_monthly_benefit > 0.0 {
        implementation_cost / net_monthly_benefit
    } else {
        f64::INFINITY
    };

    RoiMetrics {
        net_monthly_benefit,
        net_annual_benefit: net_monthly_benefit * MONTHS_PER_YEAR,
        roi_percentage,
        payback_period_months,
    }
}
