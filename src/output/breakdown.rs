//! Side-by-side view of the two input snapshots.

use crate::core::{BaselineMetrics, CurrentMetrics, MetricsSnapshot};
use crate::formatting::{format_currency, format_points};

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub metric: String,
    pub baseline: String,
    pub current: String,
    /// Current minus baseline; `-` when either side is absent
    pub change: String,
}

fn currency_row(metric: &str, before: f64, after: f64) -> BreakdownRow {
    BreakdownRow {
        metric: metric.to_string(),
        baseline: format_currency(before),
        current: format_currency(after),
        change: format_currency(after - before),
    }
}

fn number_row(metric: &str, before: f64, after: f64) -> BreakdownRow {
    BreakdownRow {
        metric: metric.to_string(),
        baseline: format_points(before),
        current: format_points(after),
        change: format_points(after - before),
    }
}

fn optional_row(metric: &str, before: Option<f64>, after: Option<f64>) -> BreakdownRow {
    let show = |value: Option<f64>| value.map(format_points).unwrap_or_else(|| "-".to_string());
    let change = match (before, after) {
        (Some(b), Some(a)) => format_points(a - b),
        _ => "-".to_string(),
    };
    BreakdownRow {
        metric: metric.to_string(),
        baseline: show(before),
        current: show(after),
        change,
    }
}

/// Rows comparing every measured input, costs first
pub fn snapshot_breakdown(baseline: &BaselineMetrics, current: &CurrentMetrics) -> Vec<BreakdownRow> {
    let before = baseline.operating();
    let after = current.operating();

    vec![
        currency_row(
            "Monthly labor cost",
            before.cost.monthly_labor_cost,
            after.cost.monthly_labor_cost,
        ),
        currency_row(
            "Monthly software cost",
            before.cost.monthly_software_cost,
            after.cost.monthly_software_cost,
        ),
        currency_row(
            "Monthly overhead cost",
            before.cost.monthly_overhead_cost,
            after.cost.monthly_overhead_cost,
        ),
        currency_row(
            "Monthly error cost",
            before.cost.monthly_error_cost,
            after.cost.monthly_error_cost,
        ),
        currency_row("AI solution cost", 0.0, current.ai_solution_monthly_cost()),
        currency_row(
            "Total monthly cost",
            baseline.total_monthly_cost(),
            current.total_monthly_cost(),
        ),
        currency_row(
            "Total annual cost",
            baseline.total_annual_cost(),
            current.total_annual_cost(),
        ),
        number_row(
            "Avg task time (min)",
            before.time.avg_task_completion_time,
            after.time.avg_task_completion_time,
        ),
        BreakdownRow {
            metric: "Volume".to_string(),
            baseline: format!(
                "{} / {}",
                before.time.volume_per_period, before.time.period_type
            ),
            current: format!(
                "{} / {}",
                after.time.volume_per_period, after.time.period_type
            ),
            change: (i64::from(after.time.volume_per_period)
                - i64::from(before.time.volume_per_period))
            .to_string(),
        },
        number_row(
            "Rework + QC hours/week",
            before.overhead_hours_per_week(),
            after.overhead_hours_per_week(),
        ),
        number_row(
            "Error rate %",
            before.quality.error_rate_percentage,
            after.quality.error_rate_percentage,
        ),
        number_row(
            "Accuracy %",
            before.quality.accuracy_rate_percentage,
            after.quality.accuracy_rate_percentage,
        ),
        optional_row(
            "NPS",
            before.satisfaction.nps_score.map(f64::from),
            after.satisfaction.nps_score.map(f64::from),
        ),
        optional_row(
            "CSAT",
            before.satisfaction.csat_score,
            after.satisfaction.csat_score,
        ),
        number_row(
            "Complaints/month",
            f64::from(before.satisfaction.complaints_per_month),
            f64::from(after.satisfaction.complaints_per_month),
        ),
        number_row(
            "Avg response time (h)",
            before.satisfaction.avg_response_time_hours,
            after.satisfaction.avg_response_time_hours,
        ),
        number_row(
            "Churn rate %",
            before.satisfaction.churn_rate_percentage,
            after.satisfaction.churn_rate_percentage,
        ),
        number_row(
            "Conversion rate %",
            before.revenue.conversion_rate_percentage,
            after.revenue.conversion_rate_percentage,
        ),
        currency_row(
            "Monthly revenue",
            before.revenue.monthly_revenue,
            after.revenue.monthly_revenue,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;

    fn row<'a>(rows: &'a [BreakdownRow], metric: &str) -> &'a BreakdownRow {
        rows.iter().find(|r| r.metric == metric).unwrap()
    }

    #[test]
    fn test_totals_use_snapshot_accessors() {
        let example = Scenario::example();
        let rows = snapshot_breakdown(&example.baseline, &example.current);

        let total = row(&rows, "Total monthly cost");
        assert_eq!(total.baseline, "$22,000.00");
        assert_eq!(total.current, "$13,400.00");
        assert_eq!(total.change, "$-8,600.00");
    }

    #[test]
    fn test_volume_row_shows_period() {
        let example = Scenario::example();
        let rows = snapshot_breakdown(&example.baseline, &example.current);
        let volume = row(&rows, "Volume");
        assert_eq!(volume.baseline, "2000 / month");
        assert_eq!(volume.change, "800");
    }

    #[test]
    fn test_absent_score_has_no_change() {
        let mut example = Scenario::example();
        example.current.operating.satisfaction.nps_score = None;
        let rows = snapshot_breakdown(&example.baseline, &example.current);
        let nps = row(&rows, "NPS");
        assert_eq!(nps.baseline, "35.0");
        assert_eq!(nps.current, "-");
        assert_eq!(nps.change, "-");
    }
}
