//! Human-readable text report.

use std::fmt::Write;

use crate::formatting::{
    format_currency, format_hours, format_payback, format_percentage, format_points,
    OutputFormatter, PlainFormatter,
};
use crate::roi::result::RoiCalculation;

/// One `label: value` row of a report section
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
    /// Figure whose sign decides the color, for lines that have one
    pub signed: Option<f64>,
}

/// Dash rule printed under the CUMULATIVE heading, whatever the period
const CUMULATIVE_RULE_WIDTH: usize = 11;

/// A titled block of report rows
pub struct Section {
    pub title: String,
    /// Number of dashes under the title in the text report
    pub rule_width: usize,
    pub lines: Vec<SummaryLine>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            rule_width: title.chars().count(),
            title,
            lines: Vec::new(),
        }
    }

    fn with_rule_width(mut self, rule_width: usize) -> Self {
        self.rule_width = rule_width;
        self
    }

    fn line(mut self, label: &'static str, value: String) -> Self {
        self.lines.push(SummaryLine {
            label,
            value,
            signed: None,
        });
        self
    }

    fn signed_line(mut self, label: &'static str, figure: f64, value: String) -> Self {
        self.lines.push(SummaryLine {
            label,
            value,
            signed: Some(figure),
        });
        self
    }
}

impl RoiCalculation {
    /// Report sections in display order, values already formatted
    pub fn summary_sections(&self) -> Vec<Section> {
        let savings = &self.cost_savings;
        let gains = &self.efficiency_gains;
        let revenue = &self.revenue_impact;
        let roi = &self.roi_metrics;
        let cumulative = &self.cumulative;

        vec![
            Section::new("INVESTMENT")
                .line(
                    "Implementation Cost",
                    format_currency(self.investment.total_implementation_cost),
                )
                .line(
                    "Monthly AI Solution Cost",
                    format_currency(self.investment.monthly_ai_solution_cost),
                ),
            Section::new("COST SAVINGS")
                .line(
                    "Monthly Labor Savings",
                    format_currency(savings.monthly_labor_cost_savings),
                )
                .line(
                    "Monthly Software Savings",
                    format_currency(savings.monthly_software_cost_savings),
                )
                .line(
                    "Monthly Overhead Savings",
                    format_currency(savings.monthly_overhead_savings),
                )
                .line(
                    "Monthly Error Cost Savings",
                    format_currency(savings.monthly_error_cost_savings),
                )
                .signed_line(
                    "Total Monthly Savings",
                    savings.total_monthly_savings,
                    format_currency(savings.total_monthly_savings),
                )
                .signed_line(
                    "Total Annual Savings",
                    savings.total_annual_savings,
                    format_currency(savings.total_annual_savings),
                ),
            Section::new("EFFICIENCY GAINS")
                .line(
                    "Time Savings",
                    format!(
                        "{} ({})",
                        format_percentage(gains.time_savings_percentage),
                        format_hours(gains.time_savings_hours_per_week)
                    ),
                )
                .line(
                    "Error Reduction",
                    format_percentage(gains.error_reduction_percentage),
                )
                .line(
                    "Quality Improvement",
                    format_percentage(gains.quality_improvement_percentage),
                ),
            Section::new("REVENUE IMPACT")
                .line(
                    "Monthly Revenue Increase",
                    format_currency(revenue.revenue_increase_monthly),
                )
                .line(
                    "Annual Revenue Increase",
                    format_currency(revenue.revenue_increase_annual),
                )
                .line(
                    "Conversion Rate Improvement",
                    format!(
                        "{:.2} percentage points",
                        revenue.conversion_rate_improvement
                    ),
                )
                .line(
                    "Customer Satisfaction Improvement",
                    format!(
                        "{} points",
                        format_points(revenue.customer_satisfaction_improvement)
                    ),
                ),
            Section::new("ROI METRICS")
                .signed_line(
                    "Net Monthly Benefit",
                    roi.net_monthly_benefit,
                    format_currency(roi.net_monthly_benefit),
                )
                .signed_line(
                    "Net Annual Benefit",
                    roi.net_annual_benefit,
                    format_currency(roi.net_annual_benefit),
                )
                .signed_line(
                    "ROI",
                    roi.roi_percentage,
                    format_percentage(roi.roi_percentage),
                )
                .line(
                    "Payback Period",
                    format_payback(roi.payback_period_months),
                ),
            Section::new(format!("CUMULATIVE ({})", self.period_analyzed))
                .with_rule_width(CUMULATIVE_RULE_WIDTH)
                .line(
                    "Total Investment",
                    format_currency(cumulative.cumulative_costs),
                )
                .line(
                    "Total Savings/Gains",
                    format_currency(cumulative.cumulative_savings),
                )
                .signed_line(
                    "Net Benefit",
                    cumulative.cumulative_net_benefit,
                    format_currency(cumulative.cumulative_net_benefit),
                ),
        ]
    }

    /// Fixed-layout plain text report
    pub fn summary(&self) -> String {
        render_summary(self, &PlainFormatter)
    }
}

/// Render the report, letting `formatter` decorate titles and signed figures.
///
/// With [`PlainFormatter`] this is exactly [`RoiCalculation::summary`]. The
/// text has no trailing newline.
pub fn render_summary(calculation: &RoiCalculation, formatter: &dyn OutputFormatter) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_summary(calculation, formatter, &mut out);
    out
}

fn write_summary(
    calc: &RoiCalculation,
    formatter: &dyn OutputFormatter,
    out: &mut String,
) -> std::fmt::Result {
    let title = "ROI CALCULATION SUMMARY";
    writeln!(out, "{}", formatter.header(title))?;
    writeln!(out, "{}", formatter.dim(&"=".repeat(title.len())))?;
    writeln!(out, "Client: {}", calc.client_name)?;
    writeln!(out, "Project: {}", calc.project_name)?;
    writeln!(out, "Period Analyzed: {}", calc.period_analyzed)?;
    write!(
        out,
        "Calculation Date: {}",
        calc.calculation_date.format("%Y-%m-%d")
    )?;

    for section in calc.summary_sections() {
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{}", formatter.header(&section.title))?;
        write!(out, "{}", formatter.dim(&"-".repeat(section.rule_width)))?;
        for line in &section.lines {
            let value = match line.signed {
                Some(figure) => formatter.signed(figure, &line.value),
                None => line.value.clone(),
            };
            writeln!(out)?;
            write!(out, "{}: {}", line.label, value)?;
        }
    }
    Ok(())
}
