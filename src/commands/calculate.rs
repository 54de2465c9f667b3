use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::config::RoicalcConfig;
use crate::formatting::FormattingConfig;
use crate::output::{self, OutputFormat, Report};
use crate::scenario::load_scenario;
use crate::validation::validate_scenario;

#[derive(Debug, Clone)]
pub struct CalculateConfig {
    pub scenario: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub date: Option<NaiveDate>,
    pub breakdown: bool,
    pub plain: bool,
}

impl CalculateConfig {
    /// Explicit flags win over the config file
    pub fn resolve_format(&self, config: &RoicalcConfig) -> OutputFormat {
        self.format.unwrap_or_else(|| config.default_format())
    }

    pub fn resolve_breakdown(&self, config: &RoicalcConfig) -> bool {
        self.breakdown || config.show_breakdown()
    }

    pub fn formatting(&self, config: &RoicalcConfig) -> FormattingConfig {
        if self.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env_with_default(config.color_mode())
        }
    }
}

pub fn handle_calculate(options: CalculateConfig, config: &RoicalcConfig) -> Result<()> {
    let scenario = load_scenario(&options.scenario)
        .with_context(|| format!("Failed to load scenario {}", options.scenario.display()))?;

    for issue in validate_scenario(&scenario) {
        log::warn!("{}", issue);
    }

    let calculator = scenario.calculator();
    let calculation = match options.date {
        Some(date) => calculator.calculate_as_of(date),
        None => calculator.calculate(),
    };
    log::info!(
        "ROI for {} over {}: {:.2}%",
        calculation.project_name,
        calculation.period_analyzed,
        calculation.roi_metrics.roi_percentage
    );

    let mut report = Report::new(calculation);
    if options.resolve_breakdown(config) {
        report = report.with_breakdown(&calculator);
    }

    output::output_report(
        &report,
        options.resolve_format(config),
        options.output.clone(),
        options.formatting(config),
    )
}
