//! Scenario documents: everything one calculation needs, as a file.
//!
//! A scenario names the client and project, the investment figures and the
//! two snapshots. It can be written as TOML, JSON or YAML; the file
//! extension selects the format.
//!
//! ```toml
//! client_name = "Acme E-commerce Inc."
//! project_name = "AI Customer Service Automation"
//! implementation_cost = 25000
//! months_since_deployment = 6
//!
//! [baseline]
//! monthly_labor_cost = 18000
//! # ...
//!
//! [current]
//! monthly_labor_cost = 9000
//! ai_solution_monthly_cost = 2500
//! # ...
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{
    BaselineMetrics, CostMetrics, CurrentMetrics, Error, OperatingMetrics, PeriodType,
    QualityMetrics, Result, RevenueMetrics, SatisfactionMetrics, SolutionMetrics, TimeMetrics,
};
use crate::io::{self, DocumentFormat};
use crate::roi::RoiCalculator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub client_name: String,
    pub project_name: String,
    pub implementation_cost: f64,
    pub months_since_deployment: u32,
    pub baseline: BaselineMetrics,
    pub current: CurrentMetrics,
}

impl Scenario {
    /// Build the engine for this scenario
    pub fn calculator(&self) -> RoiCalculator {
        RoiCalculator::new(
            self.client_name.clone(),
            self.project_name.clone(),
            self.baseline.clone(),
            self.current.clone(),
            self.implementation_cost,
            self.months_since_deployment,
        )
    }

    pub fn parse(contents: &str, format: DocumentFormat, origin: &Path) -> Result<Self> {
        let parsed = match format {
            DocumentFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::parse(origin, message))
    }

    pub fn render(&self, format: DocumentFormat) -> Result<String> {
        Ok(match format {
            DocumentFormat::Toml => toml::to_string_pretty(self)?,
            DocumentFormat::Json => serde_json::to_string_pretty(self)?,
            DocumentFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }

    /// Customer service automation for a mid-size e-commerce shop: three
    /// agents reduced to one and a half, first response handled by the bot.
    pub fn example() -> Self {
        let baseline = OperatingMetrics {
            cost: CostMetrics {
                monthly_labor_cost: 18000.0,
                annual_labor_cost: 216000.0,
                monthly_software_cost: 500.0,
                annual_software_cost: 6000.0,
                monthly_overhead_cost: 2000.0,
                monthly_error_cost: 1500.0,
            },
            time: TimeMetrics {
                avg_task_completion_time: 25.0,
                volume_per_period: 2000,
                period_type: PeriodType::Month,
                rework_hours_per_week: 15.0,
            },
            quality: QualityMetrics {
                error_rate_percentage: 12.0,
                accuracy_rate_percentage: 88.0,
                quality_control_hours_per_week: 20.0,
                cost_per_error: 25.0,
            },
            satisfaction: SatisfactionMetrics {
                nps_score: Some(35),
                csat_score: Some(72.0),
                complaints_per_month: 45,
                avg_response_time_hours: 4.5,
                churn_rate_percentage: 8.0,
            },
            revenue: RevenueMetrics::default(),
        };

        let current = OperatingMetrics {
            cost: CostMetrics {
                monthly_labor_cost: 9000.0,
                annual_labor_cost: 108000.0,
                monthly_software_cost: 500.0,
                annual_software_cost: 6000.0,
                monthly_overhead_cost: 1000.0,
                monthly_error_cost: 400.0,
            },
            time: TimeMetrics {
                avg_task_completion_time: 8.0,
                volume_per_period: 2800,
                period_type: PeriodType::Month,
                rework_hours_per_week: 4.0,
            },
            quality: QualityMetrics {
                error_rate_percentage: 3.5,
                accuracy_rate_percentage: 96.5,
                quality_control_hours_per_week: 8.0,
                cost_per_error: 25.0,
            },
            satisfaction: SatisfactionMetrics {
                nps_score: Some(58),
                csat_score: Some(89.0),
                complaints_per_month: 12,
                avg_response_time_hours: 0.5,
                churn_rate_percentage: 4.5,
            },
            revenue: RevenueMetrics::default(),
        };

        Self {
            client_name: "Acme E-commerce Inc.".to_string(),
            project_name: "AI Customer Service Automation".to_string(),
            implementation_cost: 25000.0,
            months_since_deployment: 6,
            baseline: BaselineMetrics::new(baseline),
            current: CurrentMetrics::new(
                current,
                SolutionMetrics {
                    ai_solution_monthly_cost: 2500.0,
                    system_uptime_percentage: 99.5,
                    user_adoption_rate: 95.0,
                },
            ),
        }
    }
}

/// Load a scenario, picking the parser from the file extension
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let format = DocumentFormat::from_path(path)?;
    let contents = io::read_file(path)?;
    let scenario = Scenario::parse(&contents, format, path)?;
    log::debug!(
        "Loaded scenario '{}' for {} from {}",
        scenario.project_name,
        scenario.client_name,
        path.display()
    );
    Ok(scenario)
}

/// Write a scenario, picking the serializer from the file extension
pub fn save_scenario(scenario: &Scenario, path: &Path) -> Result<()> {
    let format = DocumentFormat::from_path(path)?;
    io::write_file(path, &scenario.render(format)?)
}
