// Shared fixtures for roicalc integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use roicalc::{
    BaselineMetrics, CostMetrics, CurrentMetrics, OperatingMetrics, RoiCalculator,
    SolutionMetrics,
};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

/// Snapshot with only the monthly cost lines set
pub fn costs(labor: f64, software: f64, overhead: f64, error: f64) -> OperatingMetrics {
    OperatingMetrics {
        cost: CostMetrics {
            monthly_labor_cost: labor,
            annual_labor_cost: labor * 12.0,
            monthly_software_cost: software,
            annual_software_cost: software * 12.0,
            monthly_overhead_cost: overhead,
            monthly_error_cost: error,
        },
        ..OperatingMetrics::default()
    }
}

pub fn calculator(
    baseline: OperatingMetrics,
    current: OperatingMetrics,
    ai_monthly_cost: f64,
    implementation_cost: f64,
    months: u32,
) -> RoiCalculator {
    RoiCalculator::new(
        "Test Client",
        "Test Project",
        BaselineMetrics::new(baseline),
        CurrentMetrics::new(current, SolutionMetrics::with_monthly_cost(ai_monthly_cost)),
        implementation_cost,
        months,
    )
}
