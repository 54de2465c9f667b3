//! Return-on-investment calculator.
//!
//! Compares a baseline snapshot of operating metrics with a snapshot taken
//! after an automation solution went live, and derives savings, efficiency,
//! revenue impact and ROI figures from the two.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod output;
pub mod roi;
pub mod scenario;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    BaselineMetrics, CostMetrics, CurrentMetrics, Error, MetricsSnapshot, OperatingMetrics,
    PeriodType, QualityMetrics, RevenueMetrics, SatisfactionMetrics, SolutionMetrics, TimeMetrics,
};

pub use crate::roi::{
    period_label, render_summary, CostSavings, CumulativeFigures, EfficiencyGains, Investment,
    RevenueImpact, RoiCalculation, RoiCalculator, RoiExport, RoiMetrics,
};

pub use crate::output::{create_writer, OutputFormat, OutputWriter, Report};
pub use crate::scenario::{load_scenario, save_scenario, Scenario};
pub use crate::validation::{validate_scenario, Severity, ValidationIssue};
