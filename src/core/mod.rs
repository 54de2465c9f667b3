pub mod errors;
pub mod metrics;

pub use errors::{Error, Result};
pub use metrics::{
    BaselineMetrics, CostMetrics, CurrentMetrics, MetricsSnapshot, OperatingMetrics, PeriodType,
    QualityMetrics, RevenueMetrics, SatisfactionMetrics, SolutionMetrics, TimeMetrics,
};
