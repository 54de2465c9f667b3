//! ROI engine.
//!
//! [`RoiCalculator`] turns a baseline snapshot, a current snapshot, an
//! implementation cost and the months since deployment into a
//! [`RoiCalculation`]. The calculation is pure arithmetic: divisions are
//! guarded with fallbacks (0, or +infinity for the payback period) instead of
//! errors. The result renders as a rounded structured export
//! ([`RoiCalculation::to_export`]) or a text report
//! ([`RoiCalculation::summary`]).

pub mod calculator;
pub mod export;
pub mod period;
pub mod result;
pub mod summary;

pub use calculator::RoiCalculator;
pub use export::RoiExport;
pub use period::period_label;
pub use result::{
    CostSavings, CumulativeFigures, EfficiencyGains, Investment, RevenueImpact, RoiCalculation,
    RoiMetrics,
};
pub use summary::{render_summary, Section, SummaryLine};
