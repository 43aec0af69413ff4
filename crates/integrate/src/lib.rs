//! # BIM XER Integrate
//!
//! Joins building-model extracts with schedule extracts by matching
//! identifier codes.
//!
//! The join is deliberately simple: index maps over the schedule tables, a
//! positional walk of the scraped code lists, substring heuristics for area
//! labels, and fixed demo registers for risks and resources. Misses degrade
//! to skips or `"Unknown"` fills, never errors.

mod area;
mod error;
mod integrator;
mod summary;
mod tables;
mod types;

pub use error::{IntegrateError, Result};
pub use integrator::Integrator;
pub use tables::{sample_resources, sample_risks};
pub use types::{
    ComponentSchedule, IntegratedModel, ResourceEntry, RiskEntry, RiskLevel, ScheduleSummary,
};
