use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One joined row: an IFC component paired with its schedule activity
///
/// Every field is display text. A lookup miss fills the literal `"Unknown"`;
/// predecessors default to `"None"` until a relationship row claims the task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentSchedule {
    /// Area label derived from the WBS code
    pub area: String,

    /// WBS code scraped from the IFC side
    pub wbs_code: String,

    /// WBS element name from the schedule
    pub description: String,

    /// Task id scraped from the IFC side
    pub task_id: String,

    /// Activity name from the schedule
    pub activity_name: String,

    /// Planned start, as written in the source
    pub start_date: String,

    /// Planned finish, as written in the source
    pub end_date: String,

    /// Duration text, as written in the source
    pub duration: String,

    /// Predecessor task id, with `+<n>d` lag suffix when present
    pub predecessors: String,
}

/// Qualitative risk rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Risk register line for one WBS code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskEntry {
    pub wbs_code: String,
    pub risk_level: RiskLevel,
    pub primary_risks: String,
    pub mitigation: String,
}

impl RiskEntry {
    #[must_use]
    pub fn new(
        wbs_code: impl Into<String>,
        risk_level: RiskLevel,
        primary_risks: impl Into<String>,
        mitigation: impl Into<String>,
    ) -> Self {
        Self {
            wbs_code: wbs_code.into(),
            risk_level,
            primary_risks: primary_risks.into(),
            mitigation: mitigation.into(),
        }
    }
}

/// Resource allocation line for one WBS code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceEntry {
    pub wbs_code: String,
    pub resources: String,
    pub units: u32,
    pub cost: u64,
}

impl ResourceEntry {
    #[must_use]
    pub fn new(wbs_code: impl Into<String>, resources: impl Into<String>, units: u32, cost: u64) -> Self {
        Self {
            wbs_code: wbs_code.into(),
            resources: resources.into(),
            units,
            cost,
        }
    }
}

/// Headline numbers derived from the sorted component rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// First row's start date, normalized to `YYYY-MM-DD` when it parses
    pub project_start: String,

    /// Last row's end date, normalized to `YYYY-MM-DD` when it parses
    pub project_end: String,

    /// Ceiling of the day span between the two, zero when either is unreadable
    pub project_duration_days: i64,

    /// Number of joined rows
    pub total_tasks: usize,
}

/// The unified model handed to renderers and the CLI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegratedModel {
    /// Short project name from the PROJECT table, else a placeholder
    pub project_name: String,

    /// Project id from the PROJECT table, else a placeholder
    pub project_id: String,

    /// Date this model was produced
    pub last_updated: NaiveDate,

    /// Placeholder budget figure
    pub total_budget: u64,

    /// TASK table row count
    pub total_tasks: usize,

    /// RSRC table row count
    pub total_resources: usize,

    /// Summary project end, else a placeholder date
    pub project_end: String,

    /// Joined component rows, sorted by start date
    pub components: Vec<ComponentSchedule>,

    /// Fixed risk register
    pub risks: Vec<RiskEntry>,

    /// Fixed resource allocation table
    pub resources: Vec<ResourceEntry>,

    /// Derived schedule summary, absent when nothing joined
    pub summary: Option<ScheduleSummary>,
}
