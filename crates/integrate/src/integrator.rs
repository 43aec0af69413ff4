use crate::area::area_label;
use crate::error::Result;
use crate::summary::{parse_schedule_date, schedule_summary};
use crate::tables::{sample_resources, sample_risks};
use crate::types::{ComponentSchedule, IntegratedModel};
use bimxer_extract::{ExtractConfig, IfcExtract, IfcExtractor, TableRecord, XerExtract, XerExtractor};
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_PROJECT_NAME: &str = "Integrated Project";
const DEFAULT_PROJECT_ID: &str = "P001";
const DEFAULT_PROJECT_END: &str = "2025-08-30";
const DEFAULT_BUDGET: u64 = 1_000_000;
const WORKDAY_HOURS: i64 = 8;

// Column aliases bridging the two header vocabularies the extractor emits:
// the flat demo names first, then the Primavera export column.
const WBS_CODE_KEYS: [&str; 2] = ["WBS_CODE", "wbs_short_name"];
const WBS_NAME_KEYS: [&str; 2] = ["WBS_NAME", "wbs_name"];
const TASK_ID_KEYS: [&str; 2] = ["TASK_ID", "task_code"];
const TASK_NAME_KEYS: [&str; 2] = ["TASK_NAME", "task_name"];
const START_DATE_KEYS: [&str; 2] = ["START_DATE", "target_start_date"];
const END_DATE_KEYS: [&str; 2] = ["END_DATE", "target_end_date"];
const DURATION_KEYS: [&str; 2] = ["DURATION", "target_drtn_hr_cnt"];

/// Joins IFC extracts with XER extracts into the unified model
///
/// The join is positional: WBS codes and task ids scraped from the IFC side
/// are assumed aligned, and each pair must find both of its schedule records
/// or it is dropped. No relationship graph is resolved; predecessors are a
/// display string filled by a single pass over TASKPRED rows.
pub struct Integrator {
    ifc: IfcExtractor,
    xer: XerExtractor,
}

impl Integrator {
    /// Create an integrator whose extractors follow the given config
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        Ok(Self {
            ifc: IfcExtractor::new(config)?,
            xer: XerExtractor::new(config)?,
        })
    }

    /// Read both files in sequence, extract each, and join
    pub async fn process_files(
        &self,
        ifc_path: impl AsRef<Path>,
        xer_path: impl AsRef<Path>,
    ) -> Result<IntegratedModel> {
        let ifc = self.ifc.extract_file(ifc_path).await?;
        let xer = self.xer.extract_file(xer_path).await?;
        self.integrate(&ifc, &xer)
    }

    /// Join one IFC extract with one XER extract
    pub fn integrate(&self, ifc: &IfcExtract, xer: &XerExtract) -> Result<IntegratedModel> {
        let mut components = join_components(ifc, xer);
        apply_predecessors(&mut components, xer);

        components.sort_by_key(|component| {
            let parsed = parse_schedule_date(&component.start_date);
            // Unreadable dates sort after everything that parses
            (parsed.is_none(), parsed)
        });

        let summary = schedule_summary(&components);

        let project = xer.table("PROJECT").and_then(|table| table.records.first());
        let project_name = project
            .and_then(|record| record.get("proj_short_name"))
            .unwrap_or(DEFAULT_PROJECT_NAME)
            .to_string();
        let project_id = project
            .and_then(|record| record.get("proj_id"))
            .unwrap_or(DEFAULT_PROJECT_ID)
            .to_string();
        let project_end = summary
            .as_ref()
            .map_or(DEFAULT_PROJECT_END, |s| s.project_end.as_str())
            .to_string();

        log::info!(
            "Integrated {} components from {} and {}",
            components.len(),
            ifc.file_name,
            xer.file_name
        );

        Ok(IntegratedModel {
            project_name,
            project_id,
            last_updated: Utc::now().date_naive(),
            total_budget: DEFAULT_BUDGET,
            total_tasks: xer.table_len("TASK"),
            total_resources: xer.table_len("RSRC"),
            project_end,
            components,
            risks: sample_risks(),
            resources: sample_resources(),
            summary,
        })
    }
}

/// Zip the scraped code lists and look both sides up; misses drop the pair
fn join_components(ifc: &IfcExtract, xer: &XerExtract) -> Vec<ComponentSchedule> {
    let wbs_index = index_by(&xer.wbs_elements, &WBS_CODE_KEYS);
    let activity_index = index_by(&xer.activities, &TASK_ID_KEYS);

    let mut components = Vec::new();
    for (wbs_code, task_id) in ifc.wbs_codes.iter().zip(&ifc.task_ids) {
        let (Some(wbs_element), Some(activity)) = (
            wbs_index.get(wbs_code.as_str()),
            activity_index.get(task_id.as_str()),
        ) else {
            continue;
        };

        components.push(ComponentSchedule {
            area: area_label(wbs_code).to_string(),
            wbs_code: wbs_code.clone(),
            description: field_or(wbs_element, &WBS_NAME_KEYS, "Unknown").to_string(),
            task_id: task_id.clone(),
            activity_name: field_or(activity, &TASK_NAME_KEYS, "Unknown").to_string(),
            start_date: field_or(activity, &START_DATE_KEYS, "Unknown").to_string(),
            end_date: field_or(activity, &END_DATE_KEYS, "Unknown").to_string(),
            duration: field_or(activity, &DURATION_KEYS, "Unknown").to_string(),
            predecessors: "None".to_string(),
        });
    }
    components
}

/// One pass over TASKPRED rows; the last relationship claiming a task wins
fn apply_predecessors(components: &mut [ComponentSchedule], xer: &XerExtract) {
    for relationship in &xer.relationships {
        let Some(task_id) = relationship.get("TASK_ID") else {
            continue;
        };
        let Some(component) = components.iter_mut().find(|c| c.task_id == task_id) else {
            continue;
        };
        let Some(pred_task_id) = relationship.get("PRED_TASK_ID") else {
            continue;
        };

        let lag_hours = parse_lag_hours(relationship.get_or("LAG_HR_CNT", "0"));
        let lag_days = lag_hours / WORKDAY_HOURS;
        component.predecessors = if lag_days > 0 {
            format!("{pred_task_id}+{lag_days}d")
        } else {
            pred_task_id.to_string()
        };
    }
}

/// Index records under every alias value they carry; later records overwrite
fn index_by<'a>(records: &'a [TableRecord], keys: &[&str]) -> HashMap<&'a str, &'a TableRecord> {
    let mut index = HashMap::new();
    for record in records {
        for key in keys {
            if let Some(value) = record.get(key) {
                index.insert(value, record);
            }
        }
    }
    index
}

fn field_or<'a>(record: &'a TableRecord, keys: &[&str], fallback: &'a str) -> &'a str {
    keys.iter()
        .find_map(|key| record.get(key))
        .unwrap_or(fallback)
}

/// Leading-integer parse: digits up to the first non-digit count, anything
/// unreadable counts as zero
fn parse_lag_hours(value: &str) -> i64 {
    let trimmed = value.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().map_or(0, |hours| sign * hours)
}
