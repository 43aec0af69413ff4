use crate::types::{ComponentSchedule, ScheduleSummary};
use chrono::{NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a schedule date as written in exports, with or without a time part
pub(crate) fn parse_schedule_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Summarize sorted component rows: first start, last end, ceiled day span
///
/// Returns `None` when nothing joined. Endpoints that parse are normalized to
/// plain dates; unreadable ones pass through as written and zero the span.
pub(crate) fn schedule_summary(components: &[ComponentSchedule]) -> Option<ScheduleSummary> {
    let first = components.first()?;
    let last = components.last()?;

    let start = parse_schedule_date(&first.start_date);
    let end = parse_schedule_date(&last.end_date);

    let project_duration_days = match (start, end) {
        (Some(start), Some(end)) => {
            let seconds = end.signed_duration_since(start).num_seconds();
            (seconds as f64 / SECONDS_PER_DAY).ceil() as i64
        }
        _ => 0,
    };

    Some(ScheduleSummary {
        project_start: start.map_or_else(|| first.start_date.clone(), |d| d.date().to_string()),
        project_end: end.map_or_else(|| last.end_date.clone(), |d| d.date().to_string()),
        project_duration_days,
        total_tasks: components.len(),
    })
}
