use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static PROJECT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9\s]+?)[-_]").expect("valid pattern"));

static DATE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\d{4}-\d{2}-\d{2}", "%Y-%m-%d"),
        (r"\d{8}", "%Y%m%d"),
        (r"\d{2}-\d{2}-\d{4}", "%m-%d-%Y"),
        (r"\d{2}/\d{2}/\d{4}", "%m/%d/%Y"),
    ]
    .into_iter()
    .map(|(pattern, format)| (Regex::new(pattern).expect("valid pattern"), format))
    .collect()
});

static VERSION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?i)v(\d+\.?\d*)", r"(?i)rev(\d+)", r"(?i)version(\d+\.?\d*)"]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("valid pattern"))
        .collect()
});

/// Schedule export categories guessed from filename keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Baseline,
    Current,
    Update,
    Forecast,
    Schedule,
    Design,
    Construction,
}

impl FileCategory {
    /// All categories, in match-precedence order
    pub const ALL: [Self; 7] = [
        Self::Baseline,
        Self::Current,
        Self::Update,
        Self::Forecast,
        Self::Schedule,
        Self::Design,
        Self::Construction,
    ];

    /// Substrings that vote for this category
    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Baseline => &["baseline", "base", "bl"],
            Self::Current => &["current", "curr", "latest"],
            Self::Update => &["update", "upd"],
            Self::Forecast => &["forecast", "fc"],
            Self::Schedule => &["schedule", "sched"],
            Self::Design => &["design"],
            Self::Construction => &["construction", "const"],
        }
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Current => "current",
            Self::Update => "update",
            Self::Forecast => "forecast",
            Self::Schedule => "schedule",
            Self::Design => "design",
            Self::Construction => "construction",
        }
    }
}

/// Best-effort metadata scraped from an export's filename
///
/// Every field is optional; nothing here is worth an error. Naming
/// conventions vary wildly across planning teams, so these are guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Leading name segment before the first `-` or `_`
    pub project_name: Option<String>,

    /// First date-shaped token that parses
    pub snapshot_date: Option<NaiveDate>,

    /// Category voted by the first matching keyword
    pub file_category: Option<FileCategory>,

    /// Version token (`v2.1`, `Rev3`, `Version1.0`)
    pub baseline_version: Option<String>,
}

impl FileMeta {
    /// Scrape whatever the filename gives away
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        let stem = Path::new(filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let project_name = match PROJECT_NAME.captures(stem) {
            Some(caps) => Some(caps[1].trim().to_string()),
            None if stem.is_empty() => None,
            None => Some(stem.to_string()),
        };

        let snapshot_date = DATE_PATTERNS.iter().find_map(|(regex, format)| {
            let token = regex.find(stem)?;
            NaiveDate::parse_from_str(token.as_str(), format).ok()
        });

        let baseline_version = VERSION_PATTERNS
            .iter()
            .find_map(|regex| regex.captures(stem).map(|caps| caps[1].to_string()));

        let stem_lower = stem.to_lowercase();
        let file_category = FileCategory::ALL.into_iter().find(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| stem_lower.contains(keyword))
        });

        Self {
            project_name,
            snapshot_date,
            file_category,
            baseline_version,
        }
    }

    /// Check whether nothing was recognized
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.project_name.is_none()
            && self.snapshot_date.is_none()
            && self.file_category.is_none()
            && self.baseline_version.is_none()
    }
}
