use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// IFC entity categories scanned for building components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementCategory {
    /// IFCWALL entities
    Wall,
    /// IFCCOLUMN entities
    Column,
    /// IFCSLAB entities
    Slab,
    /// IFCDOOR entities
    Door,
    /// IFCFURNISHINGELEMENT entities (racks, fixtures)
    FurnishingElement,
    /// IFCFLOWSEGMENT entities (ducts, conduits)
    FlowSegment,
}

impl ElementCategory {
    /// All categories, in scan order
    pub const ALL: [Self; 6] = [
        Self::Wall,
        Self::Column,
        Self::Slab,
        Self::Door,
        Self::FurnishingElement,
        Self::FlowSegment,
    ];

    /// The IFC entity keyword this category matches
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Wall => "IFCWALL",
            Self::Column => "IFCCOLUMN",
            Self::Slab => "IFCSLAB",
            Self::Door => "IFCDOOR",
            Self::FurnishingElement => "IFCFURNISHINGELEMENT",
            Self::FlowSegment => "IFCFLOWSEGMENT",
        }
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Column => "column",
            Self::Slab => "slab",
            Self::Door => "door",
            Self::FurnishingElement => "furnishing element",
            Self::FlowSegment => "flow segment",
        }
    }
}

/// One building component scraped from an IFC entity line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildingElement {
    /// Globally unique id exactly as written in the entity
    pub guid: String,

    /// Display name (second quoted attribute)
    pub name: String,

    /// Category derived from the entity keyword
    pub category: ElementCategory,
}

impl BuildingElement {
    /// Create a new building element
    #[must_use]
    pub fn new(guid: impl Into<String>, name: impl Into<String>, category: ElementCategory) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            category,
        }
    }
}

/// Everything a regex pass pulled out of one IFC file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IfcExtract {
    /// Source file name
    pub file_name: String,

    /// Content size in bytes
    pub file_size: u64,

    /// GUIDs of Pset_ProjectManagement property sets, in text order
    pub property_sets: Vec<String>,

    /// Building components, grouped by category, text order within each
    pub building_elements: Vec<BuildingElement>,

    /// WBS_Code property values, in text order
    pub wbs_codes: Vec<String>,

    /// Task_ID property values, in text order
    pub task_ids: Vec<String>,
}

impl IfcExtract {
    /// Check whether the scan found nothing at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.property_sets.is_empty()
            && self.building_elements.is_empty()
            && self.wbs_codes.is_empty()
            && self.task_ids.is_empty()
    }

    /// Count elements of one category
    #[must_use]
    pub fn category_count(&self, category: ElementCategory) -> usize {
        self.building_elements
            .iter()
            .filter(|e| e.category == category)
            .count()
    }
}

/// Flat string record keyed by column header text
///
/// Headers are stored exactly as found in the source content; lookups fall
/// back to a case-insensitive scan. Empty values are never stored, so a blank
/// cell and a missing column read the same.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TableRecord(BTreeMap<String, String>);

impl TableRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value; blank values are dropped
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(column.into(), value);
        }
    }

    /// Look up a column, case-insensitively on miss
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        if let Some(value) = self.0.get(column) {
            return Some(value);
        }
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(column))
            .map(|(_, value)| value.as_str())
    }

    /// Look up a column, substituting a fallback on miss
    #[must_use]
    pub fn get_or<'a>(&'a self, column: &str, fallback: &'a str) -> &'a str {
        self.get(column).unwrap_or(fallback)
    }

    /// Overlay another record; its values win on key collisions
    pub fn merge(&mut self, other: TableRecord) {
        self.0.extend(other.0);
    }

    /// Number of stored columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the record holds no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate stored column/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One table section of an XER file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct XerTable {
    /// Table name as declared in the source
    pub name: String,

    /// Sanitized column names, in declaration order
    pub columns: Vec<String>,

    /// Data rows, in source order
    pub records: Vec<TableRecord>,
}

impl XerTable {
    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Everything a line scan pulled out of one XER file
///
/// The four well-known tables are surfaced as typed views; `tables` retains
/// every section encountered, including ones the join never reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct XerExtract {
    /// Source file name
    pub file_name: String,

    /// Content size in bytes
    pub file_size: u64,

    /// PROJECT rows merged into a single record (later rows win)
    pub project: TableRecord,

    /// PROJWBS rows, in source order
    pub wbs_elements: Vec<TableRecord>,

    /// TASK rows, in source order
    pub activities: Vec<TableRecord>,

    /// TASKPRED rows, in source order
    pub relationships: Vec<TableRecord>,

    /// Every table section encountered, keyed by declared name
    pub tables: BTreeMap<String, XerTable>,
}

impl XerExtract {
    /// Look up a table by name, case-insensitively on miss
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&XerTable> {
        if let Some(table) = self.tables.get(name) {
            return Some(table);
        }
        self.tables
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, table)| table)
    }

    /// Row count of a table, zero when absent
    #[must_use]
    pub fn table_len(&self, name: &str) -> usize {
        self.table(name).map_or(0, XerTable::len)
    }

    /// Check whether the scan found nothing at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.project.is_empty()
            && self.wbs_elements.is_empty()
            && self.activities.is_empty()
            && self.relationships.is_empty()
            && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keyword_roundtrip() {
        for category in ElementCategory::ALL {
            assert!(category.keyword().starts_with("IFC"));
            assert!(!category.as_str().is_empty());
        }
    }

    #[test]
    fn test_record_case_insensitive_get() {
        let mut record = TableRecord::new();
        record.insert("task_id", "A1010");
        assert_eq!(record.get("task_id"), Some("A1010"));
        assert_eq!(record.get("TASK_ID"), Some("A1010"));
        assert_eq!(record.get("Task_Id"), Some("A1010"));
        assert_eq!(record.get("task_name"), None);
    }

    #[test]
    fn test_record_drops_blank_values() {
        let mut record = TableRecord::new();
        record.insert("task_name", "");
        assert_eq!(record.get("task_name"), None);
        assert_eq!(record.get_or("task_name", "Unknown"), "Unknown");
        assert!(record.is_empty());
    }

    #[test]
    fn test_record_merge_later_wins() {
        let mut base = TableRecord::new();
        base.insert("proj_id", "1000");
        base.insert("proj_short_name", "Old");

        let mut overlay = TableRecord::new();
        overlay.insert("proj_short_name", "New");

        base.merge(overlay);
        assert_eq!(base.get("proj_id"), Some("1000"));
        assert_eq!(base.get("proj_short_name"), Some("New"));
    }

    #[test]
    fn test_extract_table_lookup() {
        let mut extract = XerExtract::default();
        extract.tables.insert(
            "RSRC".to_string(),
            XerTable {
                name: "RSRC".to_string(),
                columns: vec!["rsrc_id".to_string()],
                records: vec![TableRecord::new(), TableRecord::new()],
            },
        );

        assert_eq!(extract.table_len("RSRC"), 2);
        assert_eq!(extract.table_len("rsrc"), 2);
        assert_eq!(extract.table_len("TASK"), 0);
        assert!(extract.table("missing").is_none());
    }
}
