use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use crate::types::{TableRecord, XerExtract, XerTable};
use std::path::Path;

/// Scrapes schedule tables out of XER text
///
/// Two line conventions are auto-detected:
/// - the directive format of real Primavera exports (`%T`/`%F`/`%R`/`%E`
///   sections), where every table encountered is retained
/// - a flat prefix format where lines start with a known table name and a row
///   repeating that name in its second field declares the column headers
///
/// `known_tables` from the config applies to the prefix convention only.
pub struct XerExtractor {
    known_tables: Vec<String>,
}

impl XerExtractor {
    /// Create an extractor recognizing the configured prefix tables
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        config.validate().map_err(ExtractError::invalid_config)?;
        Ok(Self {
            known_tables: config.known_tables.clone(),
        })
    }

    /// Scan XER content from a string
    #[must_use]
    pub fn extract_str(&self, content: &str, file_name: &str) -> XerExtract {
        let mut extract = XerExtract {
            file_name: file_name.to_string(),
            file_size: content.len() as u64,
            ..XerExtract::default()
        };

        if content.lines().any(|line| line.trim_start().starts_with("%T")) {
            scan_directives(content, &mut extract);
        } else {
            self.scan_prefixed(content, &mut extract);
        }

        log::debug!(
            "XER scan of {}: {} wbs rows, {} activities, {} relationships, {} tables",
            file_name,
            extract.wbs_elements.len(),
            extract.activities.len(),
            extract.relationships.len(),
            extract.tables.len()
        );

        extract
    }

    /// Scan XER content from a file
    pub async fn extract_file(&self, path: impl AsRef<Path>) -> Result<XerExtract> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ExtractError::read(path.display().to_string(), e))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown");

        Ok(self.extract_str(&content, file_name))
    }

    /// Flat prefix convention: dispatch rows by their first field
    fn scan_prefixed(&self, content: &str, extract: &mut XerExtract) {
        // Headers persist until the next header row, whichever table declared them
        let mut headers: Vec<String> = Vec::new();

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if !self.known_tables.iter().any(|known| line.starts_with(known)) {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            let table_name = parts[0];
            if !self.known_tables.iter().any(|known| known == table_name) {
                continue;
            }

            if parts.get(1) == Some(&table_name) {
                headers = parts.iter().map(|p| p.to_string()).collect();
                let table = table_entry(extract, table_name);
                table.columns = headers.clone();
                continue;
            }

            let mut record = TableRecord::new();
            for (index, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                if let Some(value) = parts.get(index) {
                    record.insert(header.clone(), *value);
                }
            }

            match table_name {
                "PROJECT" => extract.project.merge(record.clone()),
                "PROJWBS" => extract.wbs_elements.push(record.clone()),
                "TASK" => extract.activities.push(record.clone()),
                "TASKPRED" => extract.relationships.push(record.clone()),
                _ => {}
            }
            table_entry(extract, table_name).records.push(record);
        }
    }
}

/// Directive convention: `%T` opens a table, `%F` declares columns, `%R` adds
/// a row, `%E` closes. Blank lines and `#` comments are skipped.
fn scan_directives(content: &str, extract: &mut XerExtract) {
    let mut current: Option<XerTable> = None;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("%T") {
            if let Some(table) = current.take() {
                extract.tables.insert(table.name.clone(), table);
            }
            current = Some(XerTable {
                name: rest.trim().to_string(),
                ..XerTable::default()
            });
        } else if let Some(rest) = line.strip_prefix("%F") {
            if let Some(table) = current.as_mut() {
                table.columns = split_fields(rest)
                    .enumerate()
                    .map(|(index, name)| sanitize_column_name(name, index))
                    .collect();
            }
        } else if let Some(rest) = line.strip_prefix("%R") {
            if let Some(table) = current.as_mut() {
                if table.columns.is_empty() {
                    continue;
                }
                let values: Vec<&str> = split_fields(rest).collect();
                let mut record = TableRecord::new();
                for (index, column) in table.columns.iter().enumerate() {
                    // Short rows read as blank cells
                    let value = values.get(index).map_or("", |v| v.trim());
                    record.insert(column.clone(), value);
                }
                table.records.push(record);
            }
        } else if line.starts_with("%E") {
            if let Some(table) = current.take() {
                extract.tables.insert(table.name.clone(), table);
            }
        }
    }

    if let Some(table) = current.take() {
        extract.tables.insert(table.name.clone(), table);
    }

    derive_views(extract);
}

/// Surface the four well-known tables as typed views
fn derive_views(extract: &mut XerExtract) {
    let project_rows = table_records(extract, "PROJECT");
    for row in project_rows {
        extract.project.merge(row);
    }
    extract.wbs_elements = table_records(extract, "PROJWBS");
    extract.activities = table_records(extract, "TASK");
    extract.relationships = table_records(extract, "TASKPRED");
}

fn table_records(extract: &XerExtract, name: &str) -> Vec<TableRecord> {
    extract
        .table(name)
        .map(|table| table.records.clone())
        .unwrap_or_default()
}

fn table_entry<'a>(extract: &'a mut XerExtract, name: &str) -> &'a mut XerTable {
    extract
        .tables
        .entry(name.to_string())
        .or_insert_with(|| XerTable {
            name: name.to_string(),
            ..XerTable::default()
        })
}

/// Directive payloads carry one separator tab after the marker
fn split_fields(rest: &str) -> impl Iterator<Item = &str> {
    let rest = rest.strip_prefix('\t').unwrap_or_else(|| rest.trim_start());
    rest.split('\t')
}

/// Make a scraped column header safe to use as a record key
fn sanitize_column_name(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return format!("col_{index}");
    }
    let mut name: String = trimmed
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name = format!("col_{name}");
    }
    name
}
