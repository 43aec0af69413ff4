use crate::types::ElementCategory;
use serde::{Deserialize, Serialize};

/// Configuration for the extraction scans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// IFC entity categories scanned for building components
    pub element_categories: Vec<ElementCategory>,

    /// Table names recognized in prefix-format XER content
    pub known_tables: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            element_categories: ElementCategory::ALL.to_vec(),
            known_tables: vec![
                "PROJECT".to_string(),
                "PROJWBS".to_string(),
                "TASK".to_string(),
                "TASKPRED".to_string(),
            ],
        }
    }
}

impl ExtractConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.element_categories.is_empty() {
            return Err("element_categories cannot be empty".to_string());
        }
        if self.known_tables.is_empty() {
            return Err("known_tables cannot be empty".to_string());
        }
        for name in &self.known_tables {
            if name.trim().is_empty() || name.contains('\t') {
                return Err(format!("invalid table name: {name:?}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.element_categories.len(), 6);
        assert_eq!(config.known_tables.len(), 4);
    }

    #[test]
    fn test_empty_categories_rejected() {
        let config = ExtractConfig {
            element_categories: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tab_in_table_name_rejected() {
        let config = ExtractConfig {
            known_tables: vec!["TASK\tPRED".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
