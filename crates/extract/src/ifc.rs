use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use crate::types::{BuildingElement, ElementCategory, IfcExtract};
use regex::Regex;
use std::path::Path;

const PROPERTY_SET_PATTERN: &str = r"#\d+=IFCPROPERTYSET\('([^']+)',#\d+,'Pset_ProjectManagement'";
const WBS_CODE_PATTERN: &str = r"#\d+=IFCPROPERTYSINGLEVALUE\('WBS_Code',\$,IFCTEXT\('([^']+)'\)";
const TASK_ID_PATTERN: &str = r"#\d+=IFCPROPERTYSINGLEVALUE\('Task_ID',\$,IFCTEXT\('([^']+)'\)";

/// Scrapes building components and schedule codes out of IFC text
///
/// One fixed pattern per fragment kind, applied to the whole content. Lines
/// that match nothing are skipped without comment.
pub struct IfcExtractor {
    property_sets: Regex,
    wbs_codes: Regex,
    task_ids: Regex,
    elements: Vec<(ElementCategory, Regex)>,
}

impl IfcExtractor {
    /// Create an extractor scanning the configured element categories
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        config.validate().map_err(ExtractError::invalid_config)?;

        let elements = config
            .element_categories
            .iter()
            .map(|&category| {
                let pattern = format!(r"#\d+={}\('([^']+)',#\d+,'([^']+)'", category.keyword());
                compile(&pattern).map(|regex| (category, regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            property_sets: compile(PROPERTY_SET_PATTERN)?,
            wbs_codes: compile(WBS_CODE_PATTERN)?,
            task_ids: compile(TASK_ID_PATTERN)?,
            elements,
        })
    }

    /// Scan IFC content from a string
    #[must_use]
    pub fn extract_str(&self, content: &str, file_name: &str) -> IfcExtract {
        let property_sets = capture_all(&self.property_sets, content);
        let wbs_codes = capture_all(&self.wbs_codes, content);
        let task_ids = capture_all(&self.task_ids, content);

        let mut building_elements = Vec::new();
        for (category, regex) in &self.elements {
            for caps in regex.captures_iter(content) {
                building_elements.push(BuildingElement::new(&caps[1], &caps[2], *category));
            }
        }

        log::debug!(
            "IFC scan of {}: {} elements, {} property sets, {} wbs codes, {} task ids",
            file_name,
            building_elements.len(),
            property_sets.len(),
            wbs_codes.len(),
            task_ids.len()
        );

        IfcExtract {
            file_name: file_name.to_string(),
            file_size: content.len() as u64,
            property_sets,
            building_elements,
            wbs_codes,
            task_ids,
        }
    }

    /// Scan IFC content from a file
    pub async fn extract_file(&self, path: impl AsRef<Path>) -> Result<IfcExtract> {
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
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ExtractError::pattern(format!("{pattern}: {e}")))
}

fn capture_all(regex: &Regex, content: &str) -> Vec<String> {
    regex
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r"ISO-10303-21;
HEADER;
FILE_NAME('datacenter.ifc','2025-06-01T10:00:00',(''),(''),'','','');
ENDSEC;
DATA;
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',#2,'Data Center',$,$,$,$,(#20),#7);
#100=IFCPROPERTYSET('2pGbXnL0X2zvTX4BJuXjaj',#2,'Pset_ProjectManagement',$,(#101,#102));
#101=IFCPROPERTYSINGLEVALUE('WBS_Code',$,IFCTEXT('DC-L1-STRUCT-WALL'),$);
#102=IFCPROPERTYSINGLEVALUE('Task_ID',$,IFCTEXT('A1010'),$);
#110=IFCPROPERTYSET('3aQcXnM1Y3awUY5CKvYkbk',#2,'Pset_ProjectManagement',$,(#111,#112));
#111=IFCPROPERTYSINGLEVALUE('WBS_Code',$,IFCTEXT('DC-L1-STRUCT-COL'),$);
#112=IFCPROPERTYSINGLEVALUE('Task_ID',$,IFCTEXT('A1020'),$);
#200=IFCCOLUMN('0Xq2LgRiv4wBvLedCqwrgi',#2,'Concrete Column:450mm');
#201=IFCWALL('1kTvXnbbzCWw8lcMd1dR4o',#2,'Basic Wall:Interior');
#202=IFCSLAB('2wJeYobcADXxAmdNe2eS5p',#2,'Floor Slab:Level 1');
#203=IFCFLOWSEGMENT('3xKfZpcdBEYyBneOf3fT6q',#2,'Duct:Supply Air');
ENDSEC;
END-ISO-10303-21;";

    fn extractor() -> IfcExtractor {
        IfcExtractor::new(&ExtractConfig::default()).unwrap()
    }

    #[test]
    fn test_extracts_property_sets_in_text_order() {
        let extract = extractor().extract_str(SAMPLE, "datacenter.ifc");
        assert_eq!(
            extract.property_sets,
            vec!["2pGbXnL0X2zvTX4BJuXjaj", "3aQcXnM1Y3awUY5CKvYkbk"]
        );
    }

    #[test]
    fn test_extracts_codes_in_text_order() {
        let extract = extractor().extract_str(SAMPLE, "datacenter.ifc");
        assert_eq!(extract.wbs_codes, vec!["DC-L1-STRUCT-WALL", "DC-L1-STRUCT-COL"]);
        assert_eq!(extract.task_ids, vec!["A1010", "A1020"]);
    }

    #[test]
    fn test_elements_grouped_by_category() {
        let extract = extractor().extract_str(SAMPLE, "datacenter.ifc");
        assert_eq!(extract.building_elements.len(), 4);

        // Walls scan before columns even though the column appears first
        let wall = &extract.building_elements[0];
        assert_eq!(wall.category, ElementCategory::Wall);
        assert_eq!(wall.guid, "1kTvXnbbzCWw8lcMd1dR4o");
        assert_eq!(wall.name, "Basic Wall:Interior");

        assert_eq!(extract.category_count(ElementCategory::Column), 1);
        assert_eq!(extract.category_count(ElementCategory::Slab), 1);
        assert_eq!(extract.category_count(ElementCategory::FlowSegment), 1);
        assert_eq!(extract.category_count(ElementCategory::Door), 0);
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        let extract = extractor().extract_str("not ifc content at all", "noise.txt");
        assert!(extract.is_empty());
        assert_eq!(extract.file_name, "noise.txt");
        assert_eq!(extract.file_size, "not ifc content at all".len() as u64);
    }

    #[test]
    fn test_property_set_without_management_name_skipped() {
        let content = "#100=IFCPROPERTYSET('abc',#2,'Pset_WallCommon',$,(#101));";
        let extract = extractor().extract_str(content, "other.ifc");
        assert!(extract.property_sets.is_empty());
    }

    #[test]
    fn test_respects_configured_categories() {
        let config = ExtractConfig {
            element_categories: vec![ElementCategory::Slab],
            ..Default::default()
        };
        let extract = IfcExtractor::new(&config)
            .unwrap()
            .extract_str(SAMPLE, "datacenter.ifc");
        assert_eq!(extract.building_elements.len(), 1);
        assert_eq!(extract.building_elements[0].category, ElementCategory::Slab);
    }
}
