//! # BIM XER Extract
//!
//! Best-effort text extraction from IFC building models and XER schedule exports.
//!
//! ## Philosophy
//!
//! Both extractors are shallow text scans, not schema-aware parsers:
//! - Fixed patterns pull out exactly the fragments the integration step needs
//! - Unrecognized content is skipped, never reported as an error
//! - Zero matches produce empty collections so callers can degrade gracefully
//! - Inputs are interactive-scale exports read fully into memory
//!
//! ## Architecture
//!
//! ```text
//! Raw export text (IFC / XER)
//!     │
//!     ├──> IfcExtractor (fixed regex scan)
//!     │    ├─> Pset_ProjectManagement property sets
//!     │    ├─> WBS_Code / Task_ID single values
//!     │    └─> Building elements (walls, columns, slabs, ...)
//!     │
//!     ├──> XerExtractor (line scan, format auto-detect)
//!     │    ├─> %T/%F/%R directive sections → named tables
//!     │    └─> Prefixed rows (PROJECT, PROJWBS, TASK, TASKPRED)
//!     │
//!     └──> FileMeta (filename heuristics)
//!          ├─> Project name / snapshot date
//!          └─> Category / baseline version
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bimxer_extract::{ExtractConfig, IfcExtractor};
//!
//! let config = ExtractConfig::default();
//! let extractor = IfcExtractor::new(&config).unwrap();
//!
//! let content = r#"
//! #100=IFCWALL('2O2Fr$t4X7Zf8NOew3FLKr',#101,'Basic Wall:Level 1');
//! #200=IFCPROPERTYSINGLEVALUE('WBS_Code',$,IFCTEXT('DC-L1-STRUCT-WALL'),$);
//! "#;
//!
//! let extract = extractor.extract_str(content, "sample.ifc");
//! assert_eq!(extract.building_elements.len(), 1);
//! assert_eq!(extract.wbs_codes, vec!["DC-L1-STRUCT-WALL"]);
//! ```

mod config;
mod error;
mod file_meta;
mod ifc;
mod types;
mod xer;

pub use config::ExtractConfig;
pub use error::{ExtractError, Result};
pub use file_meta::{FileCategory, FileMeta};
pub use ifc::IfcExtractor;
pub use types::{BuildingElement, ElementCategory, IfcExtract, TableRecord, XerExtract, XerTable};
pub use xer::XerExtractor;
