//! Metadata-collection template assembly
//!
//! This crate builds blank metadata-collection templates for environmental
//! sample batches from three field-standard sources: registry-required
//! fields, minimum-information required fields, and per-package reference
//! fields. It also builds the two readme tables describing the fields in
//! use.
//!
//! # Features
//!
//! - Typed adapter per input sheet, with shape errors raised before
//!   assembly
//! - Order-preserving package filtering
//! - Template assembly with requirement/format metadata rows and
//!   pre-filled sample identifiers
//! - Explicit handling of duplicate column names via [`CollisionPolicy`]
//!
//! # Example
//!
//! ```rust
//! use template_engine::{
//!     FieldSpec, PackageFields, SampleBatch, StandardFields, TemplateEngine,
//!     TemplateOptions,
//! };
//!
//! let registry = StandardFields {
//!     source: "QiitaEBI".to_string(),
//!     fields: vec![
//!         FieldSpec {
//!             name: "sample_name".to_string(),
//!             requirement: "required".to_string(),
//!             example: "free text".to_string(),
//!         },
//!         FieldSpec {
//!             name: "investigation_type".to_string(),
//!             requirement: "required".to_string(),
//!             example: "metagenome".to_string(),
//!         },
//!         FieldSpec {
//!             name: "env_package".to_string(),
//!             requirement: "required".to_string(),
//!             example: "soil".to_string(),
//!         },
//!     ],
//! };
//! let mims = StandardFields {
//!     source: "MIMS".to_string(),
//!     fields: Vec::new(),
//! };
//!
//! let engine = TemplateEngine::new(
//!     registry,
//!     mims,
//!     PackageFields::default(),
//!     TemplateOptions::default(),
//! );
//! let batch = SampleBatch::new(vec!["soil".to_string()], 2, "Study1");
//!
//! let template = engine.assemble(&batch).unwrap();
//! assert_eq!(template.row_count(), 4);
//! assert_eq!(template.row("1").unwrap().cells[0], "Study1.soil.1");
//! ```

mod error;
mod naming;
mod readme;
mod sources;
mod standards;
mod template;

#[cfg(test)]
mod tests;

pub use error::{Result, TemplateError};
pub use naming::{
    package_readme_filename, sanitize_join, template_filename, MIMS_README_FILENAME,
};
pub use readme::{minimum_info_readme, package_readme, section_subset, README_SECTIONS};
pub use sources::{
    FieldSources, ENV_PACKAGES_SHEET, MIGS_MIMS_SHEET, MIMS_SHEET, README_SHEET,
    REGISTRY_SHEET,
};
pub use standards::{
    FieldSpec, MinimumInfo, PackageField, PackageFields, StandardFields, FIELD_NAME_COLUMN,
    PACKAGE_COLUMN, REQUIREMENT_COLUMN, SECTION_COLUMN, VALUE_SYNTAX_COLUMN,
};
pub use template::{
    CollisionPolicy, SampleBatch, TemplateEngine, TemplateOptions, ENV_PACKAGE_COLUMN,
    FORMAT_ROW_LABEL, INVESTIGATION_TYPE_COLUMN, REQUIREMENT_ROW_LABEL, SAMPLE_NAME_COLUMN,
    TEMPLATE_INDEX_LABEL,
};
