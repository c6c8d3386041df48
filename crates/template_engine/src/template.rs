//! Template assembly
//!
//! Builds the blank collection template for one sample batch: a header
//! merged from the three field sources, a requirement-level row, a
//! format/example row, and one blank data row per sample with the
//! identifying cells pre-filled.

use serde::{Deserialize, Serialize};
use sheet_io::OutputTable;

use crate::error::{Result, TemplateError};
use crate::naming::sanitize_join;
use crate::standards::{PackageFields, StandardFields};

/// Column that receives the generated per-sample identifier
pub const SAMPLE_NAME_COLUMN: &str = "sample_name";
/// Column that receives the configured investigation type
pub const INVESTIGATION_TYPE_COLUMN: &str = "investigation_type";
/// Column that receives the selected package names
pub const ENV_PACKAGE_COLUMN: &str = "env_package";

/// Label of the requirement-level metadata row
pub const REQUIREMENT_ROW_LABEL: &str = "Requirement";
/// Label of the format/example metadata row
pub const FORMAT_ROW_LABEL: &str = "Format";
/// Header of the template's index column
pub const TEMPLATE_INDEX_LABEL: &str = "index";

/// How to treat a pre-filled column name that appears more than once in
/// the merged header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Fail the run, naming the colliding column
    Reject,
    /// Write the first matching column and leave later duplicates blank
    OverwriteFirst,
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        CollisionPolicy::Reject
    }
}

/// Options for template assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// Value written into every sample's `investigation_type` cell
    pub investigation_type: String,
    /// Duplicate-column handling for the pre-filled cells
    pub collision: CollisionPolicy,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            investigation_type: "metagenome".to_string(),
            collision: CollisionPolicy::default(),
        }
    }
}

impl TemplateOptions {
    /// Set the investigation type written into each sample row
    pub fn with_investigation_type(mut self, investigation_type: impl Into<String>) -> Self {
        self.investigation_type = investigation_type.into();
        self
    }

    /// Set the duplicate-column policy
    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }
}

/// One batch of samples to generate template rows for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleBatch {
    /// Selected environmental packages, in user order
    pub packages: Vec<String>,
    /// Number of blank sample rows
    pub samples: usize,
    /// Prefix for generated sample names
    pub prefix: String,
}

impl SampleBatch {
    /// Describe a batch of `samples` rows for the given packages
    pub fn new(packages: Vec<String>, samples: usize, prefix: impl Into<String>) -> Self {
        Self {
            packages,
            samples,
            prefix: prefix.into(),
        }
    }
}

/// Assembles collection templates from the three field sources
pub struct TemplateEngine {
    registry: StandardFields,
    mims: StandardFields,
    packages: PackageFields,
    options: TemplateOptions,
}

impl TemplateEngine {
    /// Create an engine over the loaded field sources
    pub fn new(
        registry: StandardFields,
        mims: StandardFields,
        packages: PackageFields,
        options: TemplateOptions,
    ) -> Self {
        Self {
            registry,
            mims,
            packages,
            options,
        }
    }

    /// Build the template table for one sample batch
    ///
    /// The header concatenates the registry fields, the minimum-information
    /// fields, and the filtered package fields, in that order, keeping
    /// duplicates. Rows are the requirement row, the format row, then
    /// `batch.samples` blank rows labelled from 1.
    pub fn assemble(&self, batch: &SampleBatch) -> Result<OutputTable> {
        let selected = self.packages.select(&batch.packages);

        let mut columns = Vec::new();
        let mut requirements = Vec::new();
        let mut formats = Vec::new();
        for field in self.registry.fields.iter().chain(self.mims.fields.iter()) {
            columns.push(field.name.clone());
            requirements.push(field.requirement.clone());
            formats.push(field.example.clone());
        }
        for field in &selected.fields {
            columns.push(field.name.clone());
            requirements.push(field.requirement.clone());
            formats.push(field.value_syntax.clone());
        }

        let mut table = OutputTable::new(TEMPLATE_INDEX_LABEL, columns);
        table.push_row(REQUIREMENT_ROW_LABEL, requirements);
        table.push_row(FORMAT_ROW_LABEL, formats);

        if batch.samples > 0 {
            let sample_name_idx = self.resolve_column(&table.columns, SAMPLE_NAME_COLUMN)?;
            let investigation_idx =
                self.resolve_column(&table.columns, INVESTIGATION_TYPE_COLUMN)?;
            let env_package_idx = self.resolve_column(&table.columns, ENV_PACKAGE_COLUMN)?;

            let name_stem = sanitize_join(&batch.packages, '.');
            let env_package = batch.packages.join(" or ");
            for i in 1..=batch.samples {
                let mut cells = vec![String::new(); table.column_count()];
                cells[sample_name_idx] = format!("{}.{}.{}", batch.prefix, name_stem, i);
                cells[investigation_idx] = self.options.investigation_type.clone();
                cells[env_package_idx] = env_package.clone();
                table.push_row(i.to_string(), cells);
            }
        }

        Ok(table)
    }

    /// The unfiltered package reference the engine was built with
    pub fn package_fields(&self) -> &PackageFields {
        &self.packages
    }

    /// The options the engine was built with
    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// Resolve a pre-filled column by exact name, honoring the collision policy
    fn resolve_column(&self, columns: &[String], name: &str) -> Result<usize> {
        let mut matches = columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.as_str() == name)
            .map(|(i, _)| i);

        let first = matches.next().ok_or_else(|| TemplateError::ColumnNotFound {
            table: "the template header".to_string(),
            column: name.to_string(),
        })?;

        let duplicates = matches.count();
        if duplicates > 0 && self.options.collision == CollisionPolicy::Reject {
            return Err(TemplateError::ColumnCollision {
                column: name.to_string(),
                count: duplicates + 1,
            });
        }

        Ok(first)
    }
}
