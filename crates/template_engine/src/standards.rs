//! Typed views of the input sheets
//!
//! Each input source has its own layout, so each gets its own adapter
//! from a raw [`Grid`] into a typed record sequence. Shape problems
//! (missing rows, missing columns) surface here, before any assembly
//! starts.

use serde::{Deserialize, Serialize};
use sheet_io::Grid;

use crate::error::{Result, TemplateError};

/// Column naming the environmental package in the package reference sheet
pub const PACKAGE_COLUMN: &str = "Environmental package";
/// Column holding the structured (canonical) field name
pub const FIELD_NAME_COLUMN: &str = "Structured comment name";
/// Column holding the requirement level
pub const REQUIREMENT_COLUMN: &str = "Requirement";
/// Column holding the expected value syntax
pub const VALUE_SYNTAX_COLUMN: &str = "Value syntax";
/// Column classifying minimum-information fields into sections
pub const SECTION_COLUMN: &str = "Section";

/// One metadata field from a standard-fields sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Template column name
    pub name: String,
    /// Requirement level (e.g. required, preferred)
    pub requirement: String,
    /// Example or format of the expected value
    pub example: String,
}

/// A group of required fields loaded from a three-row sheet
///
/// Row 0 holds field names, row 1 requirement levels, row 2 examples.
/// The sheet carries no data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardFields {
    /// Sheet the fields were read from
    pub source: String,
    /// Fields in sheet column order
    pub fields: Vec<FieldSpec>,
}

impl StandardFields {
    /// Adapt a raw grid with the name/requirement/example row triple
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        if grid.height() < 3 {
            return Err(TemplateError::SheetShape {
                sheet: grid.name.clone(),
                detail: format!(
                    "expected a name/requirement/example row triple, found {} rows",
                    grid.height()
                ),
            });
        }

        let names = &grid.rows[0];
        let requirements = &grid.rows[1];
        let examples = &grid.rows[2];

        // Requirement/example rows may be ragged; short rows read as blanks.
        let fields = names
            .iter()
            .enumerate()
            .map(|(i, name)| FieldSpec {
                name: name.clone(),
                requirement: requirements.get(i).cloned().unwrap_or_default(),
                example: examples.get(i).cloned().unwrap_or_default(),
            })
            .collect();

        Ok(Self {
            source: grid.name.clone(),
            fields,
        })
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the sheet declared no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The full minimum-information field list, one row per field
///
/// The sheet is row-indexed by field name (its first column) and every
/// remaining column is kept verbatim for the readme output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumInfo {
    /// Sheet the table was read from
    pub source: String,
    /// Header of the index column (the field-name column)
    pub index_label: String,
    /// Remaining column names, in sheet order
    pub columns: Vec<String>,
    /// Position of the `Section` column within `columns`
    pub section_index: usize,
    /// Rows as (field name, remaining cells), in sheet order
    pub rows: Vec<(String, Vec<String>)>,
}

impl MinimumInfo {
    /// Adapt a raw grid with a header row and a leading index column
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let header = grid.rows.first().ok_or_else(|| TemplateError::SheetShape {
            sheet: grid.name.clone(),
            detail: "sheet is empty".to_string(),
        })?;

        if header.is_empty() {
            return Err(TemplateError::SheetShape {
                sheet: grid.name.clone(),
                detail: "header row is empty".to_string(),
            });
        }

        let index_label = header[0].clone();
        let columns: Vec<String> = header[1..].to_vec();

        let section_index = columns
            .iter()
            .position(|c| c == SECTION_COLUMN)
            .ok_or_else(|| TemplateError::ColumnNotFound {
                table: format!("sheet '{}'", grid.name),
                column: SECTION_COLUMN.to_string(),
            })?;

        let rows = grid.rows[1..]
            .iter()
            .map(|row| {
                let label = row.first().cloned().unwrap_or_default();
                let mut cells: Vec<String> =
                    row.get(1..).map(|rest| rest.to_vec()).unwrap_or_default();
                cells.resize(columns.len(), String::new());
                (label, cells)
            })
            .collect();

        Ok(Self {
            source: grid.name.clone(),
            index_label,
            columns,
            section_index,
            rows,
        })
    }

    /// The `Section` value of a row, blank if the cell is missing
    pub fn section(&self, cells: &[String]) -> &str {
        cells
            .get(self.section_index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One (environmental package, field) pair from the package reference sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageField {
    /// Environmental package the field belongs to
    pub package: String,
    /// Structured field name
    pub name: String,
    /// Requirement level
    pub requirement: String,
    /// Expected value syntax
    pub value_syntax: String,
}

/// The per-package field reference, in sheet row order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFields {
    pub fields: Vec<PackageField>,
}

impl PackageFields {
    /// Adapt a raw grid with a header row and the four reference columns
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let header = grid.rows.first().ok_or_else(|| TemplateError::SheetShape {
            sheet: grid.name.clone(),
            detail: "sheet is empty".to_string(),
        })?;

        let position = |column: &str| -> Result<usize> {
            header.iter().position(|h| h == column).ok_or_else(|| {
                TemplateError::ColumnNotFound {
                    table: format!("sheet '{}'", grid.name),
                    column: column.to_string(),
                }
            })
        };

        let package_idx = position(PACKAGE_COLUMN)?;
        let name_idx = position(FIELD_NAME_COLUMN)?;
        let requirement_idx = position(REQUIREMENT_COLUMN)?;
        let syntax_idx = position(VALUE_SYNTAX_COLUMN)?;

        let cell =
            |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();

        let fields = grid.rows[1..]
            .iter()
            .map(|row| PackageField {
                package: cell(row, package_idx),
                name: cell(row, name_idx),
                requirement: cell(row, requirement_idx),
                value_syntax: cell(row, syntax_idx),
            })
            .collect();

        Ok(Self { fields })
    }

    /// Rows belonging to any of the selected packages, original order kept
    ///
    /// Names that match nothing contribute nothing; an entirely empty
    /// result is allowed and only logged.
    pub fn select(&self, packages: &[String]) -> PackageFields {
        let fields: Vec<PackageField> = self
            .fields
            .iter()
            .filter(|field| packages.iter().any(|p| p == &field.package))
            .cloned()
            .collect();

        if fields.is_empty() && !self.fields.is_empty() {
            tracing::warn!(?packages, "no package fields matched the selection");
        }

        PackageFields { fields }
    }

    /// Number of (package, field) rows
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
