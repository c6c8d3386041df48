//! Workbook access
//!
//! Thin wrapper over calamine that opens `.xls` and `.xlsx` files alike
//! and reads sheets by exact name into raw [`Grid`]s.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Reader, Sheets};

use crate::error::{Result, SheetError};
use crate::grid::Grid;

/// An open spreadsheet workbook
pub struct Workbook {
    path: String,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook, detecting the format from its content
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SheetError::FileNotFound(path.display().to_string()));
        }

        let sheets = open_workbook_auto(path).map_err(|e| {
            SheetError::Workbook(format!("Failed to open {}: {}", path.display(), e))
        })?;

        Ok(Self {
            path: path.display().to_string(),
            sheets,
        })
    }

    /// Names of all sheets in the workbook, in file order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names().to_vec()
    }

    /// Read the named sheet into a raw grid
    pub fn grid(&mut self, sheet: &str) -> Result<Grid> {
        let available = self.sheet_names();
        if !available.iter().any(|name| name == sheet) {
            return Err(SheetError::SheetNotFound {
                sheet: sheet.to_string(),
                available,
            });
        }

        let range = self.sheets.worksheet_range(sheet).map_err(|e| {
            SheetError::Workbook(format!(
                "Failed to read sheet '{}' in {}: {}",
                sheet, self.path, e
            ))
        })?;

        Ok(Grid::from_range(sheet, &range))
    }
}
