//! Row-labelled output tables and their CSV serialization
//!
//! Every file this tool emits has the same shape: an index column with a
//! label, a header of column names (duplicates allowed), and ordered rows
//! each carrying an index label plus one cell per column.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A finished table ready to be written as CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTable {
    /// Header cell of the index column
    pub index_label: String,
    /// Column names, in output order; duplicate names are kept as-is
    pub columns: Vec<String>,
    /// Rows, in output order
    pub rows: Vec<LabelledRow>,
}

/// One output row: its index label and one cell per column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledRow {
    pub label: String,
    pub cells: Vec<String>,
}

impl OutputTable {
    /// Create an empty table with the given index label and columns
    pub fn new(index_label: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            index_label: index_label.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, label: impl Into<String>, cells: Vec<String>) {
        self.rows.push(LabelledRow {
            label: label.into(),
            cells,
        });
    }

    /// Number of columns, excluding the index column
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a row by its index label
    pub fn row(&self, label: &str) -> Option<&LabelledRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    /// Serialize the table as CSV to any writer
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::Writer::from_writer(writer);

        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push(self.index_label.as_str());
        header.extend(self.columns.iter().map(String::as_str));
        out.write_record(&header)?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(row.cells.len() + 1);
            record.push(row.label.as_str());
            record.extend(row.cells.iter().map(String::as_str));
            out.write_record(&record)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Write the table to a CSV file
    pub fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }

    /// Serialize the table to a CSV string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_table() -> OutputTable {
        let mut table = OutputTable::new(
            "index",
            vec!["name".to_string(), "note".to_string()],
        );
        table.push_row(
            "1",
            vec!["soil".to_string(), "top layer".to_string()],
        );
        table.push_row("2", vec!["water".to_string(), String::new()]);
        table
    }

    #[test]
    fn test_write_csv_string() {
        let csv = sample_table().to_csv_string().unwrap();
        assert_eq!(csv, "index,name,note\n1,soil,top layer\n2,water,\n");
    }

    #[test]
    fn test_write_csv_quotes_when_needed() {
        let mut table = OutputTable::new("index", vec!["syntax".to_string()]);
        table.push_row("1", vec!["{text}, one per line".to_string()]);

        let csv = table.to_csv_string().unwrap();
        assert_eq!(csv, "index,syntax\n1,\"{text}, one per line\"\n");
    }

    #[test]
    fn test_write_csv_header_only() {
        let table = OutputTable::new("index", vec!["a".to_string(), "b".to_string()]);
        let csv = table.to_csv_string().unwrap();
        assert_eq!(csv, "index,a,b\n");
    }

    #[test]
    fn test_duplicate_columns_kept() {
        let table = OutputTable::new(
            "index",
            vec!["depth".to_string(), "depth".to_string()],
        );
        let csv = table.to_csv_string().unwrap();
        assert_eq!(csv, "index,depth,depth\n");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        sample_table().write_csv_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("index,name,note\n"));
        assert!(content.contains("2,water,\n"));
    }

    #[test]
    fn test_row_lookup() {
        let table = sample_table();
        assert_eq!(table.row("2").unwrap().cells[0], "water");
        assert!(table.row("3").is_none());
    }
}
