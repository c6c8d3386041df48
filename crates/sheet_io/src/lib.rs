//! Spreadsheet I/O for the metadata template generator
//!
//! This crate provides the file-facing layers: reading input workbooks
//! (`.xls` or `.xlsx`) into raw string grids, and writing finished
//! row-labelled tables as CSV.
//!
//! # Example
//!
//! ```rust
//! use sheet_io::OutputTable;
//!
//! let mut table = OutputTable::new("index", vec!["name".to_string()]);
//! table.push_row("1", vec!["soil".to_string()]);
//!
//! assert_eq!(table.to_csv_string().unwrap(), "index,name\n1,soil\n");
//! ```

mod error;
mod grid;
mod workbook;
mod writer;

pub use error::{Result, SheetError};
pub use grid::Grid;
pub use workbook::Workbook;
pub use writer::{LabelledRow, OutputTable};
