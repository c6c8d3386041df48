//! Raw worksheet grids
//!
//! A [`Grid`] is a sheet's used cell range with every cell rendered as a
//! string. No header or index interpretation happens at this layer; the
//! adapters that consume a grid decide what each row means.

use calamine::{Data, Range};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named raw worksheet: rows of string cells in sheet order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Sheet name the grid was read from
    pub name: String,
    /// Cell rows, top to bottom
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create a grid from already-stringified rows
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Convert a calamine cell range into a grid
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True if the grid has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render an Excel cell as the string that belongs in CSV output
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(n) => format_float(*n),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format_excel_datetime(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERROR:{:?}", e),
    }
}

/// Format a float without unnecessary decimal places
fn format_float(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Convert an Excel datetime (days since 1900-01-01) to a date
fn excel_datetime_to_date(excel_date: f64) -> Option<NaiveDate> {
    let days = excel_date.floor() as i64;

    // Excel counts 1900 as a leap year (Lotus 1-2-3 compatibility), so
    // dates at or past day 60 are off by one.
    let adjusted_days = if days >= 60 { days - 1 } else { days };

    // Excel epoch is 1899-12-30
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    excel_epoch.checked_add_signed(chrono::Duration::days(adjusted_days))
}

/// Format an Excel datetime for display
fn format_excel_datetime(dt: f64) -> String {
    if let Some(date) = excel_datetime_to_date(dt) {
        date.format("%Y-%m-%d").to_string()
    } else {
        format_float(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use chrono::Datelike;

    fn make_excel_datetime(value: f64) -> ExcelDateTime {
        ExcelDateTime::new(value, ExcelDateTimeType::DateTime, false)
    }

    #[test]
    fn test_grid_from_range() {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::String("name".to_string()));
        range.set_value((0, 1), Data::String("count".to_string()));
        range.set_value((1, 0), Data::String("soil".to_string()));
        range.set_value((1, 1), Data::Int(42));

        let grid = Grid::from_range("fields", &range);
        assert_eq!(grid.name, "fields");
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.rows[0], vec!["name", "count", ""]);
        assert_eq!(grid.rows[1], vec!["soil", "42", ""]);
    }

    #[test]
    fn test_grid_empty() {
        let grid = Grid::new("blank", Vec::new());
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
    }

    #[test]
    fn test_cell_to_string_basic() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("hello".to_string())), "hello");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_cell_to_string_floats() {
        assert_eq!(cell_to_string(&Data::Float(42.0)), "42");
        assert_eq!(cell_to_string(&Data::Float(3.14)), "3.14");
        assert_eq!(cell_to_string(&Data::Float(-5.0)), "-5");
    }

    #[test]
    fn test_cell_to_string_datetime() {
        // Excel date 45293 is 2024-01-01
        let cell = Data::DateTime(make_excel_datetime(45293.0));
        assert_eq!(cell_to_string(&cell), "2024-01-01");
    }

    #[test]
    fn test_cell_to_string_iso_strings() {
        assert_eq!(
            cell_to_string(&Data::DateTimeIso("2024-01-15".to_string())),
            "2024-01-15"
        );
        assert_eq!(
            cell_to_string(&Data::DurationIso("PT1H".to_string())),
            "PT1H"
        );
    }

    #[test]
    fn test_excel_datetime_to_date() {
        let date = excel_datetime_to_date(45293.0).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);

        // Day 1 is 1899-12-31 because of the leap year quirk
        let date = excel_datetime_to_date(1.0).unwrap();
        assert_eq!(date.year(), 1899);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 31);
    }
}
