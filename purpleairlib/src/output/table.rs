//! Table-ready data structures for statistic output.
//!
//! This module provides `StatsTable`, a presentation-ready data structure
//! that can be printed as fixed-width text or serialized to JSON.
//!
//! The data flow is:
//! 1. RecordStore (loaded readings + zip code flags)
//! 2. CrossTable (numeric cells, `None` for empty combinations)
//! 3. StatsTable (formatted strings for display)
//!
//! StatsTable is a pure presentation layer - it only formats data, all
//! computation happens in the query stage.

use serde::{Deserialize, Serialize};

use crate::data::RecordStore;
use crate::query::{CrossTable, Stat};
use crate::Result;

/// Width of every value column.
pub const CELL_WIDTH: usize = 10;
/// Minimum width of the zip code column. Longer zip codes are never cut.
pub const MIN_LABEL_WIDTH: usize = 3;
/// Cell text for combinations without readings.
pub const NOT_AVAILABLE: &str = "N/A";
/// Printed instead of a table when nothing has been loaded.
pub const LOAD_DATA_FIRST: &str = "Please Load Data First.";

/// A single table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Zip code
    pub label: String,
    /// Pre-formatted, right-aligned cells
    pub values: Vec<String>,
}

/// Table-ready statistic data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsTable {
    /// Title for structured output (e.g., "Average Particulate Concentration by Zip Code and Time")
    pub title: String,
    /// Column headers, one per time-of-day bucket
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
    /// Width of the zip code column
    pub label_width: usize,
}

impl StatsTable {
    /// Format a CrossTable.
    ///
    /// `label_width` is raised to [`MIN_LABEL_WIDTH`] if smaller.
    pub fn from_cross_table(table: &CrossTable, label_width: usize) -> Self {
        let headers = table
            .columns
            .iter()
            .map(|bucket| bucket.label().to_string())
            .collect();
        let rows = table
            .rows
            .iter()
            .map(|row| TableRow {
                label: row.zip_code.clone(),
                values: row.cells.iter().map(|cell| format_cell(*cell)).collect(),
            })
            .collect();

        StatsTable {
            title: build_title(table.stat),
            headers,
            rows,
            label_width: label_width.max(MIN_LABEL_WIDTH),
        }
    }

    /// Render as fixed-width text, one line per row, each newline-terminated.
    pub fn render(&self) -> String {
        let mut out = " ".repeat(self.label_width);
        for header in &self.headers {
            out.push_str(&format!("{:>width$}", header, width = CELL_WIDTH));
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format!("{:<width$}", row.label, width = self.label_width));
            for value in &row.values {
                out.push_str(value);
            }
            out.push('\n');
        }

        out
    }
}

/// Render the `stat` table for the store's active zip codes.
///
/// Before any load this is the "please load" message rather than a table.
pub fn render_table(store: &RecordStore, stat: Stat) -> String {
    match build_table(store, stat) {
        Ok(table) => table.render(),
        Err(_) => format!("{}\n", LOAD_DATA_FIRST),
    }
}

/// Build the formatted `stat` table for the store's active zip codes.
///
/// The zip code column is sized to the longest loaded zip code, active or
/// not, so toggling rows never shifts the header.
pub fn build_table(store: &RecordStore, stat: Stat) -> Result<StatsTable> {
    let cross = CrossTable::from_store(store, stat)?;
    let label_width = store
        .zip_flags()
        .iter()
        .map(|flag| flag.zip_code.chars().count())
        .max()
        .unwrap_or(0);
    Ok(StatsTable::from_cross_table(&cross, label_width))
}

/// Format one cell: two decimals, or "N/A", right-aligned.
fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:>width$.2}", v, width = CELL_WIDTH),
        None => format!("{:>width$}", NOT_AVAILABLE, width = CELL_WIDTH),
    }
}

fn build_title(stat: Stat) -> String {
    format!(
        "{} Particulate Concentration by Zip Code and Time",
        stat.description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PurpleAirError;

    const SAMPLE: &str = "\
id,zip,lat,lon,time,pm25
0,94028,0,0,Morning,1.0
1,94028,0,0,Morning,3.0
2,94028,0,0,Evening,5.0
3,94304,0,0,Midday,12.346
4,94304,0,0,Night,0.5
";

    fn loaded() -> RecordStore {
        let mut store = RecordStore::new();
        store.load(SAMPLE.as_bytes()).unwrap();
        store
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(Some(2.0)), "      2.00");
        assert_eq!(format_cell(Some(79.876)), "     79.88");
        assert_eq!(format_cell(None), "       N/A");
    }

    #[test]
    fn test_render_before_load() {
        let store = RecordStore::new();
        assert_eq!(render_table(&store, Stat::Avg), "Please Load Data First.\n");
    }

    #[test]
    fn test_render_avg() {
        let text = render_table(&loaded(), Stat::Avg);
        let expected = "\
        Morning    Midday   Evening     Night
94028      2.00       N/A      5.00       N/A
94304       N/A     12.35       N/A      0.50
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_min_and_max() {
        let store = loaded();
        let min = render_table(&store, Stat::Min);
        let max = render_table(&store, Stat::Max);
        assert!(min.contains("94028      1.00"));
        assert!(max.contains("94028      3.00"));
    }

    #[test]
    fn test_render_night_cell_is_na() {
        let text = render_table(&loaded(), Stat::Max);
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("94028"));
        assert!(row.ends_with("       N/A"));
    }

    #[test]
    fn test_render_omits_inactive_rows() {
        let mut store = loaded();
        store.toggle("94028").unwrap();
        let text = render_table(&store, Stat::Avg);

        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("94028"));
        assert!(text.lines().next().unwrap().starts_with("        Morning"));
    }

    #[test]
    fn test_row_order_ignores_toggle_history() {
        let mut store = loaded();
        store.toggle("94304").unwrap();
        store.toggle("94028").unwrap();
        store.toggle("94028").unwrap();
        store.toggle("94304").unwrap();

        let text = render_table(&store, Stat::Avg);
        let labels: Vec<&str> = text.lines().skip(1).map(|l| &l[..5]).collect();
        assert_eq!(labels, vec!["94028", "94304"]);
    }

    #[test]
    fn test_short_labels_padded_to_minimum() {
        let mut store = RecordStore::new();
        store
            .load("id,zip,lat,lon,time,pm25\n0,7,0,0,Night,1\n".as_bytes())
            .unwrap();
        let text = render_table(&store, Stat::Avg);
        let expected = "      Morning    Midday   Evening     Night\n7         N/A       N/A       N/A      1.00\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_build_table_title_and_json() {
        let table = build_table(&loaded(), Stat::Max).unwrap();
        assert_eq!(
            table.title,
            "Maximum Particulate Concentration by Zip Code and Time"
        );
        assert_eq!(table.headers, vec!["Morning", "Midday", "Evening", "Night"]);
        assert_eq!(table.label_width, 5);
        assert_eq!(table.rows[1].values[1], "     12.35");
    }

    #[test]
    fn test_build_table_before_load() {
        let store = RecordStore::new();
        assert!(matches!(
            build_table(&store, Stat::Min),
            Err(PurpleAirError::EmptyDataset)
        ));
    }
}
