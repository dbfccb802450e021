//! Cross-tabulation: one statistic per (zip code, time of day) cell.
//!
//! A CrossTable sits between the record store and the final table output.
//! It holds the numeric value of every cell for the active zip codes,
//! with `None` marking cells that have no matching readings.
//!
//! Every cell is computed with a full scan of the records.

use serde::{Deserialize, Serialize};

use super::options::{Stat, Summary};
use crate::data::{RecordStore, TimeOfDay};
use crate::error::PurpleAirError;
use crate::Result;

/// Summary for one (zip code, time of day) pair, or `None` if no readings
/// match. Fails with `EmptyDataset` before any load.
pub fn lookup(
    store: &RecordStore,
    zip_code: &str,
    time_of_day: &str,
) -> Result<Option<Summary>> {
    let records = store.records()?;
    Ok(Summary::from_values(
        records
            .iter()
            .filter(|r| r.matches(zip_code, time_of_day))
            .map(|r| r.concentration),
    ))
}

/// Summary for one (zip code, time of day) pair.
///
/// Fails with `EmptyDataset` before any load and with `NoMatchingItems`
/// when the pair has no readings.
pub fn statistics_for(
    store: &RecordStore,
    zip_code: &str,
    time_of_day: &str,
) -> Result<Summary> {
    lookup(store, zip_code, time_of_day)?.ok_or_else(|| PurpleAirError::NoMatchingItems {
        zip_code: zip_code.to_string(),
        time_of_day: time_of_day.to_string(),
    })
}

/// One row of a cross table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossRow {
    pub zip_code: String,
    /// One cell per column, `None` where nothing matched
    pub cells: Vec<Option<f64>>,
}

/// A statistic tabulated over active zip codes and time-of-day buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTable {
    pub stat: Stat,
    /// Columns in canonical order
    pub columns: Vec<TimeOfDay>,
    /// Rows for active zip codes in first-seen order
    pub rows: Vec<CrossRow>,
}

impl CrossTable {
    /// Tabulate `stat` for every active zip code and every bucket.
    pub fn from_store(store: &RecordStore, stat: Stat) -> Result<Self> {
        if !store.is_loaded() {
            return Err(PurpleAirError::EmptyDataset);
        }

        let columns = TimeOfDay::ALL.to_vec();
        let rows = store
            .active_zip_codes()
            .map(|zip_code| -> Result<CrossRow> {
                let cells = columns
                    .iter()
                    .map(|bucket| {
                        lookup(store, zip_code, bucket.label())
                            .map(|summary| summary.map(|s| s.get(stat)))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CrossRow {
                    zip_code: zip_code.to_string(),
                    cells,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CrossTable { stat, columns, rows })
    }
}
