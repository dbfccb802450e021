//! In-memory store of loaded readings.
//!
//! The store owns every [`Record`] plus two derived views that are rebuilt
//! on each load:
//!
//! - the zip codes in first-seen order, each with an active flag
//! - the distinct raw time-of-day labels
//!
//! A load either fully succeeds and replaces all state, or fails and leaves
//! the previous state untouched.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::record::{Record, TimeOfDay};
use crate::error::PurpleAirError;
use crate::Result;

/// Column holding the zip code.
pub const ZIP_COLUMN: usize = 1;
/// Column holding the time-of-day label.
pub const TIME_OF_DAY_COLUMN: usize = 4;
/// Column holding the particulate concentration.
pub const CONCENTRATION_COLUMN: usize = 5;

/// A zip code and whether its row is included in tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipFlag {
    pub zip_code: String,
    pub active: bool,
}

/// Owner of all loaded readings and the zip code inclusion flags.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// `None` until the first successful load
    records: Option<Vec<Record>>,
    /// Zip codes in first-seen order
    zips: Vec<ZipFlag>,
    time_labels: BTreeSet<String>,
}

impl RecordStore {
    /// Create an empty, unloaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load readings from a CSV line source, replacing any previous data.
    ///
    /// The first line is a header and is discarded. Returns the number of
    /// data lines loaded.
    pub fn load<R: Read>(&mut self, source: R) -> Result<usize> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let mut records = Vec::new();
        let mut row = StringRecord::new();
        while reader.read_record(&mut row).map_err(from_csv_error)? {
            // Header is line 1
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(records.len() as u64 + 2);
            records.push(parse_record(&row, line)?);
        }

        let count = records.len();
        self.replace(records);
        debug!(
            records = count,
            zip_codes = self.zips.len(),
            time_labels = self.time_labels.len(),
            "loaded readings"
        );
        Ok(count)
    }

    /// Load readings from a CSV file on disk.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PurpleAirError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading readings from {}", path.display());
        self.load(file)
    }

    /// Swap in a fully parsed record set and rebuild the derived labels.
    fn replace(&mut self, records: Vec<Record>) {
        let mut zips: Vec<ZipFlag> = Vec::new();
        let mut time_labels = BTreeSet::new();

        for record in &records {
            if !zips.iter().any(|z| z.zip_code == record.zip_code) {
                zips.push(ZipFlag {
                    zip_code: record.zip_code.clone(),
                    active: true,
                });
            }
            time_labels.insert(record.time_of_day.clone());
        }

        self.records = Some(records);
        self.zips = zips;
        self.time_labels = time_labels;

        for label in self.unrecognized_time_labels() {
            warn!(
                "time of day '{}' is not a known bucket and will not be tabulated",
                label
            );
        }
    }

    /// Whether a load has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// All loaded records in file order, or `EmptyDataset` before a load.
    pub fn records(&self) -> Result<&[Record]> {
        self.records.as_deref().ok_or(PurpleAirError::EmptyDataset)
    }

    /// Snapshot of the zip code flags in first-seen order.
    pub fn zip_flags(&self) -> Vec<ZipFlag> {
        self.zips.clone()
    }

    /// Zip codes whose rows are currently included, in first-seen order.
    pub fn active_zip_codes(&self) -> impl Iterator<Item = &str> {
        self.zips
            .iter()
            .filter(|z| z.active)
            .map(|z| z.zip_code.as_str())
    }

    /// Active flag for a zip code, or `None` if it is not in the dataset.
    pub fn is_active(&self, zip_code: &str) -> Option<bool> {
        self.zips
            .iter()
            .find(|z| z.zip_code == zip_code)
            .map(|z| z.active)
    }

    /// Flip the active flag of a zip code and return its new value.
    pub fn toggle(&mut self, zip_code: &str) -> Result<bool> {
        let flag = self
            .zips
            .iter_mut()
            .find(|z| z.zip_code == zip_code)
            .ok_or_else(|| PurpleAirError::ZipNotFound(zip_code.to_string()))?;
        flag.active = !flag.active;
        debug!(zip_code, active = flag.active, "toggled zip code");
        Ok(flag.active)
    }

    /// Distinct raw time-of-day labels seen in the data.
    pub fn time_labels(&self) -> &BTreeSet<String> {
        &self.time_labels
    }

    /// Time-of-day labels that are not one of the four canonical buckets.
    pub fn unrecognized_time_labels(&self) -> Vec<&str> {
        self.time_labels
            .iter()
            .filter(|label| label.parse::<TimeOfDay>().is_err())
            .map(|label| label.as_str())
            .collect()
    }
}

/// Build a record from the positional columns of a CSV row.
fn parse_record(row: &StringRecord, line: u64) -> Result<Record> {
    let field = |index: usize| {
        row.get(index)
            .ok_or(PurpleAirError::MissingField { line, index })
    };

    let zip_code = field(ZIP_COLUMN)?;
    let time_of_day = field(TIME_OF_DAY_COLUMN)?;
    let raw = field(CONCENTRATION_COLUMN)?;
    let concentration = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| PurpleAirError::InvalidConcentration {
            line,
            value: raw.to_string(),
        })?;

    Ok(Record::new(zip_code, time_of_day, concentration))
}

/// Surface read failures as plain IO errors rather than CSV errors.
fn from_csv_error(err: csv::Error) -> PurpleAirError {
    if !err.is_io_error() {
        return PurpleAirError::Csv(err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PurpleAirError::Io(source),
        other => PurpleAirError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("{:?}", other),
        )),
    }
}
