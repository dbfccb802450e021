//! Error types for purpleairlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying air-quality readings
#[derive(Error, Debug)]
pub enum PurpleAirError {
    /// Failed to open the CSV file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error while reading the line source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader could not produce a record
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data line is too short for the positional columns we read
    #[error("line {line}: missing field at column {index}")]
    MissingField { line: u64, index: usize },

    /// The concentration column is not a decimal number
    #[error("line {line}: invalid concentration '{value}'")]
    InvalidConcentration { line: u64, value: String },

    /// Statistics requested before any data was loaded
    #[error("no data loaded")]
    EmptyDataset,

    /// No readings match the requested (zip code, time of day) pair
    #[error("no readings for zip code '{zip_code}' at '{time_of_day}'")]
    NoMatchingItems {
        zip_code: String,
        time_of_day: String,
    },

    /// Toggle requested for a zip code that is not in the dataset
    #[error("zip code not found: {0}")]
    ZipNotFound(String),
}

impl PurpleAirError {
    /// Statistic-level errors are expected during normal browsing and are
    /// handled close to where they occur. Everything else aborts the
    /// operation that raised it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PurpleAirError::EmptyDataset | PurpleAirError::NoMatchingItems { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(PurpleAirError::EmptyDataset.is_recoverable());
        assert!(PurpleAirError::NoMatchingItems {
            zip_code: "94028".to_string(),
            time_of_day: "Night".to_string(),
        }
        .is_recoverable());
        assert!(!PurpleAirError::ZipNotFound("00000".to_string()).is_recoverable());
        assert!(!PurpleAirError::InvalidConcentration {
            line: 2,
            value: "abc".to_string(),
        }
        .is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = PurpleAirError::MissingField { line: 4, index: 5 };
        assert_eq!(err.to_string(), "line 4: missing field at column 5");

        let err = PurpleAirError::ZipNotFound("12345".to_string());
        assert_eq!(err.to_string(), "zip code not found: 12345");
    }
}
