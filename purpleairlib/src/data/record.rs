//! Individual sensor readings and the canonical time-of-day buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single particulate reading.
///
/// Records are immutable once loaded; a reload replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Postal code of the sensor location
    pub zip_code: String,
    /// Raw time-of-day label as it appears in the file
    pub time_of_day: String,
    /// Particulate concentration
    pub concentration: f64,
}

impl Record {
    pub fn new(
        zip_code: impl Into<String>,
        time_of_day: impl Into<String>,
        concentration: f64,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            time_of_day: time_of_day.into(),
            concentration,
        }
    }

    /// Whether this record belongs to the given (zip code, time of day) cell.
    /// Matching is exact and case-sensitive.
    pub fn matches(&self, zip_code: &str, time_of_day: &str) -> bool {
        self.zip_code == zip_code && self.time_of_day == time_of_day
    }
}

/// The four time-of-day buckets used as table columns.
///
/// Variant order is the column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Midday,
    Evening,
    Night,
}

impl TimeOfDay {
    /// All buckets in column order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Midday,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// The label used both as the column header and as the raw value
    /// matched against records.
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Midday => "Midday",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::ALL
            .iter()
            .find(|bucket| bucket.label() == s)
            .copied()
            .ok_or_else(|| format!("Unknown time of day: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_matches_exactly() {
        let record = Record::new("94028", "Morning", 1.5);
        assert!(record.matches("94028", "Morning"));
        assert!(!record.matches("94028", "morning"));
        assert!(!record.matches("94028 ", "Morning"));
        assert!(!record.matches("94304", "Morning"));
    }

    #[test]
    fn test_bucket_order() {
        let mut shuffled = vec![
            TimeOfDay::Night,
            TimeOfDay::Morning,
            TimeOfDay::Evening,
            TimeOfDay::Midday,
        ];
        shuffled.sort();
        assert_eq!(shuffled, TimeOfDay::ALL.to_vec());
    }

    #[test]
    fn test_bucket_from_str() {
        assert_eq!("Evening".parse::<TimeOfDay>(), Ok(TimeOfDay::Evening));
        assert!("evening".parse::<TimeOfDay>().is_err());
        assert!("Afternoon".parse::<TimeOfDay>().is_err());
    }
}
