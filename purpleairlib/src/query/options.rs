//! Statistic selection for cross-tabulated queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which aggregate a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Smallest reading
    Min,
    /// Arithmetic mean
    Avg,
    /// Largest reading
    Max,
}

impl Stat {
    /// Human-readable name used in menus and titles.
    pub fn description(&self) -> &'static str {
        match self {
            Stat::Min => "Minimum",
            Stat::Avg => "Average",
            Stat::Max => "Maximum",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stat::Min => "min",
            Stat::Avg => "avg",
            Stat::Max => "max",
        };
        f.write_str(name)
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "minimum" => Ok(Stat::Min),
            "avg" | "average" | "mean" => Ok(Stat::Avg),
            "max" | "maximum" => Ok(Stat::Max),
            _ => Err(format!("Unknown statistic: {}", s)),
        }
    }
}

/// Minimum, mean and maximum of a non-empty set of readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl Summary {
    /// Summarise a sequence of values. Returns `None` when it is empty.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            min,
            avg: sum / count as f64,
            max,
        })
    }

    /// The value selected by `stat`.
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Min => self.min,
            Stat::Avg => self.avg,
            Stat::Max => self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_from_str() {
        assert_eq!("avg".parse::<Stat>(), Ok(Stat::Avg));
        assert_eq!("MAX".parse::<Stat>(), Ok(Stat::Max));
        assert_eq!("minimum".parse::<Stat>(), Ok(Stat::Min));
        assert!("median".parse::<Stat>().is_err());
    }

    #[test]
    fn test_summary_from_values() {
        let summary = Summary::from_values([1.0, 3.0]).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.avg, 2.0);
        assert_eq!(summary.max, 3.0);
    }

    #[test]
    fn test_summary_empty() {
        assert!(Summary::from_values(std::iter::empty()).is_none());
    }

    #[test]
    fn test_summary_single_value() {
        let summary = Summary::from_values([4.2]).unwrap();
        assert_eq!(summary.min, 4.2);
        assert_eq!(summary.avg, 4.2);
        assert_eq!(summary.max, 4.2);
    }

    #[test]
    fn test_summary_get() {
        let summary = Summary {
            min: 0.5,
            avg: 1.5,
            max: 9.0,
        };
        assert_eq!(summary.get(Stat::Min), 0.5);
        assert_eq!(summary.get(Stat::Avg), 1.5);
        assert_eq!(summary.get(Stat::Max), 9.0);
    }
}
