//! Query processing: compute statistics over loaded readings.
//!
//! This module handles the second stage of the pipeline - turning the
//! record store into numbers. It provides:
//!
//! - **Options**: which statistic to compute ([`Stat`])
//! - **Lookups**: min/avg/max for a single (zip code, time of day) pair
//! - **CrossTable**: the chosen statistic for every active zip code and bucket
//!
//! ## Example
//!
//! ```rust
//! use purpleairlib::data::RecordStore;
//! use purpleairlib::query::{statistics_for, CrossTable, Stat};
//!
//! let csv = "id,zip,lat,lon,time,pm25\n0,94028,0,0,Morning,1.0\n1,94028,0,0,Morning,3.0\n";
//! let mut store = RecordStore::new();
//! store.load(csv.as_bytes()).unwrap();
//!
//! assert_eq!(statistics_for(&store, "94028", "Morning").unwrap().avg, 2.0);
//! let table = CrossTable::from_store(&store, Stat::Max).unwrap();
//! assert_eq!(table.rows[0].cells[0], Some(3.0));
//! ```

pub mod crosstab;
pub mod options;

pub use crosstab::{lookup, statistics_for, CrossRow, CrossTable};
pub use options::{Stat, Summary};
