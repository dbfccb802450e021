//! # purpleairlib
//!
//! Cross-tabulated particulate statistics from PurpleAir sensor exports.
//!
//! ## Overview
//!
//! A PurpleAir CSV export holds one reading per line. This library keeps
//! three of its columns - zip code, time-of-day bucket, and particulate
//! concentration - and answers one question: what is the minimum, average,
//! or maximum concentration for each zip code at each time of day?
//!
//! The pipeline has three stages:
//!
//! 1. **Data** ([`data`]): load readings into a [`RecordStore`], discover zip
//!    codes and time-of-day labels, toggle which zip codes are shown
//! 2. **Query** ([`query`]): compute a [`Summary`] per cell, or a whole
//!    [`CrossTable`] for one [`Stat`]
//! 3. **Output** ([`output`]): format a [`StatsTable`] as fixed-width text or
//!    serialize it
//!
//! ## Input format
//!
//! Comma-separated, first line is a header. Only positional columns are
//! read: 1 (zip code), 4 (time of day), 5 (concentration). Extra columns
//! are ignored.
//!
//! ## Example
//!
//! ```rust
//! use purpleairlib::{render_table, statistics_for, RecordStore, Stat};
//!
//! let csv = "\
//! id,zip,lat,lon,time,pm25
//! 0,94028,0,0,Morning,1.0
//! 1,94028,0,0,Morning,3.0
//! 2,94028,0,0,Evening,5.0
//! ";
//! let mut store = RecordStore::new();
//! assert_eq!(store.load(csv.as_bytes()).unwrap(), 3);
//!
//! let summary = statistics_for(&store, "94028", "Morning").unwrap();
//! assert_eq!((summary.min, summary.avg, summary.max), (1.0, 2.0, 3.0));
//!
//! let table = render_table(&store, Stat::Avg);
//! assert_eq!(
//!     table.lines().nth(1).unwrap(),
//!     "94028      2.00       N/A      5.00       N/A"
//! );
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;

pub use data::{Record, RecordStore, TimeOfDay, ZipFlag};
pub use error::PurpleAirError;
pub use output::{build_table, render_table, StatsTable, TableRow, LOAD_DATA_FIRST};
pub use query::{lookup, statistics_for, CrossRow, CrossTable, Stat, Summary};

/// Result type for purpleairlib operations
pub type Result<T> = std::result::Result<T, PurpleAirError>;
