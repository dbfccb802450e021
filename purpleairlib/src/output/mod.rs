//! Output formatting: present statistics as tables.
//!
//! This module handles the final stage of the pipeline - formatting query
//! results for display. It provides:
//!
//! - **StatsTable**: Table-ready data structure with headers and rows
//! - **TableRow**: Individual row with zip code label and formatted cells
//! - **render_table**: One-call text rendering straight from a store
//!
//! ## Example
//!
//! ```rust
//! use purpleairlib::data::RecordStore;
//! use purpleairlib::output::render_table;
//! use purpleairlib::query::Stat;
//!
//! let mut store = RecordStore::new();
//! assert_eq!(render_table(&store, Stat::Avg), "Please Load Data First.\n");
//!
//! store.load("id,zip,lat,lon,time,pm25\n0,94028,0,0,Night,1\n".as_bytes()).unwrap();
//! assert!(render_table(&store, Stat::Avg).contains("94028       N/A"));
//! ```

pub mod table;

pub use table::{build_table, render_table, StatsTable, TableRow, LOAD_DATA_FIRST};
