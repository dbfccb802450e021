//! Data collection: parse readings and hold them in memory.
//!
//! This module handles the first stage of the pipeline - reading a
//! PurpleAir CSV export into a [`RecordStore`]. It provides:
//!
//! - **Records**: `(zip code, time of day, concentration)` readings
//! - **Buckets**: the canonical [`TimeOfDay`] columns
//! - **Store**: loading, label discovery, and zip code inclusion flags
//!
//! ## Example
//!
//! ```rust
//! use purpleairlib::data::RecordStore;
//!
//! let csv = "id,zip,lat,lon,time,pm25\n0,94028,0,0,Morning,1.5\n";
//! let mut store = RecordStore::new();
//! assert_eq!(store.load(csv.as_bytes()).unwrap(), 1);
//! assert_eq!(store.zip_flags()[0].zip_code, "94028");
//! ```

pub mod record;
pub mod store;

pub use record::{Record, TimeOfDay};
pub use store::{RecordStore, ZipFlag};
