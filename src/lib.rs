//! Daydiff Library
//!
//! Computes the time between two loosely formatted dates or times.
//! This library provides functionality to:
//! - Generate the ordered table of accepted date/time layouts
//! - Parse date/time strings, defaulting a missing year or date to "now"
//! - Count calendar days and exact elapsed time between two instants
//!
//! # Example
//!
//! ```
//! use daydiff::date::{parse_time, Reference};
//! use daydiff::diff::diff;
//! use chrono::NaiveDate;
//!
//! let reference = Reference::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
//! );
//! let a = parse_time("2024/01/01", &reference).unwrap();
//! let b = parse_time("1/10", &reference).unwrap();
//!
//! assert_eq!(diff(&a, &b).to_string(), "9 days");
//! ```

pub mod error;
pub mod date;
pub mod diff;
pub mod layout;
pub mod logging;

// Re-export commonly used items
pub use error::{Error, Result};
