//! Categorical frequency statistics for the colorstat project.
//!
//! This crate turns an ordered sequence of category labels into a frequency
//! table and computes statistics over it:
//!
//! - **Normalization**: canonical category labels with typo correction
//! - **Observation logs**: parsing of `LABEL: token, token, ...` lines
//! - **Frequencies**: counts per category in first-seen order
//! - **Order statistics**: mode (with ties) and frequency-rank median
//! - **Dispersion**: population/sample variance of counts and empirical probability
//! - **Summary**: all of the above in one serializable value
//!
//! # Modules
//!
//! - [`category`]: Category normalization
//! - [`observation`]: Observation log parsing
//! - [`frequency`]: Frequency table construction
//! - [`order`]: Mode and frequency-rank median
//! - [`dispersion`]: Variance and probability
//! - [`summary`]: Combined statistics
//!
//! # Examples
//!
//! ```
//! use colorstat_stats::{
//!     dispersion::{self, VarianceKind},
//!     frequency::FrequencyTable,
//!     observation::ObservationLog,
//!     order,
//! };
//!
//! let log = ObservationLog::parse("MONDAY: BLUE, blew, RED");
//! let table = FrequencyTable::from_sequence(log.sequence());
//!
//! let mode = order::mode(&table);
//! assert_eq!(mode.count, 2);
//! assert_eq!(dispersion::variance(&table, VarianceKind::Population), 0.25);
//! assert!((dispersion::probability(&table, "red") - 1.0 / 3.0).abs() < 1e-12);
//! ```

pub mod category;
pub mod dispersion;
pub mod frequency;
pub mod observation;
pub mod order;
pub mod summary;
