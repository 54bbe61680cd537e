//! Small classic algorithms with precise contracts.
//!
//! # Modules
//!
//! - [`search`]: Recursive linear and binary search
//! - [`bits`]: Random 4-bit numbers
//! - [`fibonacci`]: Fibonacci prefix sums
//! - [`pattern`]: Sliding-window detection of `"111"`

pub mod bits;
pub mod fibonacci;
pub mod pattern;
pub mod search;
