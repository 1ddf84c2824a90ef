//! Match infrastructure for twelve-axis chess engines.
//!
//! This crate provides:
//! - Running matches between two `Engine` implementations
//! - Randomized, reproducible openings
//! - Serialized match reports

mod match_runner;
mod openings;
mod results;

pub use match_runner::*;
pub use openings::*;
pub use results::*;
