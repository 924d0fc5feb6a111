//! Tally - add two or more numbers from the command line
//!
//! The library exposes the summation itself so it can be embedded without
//! going through the command-line entry point.

pub mod cli;
pub mod core;
pub mod utils;

// Re-export the summation API for easier use
pub use crate::core::{tally, tally_iter, TallyError, TallyResult, MIN_OPERANDS};
