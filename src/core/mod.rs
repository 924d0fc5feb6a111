//! Core summation logic
//!
//! This module holds the pure arithmetic used by both the command-line
//! entry point and library callers.

pub mod tally;

pub use tally::{tally, tally_iter, TallyError, TallyResult, MIN_OPERANDS};
