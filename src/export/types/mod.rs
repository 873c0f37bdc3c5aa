//! Foundational data structures, error types, options and the writer contract.

pub mod error;
pub mod formats;
pub mod models;
pub mod options;
