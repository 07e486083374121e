//! Data ingestion layer for the varaus reservation reporter.
//!
//! Responsible for reading the pipe-delimited export file and parsing each
//! line into a typed [`varaus_core::models::Reservation`].

pub mod parser;
pub mod reader;

pub use varaus_core as core;
