//! Core domain layer for the varaus reservation reporter.
//!
//! Defines the [`models::Reservation`] record, the error type shared across
//! the workspace, locale-aware display formatting, aggregate calculations
//! over reservation lists, and the CLI settings struct.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
