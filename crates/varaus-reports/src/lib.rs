//! Report rendering for the varaus reservation reporter.
//!
//! Every function here takes loaded reservations and returns a display
//! string; printing is left to the binary so the renderers stay pure and
//! testable.

pub mod detail;
pub mod listing;
pub mod report;
pub mod summary;

pub use varaus_core as core;
