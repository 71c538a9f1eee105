//! Shared building blocks for the vcardkit crates.
//!
//! - [`constants`] - Wire-format constants (markers, line limits)
//! - [`config`] - Runtime settings for the `vcardkit` binary
//! - [`error`] - Core error type

pub mod config;
pub mod constants;
pub mod error;
