#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests driving the public API with the on-disk fixtures.

mod negative;
mod parse;
mod render;
mod round_trip;
