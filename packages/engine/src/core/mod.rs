//! Core utilities shared by every layer (logging macros, wall clock).

#[macro_use]
pub mod utils;
