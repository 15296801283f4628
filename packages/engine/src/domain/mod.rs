//! Domain types: configuration, palettes, compass directions, rectangle records.

pub mod config;
pub mod content;
pub mod direction;
pub mod random;
pub mod rectangle;
