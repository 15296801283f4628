//! Spatial bookkeeping for the unbounded placement grid.

pub mod grid;
