//! Report module - summarizing transform results

pub mod summary;

pub use summary::*;
