//! Linecraft: Line Transformation Library
//!
//! Reads a text file, numbers, uppercases and word-counts every line, and
//! writes the result to a new file. Also creates sample input files.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
