//! Pipeline module - reading, transforming and writing text files

pub mod error;
pub mod output;
pub mod sample;
pub mod transform;

pub use error::*;
pub use output::*;
pub use sample::*;
pub use transform::*;
