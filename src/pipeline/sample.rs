//! Sample input file creation

use std::path::Path;

use tracing::info;

use super::error::ProcessError;
use super::output::write_replacing;

/// Fixed content of the sample file, one entry per line
pub const SAMPLE_LINES: [&str; 4] = [
    "Hello World",
    "Python is amazing",
    "File handling is fun",
    "Exception handling is important",
];

/// Write the four sample lines to `path`, overwriting any existing file
pub fn write_sample(path: &Path) -> Result<(), ProcessError> {
    let mut contents = String::new();
    for line in SAMPLE_LINES {
        contents.push_str(line);
        contents.push('\n');
    }

    write_replacing(path, &contents)?;
    info!(path = %path.display(), "sample file created");
    Ok(())
}
