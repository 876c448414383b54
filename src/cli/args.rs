//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{PathBuf, MAIN_SEPARATOR};

use super::menu::MenuSettings;

/// Default number of lines shown in the preview after a transform
pub const DEFAULT_PREVIEW_LINES: usize = 5;

/// Default file name for the sample file
pub const DEFAULT_SAMPLE_NAME: &str = "sample.txt";

/// Linecraft - Number, uppercase and word-count every line of a text file.
///
/// Without a subcommand an interactive menu is started.
#[derive(Parser, Debug)]
#[command(name = "linecraft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of output lines shown in the preview after an interactive
    /// transform. Use 0 to disable the preview.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LINES, value_parser = validate_preview_lines)]
    pub preview_lines: usize,

    /// Enable debug logging on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform a file once, without the interactive menu
    Transform {
        /// Input text file
        input: PathBuf,

        /// Output file path (optional, defaults to input with a '_modified' suffix)
        output: Option<PathBuf>,
    },

    /// Create the sample input file
    Sample {
        /// Sample file path (optional, defaults to 'sample.txt')
        path: Option<PathBuf>,
    },
}

impl Cli {
    /// Settings for the interactive menu
    pub fn menu_settings(&self) -> MenuSettings {
        MenuSettings {
            preview_lines: self.preview_lines,
        }
    }
}

/// Derive the output file name used when none is given.
///
/// The last `.` of the file name separates stem and extension:
/// `notes.txt` becomes `notes_modified.txt`. A name without a dot gets a
/// `.txt` extension: `README` becomes `README_modified.txt`.
pub fn default_output_name(input: &str) -> String {
    let name_start = input
        .rfind(|c: char| c == '/' || c == MAIN_SEPARATOR)
        .map_or(0, |i| i + 1);

    match input[name_start..].rfind('.') {
        Some(dot) => {
            let dot = name_start + dot;
            format!("{}_modified.{}", &input[..dot], &input[dot + 1..])
        }
        None => format!("{}_modified.txt", input),
    }
}

/// Derive the output path for an input path
pub fn default_output_path(input: &std::path::Path) -> PathBuf {
    PathBuf::from(default_output_name(&input.to_string_lossy()))
}

/// Validator for preview_lines parameter
fn validate_preview_lines(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid line count", s))?;

    if value > 1000 {
        Err(format!(
            "preview_lines must be between 0 and 1000, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
