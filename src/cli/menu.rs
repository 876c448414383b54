//! Interactive main menu
//!
//! The menu loops until the user picks "Exit" or the input ends. Every file
//! operation reports its own success or failure and hands control back to
//! the menu; only prompt failures end the loop with an error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::args::{default_output_name, DEFAULT_PREVIEW_LINES, DEFAULT_SAMPLE_NAME};
use super::prompts::Prompter;
use crate::pipeline::{transform, write_sample, ProcessError};
use crate::report::TransformSummary;
use crate::utils::{
    create_spinner, finish_and_clear, print_count, print_error, print_farewell, print_info,
    print_menu, print_paths, print_preview, print_section_header, print_success,
};

/// Runtime settings for the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSettings {
    /// Maximum number of output lines previewed after a transform (0 = off)
    pub preview_lines: usize,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            preview_lines: DEFAULT_PREVIEW_LINES,
        }
    }
}

/// A valid menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ReadModify,
    CreateSample,
    Exit,
}

impl MenuChoice {
    /// Parse a (trimmed) menu answer; anything but `1`, `2` or `3` is `None`
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::ReadModify),
            "2" => Some(MenuChoice::CreateSample),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the menu loop until the user exits or the input is exhausted
pub fn run_menu(prompter: &mut dyn Prompter, settings: &MenuSettings) -> Result<()> {
    loop {
        print_menu();

        let Some(answer) = prompter.read_line("Enter your choice (1-3)")? else {
            debug!("input closed, leaving menu");
            print_farewell();
            return Ok(());
        };

        match MenuChoice::parse(&answer) {
            Some(MenuChoice::ReadModify) => {
                if !read_and_modify(prompter, settings)? {
                    print_farewell();
                    return Ok(());
                }
            }
            Some(MenuChoice::CreateSample) => {
                if !create_sample(prompter)? {
                    print_farewell();
                    return Ok(());
                }
            }
            Some(MenuChoice::Exit) => {
                print_farewell();
                return Ok(());
            }
            None => print_error("Invalid choice! Please enter 1, 2, or 3."),
        }
    }
}

/// Print a file operation error with a hint for the user
pub fn report_error(err: &ProcessError) {
    print_error(&format!("Error: {}", err));
    match err {
        ProcessError::FileNotFound { .. } => {
            print_info("Please check the filename and try again.");
        }
        ProcessError::PermissionDenied { .. } => {
            print_info("You don't have the necessary permissions to access this file.");
        }
        ProcessError::IoFailure { .. } | ProcessError::EmptyInput { .. } => {}
    }
}

/// Read up to `limit` lines of `path` for the preview
pub fn read_preview(path: &Path, limit: usize) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    reader
        .lines()
        .take(limit)
        .map(|line| line.map(|l| l.trim_end().to_string()))
        .collect()
}

/// Read-and-modify flow. Returns `false` when the input ended mid-flow.
fn read_and_modify(prompter: &mut dyn Prompter, settings: &MenuSettings) -> Result<bool> {
    print_section_header("FILE READ & WRITE CHALLENGE");

    let Some(input_name) = prompter.read_line("Enter the name of the file to read")? else {
        return Ok(false);
    };
    let input_name = input_name.trim().to_string();
    if input_name.is_empty() {
        print_error("Error: Filename cannot be empty!");
        return Ok(true);
    }

    let Some(output_name) =
        prompter.read_line("Enter the name for the output file (or press Enter for default)")?
    else {
        return Ok(false);
    };
    let output_name = match output_name.trim() {
        "" => default_output_name(&input_name),
        name => name.to_string(),
    };

    let input = PathBuf::from(&input_name);
    let output = PathBuf::from(&output_name);
    print_paths(&input, &output);

    let spinner = create_spinner("Transforming lines...");
    let result = transform(&input, &output);
    finish_and_clear(&spinner);

    match result {
        Ok(outcome) => {
            print_success(&format!(
                "Success! File modified and saved as '{}'",
                output.display()
            ));
            print_count("Total lines processed:", outcome.lines);
            TransformSummary::new(&outcome).display();
            show_preview(&output, settings.preview_lines);
        }
        Err(err) => report_error(&err),
    }
    Ok(true)
}

/// Best-effort preview; failures are only logged
fn show_preview(path: &Path, limit: usize) {
    if limit == 0 {
        return;
    }
    match read_preview(path, limit) {
        Ok(lines) => print_preview(&lines, limit),
        Err(err) => debug!(path = %path.display(), error = %err, "preview skipped"),
    }
}

/// Sample creation flow. Returns `false` when the input ended mid-flow.
fn create_sample(prompter: &mut dyn Prompter) -> Result<bool> {
    print_section_header("CREATE SAMPLE FILE");

    let Some(name) = prompter.read_line(&format!(
        "Enter name for sample file (or press Enter for '{}')",
        DEFAULT_SAMPLE_NAME
    ))?
    else {
        return Ok(false);
    };
    let name = match name.trim() {
        "" => DEFAULT_SAMPLE_NAME.to_string(),
        name => name.to_string(),
    };

    let path = PathBuf::from(&name);
    match write_sample(&path) {
        Ok(()) => print_success(&format!("Sample file '{}' created successfully!", name)),
        Err(err) => {
            print_error("Error creating sample file:");
            report_error(&err);
        }
    }
    Ok(true)
}
