//! One-shot subcommands that bypass the interactive menu

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use super::args::{default_output_path, DEFAULT_SAMPLE_NAME};
use crate::pipeline::{transform, write_sample};
use crate::report::TransformSummary;
use crate::utils::{create_spinner, finish_and_clear, print_paths, print_success};

/// Transform `input` into `output` (or the derived default) and print a summary
pub fn run_transform(input: &Path, output: Option<&Path>) -> Result<()> {
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input),
    };

    println!("\n {} Transforming lines", style("◆").cyan().bold());
    print_paths(input, &output_path);

    let spinner = create_spinner("Transforming lines...");
    let result = transform(input, &output_path);
    finish_and_clear(&spinner);

    let outcome = result.with_context(|| format!("Failed to transform {}", input.display()))?;

    print_success(&format!(
        "File modified and saved as '{}'",
        output_path.display()
    ));
    TransformSummary::new(&outcome).display();
    Ok(())
}

/// Write the sample file to `path` (or `sample.txt`)
pub fn run_sample(path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_SAMPLE_NAME));

    write_sample(path)
        .with_context(|| format!("Failed to create sample file {}", path.display()))?;

    print_success(&format!(
        "Sample file '{}' created successfully!",
        path.display()
    ));
    Ok(())
}
