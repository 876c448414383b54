//! Terminal styling utilities for the interactive menu

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WAVE: Emoji<'_, '_> = Emoji("👋 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static MEMO: Emoji<'_, '_> = Emoji("📝 ", "");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[x] ");
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");

const RULE_WIDTH: usize = 60;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!("{}", style("=".repeat(RULE_WIDTH)).cyan());
    println!(
        "{}",
        style("FILE HANDLING & EXCEPTION HANDLING PROGRAM").cyan().bold()
    );
    println!("{}", style(format!("linecraft v{}", version)).dim());
    println!("{}", style("=".repeat(RULE_WIDTH)).cyan());
    println!();
}

/// Print the main menu options
pub fn print_menu() {
    println!();
    println!("{}", style("Options:").white().bold());
    println!("1. Read and modify an existing file");
    println!("2. Create a sample file for testing");
    println!("3. Exit");
    println!();
}

/// Print a section header framed by dashed rules
pub fn print_section_header(title: &str) {
    println!();
    println!("{}", style("-".repeat(RULE_WIDTH)).dim());
    println!("{}", style(title).white().bold());
    println!("{}", style("-".repeat(RULE_WIDTH)).dim());
}

/// Print source and destination of a transform
pub fn print_paths(input: &Path, output: &Path) {
    println!();
    println!("{}Reading from: {}", FOLDER, style(input.display()).dim());
    println!("{}Writing to: {}", MEMO, style(output.display()).dim());
    println!();
}

/// Print a preview block of already formatted lines.
///
/// `limit` is the maximum the caller asked for; the truncation note appears
/// once the preview is full.
pub fn print_preview(lines: &[String], limit: usize) {
    println!();
    println!("{}", style("=".repeat(RULE_WIDTH)).dim());
    println!("{}", style("PREVIEW OF MODIFIED FILE:").white().bold());
    println!("{}", style("=".repeat(RULE_WIDTH)).dim());
    for line in lines {
        println!("{}", line);
    }
    if limit > 0 && lines.len() >= limit {
        println!(
            "{}",
            style(format!("... (showing first {} lines)", limit)).dim()
        );
    }
    println!("{}", style("=".repeat(RULE_WIDTH)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}{}", CHECK, style(message).green());
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("{}{}", CROSS, style(message).red());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}{}", INFO, message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!("{}{} {}", CHART, description, style(count).yellow().bold());
}

/// Print the farewell message shown when leaving the menu
pub fn print_farewell() {
    println!();
    println!(
        "{}{}",
        WAVE,
        style("Thank you for using the File Handling Program!")
            .green()
            .bold()
    );
    println!("{}", style("=".repeat(RULE_WIDTH)).cyan());
}
