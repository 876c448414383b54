//! Transform summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::TransformOutcome;

/// Summary of a finished transform, rendered as a two-column table
#[derive(Debug)]
pub struct TransformSummary<'a> {
    outcome: &'a TransformOutcome,
}

impl<'a> TransformSummary<'a> {
    pub fn new(outcome: &'a TransformOutcome) -> Self {
        Self { outcome }
    }

    /// Average words per line, 0.0 for an empty outcome
    pub fn average_words(&self) -> f64 {
        if self.outcome.lines == 0 {
            0.0
        } else {
            self.outcome.words as f64 / self.outcome.lines as f64
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📂 Input"),
            Cell::new(self.outcome.input.display()),
        ]);
        table.add_row(vec![
            Cell::new("📝 Output"),
            Cell::new(self.outcome.output.display()),
        ]);
        table.add_row(vec![
            Cell::new("📊 Lines processed"),
            Cell::new(self.outcome.lines)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("🔤 Total words"),
            Cell::new(self.outcome.words).fg(Color::Cyan),
        ]);
        table.add_row(vec![
            Cell::new("📏 Words per line"),
            Cell::new(format!("{:.1}", self.average_words())).fg(Color::Cyan),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "{} {}",
            style("📋").cyan(),
            style("TRANSFORM SUMMARY").white().bold()
        );

        for line in self.to_table().to_string().lines() {
            println!("{}", line);
        }
    }
}
