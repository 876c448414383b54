//! Linecraft: Line Transformation CLI Tool
//!
//! Starts the interactive menu, or runs a single transform/sample command
//! when one is given on the command line.

use anyhow::Result;
use clap::Parser;

use linecraft::cli::{run_menu, run_sample, run_transform, stdin_prompter, Cli, Commands};
use linecraft::utils::{logging, print_banner};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Transform { input, output } => run_transform(input, output.as_deref()),
            Commands::Sample { path } => run_sample(path.as_deref()),
        };
    }

    print_banner(env!("CARGO_PKG_VERSION"));

    let mut prompter = stdin_prompter();
    run_menu(prompter.as_mut(), &cli.menu_settings())
}
