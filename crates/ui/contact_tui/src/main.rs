use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use contact_tui::cli::Cli;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    contact_tui::run(args)
}
