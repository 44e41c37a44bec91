// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact", version, about = "Contact form with inline validation")]
pub struct Cli {
    /// Read configuration from this file instead of the config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Fill in the form interactively
    Run,
    /// Validate values without a terminal UI (exit code 1 when blocked)
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
