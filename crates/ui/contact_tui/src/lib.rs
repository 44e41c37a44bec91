pub mod app;
pub mod check;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod render;
pub mod tui;

use std::process::ExitCode;

use color_eyre::Result;
use contact_form::{contact_schema, ContactForm};
use tracing::info;

use crate::cli::{Cli, Cmd};
use crate::config::Config;

pub fn run(cli: Cli) -> Result<ExitCode> {
    crate::errors::init()?;
    let cfg = Config::new(cli.config.as_deref())?;
    let _log_guard = crate::logging::init(&cfg.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut form = ContactForm::new(contact_schema(&cfg.form.phone_prefix)?);

    match cli.cmd {
        Cmd::Run => {
            if let Some(submission) = crate::app::run(form)? {
                println!("{}", serde_json::to_string_pretty(&submission.to_json())?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Check(args) => {
            let report = crate::check::check(&mut form, &args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
            Ok(if report.outcome.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
