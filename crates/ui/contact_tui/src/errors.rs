use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use color_eyre::config::PanicHook;
use color_eyre::Result;
use tracing::error;

use crate::config;
use crate::logging::LOG_FILE;

static INIT: OnceLock<()> = OnceLock::new();

/// Where panics and errors end up besides the console.
pub fn log_path() -> PathBuf {
    config::get_data_dir().join(LOG_FILE)
}

/// Text shown under every panic report.
pub fn panic_section(log: &Path) -> String {
    format!(
        "{} {} crashed. The log at {} holds the last form events before the panic.",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        log.display()
    )
}

/// Install color-eyre and a panic hook that gives the terminal back before
/// reporting. Safe to call more than once.
pub fn init() -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let log = log_path();
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(panic_section(&log))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |info| on_panic(&panic_hook, info, &log)));

    let _ = INIT.set(());
    Ok(())
}

fn on_panic(hook: &PanicHook, info: &PanicHookInfo<'_>, log: &Path) -> ! {
    if let Err(err) = crate::tui::restore() {
        error!(%err, "terminal restore failed during panic");
    }

    let report = hook.panic_report(info).to_string();
    error!(
        log = %log.display(),
        "panic: {}",
        strip_ansi_escapes::strip_str(&report)
    );

    #[cfg(not(debug_assertions))]
    {
        use human_panic::{handle_dump, metadata, print_msg};
        let meta = metadata!().support(format!("Attach {} when reporting this crash.", log.display()));
        let dump = handle_dump(&meta, info);
        if print_msg(dump, &meta).is_err() {
            eprintln!("{report}");
        }
    }

    #[cfg(debug_assertions)]
    {
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .create_panic_handler()(info);
    }

    std::process::exit(libc::EXIT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lives_in_data_dir() {
        let path = log_path();
        assert_eq!(path.parent(), Some(config::get_data_dir().as_path()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("contact_tui.log"));
    }

    #[test]
    fn panic_section_names_crate_and_log() {
        let text = panic_section(Path::new("/tmp/contact_tui.log"));
        assert!(text.starts_with("contact_tui "), "{text}");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains("/tmp/contact_tui.log"));
    }
}
