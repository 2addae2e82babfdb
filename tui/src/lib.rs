//! Terminal frontend for the folio portfolio page.

mod app;
mod app_event;
mod app_event_sender;
pub mod cli;
mod key_hint;
mod page;
mod reveal;
mod tui;

use std::path::Path;

use color_eyre::eyre::Result;
use folio_core::config::Config;
use folio_core::config::ConfigOverrides;
use folio_core::config::find_folio_home;
use folio_core::profile::Profile;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub fn run_main(cli: Cli) -> Result<()> {
    color_eyre::install()?;

    let folio_home = cli.config_dir.clone().unwrap_or_else(find_folio_home);
    std::fs::create_dir_all(&folio_home)?;
    let _log_guard = init_logging(&folio_home)?;

    let overrides = ConfigOverrides {
        github_user: cli.user,
        reveal_threshold: cli.threshold,
        gallery_dir: cli.gallery_dir,
    };
    let config = Config::load(folio_home.clone(), overrides)?;
    let profile = Profile::load(&folio_home)?;
    info!(
        "starting folio for {} (home: {})",
        config.github_user,
        folio_home.display()
    );

    let runtime = tokio::runtime::Runtime::new()?;

    let mut tui = tui::Tui::new()?;
    let result = app::run(
        &mut tui.terminal,
        runtime.handle().clone(),
        config,
        profile,
    );
    // Leave the alternate screen before any error reaches the user's shell.
    drop(tui);
    result.map_err(Into::into)
}

/// Log to a rotating file under the folio home; the terminal itself belongs
/// to the UI. The returned guard flushes the writer on drop.
fn init_logging(folio_home: &Path) -> Result<WorkerGuard> {
    let log_dir = folio_home.join("log");
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
