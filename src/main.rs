use anyhow::Context;

mod cli;
use cli::parse_cli_options;
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let options = match parse_cli_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("Usage: moncal [--sample]");
            return Ok(());
        }
    };

    run_tui(options.sample).context("terminal session failed")
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("moncal"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "moncal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    // The guard must outlive the session or buffered lines are dropped.
    std::mem::forget(_guard);

    tracing::info!("moncal started");
}
