pub mod cli;
pub mod tui;

pub use cli::Cli;

use glowchat_core::config::AppConfig;
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.log_file.as_deref().map(Path::new))?;
    info!("Starting glowchat");
    debug!(
        config = ?cli.config,
        log_file = ?cli.log_file,
        reply_delay_ms = ?cli.reply_delay_ms,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration using default path or defaults");
    }
    apply_cli_overrides(&cli, &mut config);

    tui::screens::chat::run_chat(&config).await?;
    info!("glowchat finished");
    Ok(())
}

/// Logging goes to `log_file` when given and is off otherwise:
/// the alternate screen owns stdout.
fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    static INIT: std::sync::Once = std::sync::Once::new();

    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    INIT.call_once(move || {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_level(true)
            .init();
    });
    Ok(())
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(delay_ms) = cli.reply_delay_ms {
        info!(delay_ms, "Overriding reply delay based on CLI flag");
        config.chat.reply_delay = Duration::from_millis(delay_ms);
    }
}
