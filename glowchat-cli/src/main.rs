use clap::Parser;
use glowchat_cli::Cli;
use glowchat_core::config::loader::ensure_env_loaded;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // config/.env may supply GLOWCHAT_CONFIG and RUST_LOG
    ensure_env_loaded();
    glowchat_cli::run(Cli::parse()).await
}
