use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "glowchat",
    version,
    about = "Terminal chat screen with a mock bot and an animated glow"
)]
pub struct Cli {
    /// Path to glowchat.toml
    #[arg(long, env = "GLOWCHAT_CONFIG")]
    pub config: Option<String>,
    /// Write logs to this file (the screen itself cannot show them)
    #[arg(long)]
    pub log_file: Option<String>,
    /// Override chat.reply_delay_ms
    #[arg(long)]
    pub reply_delay_ms: Option<u64>,
}
