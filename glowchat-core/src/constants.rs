//! Application constants
//!
//! Single source of truth for paths and reference behaviour.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/glowchat.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Id of the greeting message every conversation starts with
pub const SEED_MESSAGE_ID: &str = "1";
