pub const DEFAULT_TITLE: &str = "Chat with Ai bot";
pub const DEFAULT_GREETING: &str = "Hi! How can I help you today?";
pub const DEFAULT_REPLY_TEXT: &str = "Bot response goes here!";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// Subtracted from the viewport extent on both axes
pub const DEFAULT_MARGIN: f64 = 100.0;

pub const DEFAULT_X_FORWARD_MS: u64 = 500_000;
pub const DEFAULT_X_BACKWARD_MS: u64 = 500_000;
pub const DEFAULT_Y_FORWARD_MS: u64 = 70_000;
pub const DEFAULT_Y_BACKWARD_MS: u64 = 70_000;
