use super::defaults::*;
use super::error::ConfigError;
use crate::animation::Easing;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from glowchat.toml
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub chat: ChatConfig,
    pub animation: AnimationConfig,
    pub ui: UiConfig,
}

/// Conversation behaviour
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub title: String,
    pub greeting: String,
    pub reply_text: String,
    pub reply_delay: Duration,
}

/// Ambient glow animation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Subtracted from the viewport width and height to get each axis limit
    pub margin: f64,
    pub x: AxisConfig,
    pub y: AxisConfig,
}

/// One ping-pong axis: forward leg then backward leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub forward: Duration,
    pub forward_easing: Easing,
    pub backward: Duration,
    pub backward_easing: Easing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub tick_rate: Duration,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            animation: AnimationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            reply_text: DEFAULT_REPLY_TEXT.to_string(),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            x: AxisConfig::reference_x(),
            y: AxisConfig::reference_y(),
        }
    }
}

impl AxisConfig {
    /// Horizontal drift: slow bounce out, linear return
    pub fn reference_x() -> Self {
        Self {
            forward: Duration::from_millis(DEFAULT_X_FORWARD_MS),
            forward_easing: Easing::Bounce,
            backward: Duration::from_millis(DEFAULT_X_BACKWARD_MS),
            backward_easing: Easing::Linear,
        }
    }

    /// Vertical drift: linear both ways
    pub fn reference_y() -> Self {
        Self {
            forward: Duration::from_millis(DEFAULT_Y_FORWARD_MS),
            forward_easing: Easing::Linear,
            backward: Duration::from_millis(DEFAULT_Y_BACKWARD_MS),
            backward_easing: Easing::Linear,
        }
    }

    pub fn cycle(&self) -> Duration {
        self.forward + self.backward
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
        }
    }
}
