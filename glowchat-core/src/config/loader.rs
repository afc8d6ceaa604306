use super::app::{AnimationConfig, AppConfig, AxisConfig, ChatConfig, UiConfig};
use super::error::ConfigError;
use super::CONFIG_PATH;
use crate::animation::Easing;
use crate::constants::ENV_PATH;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub chat: RawChat,
    #[serde(default)]
    pub animation: RawAnimation,
    #[serde(default)]
    pub ui: RawUi,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawChat {
    pub title: Option<String>,
    pub greeting: Option<String>,
    pub reply_text: Option<String>,
    pub reply_delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawAnimation {
    pub margin: Option<f64>,
    #[serde(default)]
    pub x: RawAxis,
    #[serde(default)]
    pub y: RawAxis,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawAxis {
    pub forward_ms: Option<u64>,
    pub forward_easing: Option<Easing>,
    pub backward_ms: Option<u64>,
    pub backward_easing: Option<Easing>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawUi {
    pub tick_rate_ms: Option<u64>,
}

/// Ensures environment variables are loaded from config/.env.
///
/// Call before anything reads the environment (CLI parsing, log filter).
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        load_env_file(Path::new(ENV_PATH));
    });
}

/// Loads `KEY=value` pairs from `path` without overriding variables that are
/// already set. Returns false when the file is missing or unreadable.
pub fn load_env_file(path: &Path) -> bool {
    from_filename(path).is_ok()
}

/// Load and validate configuration from a file path.
///
/// A missing file at the default path falls back to built-in defaults;
/// a missing file at an explicit path is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            match read_config(default_path) {
                Err(ConfigError::NotFound { .. }) => {
                    debug!(path = %default_path.display(), "No configuration file, using defaults");
                    Ok(AppConfig::default())
                }
                other => other,
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading glowchat configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let chat = build_chat(parsed.chat, defaults.chat)?;
    let animation = AnimationConfig {
        margin: parsed.animation.margin.unwrap_or(defaults.animation.margin),
        x: build_axis("x", parsed.animation.x, defaults.animation.x)?,
        y: build_axis("y", parsed.animation.y, defaults.animation.y)?,
    };

    let tick_rate_ms = parsed
        .ui
        .tick_rate_ms
        .unwrap_or(defaults.ui.tick_rate.as_millis() as u64);
    if tick_rate_ms == 0 {
        return Err(ConfigError::InvalidTickRate);
    }

    Ok(AppConfig {
        chat,
        animation,
        ui: UiConfig {
            tick_rate: Duration::from_millis(tick_rate_ms),
        },
    })
}

fn build_chat(raw: RawChat, defaults: ChatConfig) -> Result<ChatConfig, ConfigError> {
    let reply_text = raw.reply_text.unwrap_or(defaults.reply_text);
    if reply_text.trim().is_empty() {
        return Err(ConfigError::EmptyReplyText);
    }

    Ok(ChatConfig {
        title: raw.title.unwrap_or(defaults.title),
        greeting: raw.greeting.unwrap_or(defaults.greeting),
        reply_text,
        reply_delay: raw
            .reply_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.reply_delay),
    })
}

fn build_axis(
    axis: &'static str,
    raw: RawAxis,
    defaults: AxisConfig,
) -> Result<AxisConfig, ConfigError> {
    let config = AxisConfig {
        forward: raw
            .forward_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.forward),
        forward_easing: raw.forward_easing.unwrap_or(defaults.forward_easing),
        backward: raw
            .backward_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.backward),
        backward_easing: raw.backward_easing.unwrap_or(defaults.backward_easing),
    };

    if config.cycle().is_zero() {
        return Err(ConfigError::ZeroCycle { axis });
    }
    Ok(config)
}
