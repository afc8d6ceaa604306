pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;

pub use crate::constants::CONFIG_PATH;

pub use app::{AnimationConfig, AppConfig, AxisConfig, ChatConfig, UiConfig};
pub use error::ConfigError;
