//! TUI Chat screen
//!
//! - state.rs: chat session, composer cursor, scroll and glow driver
//! - input.rs: key and paste handling
//! - ui.rs: message bubbles, composer and help bar
//! - glow.rs: animated background layer
//! - runner.rs: event loop and teardown

mod glow;
mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use glow::{CELL_HEIGHT_PX, CELL_WIDTH_PX, GlowLayer, alpha_at, color_at, viewport_for};
pub use input::{InputAction, handle_input};
pub use runner::{ChatError, ChatResult, FrameTicker, run_chat};
pub use state::ChatState;
pub use ui::{ChatUI, composer_line, message_lines, wrap_text};
