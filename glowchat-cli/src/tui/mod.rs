//! TUI module for terminal user interface using Ratatui

pub mod screens;
mod terminal;
pub mod theme;

pub use terminal::{Tui, install_panic_hook, restore_terminal};
