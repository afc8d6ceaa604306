//! TUI Theme
//!
//! Black canvas, green accent, light bubbles for the user and dark
//! bubbles for the bot.

use ratatui::style::{Color, Modifier, Style};

/// Send action and key hints - green-400
pub const ACCENT: Color = Color::Rgb(74, 222, 128);

/// Glow core colour before alpha is applied
pub const GLOW: (u8, u8, u8) = (0, 255, 108);

/// Peak opacity at the centre of the glow
pub const GLOW_ALPHA: f64 = 0.3;

/// User bubble - white with gray-900 text
pub const USER_BG: Color = Color::Rgb(255, 255, 255);
pub const USER_FG: Color = Color::Rgb(17, 24, 39);

/// Bot bubble - zinc-900 with white text
pub const BOT_BG: Color = Color::Rgb(24, 24, 27);
pub const BOT_FG: Color = Color::White;

/// Reaction buttons under bot messages - zinc-800
pub const AFFORDANCE_BG: Color = Color::Rgb(39, 39, 42);

/// Muted text - timestamps and hints
pub const MUTED: Color = Color::Rgb(113, 113, 122);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn user_bubble() -> Style {
    Style::default().fg(USER_FG).bg(USER_BG)
}

pub fn bot_bubble() -> Style {
    Style::default().fg(BOT_FG).bg(BOT_BG)
}

pub fn affordance() -> Style {
    Style::default().fg(Color::White).bg(AFFORDANCE_BG)
}

pub fn timestamp() -> Style {
    Style::default().fg(MUTED)
}

/// Typing indicator style
pub fn typing() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC)
}

/// Composer text
pub fn composer() -> Style {
    Style::default().fg(Color::White).bg(BOT_BG)
}

pub fn placeholder() -> Style {
    Style::default().fg(Color::White).bg(BOT_BG).add_modifier(Modifier::DIM)
}

pub fn cursor() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

/// Paper-plane send button
pub fn send_button() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BOT_BG)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(ACCENT)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
