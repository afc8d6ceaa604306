//! Chat runner - main event loop coordinator

use super::glow::viewport_for;
use super::input::{InputAction, handle_input};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::tui::terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
use crossterm::event;
use glowchat_core::animation::DriverError;
use glowchat_core::config::AppConfig;
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// Result of chat session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatResult {
    Exit,
}

/// Errors that end the chat screen
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("animation error: {0}")]
    Animation(#[from] DriverError),
}

/// Fires once per `tick_rate` of elapsed time, however often it is polled
#[derive(Debug)]
pub struct FrameTicker {
    tick_rate: Duration,
    last_tick: Instant,
}

impl FrameTicker {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Time left before the next tick
    pub fn timeout(&self) -> Duration {
        self.tick_rate.saturating_sub(self.last_tick.elapsed())
    }

    /// True at most once per tick interval
    pub fn due(&mut self) -> bool {
        if self.last_tick.elapsed() < self.tick_rate {
            return false;
        }
        self.last_tick = Instant::now();
        true
    }
}

/// Run the TUI chat interface
pub async fn run_chat(config: &AppConfig) -> Result<ChatResult, ChatError> {
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new(config);

    let result = match mount(&mut state) {
        Ok(()) => run_chat_loop(&mut terminal, &mut state, config.ui.tick_rate).await,
        Err(err) => Err(err),
    };

    state.teardown();
    restore_terminal()?;
    result
}

/// Start the glow with the viewport as it is right now
fn mount(state: &mut ChatState) -> Result<(), ChatError> {
    let (cols, rows) = crossterm::terminal::size()?;
    state.start_animation(viewport_for(cols, rows))?;
    info!(cols, rows, "Chat screen mounted");
    Ok(())
}

/// Internal chat loop
async fn run_chat_loop(
    terminal: &mut Tui,
    state: &mut ChatState,
    tick_rate: Duration,
) -> Result<ChatResult, ChatError> {
    let mut ticker = FrameTicker::new(tick_rate);
    loop {
        state.apply_due_replies();
        let appended = state.drain_events();
        if appended > 0 {
            debug!(appended, "Conversation updated");
        }

        terminal.draw(|frame| {
            ChatUI::render(frame, state);
        })?;

        if event::poll(ticker.timeout())? {
            let event = event::read()?;
            match handle_input(state, event) {
                InputAction::Exit => {
                    info!(messages = state.messages().len(), "Leaving chat screen");
                    return Ok(ChatResult::Exit);
                }
                InputAction::Submit => {
                    state.submit();
                }
                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(),
                InputAction::PageUp => state.page_up(),
                InputAction::PageDown => state.page_down(),
                InputAction::ScrollTop => state.scroll_to_top(),
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        }
        if ticker.due() {
            state.tick_typing();
        }

        // Timer tasks run on the runtime; give them a turn between frames
        tokio::task::yield_now().await;
    }
}
