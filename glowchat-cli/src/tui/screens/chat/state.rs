//! Chat screen state

use glowchat_core::animation::{AmbientDriver, DriverError, Offset, Viewport};
use glowchat_core::config::AppConfig;
use glowchat_core::conversation::{ChatSession, StoreEvent};
use glowchat_core::domain::Message;
use std::cell::Cell;
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Everything the chat screen renders from
pub struct ChatState {
    /// Conversation and its owed replies
    pub session: ChatSession,
    /// Glow animation
    pub driver: AmbientDriver,
    /// Header text
    pub title: String,
    /// Cursor position in the composer, in characters
    pub cursor_pos: usize,
    /// Scroll offset for messages (`u16::MAX` pins to the bottom)
    pub scroll_offset: u16,
    /// Largest useful scroll offset, recorded by the last render
    pub max_scroll: Cell<u16>,
    /// Visible message rows, recorded by the last render
    pub page_height: Cell<u16>,
    /// Typing indicator animation frame
    pub typing_frame: usize,
    /// Status message
    pub status_message: Option<String>,
    events: broadcast::Receiver<StoreEvent>,
}

impl ChatState {
    pub fn new(config: &AppConfig) -> Self {
        let session = ChatSession::new(&config.chat);
        let events = session.subscribe();
        Self {
            session,
            driver: AmbientDriver::new(config.animation.clone()),
            title: config.chat.title.clone(),
            cursor_pos: 0,
            scroll_offset: u16::MAX,
            max_scroll: Cell::new(0),
            page_height: Cell::new(1),
            typing_frame: 0,
            status_message: None,
            events,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    /// Current composer text
    pub fn input(&self) -> &str {
        self.session.composer()
    }

    fn input_chars(&self) -> usize {
        self.input().chars().count()
    }

    /// Replace the composer text and move the cursor to its end
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.session.set_composer_text(text);
        self.cursor_pos = self.input_chars();
    }

    pub fn clear_input(&mut self) {
        self.session.set_composer_text(String::new());
        self.cursor_pos = 0;
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.input().to_string();
        let byte_pos = char_to_byte_index(&text, self.cursor_pos);
        text.insert(byte_pos, c);
        self.session.set_composer_text(text);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 || self.input().is_empty() {
            return;
        }
        let mut text = self.input().to_string();
        let byte_pos = char_to_byte_index(&text, self.cursor_pos - 1);
        text.remove(byte_pos);
        self.session.set_composer_text(text);
        self.cursor_pos -= 1;
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos >= self.input_chars() {
            return;
        }
        let mut text = self.input().to_string();
        let byte_pos = char_to_byte_index(&text, self.cursor_pos);
        text.remove(byte_pos);
        self.session.set_composer_text(text);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.input_chars());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_chars();
    }

    /// Send the composer. Returns false when it was blank.
    pub fn submit(&mut self) -> bool {
        if self.session.submit_composer().is_none() {
            return false;
        }
        self.cursor_pos = 0;
        self.status_message = None;
        true
    }

    /// Append replies whose delay has elapsed
    pub fn apply_due_replies(&mut self) -> usize {
        self.session.apply_due_replies()
    }

    /// React to store changes since the last call. Any new message pins the
    /// view to the bottom. Returns how many messages were appended.
    pub fn drain_events(&mut self) -> usize {
        let mut appended = 0;
        loop {
            match self.events.try_recv() {
                Ok(StoreEvent::MessageAppended(_)) => {
                    appended += 1;
                    self.scroll_to_bottom();
                }
                Ok(StoreEvent::ComposerChanged(text)) => {
                    self.cursor_pos = self.cursor_pos.min(text.chars().count());
                }
                // Missed events may have been appends
                Err(TryRecvError::Lagged(_)) => self.scroll_to_bottom(),
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        appended
    }

    /// Whether any bot reply is still owed
    pub fn is_waiting(&self) -> bool {
        self.session.pending_replies() > 0
    }

    /// Update typing indicator frame
    pub fn tick_typing(&mut self) {
        if self.is_waiting() {
            self.typing_frame = (self.typing_frame + 1) % 4;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_up_by(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_down_by(1);
    }

    pub fn page_up(&mut self) {
        self.scroll_up_by(self.page_height.get().max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down_by(self.page_height.get().max(1));
    }

    fn scroll_up_by(&mut self, lines: u16) {
        self.scroll_offset = self
            .scroll_offset
            .min(self.max_scroll.get())
            .saturating_sub(lines);
    }

    /// Reaching the last line pins the view to the bottom again
    fn scroll_down_by(&mut self, lines: u16) {
        let max_scroll = self.max_scroll.get();
        let next = self.scroll_offset.min(max_scroll).saturating_add(lines);
        if next >= max_scroll {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset = next;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Resolved during render once the content height is known
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    pub fn start_animation(&mut self, viewport: Viewport) -> Result<(), DriverError> {
        self.driver.start(viewport)
    }

    pub fn glow_offset(&self) -> Offset {
        self.driver.offset()
    }

    /// Cancel owed replies and stop the glow
    pub fn teardown(&mut self) {
        self.session.teardown();
        self.driver.stop();
    }
}
