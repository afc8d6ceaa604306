//! Chat UI rendering components

use super::glow::GlowLayer;
use super::state::ChatState;
use crate::tui::theme;
use chrono::Local;
use glowchat_core::domain::{Message, Sender};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TYPING_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
const PLACEHOLDER: &str = "Type your message...";

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the glow, then the chat on top of it
    pub fn render(frame: &mut Frame, state: &ChatState) {
        let area = frame.area();
        frame.render_widget(GlowLayer::new(state.glow_offset()), area);

        // Layout: Title, Messages, Composer, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(3),    // Messages area
                Constraint::Length(3), // Composer
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_title(frame, chunks[0], state);
        Self::render_messages(frame, chunks[1], state);
        Self::render_composer(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3], state);
    }

    fn render_title(frame: &mut Frame, area: Rect, state: &ChatState) {
        let block = Block::default().padding(Padding::top(1));
        let para = Paragraph::new(Line::from(Span::styled(
            state.title.as_str(),
            theme::title(),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(para, area);
    }

    /// Render messages area
    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState) {
        let block = Block::default().padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let mut lines = message_lines(state.messages(), inner.width);
        if state.is_waiting() {
            lines.push(Line::from(Span::styled(
                format!("{} typing...", TYPING_FRAMES[state.typing_frame % 4]),
                theme::typing(),
            )));
        }

        // Calculate scroll
        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX - 1);
        state.max_scroll.set(max_scroll);
        state.page_height.set(inner.height);
        let scroll = state.scroll_offset.min(max_scroll);

        let para = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    /// Render composer with the send button on its right
    fn render_composer(frame: &mut Frame, area: Rect, state: &ChatState) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border())
            .style(theme::composer());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [field, button] = Layout::horizontal([Constraint::Min(1), Constraint::Length(5)])
            .areas(inner);

        let line = composer_line(state.input(), state.cursor_pos, field.width.saturating_sub(1));
        frame.render_widget(Paragraph::new(line).style(theme::composer()), field);

        let send = Paragraph::new(Line::from(Span::styled(" ➤ ", theme::send_button())))
            .alignment(Alignment::Right);
        frame.render_widget(send, button);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let mut spans = vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::styled(": Send │ ", theme::footer()),
            Span::styled("↑/↓", theme::key_hint()),
            Span::styled(": Scroll │ ", theme::footer()),
            Span::styled("Esc", theme::key_hint()),
            Span::styled(": Clear/Exit │ ", theme::footer()),
            Span::styled("Ctrl+C", theme::key_destructive()),
            Span::styled(": Quit ", theme::footer()),
        ];
        if let Some(status) = &state.status_message {
            spans.push(Span::styled(format!("│ {} ", status), theme::footer()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Lines for the whole conversation at the given content width.
///
/// User bubbles hug the right edge, bot bubbles the left; every bot
/// message carries its like / dislike / redo buttons underneath.
/// Widths are terminal columns, so wide glyphs stay inside the bubble.
pub fn message_lines(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    let bubble_max = (usize::from(width) * 3 / 4).max(4);
    let text_width = bubble_max.saturating_sub(2).max(1);
    let mut lines = Vec::new();

    for message in messages {
        let (style, alignment) = match message.sender() {
            Sender::User => (theme::user_bubble(), Alignment::Right),
            Sender::Bot => (theme::bot_bubble(), Alignment::Left),
        };

        let wrapped = wrap_text(message.text(), text_width);
        let content_width = wrapped.iter().map(|line| line.width()).max().unwrap_or(0);
        for line in wrapped {
            let pad = " ".repeat(content_width.saturating_sub(line.width()));
            lines.push(
                Line::from(Span::styled(format!(" {line}{pad} "), style)).alignment(alignment),
            );
        }

        let stamp = message
            .created_at()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();
        lines.push(Line::from(Span::styled(stamp, theme::timestamp())).alignment(alignment));

        if message.is_bot() {
            lines.push(affordance_line());
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Reaction buttons. They render and do nothing.
fn affordance_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(" ▲ ", theme::affordance()),
        Span::raw(" "),
        Span::styled(" ▼ ", theme::affordance()),
        Span::raw("      "),
        Span::styled(" ↻ ", theme::affordance()),
    ])
}

/// Composer contents scrolled so the cursor stays visible within `width` columns
pub fn composer_line(input: &str, cursor_pos: usize, width: u16) -> Line<'static> {
    if input.is_empty() {
        return Line::from(vec![
            Span::styled(" ", theme::cursor()),
            Span::styled(PLACEHOLDER, theme::placeholder()),
        ]);
    }

    let chars: Vec<char> = input.chars().collect();
    let cursor_pos = cursor_pos.min(chars.len());
    let width = usize::from(width).max(1);
    let at = chars.get(cursor_pos).copied().unwrap_or(' ');

    // Grow the window left from the cursor, then right with what is left over
    let mut used = char_width(at);
    let mut start = cursor_pos;
    while start > 0 && used + char_width(chars[start - 1]) <= width {
        start -= 1;
        used += char_width(chars[start]);
    }
    let mut end = (cursor_pos + 1).min(chars.len());
    while end < chars.len() && used + char_width(chars[end]) <= width {
        used += char_width(chars[end]);
        end += 1;
    }

    let before: String = chars[start..cursor_pos].iter().collect();
    let after: String = if cursor_pos < end {
        chars[cursor_pos + 1..end].iter().collect()
    } else {
        String::new()
    };

    Line::from(vec![
        Span::styled(before, theme::composer()),
        Span::styled(at.to_string(), theme::cursor()),
        Span::styled(after, theme::composer()),
    ])
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Wrap `text` to `width` terminal columns, breaking words that do not fit
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1)).break_words(true);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
