//! Rendering against a test backend

use glowchat_cli::tui::screens::chat::{
    ChatState, ChatUI, composer_line, message_lines, wrap_text,
};
use glowchat_core::config::AppConfig;
use glowchat_core::domain::Message;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::text::Line;

fn render(state: &ChatState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| ChatUI::render(frame, state))
        .expect("draw");
    rows(terminal.backend().buffer())
}

fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

#[test]
fn initial_screen() {
    let state = ChatState::new(&AppConfig::default());
    let rows = render(&state, 60, 20);

    assert!(rows[1].contains("Chat with Ai bot"), "title row: {:?}", rows[1]);
    assert!(rows.iter().any(|r| r.contains("Hi! How can I help you today?")));
    assert!(rows.iter().any(|r| r.contains("Type your message...")));
    assert!(rows.iter().any(|r| r.contains("➤")));
    assert!(rows[19].contains("Enter"));
    assert!(!rows.iter().any(|r| r.contains("typing...")));
}

#[test]
fn status_message_shows_in_help_bar() {
    let mut state = ChatState::new(&AppConfig::default());
    state.status_message = Some("Saved".to_string());

    let rows = render(&state, 100, 12);
    assert!(rows[11].contains("Saved"));
}

#[tokio::test(start_paused = true)]
async fn pending_reply_shows_typing_indicator() {
    let mut state = ChatState::new(&AppConfig::default());
    state.set_input("Hello");
    state.submit();

    let rows = render(&state, 60, 20);
    assert!(rows.iter().any(|r| r.contains("Hello")));
    assert!(rows.iter().any(|r| r.contains("typing...")));
}

#[tokio::test(start_paused = true)]
async fn render_records_max_scroll() {
    let mut state = ChatState::new(&AppConfig::default());
    for n in 0..8 {
        state.set_input(format!("message {n}"));
        state.submit();
    }

    let rows = render(&state, 60, 20);
    let max_scroll = state.max_scroll.get();
    assert!(max_scroll > 0);
    // 20 rows minus title, composer and help bar
    assert_eq!(state.page_height.get(), 13);
    // Pinned to the bottom: the newest message is visible
    assert!(rows.iter().any(|r| r.contains("message 7")));

    state.scroll_up();
    assert_eq!(state.scroll_offset, max_scroll - 1);
}

#[test]
fn bubbles_align_by_sender() {
    let lines = message_lines(&[Message::bot("Hello"), Message::user("Hi")], 40);

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0].to_string(), " Hello ");
    assert_eq!(lines[0].alignment, Some(Alignment::Left));
    assert_eq!(lines[1].alignment, Some(Alignment::Left));
    assert!(lines[2].to_string().contains('▲'));
    assert!(lines[2].to_string().contains('▼'));
    assert!(lines[2].to_string().contains('↻'));
    assert_eq!(lines[3].to_string(), "");
    assert_eq!(lines[4].to_string(), " Hi ");
    assert_eq!(lines[4].alignment, Some(Alignment::Right));
    assert_eq!(lines[5].alignment, Some(Alignment::Right));
}

#[test]
fn user_messages_have_no_affordances() {
    let lines = message_lines(&[Message::user("Hi")], 40);

    assert_eq!(lines.len(), 3);
    assert!(!lines.iter().any(|l| l.to_string().contains('▲')));
}

#[test]
fn long_messages_wrap_inside_the_bubble() {
    let lines = message_lines(&[Message::user("aaa bbb ccc")], 8);

    let bubble: Vec<String> = lines[..3].iter().map(|l| l.to_string()).collect();
    assert_eq!(bubble, vec![" aaa ", " bbb ", " ccc "]);
}

#[test]
fn wrap_text_cases() {
    assert_eq!(wrap_text("hello world", 5), vec!["hello", "world"]);
    assert_eq!(
        wrap_text("a long sentence here", 10),
        vec!["a long", "sentence", "here"]
    );
    assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    assert_eq!(wrap_text("  indented", 20), vec!["  indented"]);
    assert_eq!(wrap_text("short", 0), vec!["s", "h", "o", "r", "t"]);
}

#[test]
fn composer_placeholder_when_empty() {
    let line = composer_line("", 0, 20);
    assert_eq!(line.to_string(), " Type your message...");
}

#[test]
fn composer_cursor_at_end() {
    assert_eq!(composer_line("hello", 5, 20).to_string(), "hello ");
}

#[test]
fn composer_cursor_in_middle() {
    let line = composer_line("abcdef", 2, 10);
    assert_eq!(line.to_string(), "abcdef");
    assert_eq!(line.spans[1].content, "c");
}

#[test]
fn composer_scrolls_to_keep_cursor_visible() {
    assert_eq!(composer_line("abcdefghij", 10, 4).to_string(), "hij ");
}

#[test]
fn wide_glyphs_wrap_by_display_width() {
    assert_eq!(
        wrap_text("你好世界你好世界你好", 4),
        vec!["你好", "世界", "你好", "世界", "你好"]
    );
}

#[test]
fn wide_glyph_bubbles_fit_three_quarters_of_the_width() {
    let lines = message_lines(&[Message::user("你好世界".repeat(5))], 20);

    let bubble: Vec<&Line> = lines
        .iter()
        .take_while(|line| {
            line.alignment == Some(Alignment::Right) && line.spans[0].content.starts_with(' ')
        })
        .collect();
    assert!(bubble.len() > 1);
    for line in &bubble {
        assert!(line.width() <= 15, "bubble line is {} columns", line.width());
    }
    // Every bubble row is padded to the same number of columns
    assert!(bubble.iter().all(|line| line.width() == bubble[0].width()));
}

#[test]
fn composer_scrolls_by_display_width() {
    let line = composer_line("日本語テキスト", 7, 6);

    assert_eq!(line.to_string(), "スト ");
    assert!(line.width() <= 6);
}
