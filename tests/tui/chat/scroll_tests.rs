//! Message list scrolling

use glowchat_cli::tui::screens::chat::ChatState;
use glowchat_core::config::AppConfig;

fn state_with_max_scroll(max_scroll: u16) -> ChatState {
    let state = ChatState::new(&AppConfig::default());
    state.max_scroll.set(max_scroll);
    state
}

#[test]
fn scroll_up_from_bottom_starts_at_last_page() {
    let mut state = state_with_max_scroll(10);
    assert_eq!(state.scroll_offset, u16::MAX);

    state.scroll_up();
    assert_eq!(state.scroll_offset, 9);
}

#[test]
fn scroll_down_moves_one_line() {
    let mut state = state_with_max_scroll(10);
    state.scroll_offset = 5;

    state.scroll_down();
    assert_eq!(state.scroll_offset, 6);
}

#[test]
fn reaching_the_end_pins_to_bottom() {
    let mut state = state_with_max_scroll(10);
    state.scroll_offset = 9;

    state.scroll_down();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn scroll_up_stops_at_top() {
    let mut state = state_with_max_scroll(10);
    state.scroll_offset = 0;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn jumps() {
    let mut state = state_with_max_scroll(10);

    state.scroll_to_top();
    assert_eq!(state.scroll_offset, 0);

    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn short_conversation_stays_pinned() {
    let mut state = state_with_max_scroll(0);

    state.scroll_down();
    assert_eq!(state.scroll_offset, u16::MAX);

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);
}

fn paged_state() -> ChatState {
    let state = state_with_max_scroll(30);
    state.page_height.set(10);
    state
}

#[test]
fn page_up_moves_a_screenful() {
    let mut state = paged_state();

    state.page_up();
    assert_eq!(state.scroll_offset, 20);

    state.page_up();
    state.page_up();
    state.page_up();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn page_down_moves_a_screenful_then_pins() {
    let mut state = paged_state();
    state.scroll_offset = 5;

    state.page_down();
    assert_eq!(state.scroll_offset, 15);

    state.page_down();
    state.page_down();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn paging_differs_from_line_scrolling() {
    let mut by_line = paged_state();
    let mut by_page = paged_state();

    by_line.scroll_up();
    by_page.page_up();
    assert_eq!(by_line.scroll_offset, 29);
    assert_eq!(by_page.scroll_offset, 20);
}
