//! Frame ticker driving the typing indicator

use glowchat_cli::tui::screens::chat::FrameTicker;
use std::time::Duration;
use tokio::time::advance;

const TICK: Duration = Duration::from_millis(50);

#[tokio::test(start_paused = true)]
async fn fires_once_per_interval() {
    let mut ticker = FrameTicker::new(TICK);
    assert!(!ticker.due());

    advance(Duration::from_millis(49)).await;
    assert!(!ticker.due());

    advance(Duration::from_millis(1)).await;
    assert!(ticker.due());
    assert!(!ticker.due());
}

#[tokio::test(start_paused = true)]
async fn frequent_polling_does_not_starve_ticks() {
    // Keystrokes wake the loop every 10 ms; the spinner still advances
    let mut ticker = FrameTicker::new(TICK);
    let mut ticks = 0;
    for _ in 0..20 {
        advance(Duration::from_millis(10)).await;
        if ticker.due() {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 4);
}

#[tokio::test(start_paused = true)]
async fn timeout_counts_down_to_the_next_tick() {
    let mut ticker = FrameTicker::new(TICK);
    assert_eq!(ticker.timeout(), TICK);

    advance(Duration::from_millis(30)).await;
    assert_eq!(ticker.timeout(), Duration::from_millis(20));

    advance(Duration::from_millis(40)).await;
    assert_eq!(ticker.timeout(), Duration::ZERO);
    assert!(ticker.due());
    assert_eq!(ticker.timeout(), TICK);
}
