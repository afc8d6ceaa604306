//! AmbientDriver tests

use glowchat_core::animation::{
    AmbientDriver, DriverError, DriverState, Easing, ManualClock, Offset, Viewport,
};
use glowchat_core::config::AnimationConfig;
use std::time::Duration;

fn driver() -> (AmbientDriver<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let driver = AmbientDriver::with_clock(AnimationConfig::default(), clock.clone());
    (driver, clock)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn idle_driver_sits_at_origin() {
    let (driver, clock) = driver();
    clock.advance(Duration::from_secs(30));

    assert_eq!(driver.state(), DriverState::Idle);
    assert_eq!(driver.offset(), Offset::ZERO);
    assert_eq!(driver.limits(), None);
}

#[test]
fn limits_are_viewport_minus_margin() {
    let (mut driver, _clock) = driver();
    driver.start(Viewport::new(500.0, 300.0)).expect("start");

    assert_eq!(driver.state(), DriverState::Running);
    assert_eq!(driver.limits(), Some((400.0, 200.0)));
    assert_eq!(driver.offset(), Offset::ZERO);
}

#[test]
fn vertical_axis_is_linear_both_ways() {
    let (mut driver, clock) = driver();
    driver.start(Viewport::new(500.0, 300.0)).expect("start");

    clock.advance(Duration::from_millis(35_000));
    assert_close(driver.offset().y, 100.0);

    clock.advance(Duration::from_millis(35_000));
    assert_close(driver.offset().y, 200.0);

    clock.advance(Duration::from_millis(35_000));
    assert_close(driver.offset().y, 100.0);

    clock.advance(Duration::from_millis(35_000));
    assert_close(driver.offset().y, 0.0);
}

#[test]
fn horizontal_axis_bounces_out_and_returns_linearly() {
    let (mut driver, clock) = driver();
    driver.start(Viewport::new(500.0, 300.0)).expect("start");

    clock.advance(Duration::from_millis(35_000));
    assert_close(driver.offset().x, 400.0 * Easing::Bounce.apply(0.07));

    clock.advance(Duration::from_millis(465_000));
    assert_close(driver.offset().x, 400.0);

    clock.advance(Duration::from_millis(250_000));
    assert_close(driver.offset().x, 200.0);

    clock.advance(Duration::from_millis(250_000));
    assert_close(driver.offset().x, 0.0);
}

#[test]
fn axes_run_independently() {
    let (mut driver, clock) = driver();
    driver.start(Viewport::new(500.0, 300.0)).expect("start");

    // Y has finished a full cycle while X is still on its way out
    clock.advance(Duration::from_millis(140_000));
    let offset = driver.offset();
    assert_close(offset.y, 0.0);
    assert!(offset.x > 0.0);
}

#[test]
fn offsets_stay_within_limits() {
    let (mut driver, clock) = driver();
    driver.start(Viewport::new(1280.0, 720.0)).expect("start");
    let (limit_x, limit_y) = driver.limits().expect("running");

    for _ in 0..2_000 {
        clock.advance(Duration::from_millis(1_237));
        let offset = driver.offset();
        assert!((0.0..=limit_x).contains(&offset.x), "x = {}", offset.x);
        assert!((0.0..=limit_y).contains(&offset.y), "y = {}", offset.y);
    }
}

#[test]
fn viewport_smaller_than_margin_pins_glow() {
    let (mut driver, clock) = driver();
    driver.start(Viewport::new(60.0, 40.0)).expect("start");

    assert_eq!(driver.limits(), Some((0.0, 0.0)));
    clock.advance(Duration::from_millis(12_345));
    assert_eq!(driver.offset(), Offset::ZERO);
}

#[test]
fn cannot_start_twice() {
    let (mut driver, _clock) = driver();
    driver.start(Viewport::new(500.0, 300.0)).expect("start");

    let err = driver.start(Viewport::new(900.0, 900.0)).unwrap_err();
    assert_eq!(err, DriverError::AlreadyRunning);
    assert_eq!(driver.limits(), Some((400.0, 200.0)));
}

#[test]
fn stopped_driver_cannot_restart() {
    let (mut driver, clock) = driver();
    driver.start(Viewport::new(500.0, 300.0)).expect("start");
    clock.advance(Duration::from_millis(10_000));

    driver.stop();
    driver.stop();

    assert_eq!(driver.state(), DriverState::Stopped);
    assert_eq!(driver.offset(), Offset::ZERO);
    assert_eq!(
        driver.start(Viewport::new(500.0, 300.0)),
        Err(DriverError::Stopped)
    );
}
