//! Ambient animation
//!
//! Two independent ping-pong interpolators sampled from a frame clock:
//! - easing.rs: normalized easing curves
//! - ping_pong.rs: one axis looping between 0 and its limit
//! - clock.rs: time sources the driver samples
//! - driver.rs: idle -> running -> stopped lifecycle over both axes

mod clock;
mod driver;
mod easing;
mod ping_pong;

pub use clock::{FrameClock, ManualClock, TokioClock};
pub use driver::{AmbientDriver, DriverError, DriverState, Offset, Viewport};
pub use easing::Easing;
pub use ping_pong::{Leg, Phase, PingPong};
