//! Ambient animation driver

use super::clock::{FrameClock, TokioClock};
use super::ping_pong::PingPong;
use crate::config::AnimationConfig;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// Illegal lifecycle transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("animation driver is already running")]
    AlreadyRunning,

    #[error("animation driver was stopped and cannot be restarted")]
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// Surface the glow moves across, in the renderer's units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Current glow translation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };
}

enum Run {
    Idle,
    Running {
        started: Instant,
        x: PingPong,
        y: PingPong,
    },
    Stopped,
}

/// Drives two phase-independent ping-pong axes from a frame clock.
///
/// Limits are captured once in [`AmbientDriver::start`]; later viewport
/// changes never reach the running loops.
pub struct AmbientDriver<C: FrameClock = TokioClock> {
    clock: C,
    config: AnimationConfig,
    run: Run,
}

impl AmbientDriver<TokioClock> {
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_clock(config, TokioClock)
    }
}

impl<C: FrameClock> AmbientDriver<C> {
    pub fn with_clock(config: AnimationConfig, clock: C) -> Self {
        Self {
            clock,
            config,
            run: Run::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        match self.run {
            Run::Idle => DriverState::Idle,
            Run::Running { .. } => DriverState::Running,
            Run::Stopped => DriverState::Stopped,
        }
    }

    /// `idle -> running`, capturing `viewport - margin` as the axis limits
    pub fn start(&mut self, viewport: Viewport) -> Result<(), DriverError> {
        match self.run {
            Run::Idle => {}
            Run::Running { .. } => return Err(DriverError::AlreadyRunning),
            Run::Stopped => return Err(DriverError::Stopped),
        }

        let margin = self.config.margin;
        let x = PingPong::from_config(viewport.width - margin, &self.config.x);
        let y = PingPong::from_config(viewport.height - margin, &self.config.y);
        info!(
            limit_x = x.limit(),
            limit_y = y.limit(),
            cycle_x_ms = x.cycle().as_millis() as u64,
            cycle_y_ms = y.cycle().as_millis() as u64,
            "Ambient animation started"
        );

        self.run = Run::Running {
            started: self.clock.now(),
            x,
            y,
        };
        Ok(())
    }

    /// `-> stopped`. Stopping twice is a no-op.
    pub fn stop(&mut self) {
        if !matches!(self.run, Run::Stopped) {
            debug!("Ambient animation stopped");
        }
        self.run = Run::Stopped;
    }

    /// Limits captured at start, if running
    pub fn limits(&self) -> Option<(f64, f64)> {
        match &self.run {
            Run::Running { x, y, .. } => Some((x.limit(), y.limit())),
            _ => None,
        }
    }

    /// Sample both axes at the clock's current time
    pub fn offset(&self) -> Offset {
        match &self.run {
            Run::Running { started, x, y } => {
                let elapsed = self.clock.now().saturating_duration_since(*started);
                Offset {
                    x: x.value_at(elapsed),
                    y: y.value_at(elapsed),
                }
            }
            Run::Idle | Run::Stopped => Offset::ZERO,
        }
    }
}
