//! Infinite there-and-back interpolation on one axis

use super::easing::Easing;
use crate::config::AxisConfig;
use std::time::Duration;

/// One leg of the loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub duration: Duration,
    pub easing: Easing,
}

/// Which leg a sample falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Forward,
    Backward,
}

/// Loops `0 -> limit` over the forward leg, then `limit -> 0` over the backward leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingPong {
    limit: f64,
    forward: Leg,
    backward: Leg,
}

impl PingPong {
    /// Negative or non-finite limits collapse to 0
    pub fn new(limit: f64, forward: Leg, backward: Leg) -> Self {
        let limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        Self {
            limit,
            forward,
            backward,
        }
    }

    pub fn from_config(limit: f64, config: &AxisConfig) -> Self {
        Self::new(
            limit,
            Leg {
                duration: config.forward,
                easing: config.forward_easing,
            },
            Leg {
                duration: config.backward,
                easing: config.backward_easing,
            },
        )
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn cycle(&self) -> Duration {
        self.forward.duration + self.backward.duration
    }

    /// Leg and normalized progress within it
    pub fn phase_at(&self, elapsed: Duration) -> (Phase, f64) {
        let cycle = self.cycle().as_nanos();
        if cycle == 0 {
            return (Phase::Forward, 0.0);
        }

        let t = elapsed.as_nanos() % cycle;
        let forward = self.forward.duration.as_nanos();
        if t < forward {
            (Phase::Forward, t as f64 / forward as f64)
        } else {
            let backward = self.backward.duration.as_nanos();
            (Phase::Backward, (t - forward) as f64 / backward as f64)
        }
    }

    /// Offset after `elapsed` time since the loop started, always within `[0, limit]`
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.limit == 0.0 {
            return 0.0;
        }

        let value = match self.phase_at(elapsed) {
            (Phase::Forward, progress) => self.limit * self.forward.easing.apply(progress),
            (Phase::Backward, progress) => {
                self.limit * (1.0 - self.backward.easing.apply(progress))
            }
        };
        value.clamp(0.0, self.limit)
    }
}
