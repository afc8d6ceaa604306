//! Easing curves mapping normalized progress `[0, 1]` onto `[0, 1]`

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    #[default]
    Linear,
    Quad,
    Cubic,
    Sine,
    Bounce,
    /// Accelerating cubic bezier `(0.42, 0, 1, 1)`
    Ease,
}

impl Easing {
    /// Eased progress for `t`, clamped into `[0, 1]` first
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let eased = match self {
            Easing::Linear => t,
            Easing::Quad => t * t,
            Easing::Cubic => t * t * t,
            Easing::Sine => 1.0 - (t * FRAC_PI_2).cos(),
            Easing::Bounce => bounce(t),
            Easing::Ease => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
        };
        eased.clamp(0.0, 1.0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Quad => "quad",
            Easing::Cubic => "cubic",
            Easing::Sine => "sine",
            Easing::Bounce => "bounce",
            Easing::Ease => "ease",
        }
    }
}

fn bounce(t: f64) -> f64 {
    const K: f64 = 7.5625;
    if t < 1.0 / 2.75 {
        K * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        K * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        K * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        K * t * t + 0.984375
    }
}

/// y of the bezier at the parameter whose x equals `t` (x is monotonic for x1, x2 in [0, 1])
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    fn coord(a: f64, b: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..48 {
        let mid = (lo + hi) / 2.0;
        if coord(x1, x2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    coord(y1, y2, (lo + hi) / 2.0).clamp(0.0, 1.0)
}
