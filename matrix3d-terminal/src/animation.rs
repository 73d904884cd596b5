/// Time-driven progress for the demo sweep
use std::time::Duration;

/// Eased progress that runs 0 -> 1, then back to 0, forever
#[derive(Debug, Clone, Copy)]
pub struct PingPong {
    duration: Duration,
}

impl PingPong {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Progress in [0, 1] after `elapsed` time
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let span = self.duration.as_secs_f64();
        if span <= 0.0 {
            return 1.0;
        }

        let cycles = elapsed.as_secs_f64() / span;
        let phase = cycles.fract();
        // odd sweeps run backwards
        let t = if cycles as u64 % 2 == 0 { phase } else { 1.0 - phase };
        ease(t)
    }
}

/// The compositor's default `ease` curve: cubic bezier (0.25, 0.1) (0.25, 1)
pub fn ease(t: f64) -> f64 {
    CubicBezier::new(0.25, 0.1, 0.25, 1.0).solve(t)
}

/// Unit cubic bezier from (0, 0) to (1, 1) with two control points
#[derive(Debug, Clone, Copy)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(p1: f64, p2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn slope(p1: f64, p2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Curve parameter whose x equals `x`
    fn parameter_for(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, s) - x;
            if error.abs() < 1e-9 {
                return s;
            }
            let slope = Self::slope(self.x1, self.x2, s);
            if slope.abs() < 1e-9 {
                break;
            }
            s -= error / slope;
        }

        // x(s) is monotonic for control x in [0, 1], so bisection always converges
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..64 {
            let sampled = Self::sample(self.x1, self.x2, s);
            if (sampled - x).abs() < 1e-9 {
                break;
            }
            if sampled < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// Eased value at time `t` in [0, 1]
    pub fn solve(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        Self::sample(self.y1, self.y2, self.parameter_for(t))
    }
}
