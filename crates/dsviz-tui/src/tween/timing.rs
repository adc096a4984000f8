//! Time calculation utilities for transitions

use std::time::Duration;

use dsviz_core::model::Point;

/// Progress (0.0 to 1.0) after `elapsed` of a transition lasting `duration`
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[inline]
pub fn lerp_point(from: Point, to: Point, t: f64) -> Point {
    Point::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t))
}

/// Delay between redraws at `fps`; 0 fps is treated as 1
#[inline]
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}
