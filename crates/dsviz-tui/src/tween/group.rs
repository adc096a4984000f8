use std::time::Duration;

use dsviz_core::animation::{Target, Transition, TransitionKind};
use dsviz_core::model::Point;

use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp, lerp_point, progress};

/// Interpolated value of one transition at some instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Opacity(f64),
    At(Point),
}

/// A transition group in flight.
///
/// Every transition starts at the same instant; the group is complete once
/// the longest one has finished. Time is passed in by the caller so the
/// same tween can be driven by a wall clock or stepped in tests.
#[derive(Debug, Clone)]
pub struct Tween {
    transitions: Vec<Transition>,
    duration: Duration,
}

impl Tween {
    pub fn new(transitions: Vec<Transition>) -> Self {
        let duration = transitions
            .iter()
            .map(|t| t.duration)
            .max()
            .unwrap_or(Duration::ZERO);
        Self {
            transitions,
            duration,
        }
    }

    /// Duration of the longest transition
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        is_complete(elapsed, self.duration)
    }

    /// Values of every transition `elapsed` after the group started
    pub fn sample(&self, elapsed: Duration) -> impl Iterator<Item = (Target, Sample)> + '_ {
        self.transitions.iter().map(move |transition| {
            let t = transition
                .easing
                .apply(progress(elapsed, transition.duration));
            (transition.target, interpolate(transition.kind, t))
        })
    }

    /// End values of every transition
    pub fn end_state(&self) -> impl Iterator<Item = (Target, Sample)> + '_ {
        self.transitions
            .iter()
            .map(|transition| (transition.target, interpolate(transition.kind, 1.0)))
    }
}

fn interpolate(kind: TransitionKind, t: f64) -> Sample {
    match kind {
        TransitionKind::Opacity { from, to } => {
            if t >= 1.0 {
                Sample::Opacity(to)
            } else {
                Sample::Opacity(lerp(from, to, t))
            }
        }
        TransitionKind::Translate { from, to } => {
            if t >= 1.0 {
                Sample::At(to)
            } else {
                Sample::At(lerp_point(from, to, t))
            }
        }
    }
}
