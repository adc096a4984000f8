//! Transition interpolation for the terminal surface
//!
//! ## Atoms
//! - `easing` - pure easing curves over [0, 1]
//! - `timing` - progress and interpolation helpers
//!
//! ## Controller
//! - `group` - samples a running transition group

pub mod easing;
pub mod timing;

mod group;

pub use easing::{EasingType, EasingTypeExt};
pub use group::{Sample, Tween};
