//! Animation sequencing
//!
//! A step is turned into a `Timeline`: a FIFO of effects that is drained
//! strictly in order against a `Surface`. Commands apply synchronously;
//! transition groups suspend until the surface reports completion.
//!
//! - `effect` - commands, transitions and the timeline queue
//! - `surface` - the rendering contract
//! - `sequencer` - builds timelines for pointer walks and frame changes
//! - `recording` - a headless surface that records what it was asked to do

mod effect;
mod recording;
mod sequencer;
mod surface;

pub use effect::{Command, Effect, Target, Timeline, Transition, TransitionKind};
pub use recording::{PointerState, Recorded, RecordingSurface, SceneElement};
pub use sequencer::{Durations, Sequencer};
pub use surface::{StepInfo, Surface};
