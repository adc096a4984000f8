//! Replay engine for linked-list operation logs.
//!
//! A log of `init` / `set_value` / `get_value` / `set_next` / `get_next`
//! entries is replayed against an in-memory list graph. After every entry the
//! lists are re-materialized from their heads, diffed by node id against the
//! previous frame, and the difference is animated on a [`animation::Surface`].
//!
//! ```text
//! Operations -> interpreter -> NodeStore -> materialize -> diff -> Sequencer -> Surface
//! ```

pub mod animation;
pub mod config;
pub mod diagnostics;
pub mod diff;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod operation;
pub mod player;

pub use animation::{RecordingSurface, Surface};
pub use config::{AnimationConfig, AppConfig, EasingType, ThemeConfig};
pub use diagnostics::Diagnostic;
pub use error::{Error, Result};
pub use operation::{pretty_print, LinkedListOperation, Operation, Operations, Recorder};
pub use player::{animate_operations, PlaybackReport, Player};
