//! In-memory list graph and per-frame materialization
//!
//! - `store` - node values and successor edges, plus head resolution
//! - `materialize` - walks every head into positioned elements
//! - `frame` - the flattened, id-indexed result of one materialization
//! - `layout` - maps list coordinates to surface coordinates

mod frame;
mod layout;
mod materialize;
mod store;

pub use frame::{Frame, PositionedElement};
pub use layout::{Layout, Point};
pub use materialize::{materialize, ListWalker, Materialized, WalkAnomaly};
pub use store::{heads, Node, NodeStore};
