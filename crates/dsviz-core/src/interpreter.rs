//! Applies one log entry to the node store.
//!
//! No state is carried between entries; everything lives in the store.

use crate::model::NodeStore;
use crate::operation::{LinkedListOperation, NodeId};

/// What an applied entry means for the animation of its step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEffect {
    /// A node was created or overwritten; it enters on the next frame
    Created,
    /// A label changes in place
    ValueChanged,
    /// A read with no structural change
    Inspected,
    /// An edge changed; elements may move between lists or exit
    Relinked,
    /// Walk the traveling pointer from this node to its successor
    Traversed(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub effect: StepEffect,
    /// False when the entry was dropped as a no-op
    pub applied: bool,
}

impl StepOutcome {
    fn applied(effect: StepEffect) -> Self {
        Self {
            effect,
            applied: true,
        }
    }
}

pub fn apply(store: &mut NodeStore, operation: &LinkedListOperation) -> StepOutcome {
    match operation {
        LinkedListOperation::Init { id, value, next } => {
            store.init(*id, value.clone(), *next);
            StepOutcome::applied(StepEffect::Created)
        }
        LinkedListOperation::SetValue { id, value } => StepOutcome {
            effect: StepEffect::ValueChanged,
            applied: store.set_value(*id, value.clone()),
        },
        LinkedListOperation::GetValue { .. } => StepOutcome::applied(StepEffect::Inspected),
        LinkedListOperation::SetNext { id, next } => {
            store.set_next(*id, *next);
            StepOutcome::applied(StepEffect::Relinked)
        }
        LinkedListOperation::GetNext { id } => StepOutcome::applied(StepEffect::Traversed(*id)),
    }
}
