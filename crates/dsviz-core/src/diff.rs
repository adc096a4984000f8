//! Keyed frame diff
//!
//! Elements are matched across frames by node id, never by index, so an
//! element that changes list or position keeps its identity on the surface.

use crate::model::{Frame, PositionedElement};
use crate::operation::NodeId;

/// An element present in both frames
#[derive(Debug, Clone, PartialEq)]
pub struct Continuing {
    pub before: PositionedElement,
    pub after: PositionedElement,
}

impl Continuing {
    pub fn id(&self) -> NodeId {
        self.after.id
    }

    /// Position or list changed between frames
    pub fn moved(&self) -> bool {
        !self.before.same_slot(&self.after)
    }

    pub fn relabelled(&self) -> bool {
        self.before.value != self.after.value
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameDiff {
    /// New-frame order
    pub entering: Vec<PositionedElement>,
    /// New-frame order
    pub continuing: Vec<Continuing>,
    /// Old-frame order
    pub exiting: Vec<PositionedElement>,
}

impl FrameDiff {
    /// Nothing enters, exits, moves or changes label
    pub fn is_empty(&self) -> bool {
        self.entering.is_empty()
            && self.exiting.is_empty()
            && self
                .continuing
                .iter()
                .all(|c| !c.moved() && !c.relabelled())
    }

    pub fn moved(&self) -> impl Iterator<Item = &Continuing> {
        self.continuing.iter().filter(|c| c.moved())
    }

    pub fn relabelled(&self) -> impl Iterator<Item = &Continuing> {
        self.continuing.iter().filter(|c| c.relabelled())
    }
}

pub fn diff(old: &Frame, new: &Frame) -> FrameDiff {
    let mut result = FrameDiff::default();

    for element in new {
        match old.get(element.id) {
            Some(before) => result.continuing.push(Continuing {
                before: before.clone(),
                after: element.clone(),
            }),
            None => result.entering.push(element.clone()),
        }
    }

    result.exiting = old
        .iter()
        .filter(|element| !new.contains(element.id))
        .cloned()
        .collect();

    result
}
