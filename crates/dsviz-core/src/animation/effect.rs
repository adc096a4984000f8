use std::collections::VecDeque;
use std::time::Duration;

use crate::config::EasingType;
use crate::model::Point;
use crate::operation::{NodeId, NodeValue};

/// What a transition or placement acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Element(NodeId),
    /// The traveling pointer shown during traversals
    Pointer,
}

/// Synchronous draw/attribute commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create an element at `at`, fully transparent
    Spawn {
        id: NodeId,
        value: NodeValue,
        at: Point,
    },
    SetLabel {
        id: NodeId,
        value: NodeValue,
    },
    /// Move a target without animating
    Place { target: Target, at: Point },
    /// Remove an element from the surface
    Discard { id: NodeId },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionKind {
    Opacity { from: f64, to: f64 },
    Translate { from: Point, to: Point },
}

/// One interpolated attribute change on one target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub target: Target,
    pub kind: TransitionKind,
    pub duration: Duration,
    pub easing: EasingType,
}

impl Transition {
    pub fn fade(target: Target, from: f64, to: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            target,
            kind: TransitionKind::Opacity { from, to },
            duration,
            easing,
        }
    }

    pub fn translate(
        target: Target,
        from: Point,
        to: Point,
        duration: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            target,
            kind: TransitionKind::Translate { from, to },
            duration,
            easing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Command(Command),
    /// Transitions that start together; the group completes when all of them have
    Group(Vec<Transition>),
}

/// Ordered queue of effects for one phase of a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    effects: VecDeque<Effect>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(&mut self, command: Command) {
        self.effects.push_back(Effect::Command(command));
    }

    /// Queue a transition group; empty groups are dropped
    pub fn group(&mut self, transitions: Vec<Transition>) {
        if !transitions.is_empty() {
            self.effects.push_back(Effect::Group(transitions));
        }
    }

    pub fn append(&mut self, mut other: Timeline) {
        self.effects.append(&mut other.effects);
    }

    pub fn pop(&mut self) -> Option<Effect> {
        self.effects.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Time the timeline takes when every group runs to completion
    pub fn total_duration(&self) -> Duration {
        self.effects
            .iter()
            .map(|effect| match effect {
                Effect::Command(_) => Duration::ZERO,
                Effect::Group(group) => group
                    .iter()
                    .map(|t| t.duration)
                    .max()
                    .unwrap_or(Duration::ZERO),
            })
            .sum()
    }
}
