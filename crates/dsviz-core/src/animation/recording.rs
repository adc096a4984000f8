use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::effect::{Command, Target, Transition, TransitionKind};
use super::surface::{StepInfo, Surface};
use crate::model::Point;
use crate::operation::{NodeId, NodeValue};
use crate::player::PlaybackReport;
use crate::Result;

/// An element as the surface currently shows it
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub value: NodeValue,
    pub at: Point,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub at: Option<Point>,
    pub opacity: f64,
}

/// Everything a `RecordingSurface` was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Step(StepInfo),
    Command(Command),
    Group(Vec<Transition>),
    Finished(PlaybackReport),
}

/// Headless surface: records every call and jumps straight to end states.
///
/// `elapsed` accumulates the time the recorded groups would have taken on a
/// real surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Vec<Recorded>,
    scene: BTreeMap<NodeId, SceneElement>,
    pointer: PointerState,
    elapsed: Duration,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[Recorded] {
        &self.log
    }

    pub fn scene(&self) -> &BTreeMap<NodeId, SceneElement> {
        &self.scene
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Transition groups recorded so far
    pub fn groups(&self) -> impl Iterator<Item = &Vec<Transition>> {
        self.log.iter().filter_map(|entry| match entry {
            Recorded::Group(group) => Some(group),
            _ => None,
        })
    }

    fn place(&mut self, target: Target, at: Point) {
        match target {
            Target::Pointer => self.pointer.at = Some(at),
            Target::Element(id) => match self.scene.get_mut(&id) {
                Some(element) => element.at = at,
                None => warn!(id, "Placement for an element that is not on the surface"),
            },
        }
    }

    fn set_opacity(&mut self, target: Target, opacity: f64) {
        match target {
            Target::Pointer => self.pointer.opacity = opacity,
            Target::Element(id) => match self.scene.get_mut(&id) {
                Some(element) => element.opacity = opacity,
                None => warn!(id, "Fade for an element that is not on the surface"),
            },
        }
    }
}

#[async_trait]
impl Surface for RecordingSurface {
    fn apply(&mut self, command: Command) {
        match &command {
            Command::Spawn { id, value, at } => {
                self.scene.insert(
                    *id,
                    SceneElement {
                        value: value.clone(),
                        at: *at,
                        opacity: 0.0,
                    },
                );
            }
            Command::SetLabel { id, value } => {
                if let Some(element) = self.scene.get_mut(id) {
                    element.value = value.clone();
                }
            }
            Command::Place { target, at } => self.place(*target, *at),
            Command::Discard { id } => {
                self.scene.remove(id);
            }
        }
        self.log.push(Recorded::Command(command));
    }

    async fn run(&mut self, group: Vec<Transition>) -> Result<()> {
        for transition in &group {
            match transition.kind {
                TransitionKind::Opacity { to, .. } => self.set_opacity(transition.target, to),
                TransitionKind::Translate { to, .. } => self.place(transition.target, to),
            }
        }
        self.elapsed += group
            .iter()
            .map(|t| t.duration)
            .max()
            .unwrap_or(Duration::ZERO);
        self.log.push(Recorded::Group(group));
        Ok(())
    }

    async fn begin_step(&mut self, step: &StepInfo) -> Result<()> {
        self.log.push(Recorded::Step(step.clone()));
        Ok(())
    }

    async fn finish(&mut self, report: &PlaybackReport) -> Result<()> {
        self.log.push(Recorded::Finished(report.clone()));
        Ok(())
    }
}
