use std::time::Duration;

use tracing::debug;

use super::effect::{Command, Effect, Target, Timeline, Transition};
use super::surface::Surface;
use crate::config::{AnimationConfig, EasingType};
use crate::diff::FrameDiff;
use crate::model::{Frame, Layout, Point};
use crate::operation::{NodeId, VisualizationMetadata};
use crate::Result;

/// Effect durations for one playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Durations {
    pub fade: Duration,
    pub transition: Duration,
    pub easing: EasingType,
    /// When false every step resolves instantly
    pub enabled: bool,
}

impl Default for Durations {
    fn default() -> Self {
        Self::resolve(&VisualizationMetadata::default(), &AnimationConfig::default())
    }
}

impl Durations {
    /// Log overrides win over configuration, which carries the fixed defaults
    pub fn resolve(metadata: &VisualizationMetadata, config: &AnimationConfig) -> Self {
        Self {
            fade: Duration::from_millis(
                metadata
                    .fade_in_duration
                    .unwrap_or(config.fade_in_duration_ms),
            ),
            transition: Duration::from_millis(
                metadata
                    .transition_duration
                    .unwrap_or(config.transition_duration_ms),
            ),
            easing: config.easing,
            enabled: config.enabled,
        }
    }

    pub fn instant(&self) -> Self {
        Self {
            fade: Duration::ZERO,
            transition: Duration::ZERO,
            ..*self
        }
    }

    /// Durations for a step with the given `animate` flag
    pub fn for_step(&self, animate: bool) -> Self {
        if animate && self.enabled {
            *self
        } else {
            self.instant()
        }
    }
}

/// Builds and drains the timelines of a step
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    layout: Layout,
}

impl Sequencer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Traveling pointer from `id` to its successor, read from `frame`.
    ///
    /// When the successor is not rendered the pointer travels to the empty slot
    /// right after `id`. Returns `None` when `id` itself is not in the frame.
    pub fn pointer_walk(
        &self,
        frame: &Frame,
        id: NodeId,
        successor: Option<NodeId>,
        durations: &Durations,
    ) -> Option<Timeline> {
        let source = frame.get(id)?;
        let from = source.point(&self.layout);
        let to = successor
            .and_then(|next| frame.get(next))
            .map(|next| next.point(&self.layout))
            .unwrap_or_else(|| self.layout.place(source.position + 1, source.list_index));

        let mut timeline = Timeline::new();
        timeline.command(Command::Place {
            target: Target::Pointer,
            at: from,
        });
        timeline.group(vec![self.fade(Target::Pointer, 0.0, 1.0, durations)]);
        timeline.group(vec![Transition::translate(
            Target::Pointer,
            from,
            to,
            durations.transition,
            durations.easing,
        )]);
        timeline.group(vec![self.fade(Target::Pointer, 1.0, 0.0, durations)]);
        Some(timeline)
    }

    /// Exit, then update, then enter.
    ///
    /// Exiting elements fade out and are discarded; continuing elements get
    /// their new label and move to their new slot; entering elements are
    /// spawned at their slot and fade in.
    pub fn frame_transition(&self, diff: &FrameDiff, durations: &Durations) -> Timeline {
        let mut timeline = Timeline::new();

        timeline.group(
            diff.exiting
                .iter()
                .map(|e| self.fade(Target::Element(e.id), 1.0, 0.0, durations))
                .collect(),
        );
        for element in &diff.exiting {
            timeline.command(Command::Discard { id: element.id });
        }

        for changed in diff.relabelled() {
            timeline.command(Command::SetLabel {
                id: changed.id(),
                value: changed.after.value.clone(),
            });
        }
        timeline.group(
            diff.moved()
                .map(|c| {
                    Transition::translate(
                        Target::Element(c.id()),
                        c.before.point(&self.layout),
                        c.after.point(&self.layout),
                        durations.transition,
                        durations.easing,
                    )
                })
                .collect(),
        );

        for element in &diff.entering {
            timeline.command(Command::Spawn {
                id: element.id,
                value: element.value.clone(),
                at: element.point(&self.layout),
            });
        }
        timeline.group(
            diff.entering
                .iter()
                .map(|e| self.fade(Target::Element(e.id), 0.0, 1.0, durations))
                .collect(),
        );

        timeline
    }

    /// Drain a timeline, waiting for each group before the next effect
    pub async fn run<S: Surface + ?Sized>(&self, surface: &mut S, mut timeline: Timeline) -> Result<()> {
        debug!(effects = timeline.len(), "Running timeline");
        while let Some(effect) = timeline.pop() {
            match effect {
                Effect::Command(command) => surface.apply(command),
                Effect::Group(group) => surface.run(group).await?,
            }
        }
        Ok(())
    }

    fn fade(&self, target: Target, from: f64, to: f64, durations: &Durations) -> Transition {
        Transition::fade(target, from, to, durations.fade, durations.easing)
    }

    /// Surface position of a list slot
    pub fn slot(&self, position: usize, list_index: usize) -> Point {
        self.layout.place(position, list_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TransitionKind;
    use crate::diff::diff;
    use crate::model::{materialize, NodeStore};

    fn shape(timeline: &Timeline) -> Vec<&'static str> {
        timeline
            .iter()
            .map(|effect| match effect {
                Effect::Command(Command::SetLabel { .. }) => "label",
                Effect::Command(Command::Spawn { .. }) => "spawn",
                Effect::Command(Command::Discard { .. }) => "discard",
                Effect::Command(Command::Place { .. }) => "place",
                Effect::Group(group) => match group[0].kind {
                    TransitionKind::Translate { .. } => "move",
                    TransitionKind::Opacity { to, .. } if to > 0.5 => "fade-in",
                    TransitionKind::Opacity { .. } => "fade-out",
                },
            })
            .collect()
    }

    fn two_node_frame() -> Frame {
        let mut store = NodeStore::new();
        store.init(0, "A".into(), None);
        store.init(1, "B".into(), Some(0));
        materialize(&store).frame
    }

    #[test]
    fn test_resolve_prefers_log_metadata() {
        let metadata = VisualizationMetadata {
            transition_duration: Some(300),
            fade_in_duration: None,
        };
        let config = AnimationConfig {
            fade_in_duration_ms: 500,
            ..Default::default()
        };
        let durations = Durations::resolve(&metadata, &config);
        assert_eq!(durations.transition, Duration::from_millis(300));
        assert_eq!(durations.fade, Duration::from_millis(500));
    }

    #[test]
    fn test_defaults_are_one_second() {
        let durations = Durations::default();
        assert_eq!(durations.fade, Duration::from_millis(1000));
        assert_eq!(durations.transition, Duration::from_millis(1000));
    }

    #[test]
    fn test_for_step_respects_flag_and_config() {
        let durations = Durations::default();
        assert_eq!(durations.for_step(true), durations);
        assert_eq!(durations.for_step(false).fade, Duration::ZERO);

        let disabled = Durations {
            enabled: false,
            ..durations
        };
        assert_eq!(disabled.for_step(true).transition, Duration::ZERO);
    }

    #[test]
    fn test_pointer_walk_travels_to_successor() {
        let sequencer = Sequencer::default();
        let frame = two_node_frame();
        let durations = Durations::default();

        let timeline = sequencer.pointer_walk(&frame, 1, Some(0), &durations).unwrap();
        let effects: Vec<_> = timeline.iter().cloned().collect();
        assert_eq!(effects.len(), 4);
        assert_eq!(
            effects[0],
            Effect::Command(Command::Place {
                target: Target::Pointer,
                at: sequencer.slot(0, 0),
            })
        );
        match &effects[2] {
            Effect::Group(group) => assert_eq!(
                group[0].kind,
                TransitionKind::Translate {
                    from: sequencer.slot(0, 0),
                    to: sequencer.slot(1, 0),
                }
            ),
            other => panic!("expected a group, got {:?}", other),
        }
        assert_eq!(timeline.total_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_pointer_walk_without_successor_goes_to_next_slot() {
        let sequencer = Sequencer::default();
        let frame = two_node_frame();
        let timeline = sequencer
            .pointer_walk(&frame, 0, None, &Durations::default())
            .unwrap();
        let translate = timeline.iter().find_map(|effect| match effect {
            Effect::Group(group) => match group[0].kind {
                TransitionKind::Translate { to, .. } => Some(to),
                _ => None,
            },
            _ => None,
        });
        assert_eq!(translate, Some(sequencer.slot(2, 0)));
    }

    #[test]
    fn test_pointer_walk_missing_source() {
        let sequencer = Sequencer::default();
        let frame = two_node_frame();
        assert!(sequencer
            .pointer_walk(&frame, 42, None, &Durations::default())
            .is_none());
    }

    #[test]
    fn test_frame_transition_order() {
        let sequencer = Sequencer::default();
        let mut store = NodeStore::new();
        store.init(0, "A".into(), None);
        store.init(1, "B".into(), None);
        let before = materialize(&store).frame;

        // 1 -> 0 makes 0 move under 1; 2 enters; 0 is relabelled
        store.set_next(1, Some(0));
        store.set_value(0, "Z".into());
        store.init(2, "C".into(), None);
        let after = materialize(&store).frame;

        let timeline = sequencer.frame_transition(&diff(&before, &after), &Durations::default());
        assert_eq!(shape(&timeline), vec!["label", "move", "spawn", "fade-in"]);
    }

    #[test]
    fn test_exits_run_before_moves_and_entries() {
        let sequencer = Sequencer::default();
        let mut store = NodeStore::new();
        store.init(0, "A".into(), None);
        store.init(1, "B".into(), Some(0));
        store.init(2, "C".into(), None);
        // [B, A] on row 0, [C] on row 1
        let before = materialize(&store).frame;

        // 0 -> 1 closes a headless loop, so B and A leave; C moves up a row; D enters
        store.set_next(0, Some(1));
        store.init(3, "D".into(), None);
        let after = materialize(&store).frame;

        let changes = diff(&before, &after);
        assert_eq!(changes.moved().count(), 1);
        let timeline = sequencer.frame_transition(&changes, &Durations::default());

        assert_eq!(
            shape(&timeline),
            vec!["fade-out", "discard", "discard", "move", "spawn", "fade-in"]
        );
        let discarded: Vec<NodeId> = timeline
            .iter()
            .filter_map(|effect| match effect {
                Effect::Command(Command::Discard { id }) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(discarded, vec![1, 0]);
        match timeline.iter().next() {
            Some(Effect::Group(group)) => assert_eq!(group.len(), 2),
            other => panic!("expected the exit group first, got {:?}", other),
        };
    }

    #[test]
    fn test_instant_durations_keep_effects() {
        let sequencer = Sequencer::default();
        let frame = two_node_frame();
        let instant = Durations::default().instant();
        let timeline = sequencer.pointer_walk(&frame, 1, Some(0), &instant).unwrap();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.total_duration(), Duration::ZERO);
    }
}
