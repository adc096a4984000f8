//! Playback driver
//!
//! Replays a log one entry at a time. Each step runs to completion,
//! animation included, before the next entry is applied:
//!
//! 1. apply the mutation to the store
//! 2. for `get_next`, walk the pointer over the pre-mutation frame
//! 3. materialize the new frame
//! 4. diff it against the previous one
//! 5. animate exits, updates and entries

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::animation::{Durations, Sequencer, StepInfo, Surface};
use crate::config::AnimationConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::diff::diff;
use crate::interpreter::{self, StepEffect};
use crate::model::{materialize, Frame, Layout, NodeStore, WalkAnomaly};
use crate::operation::{pretty_print, Operation, Operations};
use crate::Result;

/// Summary of one playback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    pub steps: usize,
    pub applied: usize,
    /// Entries dropped as no-ops
    pub skipped: usize,
    /// Problem diagnostics emitted
    pub diagnostics: usize,
}

pub struct Player<S: Surface> {
    surface: S,
    config: AnimationConfig,
    sequencer: Sequencer,
    store: NodeStore,
    frame: Frame,
    anomalies: Vec<WalkAnomaly>,
    diagnostics: Diagnostics,
    report: PlaybackReport,
}

impl<S: Surface> Player<S> {
    pub fn new(surface: S, config: AnimationConfig) -> Self {
        Self {
            surface,
            config,
            sequencer: Sequencer::default(),
            store: NodeStore::new(),
            frame: Frame::default(),
            anomalies: Vec::new(),
            diagnostics: Diagnostics::new(),
            report: PlaybackReport::default(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.sequencer = Sequencer::new(layout);
        self
    }

    /// Forward diagnostics to a subscriber
    pub fn with_diagnostics(mut self, tx: mpsc::UnboundedSender<Diagnostic>) -> Self {
        self.diagnostics = Diagnostics::with_sender(tx);
        self
    }

    /// Play every entry of the log in order
    pub async fn play(&mut self, operations: &Operations) -> Result<PlaybackReport> {
        let durations = Durations::resolve(&operations.metadata, &self.config);
        let total = operations.len();
        info!(
            steps = total,
            fade_ms = durations.fade.as_millis() as u64,
            transition_ms = durations.transition.as_millis() as u64,
            "Starting playback"
        );

        for (index, entry) in operations.operations.iter().enumerate() {
            self.step(index, total, entry, &durations).await?;
        }

        let report = self.report();
        self.surface.finish(&report).await?;
        info!(
            steps = report.steps,
            skipped = report.skipped,
            diagnostics = report.diagnostics,
            "Playback finished"
        );
        Ok(report)
    }

    /// Apply and animate a single entry
    pub async fn step(
        &mut self,
        index: usize,
        total: usize,
        entry: &Operation,
        durations: &Durations,
    ) -> Result<()> {
        let operation = &entry.operation;
        let durations = durations.for_step(entry.metadata.animate);
        let animated = !durations.fade.is_zero() || !durations.transition.is_zero();

        self.surface
            .begin_step(&StepInfo {
                index,
                total,
                kind: operation.kind(),
                operation: pretty_print(operation),
                source: entry.metadata.source.clone(),
                animate: animated,
            })
            .await?;
        debug!(step = index, op = %pretty_print(operation), id = operation.id(), "Applying");

        let outcome = interpreter::apply(&mut self.store, operation);
        self.report.steps += 1;
        if outcome.applied {
            self.report.applied += 1;
        } else {
            self.report.skipped += 1;
            debug!(step = index, op = %operation.kind(), id = operation.id(), "Unknown node, entry skipped");
        }

        if let StepEffect::Traversed(id) = outcome.effect {
            let successor = self.store.next(id);
            match self
                .sequencer
                .pointer_walk(&self.frame, id, successor, &durations)
            {
                Some(timeline) => self.sequencer.run(&mut self.surface, timeline).await?,
                None => self
                    .diagnostics
                    .emit(Diagnostic::MissingElement { step: index, id }),
            }
        }

        let materialized = materialize(&self.store);
        for anomaly in &materialized.anomalies {
            if !self.anomalies.contains(anomaly) {
                self.diagnostics
                    .emit(Diagnostic::from_anomaly(index, *anomaly));
            }
        }
        self.anomalies = materialized.anomalies;

        let changes = diff(&self.frame, &materialized.frame);
        let timeline = self.sequencer.frame_transition(&changes, &durations);
        self.sequencer.run(&mut self.surface, timeline).await?;
        self.frame = materialized.frame;

        self.diagnostics.emit(Diagnostic::StepCompleted {
            step: index,
            animated,
        });
        Ok(())
    }

    /// The frame currently shown
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn report(&self) -> PlaybackReport {
        PlaybackReport {
            diagnostics: self.diagnostics.problems(),
            ..self.report.clone()
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Run a whole log against `surface`
pub async fn animate_operations<S: Surface>(
    surface: &mut S,
    operations: &Operations,
    config: &AnimationConfig,
) -> Result<PlaybackReport> {
    Player::new(surface, config.clone()).play(operations).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Recorded, RecordingSurface};
    use crate::operation::LinkedListOperation;

    fn entry(operation: LinkedListOperation) -> Operation {
        Operation::new(operation)
    }

    #[tokio::test]
    async fn test_step_updates_frame() {
        let mut player = Player::new(RecordingSurface::new(), AnimationConfig::default());
        let durations = Durations::default();

        player
            .step(
                0,
                2,
                &entry(LinkedListOperation::Init { id: 0, value: "A".into(), next: None }),
                &durations,
            )
            .await
            .unwrap();
        player
            .step(
                1,
                2,
                &entry(LinkedListOperation::Init { id: 1, value: "B".into(), next: Some(0) }),
                &durations,
            )
            .await
            .unwrap();

        let ids: Vec<_> = player.frame().ids().collect();
        assert_eq!(ids, vec![1, 0]);
        assert_eq!(player.surface().scene().len(), 2);
        assert_eq!(player.report().steps, 2);
    }

    #[tokio::test]
    async fn test_unknown_set_value_is_skipped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut player =
            Player::new(RecordingSurface::new(), AnimationConfig::default()).with_diagnostics(tx);
        let log = Operations::new(vec![entry(LinkedListOperation::SetValue {
            id: 5,
            value: "x".into(),
        })]);

        let report = player.play(&log).await.unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.diagnostics, 0);
        assert_eq!(
            rx.try_recv().unwrap(),
            Diagnostic::StepCompleted { step: 0, animated: true }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_step_info_reports_resolved_animation() {
        let config = AnimationConfig {
            enabled: false,
            ..Default::default()
        };
        let mut player = Player::new(RecordingSurface::new(), config);
        let log = Operations::new(vec![entry(LinkedListOperation::Init {
            id: 0,
            value: "A".into(),
            next: None,
        })]);

        player.play(&log).await.unwrap();

        let steps: Vec<bool> = player
            .surface()
            .log()
            .iter()
            .filter_map(|entry| match entry {
                Recorded::Step(step) => Some(step.animate),
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![false]);
    }
}
