//! Structured diagnostics emitted during playback
//!
//! Hosts subscribe through an unbounded channel; every diagnostic is also
//! written to the tracing log. Delivery never affects playback.

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::model::WalkAnomaly;
use crate::operation::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A traversal named an id with no element in the current frame; pointer walk skipped
    MissingElement { step: usize, id: NodeId },
    /// A walk came back to a node it already visited; the list was truncated there
    CycleDetected { step: usize, head: NodeId, at: NodeId },
    /// A walk reached a node already shown in an earlier list; the list was truncated there
    SharedSuccessor { step: usize, head: NodeId, at: NodeId },
    /// A step finished, including its animation
    StepCompleted { step: usize, animated: bool },
}

impl Diagnostic {
    pub(crate) fn from_anomaly(step: usize, anomaly: WalkAnomaly) -> Self {
        match anomaly {
            WalkAnomaly::Cycle { head, at } => Self::CycleDetected { step, head, at },
            WalkAnomaly::SharedSuccessor { head, at } => Self::SharedSuccessor { step, head, at },
        }
    }

    /// Whether this reports a problem with the log rather than progress
    pub fn is_problem(&self) -> bool {
        !matches!(self, Self::StepCompleted { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { step, id } => {
                write!(f, "step {}: no element for node {} in the current frame", step, id)
            }
            Self::CycleDetected { step, head, at } => {
                write!(f, "step {}: cycle in list {} at node {}", step, head, at)
            }
            Self::SharedSuccessor { step, head, at } => {
                write!(f, "step {}: list {} reaches node {} shown in another list", step, head, at)
            }
            Self::StepCompleted { step, animated } => {
                write!(f, "step {} completed (animated: {})", step, animated)
            }
        }
    }
}

/// Fan-out point for diagnostics: tracing always, channel when configured
#[derive(Debug, Default)]
pub struct Diagnostics {
    tx: Option<mpsc::UnboundedSender<Diagnostic>>,
    problems: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sender(tx: mpsc::UnboundedSender<Diagnostic>) -> Self {
        Self {
            tx: Some(tx),
            problems: 0,
        }
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::StepCompleted { .. } => trace!("{}", diagnostic),
            _ => warn!("{}", diagnostic),
        }
        if diagnostic.is_problem() {
            self.problems += 1;
        }

        if let Some(ref tx) = self.tx {
            if tx.send(diagnostic).is_err() {
                debug!("Diagnostic receiver dropped");
            }
        }
    }

    /// Number of problem diagnostics emitted so far
    pub fn problems(&self) -> usize {
        self.problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_counts_problems_only() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut diagnostics = Diagnostics::with_sender(tx);

        diagnostics.emit(Diagnostic::StepCompleted { step: 0, animated: true });
        diagnostics.emit(Diagnostic::MissingElement { step: 1, id: 4 });

        assert_eq!(diagnostics.problems(), 1);
        assert_eq!(
            rx.try_recv().unwrap(),
            Diagnostic::StepCompleted { step: 0, animated: true }
        );
        assert_eq!(rx.try_recv().unwrap(), Diagnostic::MissingElement { step: 1, id: 4 });
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut diagnostics = Diagnostics::with_sender(tx);
        diagnostics.emit(Diagnostic::CycleDetected { step: 0, head: 1, at: 2 });
        assert_eq!(diagnostics.problems(), 1);
    }
}
