//! Programmatic construction of operation logs
//!
//! A `Recorder` is attached to a data structure under observation: every node
//! construction, field read and field write is appended together with the
//! source lines that caused it.

use super::models::{
    LinkedListOperation, Metadata, NodeId, NodeValue, Operation, Operations, VisualizationMetadata,
};

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    operations: Vec<Operation>,
    next_id: NodeId,
    visualized_upto: usize,
    metadata: VisualizationMetadata,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach duration overrides to every log produced by `visualize`
    pub fn with_metadata(mut self, metadata: VisualizationMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Append a raw entry
    pub fn log(&mut self, operation: LinkedListOperation, source: &[&str]) {
        self.operations.push(Operation {
            operation,
            metadata: Metadata {
                animate: true,
                source: source.iter().map(|line| line.to_string()).collect(),
            },
        });
    }

    /// Record a node construction and return the id allocated for it
    pub fn init(
        &mut self,
        value: impl Into<NodeValue>,
        next: Option<NodeId>,
        source: &[&str],
    ) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.log(
            LinkedListOperation::Init {
                id,
                value: value.into(),
                next,
            },
            source,
        );
        id
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<NodeValue>, source: &[&str]) {
        self.log(
            LinkedListOperation::SetValue {
                id,
                value: value.into(),
            },
            source,
        );
    }

    pub fn get_value(&mut self, id: NodeId, source: &[&str]) {
        self.log(LinkedListOperation::GetValue { id }, source);
    }

    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>, source: &[&str]) {
        self.log(LinkedListOperation::SetNext { id, next }, source);
    }

    pub fn get_next(&mut self, id: NodeId, source: &[&str]) {
        self.log(LinkedListOperation::GetNext { id }, source);
    }

    /// Snapshot the log for playback.
    ///
    /// Entries already handed out by an earlier call replay without animation,
    /// so each call only animates what was recorded since the previous one.
    pub fn visualize(&mut self) -> Operations {
        let operations = self
            .operations
            .iter()
            .enumerate()
            .map(|(index, op)| Operation {
                operation: op.operation.clone(),
                metadata: Metadata {
                    animate: index >= self.visualized_upto,
                    source: op.metadata.source.clone(),
                },
            })
            .collect();
        self.visualized_upto = self.operations.len();

        Operations {
            operations,
            metadata: self.metadata.clone(),
        }
    }

    /// A new recorder continuing from a copy of this log
    pub fn fork(&self) -> Self {
        Self {
            operations: self.operations.clone(),
            next_id: self.next_id,
            visualized_upto: 0,
            metadata: self.metadata.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
