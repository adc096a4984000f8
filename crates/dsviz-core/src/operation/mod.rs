mod models;
mod pretty;
mod recorder;

pub use models::{
    LinkedListOperation, Metadata, NodeId, NodeValue, Operation, OperationKind, Operations,
    VisualizationMetadata,
};
pub use pretty::pretty_print;
pub use recorder::Recorder;
