use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identity of a list node, assigned by whoever produced the log
pub type NodeId = u64;

/// Opaque scalar payload of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeValue(pub serde_json::Value);

impl NodeValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self(serde_json::Value::String(value.into()))
    }
}

impl From<&str> for NodeValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for NodeValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<i64> for NodeValue {
    fn from(value: i64) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// One structural operation against the list graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum LinkedListOperation {
    Init {
        id: NodeId,
        value: NodeValue,
        next: Option<NodeId>,
    },
    SetValue {
        id: NodeId,
        value: NodeValue,
    },
    GetValue {
        id: NodeId,
    },
    SetNext {
        id: NodeId,
        next: Option<NodeId>,
    },
    GetNext {
        id: NodeId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Init,
    SetValue,
    GetValue,
    SetNext,
    GetNext,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::SetValue => "set_value",
            Self::GetValue => "get_value",
            Self::SetNext => "set_next",
            Self::GetNext => "get_next",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LinkedListOperation {
    pub fn id(&self) -> NodeId {
        match self {
            Self::Init { id, .. }
            | Self::SetValue { id, .. }
            | Self::GetValue { id }
            | Self::SetNext { id, .. }
            | Self::GetNext { id } => *id,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Init { .. } => OperationKind::Init,
            Self::SetValue { .. } => OperationKind::SetValue,
            Self::GetValue { .. } => OperationKind::GetValue,
            Self::SetNext { .. } => OperationKind::SetNext,
            Self::GetNext { .. } => OperationKind::GetNext,
        }
    }
}

/// Presentation data attached to each log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default = "default_animate")]
    pub animate: bool,
    /// Source lines that produced the operation
    #[serde(default)]
    pub source: Vec<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            animate: default_animate(),
            source: Vec::new(),
        }
    }
}

fn default_animate() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub operation: LinkedListOperation,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Operation {
    pub fn new(operation: LinkedListOperation) -> Self {
        Self {
            operation,
            metadata: Metadata::default(),
        }
    }

    pub fn with_source(mut self, source: Vec<String>) -> Self {
        self.metadata.source = source;
        self
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.metadata.animate = animate;
        self
    }
}

/// Duration overrides carried by a log, in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in_duration: Option<u64>,
}

/// A complete, ordered operation log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operations {
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub metadata: VisualizationMetadata,
}

impl Operations {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self {
            operations,
            metadata: VisualizationMetadata::default(),
        }
    }

    /// Parse a log. A bare array of entries is accepted as well as the full object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        match value {
            serde_json::Value::Array(_) => Ok(Self::new(serde_json::from_value(value)?)),
            serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(Error::InvalidLog(format!(
                "expected an object or an array, found {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
