use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::operation::{NodeId, NodeValue};

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: NodeValue,
}

/// Node values and successor edges, kept in two independent tables.
///
/// Nodes iterate in first-introduction order; re-initializing an id keeps its
/// original slot. Edges may reference ids that have no node yet.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: IndexMap<NodeId, Node>,
    edges: HashMap<NodeId, NodeId>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a node and its outgoing edge
    pub fn init(&mut self, id: NodeId, value: NodeValue, next: Option<NodeId>) {
        self.nodes.insert(id, Node { value });
        if let Some(next) = next {
            self.edges.insert(id, next);
        }
    }

    /// Returns false and leaves the store untouched when `id` is unknown
    pub fn set_value(&mut self, id: NodeId, value: NodeValue) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.value = value;
                true
            }
            None => false,
        }
    }

    /// Set or clear the outgoing edge of `id`, whether or not `id` is a node
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        match next {
            Some(next) => {
                self.edges.insert(id, next);
            }
            None => {
                self.edges.remove(&id);
            }
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn value(&self, id: NodeId) -> Option<&NodeValue> {
        self.nodes.get(&id).map(|node| &node.value)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.edges.get(&id).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Node ids in introduction order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn edge_targets(&self) -> HashSet<NodeId> {
        self.edges.values().copied().collect()
    }
}

/// Every node without an incoming edge, in introduction order
pub fn heads(store: &NodeStore) -> Vec<NodeId> {
    let targets = store.edge_targets();
    store.ids().filter(|id| !targets.contains(id)).collect()
}
