use std::collections::HashMap;

use super::frame::{Frame, PositionedElement};
use super::store::{heads, Node, NodeStore};
use crate::operation::NodeId;

/// Lazy walk along successor edges starting at one head.
///
/// Ends at the first id without a successor, or at an edge pointing to an id
/// that has no node. The walk itself has no cycle guard; callers that need
/// termination on malformed graphs must stop it themselves (see `materialize`).
pub struct ListWalker<'a> {
    store: &'a NodeStore,
    next: Option<NodeId>,
}

impl<'a> ListWalker<'a> {
    pub fn new(store: &'a NodeStore, head: NodeId) -> Self {
        Self {
            store,
            next: Some(head),
        }
    }
}

impl<'a> Iterator for ListWalker<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let Some(node) = self.store.node(id) else {
            self.next = None;
            return None;
        };
        self.next = self.store.next(id);
        Some((id, node))
    }
}

/// Structural problems found (and cut off) while walking lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAnomaly {
    /// The walk from `head` came back to `at`, which it had already visited
    Cycle { head: NodeId, at: NodeId },
    /// The walk from `head` reached `at`, already placed in an earlier list
    SharedSuccessor { head: NodeId, at: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct Materialized {
    pub heads: Vec<NodeId>,
    pub frame: Frame,
    pub anomalies: Vec<WalkAnomaly>,
}

/// Walk every head and flatten the lists into one positioned frame.
///
/// Each id is placed at most once per frame: a walk is truncated right before
/// an id that is already placed, and the truncation is reported as an anomaly.
pub fn materialize(store: &NodeStore) -> Materialized {
    let heads = heads(store);
    let mut placed: HashMap<NodeId, usize> = HashMap::new();
    let mut elements = Vec::with_capacity(store.len());
    let mut anomalies = Vec::new();

    for (list_index, &head) in heads.iter().enumerate() {
        let mut walk = Vec::new();
        for (id, node) in ListWalker::new(store, head) {
            if let Some(&owner) = placed.get(&id) {
                anomalies.push(if owner == list_index {
                    WalkAnomaly::Cycle { head, at: id }
                } else {
                    WalkAnomaly::SharedSuccessor { head, at: id }
                });
                break;
            }
            placed.insert(id, list_index);
            walk.push((id, node));
        }

        let list_length = walk.len();
        elements.extend(
            walk.into_iter()
                .enumerate()
                .map(|(position, (id, node))| PositionedElement {
                    id,
                    value: node.value.clone(),
                    position,
                    list_index,
                    list_length,
                }),
        );
    }

    Materialized {
        heads,
        frame: Frame::from_elements(elements),
        anomalies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::NodeValue;

    fn summary(frame: &Frame) -> Vec<(NodeId, String, usize, usize, usize)> {
        frame
            .iter()
            .map(|e| (e.id, e.value.to_string(), e.position, e.list_index, e.list_length))
            .collect()
    }

    #[test]
    fn test_two_node_list() {
        let mut store = NodeStore::new();
        store.init(0, "A".into(), None);
        store.init(1, "B".into(), Some(0));

        let result = materialize(&store);
        assert_eq!(result.heads, vec![1]);
        assert_eq!(
            summary(&result.frame),
            vec![(1, "B".into(), 0, 0, 2), (0, "A".into(), 1, 0, 2)]
        );
        assert!(result.anomalies.is_empty());
    }

    #[test]
    fn test_singletons_are_their_own_lists() {
        let mut store = NodeStore::new();
        for id in 0..4 {
            store.init(id, NodeValue::from(id as i64), None);
        }
        let result = materialize(&store);
        assert_eq!(result.heads, vec![0, 1, 2, 3]);
        for (i, element) in result.frame.iter().enumerate() {
            assert_eq!(element.list_length, 1);
            assert_eq!(element.position, 0);
            assert_eq!(element.list_index, i);
        }
    }

    #[test]
    fn test_walk_stops_at_missing_node() {
        let mut store = NodeStore::new();
        store.init(0, "A".into(), Some(42));
        let walked: Vec<NodeId> = ListWalker::new(&store, 0).map(|(id, _)| id).collect();
        assert_eq!(walked, vec![0]);
    }

    #[test]
    fn test_cycle_below_head_is_truncated() {
        // 0 -> 1 -> 2 -> 1
        let mut store = NodeStore::new();
        store.init(0, "A".into(), Some(1));
        store.init(1, "B".into(), Some(2));
        store.init(2, "C".into(), Some(1));

        let result = materialize(&store);
        assert_eq!(result.frame.ids().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(result.frame.get(2).unwrap().list_length, 3);
        assert_eq!(result.anomalies, vec![WalkAnomaly::Cycle { head: 0, at: 1 }]);
    }

    #[test]
    fn test_headless_cycle_is_not_rendered() {
        let mut store = NodeStore::new();
        store.init(0, "A".into(), Some(1));
        store.init(1, "B".into(), Some(0));
        store.init(2, "C".into(), None);

        let result = materialize(&store);
        assert_eq!(result.heads, vec![2]);
        assert_eq!(result.frame.ids().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_shared_successor_is_placed_once() {
        // 0 -> 2, 1 -> 2
        let mut store = NodeStore::new();
        store.init(2, "C".into(), None);
        store.init(0, "A".into(), Some(2));
        store.init(1, "B".into(), Some(2));

        let result = materialize(&store);
        assert_eq!(result.heads, vec![0, 1]);
        assert_eq!(result.frame.ids().collect::<Vec<_>>(), vec![0, 2, 1]);
        assert_eq!(result.frame.get(1).unwrap().list_length, 1);
        assert_eq!(
            result.anomalies,
            vec![WalkAnomaly::SharedSuccessor { head: 1, at: 2 }]
        );
    }
}
