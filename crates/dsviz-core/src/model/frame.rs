use std::collections::HashMap;

use super::layout::{Layout, Point};
use crate::operation::{NodeId, NodeValue};

/// A reachable node annotated with where it sits in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub id: NodeId,
    pub value: NodeValue,
    /// Index within its own list (drives horizontal placement)
    pub position: usize,
    /// Ordinal of the list's head among all heads (drives vertical placement)
    pub list_index: usize,
    pub list_length: usize,
}

impl PositionedElement {
    pub fn point(&self, layout: &Layout) -> Point {
        layout.place(self.position, self.list_index)
    }

    /// True when both elements occupy the same slot
    pub fn same_slot(&self, other: &PositionedElement) -> bool {
        self.position == other.position && self.list_index == other.list_index
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.list_length
    }
}

/// The flattened collection of positioned elements for one step
#[derive(Debug, Clone, Default)]
pub struct Frame {
    elements: Vec<PositionedElement>,
    index: HashMap<NodeId, usize>,
}

impl Frame {
    pub(crate) fn from_elements(elements: Vec<PositionedElement>) -> Self {
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, element)| (element.id, i))
            .collect();
        Self { elements, index }
    }

    pub fn get(&self, id: NodeId) -> Option<&PositionedElement> {
        self.index.get(&id).map(|&i| &self.elements[i])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionedElement> {
        self.elements.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.elements.iter().map(|element| element.id)
    }

    /// Elements of one list, in list order
    pub fn list(&self, list_index: usize) -> impl Iterator<Item = &PositionedElement> {
        self.elements
            .iter()
            .filter(move |element| element.list_index == list_index)
    }

    pub fn list_count(&self) -> usize {
        self.elements
            .iter()
            .map(|element| element.list_index + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a PositionedElement;
    type IntoIter = std::slice::Iter<'a, PositionedElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
