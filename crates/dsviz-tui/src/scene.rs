//! What the terminal surface currently shows

use std::collections::BTreeMap;

use dsviz_core::animation::{Command, PointerState, SceneElement, Target};
use dsviz_core::model::Point;
use dsviz_core::operation::NodeId;
use tracing::trace;

use crate::tween::Sample;

#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: BTreeMap<NodeId, SceneElement>,
    pointer: PointerState,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::Spawn { id, value, at } => {
                self.elements.insert(
                    *id,
                    SceneElement {
                        value: value.clone(),
                        at: *at,
                        opacity: 0.0,
                    },
                );
            }
            Command::SetLabel { id, value } => {
                if let Some(element) = self.elements.get_mut(id) {
                    element.value = value.clone();
                }
            }
            Command::Place { target, at } => self.set(*target, Sample::At(*at)),
            Command::Discard { id } => {
                self.elements.remove(id);
            }
        }
    }

    /// Write one interpolated value
    pub fn set(&mut self, target: Target, sample: Sample) {
        match target {
            Target::Pointer => match sample {
                Sample::At(at) => self.pointer.at = Some(at),
                Sample::Opacity(opacity) => self.pointer.opacity = opacity,
            },
            Target::Element(id) => match self.elements.get_mut(&id) {
                Some(element) => match sample {
                    Sample::At(at) => element.at = at,
                    Sample::Opacity(opacity) => element.opacity = opacity,
                },
                None => trace!(id, "Sample for an element no longer on screen"),
            },
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = (NodeId, &SceneElement)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    pub fn element(&self, id: NodeId) -> Option<&SceneElement> {
        self.elements.get(&id)
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Bottom-right corner of everything on screen, in layout units
    pub fn extent(&self) -> Point {
        self.elements.values().fold(Point::new(0.0, 0.0), |acc, e| {
            Point::new(acc.x.max(e.at.x), acc.y.max(e.at.y))
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsviz_core::operation::NodeValue;

    fn spawn(id: NodeId, value: &str, x: f64) -> Command {
        Command::Spawn {
            id,
            value: NodeValue::from(value),
            at: Point::new(x, 40.0),
        }
    }

    #[test]
    fn test_spawn_starts_transparent() {
        let mut scene = Scene::new();
        scene.apply(&spawn(0, "A", 40.0));
        assert_eq!(scene.element(0).map(|e| e.opacity), Some(0.0));
        scene.set(Target::Element(0), Sample::Opacity(1.0));
        assert_eq!(scene.element(0).map(|e| e.opacity), Some(1.0));
    }

    #[test]
    fn test_label_place_discard() {
        let mut scene = Scene::new();
        scene.apply(&spawn(0, "A", 40.0));
        scene.apply(&Command::SetLabel {
            id: 0,
            value: NodeValue::from("Z"),
        });
        scene.apply(&Command::Place {
            target: Target::Element(0),
            at: Point::new(190.0, 40.0),
        });
        let element = scene.element(0).unwrap();
        assert_eq!(element.value.to_string(), "Z");
        assert_eq!(element.at, Point::new(190.0, 40.0));

        scene.apply(&Command::Discard { id: 0 });
        assert!(scene.is_empty());
    }

    #[test]
    fn test_pointer_and_unknown_targets() {
        let mut scene = Scene::new();
        scene.apply(&Command::Place {
            target: Target::Pointer,
            at: Point::new(40.0, 40.0),
        });
        scene.set(Target::Pointer, Sample::Opacity(1.0));
        scene.set(Target::Element(9), Sample::Opacity(1.0));
        assert_eq!(scene.pointer().at, Some(Point::new(40.0, 40.0)));
        assert_eq!(scene.pointer().opacity, 1.0);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_extent() {
        let mut scene = Scene::new();
        scene.apply(&spawn(0, "A", 40.0));
        scene.apply(&spawn(1, "B", 190.0));
        assert_eq!(scene.extent(), Point::new(190.0, 40.0));
    }
}
