//! Drag handle behavior.

use kurbo::Point;

use super::{Interaction, NodeContext};
use crate::input::MouseButton;

/// Follows the pointer while the left button is held down on the shape.
///
/// The anchor is the local point grabbed at press time and is never
/// refreshed. Each move shifts the node's position by `local - anchor`
/// as-is, so the node tracks the pointer exactly only while its placement
/// has no rotation or scale.
#[derive(Debug, Clone, Default)]
pub struct Draggable {
    dragging: bool,
    anchor: Point,
}

impl Draggable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Local point grabbed by the current drag.
    pub fn anchor(&self) -> Option<Point> {
        self.dragging.then_some(self.anchor)
    }
}

impl Interaction for Draggable {
    fn pointer_moved(&mut self, node: &mut NodeContext<'_>, position: Point) -> bool {
        if !self.dragging {
            return false;
        }
        node.placement.move_by(position - self.anchor);
        true
    }

    fn button_pressed(
        &mut self,
        node: &mut NodeContext<'_>,
        position: Point,
        button: MouseButton,
    ) -> bool {
        if button != MouseButton::Left || !node.contains(position) {
            return false;
        }
        self.dragging = true;
        self.anchor = position;
        true
    }

    fn button_released(
        &mut self,
        node: &mut NodeContext<'_>,
        position: Point,
        button: MouseButton,
    ) -> bool {
        if button != MouseButton::Left || !self.dragging || !node.contains(position) {
            return false;
        }
        self.dragging = false;
        true
    }
}
