//! Click button behavior.

use kurbo::Point;

use super::{Interaction, NodeContext};
use crate::input::MouseButton;

/// Callback fired on a completed click. It may reshape its own node.
pub type ClickCallback = Box<dyn FnMut(&mut NodeContext<'_>)>;

/// Fires a callback when a button is pressed and released inside the shape.
#[derive(Default)]
pub struct Button {
    left_armed: bool,
    right_armed: bool,
    left_click: Option<ClickCallback>,
    right_click: Option<ClickCallback>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("left_armed", &self.left_armed)
            .field("right_armed", &self.right_armed)
            .field("left_click", &self.left_click.is_some())
            .field("right_click", &self.right_click.is_some())
            .finish()
    }
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_left_click(mut self, callback: impl FnMut(&mut NodeContext<'_>) + 'static) -> Self {
        self.set_left_click(callback);
        self
    }

    pub fn on_right_click(mut self, callback: impl FnMut(&mut NodeContext<'_>) + 'static) -> Self {
        self.set_right_click(callback);
        self
    }

    pub fn set_left_click(&mut self, callback: impl FnMut(&mut NodeContext<'_>) + 'static) {
        self.left_click = Some(Box::new(callback));
    }

    pub fn set_right_click(&mut self, callback: impl FnMut(&mut NodeContext<'_>) + 'static) {
        self.right_click = Some(Box::new(callback));
    }

    /// Check if a press of `button` is waiting for its release.
    pub fn is_armed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left_armed,
            MouseButton::Right => self.right_armed,
            MouseButton::Middle => false,
        }
    }

    fn disarm(&mut self) {
        self.left_armed = false;
        self.right_armed = false;
    }
}

impl Interaction for Button {
    fn button_pressed(
        &mut self,
        node: &mut NodeContext<'_>,
        position: Point,
        button: MouseButton,
    ) -> bool {
        if !node.contains(position) {
            self.disarm();
            return false;
        }
        match button {
            MouseButton::Left => self.left_armed = true,
            MouseButton::Right => self.right_armed = true,
            MouseButton::Middle => {}
        }
        true
    }

    fn button_released(
        &mut self,
        node: &mut NodeContext<'_>,
        position: Point,
        button: MouseButton,
    ) -> bool {
        let inside = node.contains(position);
        if inside {
            let callback = match button {
                MouseButton::Left if self.left_armed => self.left_click.as_mut(),
                MouseButton::Right if self.right_armed => self.right_click.as_mut(),
                _ => None,
            };
            if let Some(callback) = callback {
                log::debug!("Button click: {:?}", button);
                callback(node);
            }
        }
        self.disarm();
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::mesh::PolygonMesh;
    use crate::placement::Placement;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Fixture {
        content: Content,
        mesh: PolygonMesh,
        placement: Placement,
    }

    impl Fixture {
        fn new() -> Self {
            let content = Content::blank(50.0, 50.0);
            Self {
                mesh: PolygonMesh::rectangle(content.size).unwrap(),
                placement: Placement::default(),
                content,
            }
        }

        fn ctx(&mut self) -> NodeContext<'_> {
            NodeContext {
                mesh: &mut self.mesh,
                placement: &mut self.placement,
                content: &self.content,
            }
        }
    }

    fn counting_button() -> (Button, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let left = Rc::new(Cell::new(0));
        let right = Rc::new(Cell::new(0));
        let (l, r) = (left.clone(), right.clone());
        let button = Button::new()
            .on_left_click(move |_| l.set(l.get() + 1))
            .on_right_click(move |_| r.set(r.get() + 1));
        (button, left, right)
    }

    const INSIDE: Point = Point::new(25.0, 25.0);
    const OUTSIDE: Point = Point::new(75.0, 25.0);

    #[test]
    fn test_click_inside_fires_once() {
        let mut fixture = Fixture::new();
        let (mut button, left, right) = counting_button();

        assert!(button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left));
        assert!(button.is_armed(MouseButton::Left));
        assert!(button.button_released(&mut fixture.ctx(), INSIDE, MouseButton::Left));
        assert_eq!(left.get(), 1);
        assert_eq!(right.get(), 0);
        assert!(!button.is_armed(MouseButton::Left));

        // Release again without a press: nothing armed, nothing fires.
        assert!(button.button_released(&mut fixture.ctx(), INSIDE, MouseButton::Left));
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn test_release_outside_never_fires() {
        let mut fixture = Fixture::new();
        let (mut button, left, _) = counting_button();

        assert!(button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left));
        assert!(!button.button_released(&mut fixture.ctx(), OUTSIDE, MouseButton::Left));
        assert_eq!(left.get(), 0);
        assert!(!button.is_armed(MouseButton::Left));
    }

    #[test]
    fn test_press_outside_disarms() {
        let mut fixture = Fixture::new();
        let (mut button, left, right) = counting_button();

        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left);
        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Right);
        assert!(!button.button_pressed(&mut fixture.ctx(), OUTSIDE, MouseButton::Left));
        assert!(!button.is_armed(MouseButton::Left));
        assert!(!button.is_armed(MouseButton::Right));

        button.button_released(&mut fixture.ctx(), INSIDE, MouseButton::Right);
        assert_eq!(left.get(), 0);
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn test_second_press_still_needs_containment() {
        let mut fixture = Fixture::new();
        let (mut button, left, _) = counting_button();

        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left);
        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left);
        assert!(!button.button_released(&mut fixture.ctx(), OUTSIDE, MouseButton::Left));
        assert_eq!(left.get(), 0);

        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left);
        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left);
        assert!(button.button_released(&mut fixture.ctx(), INSIDE, MouseButton::Left));
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut fixture = Fixture::new();
        let (mut button, left, right) = counting_button();

        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Right);
        // Left release while only right is armed: no left click, both disarmed.
        assert!(button.button_released(&mut fixture.ctx(), INSIDE, MouseButton::Left));
        assert_eq!(left.get(), 0);
        assert_eq!(right.get(), 0);
        assert!(!button.is_armed(MouseButton::Right));
    }

    #[test]
    fn test_middle_press_is_handled_but_not_armed() {
        let mut fixture = Fixture::new();
        let (mut button, _, _) = counting_button();
        assert!(button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Middle));
        assert!(!button.is_armed(MouseButton::Middle));
    }

    #[test]
    fn test_callback_can_reshape_node() {
        let mut fixture = Fixture::new();
        let mut button = Button::new().on_left_click(|node| {
            node.resample(&[
                Point::new(0.0, 0.0),
                Point::new(0.0, 50.0),
                Point::new(50.0, 0.0),
            ])
            .unwrap();
        });

        button.button_pressed(&mut fixture.ctx(), INSIDE, MouseButton::Left);
        button.button_released(&mut fixture.ctx(), INSIDE, MouseButton::Left);
        assert_eq!(fixture.mesh.triangle_count(), 1);
        assert!(!fixture.mesh.contains(Point::new(40.0, 40.0)));
    }
}
