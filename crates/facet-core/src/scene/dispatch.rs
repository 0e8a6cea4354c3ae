//! Event routing through the scene graph.
//!
//! Events enter at a root node and walk down the tree. Each node composes
//! its placement onto the transform inherited from its parent, offers the
//! event to its children front-to-back, and only runs its own hook when no
//! descendant handled the event. The deepest node that handles an event
//! therefore wins, and its ancestors never see it.

use kurbo::{Affine, Point};

use super::{NodeKey, Scene};
use crate::input::InputEvent;

impl Scene {
    /// Route an event from `root`, with window coordinates as root space.
    pub fn handle(&mut self, root: NodeKey, event: &InputEvent) -> bool {
        self.handle_with(root, event, Affine::IDENTITY)
    }

    /// Route an event into the subtree at `node`, whose parent's global
    /// transform is `parent`.
    ///
    /// Returns whether any node in the subtree handled the event.
    pub fn handle_with(&mut self, node: NodeKey, event: &InputEvent, parent: Affine) -> bool {
        let current = self.node(node);
        if !current.is_enabled() {
            return false;
        }
        let global = parent * current.placement().transform();

        // Last attached is drawn on top, so it gets the first chance.
        let mut index = current.children.len();
        while index > 0 {
            index -= 1;
            let child = self.node(node).children[index];
            if self.handle_with(child, event, global) {
                return true;
            }
        }

        self.run_hook(node, event, global)
    }

    fn run_hook(&mut self, node: NodeKey, event: &InputEvent, global: Affine) -> bool {
        let (behavior, mut ctx) = self.node_mut(node).split_for_hook();
        let Some(hooks) = behavior.interaction() else {
            return false;
        };

        // Only computed once a hook actually needs the local point.
        let to_local = |position: Point| {
            let det = global.determinant();
            if det == 0.0 || !det.is_finite() {
                log::trace!("Node {:?} has a singular transform, skipping hit test", node);
                None
            } else {
                Some(global.inverse() * position)
            }
        };

        let handled = match event {
            InputEvent::PointerMoved { position } => {
                to_local(*position).is_some_and(|local| hooks.pointer_moved(&mut ctx, local))
            }
            InputEvent::Scrolled { position, delta } => to_local(*position)
                .is_some_and(|local| hooks.scrolled(&mut ctx, local, *delta)),
            InputEvent::ButtonPressed { position, button } => to_local(*position)
                .is_some_and(|local| hooks.button_pressed(&mut ctx, local, *button)),
            InputEvent::ButtonReleased { position, button } => to_local(*position)
                .is_some_and(|local| hooks.button_released(&mut ctx, local, *button)),
            InputEvent::KeyPressed { key, modifiers } => {
                hooks.key_pressed(&mut ctx, key, *modifiers)
            }
            InputEvent::KeyReleased { key, modifiers } => {
                hooks.key_released(&mut ctx, key, *modifiers)
            }
        };

        if handled {
            log::trace!("{:?} handled by {:?}", event.kind(), node);
        }
        handled
    }
}
