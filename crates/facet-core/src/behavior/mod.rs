//! Interaction policies attached to scene nodes.
//!
//! A node's structure (mesh, placement, children) is independent of how it
//! reacts to input. The reaction is a [`Behavior`] held by composition:
//! - `Passive` nodes never handle anything
//! - `Button` fires click callbacks
//! - `Draggable` follows the pointer while the left button is held
//! - `Custom` wraps any [`Interaction`] implementation

mod button;
mod draggable;

pub use button::{Button, ClickCallback};
pub use draggable::Draggable;

use kurbo::Point;

use crate::content::Content;
use crate::input::{Modifiers, MouseButton};
use crate::mesh::{MeshError, PolygonMesh};
use crate::placement::Placement;

/// Mutable view of the node a hook runs on.
pub struct NodeContext<'a> {
    pub mesh: &'a mut PolygonMesh,
    pub placement: &'a mut Placement,
    pub content: &'a Content,
}

impl NodeContext<'_> {
    /// Check if a local point lies inside the node's mesh.
    pub fn contains(&self, local: Point) -> bool {
        self.mesh.contains(local)
    }

    /// Rebuild the node's mesh from a new outline (identity mapping).
    pub fn resample(&mut self, outline: &[Point]) -> Result<(), MeshError> {
        *self.mesh = PolygonMesh::build(self.content.size, outline, &|p| p)?;
        Ok(())
    }
}

/// Per-event hooks. Every hook reports whether it handled the event.
///
/// Pointer positions are already converted to the node's local space.
#[allow(unused_variables)]
pub trait Interaction {
    fn pointer_moved(&mut self, node: &mut NodeContext<'_>, position: Point) -> bool {
        false
    }

    fn scrolled(&mut self, node: &mut NodeContext<'_>, position: Point, delta: f64) -> bool {
        false
    }

    fn button_pressed(
        &mut self,
        node: &mut NodeContext<'_>,
        position: Point,
        button: MouseButton,
    ) -> bool {
        false
    }

    fn button_released(
        &mut self,
        node: &mut NodeContext<'_>,
        position: Point,
        button: MouseButton,
    ) -> bool {
        false
    }

    fn key_pressed(&mut self, node: &mut NodeContext<'_>, key: &str, modifiers: Modifiers) -> bool {
        false
    }

    fn key_released(
        &mut self,
        node: &mut NodeContext<'_>,
        key: &str,
        modifiers: Modifiers,
    ) -> bool {
        false
    }
}

/// The interaction policy of a node.
#[derive(Default)]
pub enum Behavior {
    #[default]
    Passive,
    Button(Button),
    Draggable(Draggable),
    Custom(Box<dyn Interaction>),
}

impl std::fmt::Debug for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passive => f.write_str("Passive"),
            Self::Button(b) => f.debug_tuple("Button").field(b).finish(),
            Self::Draggable(d) => f.debug_tuple("Draggable").field(d).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Behavior {
    /// Wrap a custom interaction.
    pub fn custom(interaction: impl Interaction + 'static) -> Self {
        Self::Custom(Box::new(interaction))
    }

    pub fn is_passive(&self) -> bool {
        matches!(self, Self::Passive)
    }

    /// The hooks to run, `None` for passive nodes.
    pub fn interaction(&mut self) -> Option<&mut dyn Interaction> {
        match self {
            Self::Passive => None,
            Self::Button(button) => Some(button),
            Self::Draggable(draggable) => Some(draggable),
            Self::Custom(custom) => Some(custom.as_mut()),
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Self::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Self::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_draggable(&self) -> Option<&Draggable> {
        match self {
            Self::Draggable(draggable) => Some(draggable),
            _ => None,
        }
    }
}

impl From<Button> for Behavior {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<Draggable> for Behavior {
    fn from(draggable: Draggable) -> Self {
        Self::Draggable(draggable)
    }
}
