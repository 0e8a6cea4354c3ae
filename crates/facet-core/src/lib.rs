//! Facet Core Library
//!
//! Polygon meshes, the scene graph and input routing for Facet widgets.
//! Rendering lives in `facet-render`; this crate has no graphics dependency.

pub mod behavior;
pub mod content;
pub mod input;
pub mod mesh;
pub mod placement;
pub mod scene;

pub use behavior::{Behavior, Button, Draggable, Interaction, NodeContext};
pub use content::{Content, SerializableColor};
pub use input::{EventKind, InputEvent, Modifiers, MouseButton};
pub use mesh::{MeshError, PolygonMesh, Triangle, Vertex};
pub use placement::Placement;
pub use scene::{NodeKey, Scene, SceneError, SceneNode, SceneResult};
