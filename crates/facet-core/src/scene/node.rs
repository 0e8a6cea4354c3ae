//! Scene node definition.

use kurbo::{Point, Vec2};

use super::NodeKey;
use crate::behavior::{Behavior, NodeContext};
use crate::content::Content;
use crate::mesh::{MeshError, PolygonMesh};
use crate::placement::Placement;

/// A transformed, textured, hit-testable node of the scene graph.
///
/// Nodes start disabled, like freshly created windows: call
/// [`enable`](Self::enable) or build with [`with_enabled`](Self::with_enabled)
/// before they draw or receive events.
#[derive(Debug)]
pub struct SceneNode {
    id: String,
    placement: Placement,
    enabled: bool,
    content: Content,
    mesh: PolygonMesh,
    pub(super) children: Vec<NodeKey>,
    behavior: Behavior,
}

impl SceneNode {
    /// Create a node whose mesh covers its whole content rectangle.
    pub fn new(id: impl Into<String>, content: Content) -> Result<Self, MeshError> {
        Ok(Self {
            id: id.into(),
            placement: Placement::default(),
            enabled: false,
            mesh: PolygonMesh::rectangle(content.size)?,
            content,
            children: Vec::new(),
            behavior: Behavior::Passive,
        })
    }

    pub fn with_behavior(mut self, behavior: impl Into<Behavior>) -> Self {
        self.behavior = behavior.into();
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Rebuild the mesh from `outline`, mapping every outline point through
    /// `mapping` to get its render position.
    pub fn resample(
        &mut self,
        outline: &[Point],
        mapping: &dyn Fn(Point) -> Point,
    ) -> Result<(), MeshError> {
        self.mesh = PolygonMesh::build(self.content.size, outline, mapping)?;
        Ok(())
    }

    /// Rebuild the mesh from `outline` with positions equal to content
    /// coordinates.
    pub fn resample_outline(&mut self, outline: &[Point]) -> Result<(), MeshError> {
        self.resample(outline, &|p| p)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    /// Shift the node by a delta in parent coordinates.
    pub fn move_by(&mut self, delta: Vec2) {
        self.placement.move_by(delta);
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn mesh(&self) -> &PolygonMesh {
        &self.mesh
    }

    /// Check if a point in this node's local space hits its mesh.
    pub fn contains(&self, local: Point) -> bool {
        self.mesh.contains(local)
    }

    /// Children in insertion (back-to-front) order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }

    /// Split the node into its behavior and the context its hooks act on.
    pub(super) fn split_for_hook(&mut self) -> (&mut Behavior, NodeContext<'_>) {
        (
            &mut self.behavior,
            NodeContext {
                mesh: &mut self.mesh,
                placement: &mut self.placement,
                content: &self.content,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Draggable;

    #[test]
    fn test_node_creation() {
        let node = SceneNode::new("canvas", Content::blank(900.0, 600.0)).unwrap();
        assert_eq!(node.id(), "canvas");
        assert!(!node.is_enabled());
        assert!(node.children().is_empty());
        assert!(node.behavior().is_passive());
        assert_eq!(node.mesh().triangle_count(), 2);
        assert!(node.contains(Point::new(899.0, 599.0)));
    }

    #[test]
    fn test_enable_disable() {
        let mut node = SceneNode::new("n", Content::blank(10.0, 10.0)).unwrap();
        node.enable();
        assert!(node.is_enabled());
        node.disable();
        assert!(!node.is_enabled());
    }

    #[test]
    fn test_resample_with_mapping() {
        let mut node = SceneNode::new("n", Content::blank(10.0, 10.0)).unwrap();
        node.resample(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 10.0),
            ],
            &|p| Point::new(p.x + 100.0, p.y),
        )
        .unwrap();
        assert_eq!(node.mesh().triangle_count(), 1);
        assert!(node.contains(Point::new(101.0, 1.0)));
        assert!(!node.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_builders() {
        let node = SceneNode::new("label", Content::blank(100.0, 100.0))
            .unwrap()
            .with_behavior(Draggable::new())
            .with_placement(Placement::at(100.0, 100.0))
            .with_enabled(true);
        assert!(node.is_enabled());
        assert!(node.behavior().as_draggable().is_some());
        assert_eq!(node.placement().position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_move_by() {
        let mut node = SceneNode::new("n", Content::blank(10.0, 10.0)).unwrap();
        node.move_by(Vec2::new(25.0, 25.0));
        assert_eq!(node.placement().position, Vec2::new(25.0, 25.0));
    }
}
