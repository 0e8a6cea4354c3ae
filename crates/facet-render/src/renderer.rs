//! Renderer trait abstraction and scene traversal.

use facet_core::{Content, NodeKey, PolygonMesh, Scene};
use kurbo::Affine;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RendererError {
    #[error("Vertex buffer exhausted: {requested} vertices requested, capacity is {capacity}")]
    AllocationFailure { requested: usize, capacity: usize },
    /// Returned by [`DrawTarget`] backends whose device or surface fails
    /// mid-frame. The traversal stops and passes it through unchanged.
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Trait for drawing backends.
///
/// A target receives each visible node's mesh in back-to-front order along
/// with the world transform it should be drawn with.
pub trait DrawTarget {
    fn draw_mesh(
        &mut self,
        mesh: &PolygonMesh,
        content: &Content,
        transform: Affine,
    ) -> RenderResult<()>;
}

/// Draw the subtree under `root` into `target`.
///
/// Disabled nodes draw nothing and hide their subtree. An enabled node is
/// drawn before its children, and children are drawn in the order they were
/// attached, so later children end up on top. Returns the number of nodes
/// drawn.
pub fn render_scene(
    scene: &Scene,
    root: NodeKey,
    transform: Affine,
    target: &mut dyn DrawTarget,
) -> RenderResult<usize> {
    let node = scene.node(root);
    if !node.is_enabled() {
        return Ok(0);
    }

    let global = transform * node.placement().transform();
    target.draw_mesh(node.mesh(), node.content(), global)?;

    let mut drawn = 1;
    for &child in node.children() {
        drawn += render_scene(scene, child, global, target)?;
    }
    Ok(drawn)
}
