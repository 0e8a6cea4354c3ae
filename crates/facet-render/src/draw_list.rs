//! Recording draw target.

use std::ops::Range;

use facet_core::{Content, PolygonMesh};
use kurbo::Affine;
use peniko::Color;

use crate::renderer::{DrawTarget, RenderResult};
use crate::vertex_buffer::VertexBuffer;

/// One recorded draw: a contiguous run of uploaded vertices and its fill.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub vertices: Range<usize>,
    pub color: Color,
    pub transform: Affine,
}

impl DrawCommand {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Draw target that uploads meshes into a [`VertexBuffer`] and keeps a
/// command per drawn node.
#[derive(Debug, Clone)]
pub struct DrawList {
    buffer: VertexBuffer,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(vertex_capacity: usize) -> Self {
        Self {
            buffer: VertexBuffer::with_capacity(vertex_capacity),
            commands: Vec::new(),
        }
    }

    /// Reset for a new frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn vertex_buffer(&self) -> &VertexBuffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len()
    }
}

impl DrawTarget for DrawList {
    fn draw_mesh(
        &mut self,
        mesh: &PolygonMesh,
        content: &Content,
        transform: Affine,
    ) -> RenderResult<()> {
        let vertices = self.buffer.upload(mesh, content, transform)?;
        log::trace!(
            "Recorded {} triangles at {:?}",
            vertices.len() / 3,
            transform.translation()
        );
        self.commands.push(DrawCommand {
            vertices,
            color: content.fill(),
            transform,
        });
        Ok(())
    }
}
