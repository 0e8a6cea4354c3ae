//! Bounded vertex storage for mesh uploads.

use std::ops::Range;

use facet_core::{Content, PolygonMesh};
use kurbo::Affine;

use crate::renderer::{RenderResult, RendererError};

/// A vertex as laid out for upload: world position plus texture
/// coordinates normalized to the content rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct GpuVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

/// Fixed-capacity vertex buffer.
///
/// Uploads are all-or-nothing: a mesh that does not fit leaves the buffer
/// untouched and reports [`RendererError::AllocationFailure`].
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    vertices: Vec<GpuVertex>,
    capacity: usize,
}

impl VertexBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::new(),
            capacity,
        }
    }

    /// Append the mesh's triangles, transformed by `transform`.
    ///
    /// Returns the range of the written vertices.
    pub fn upload(
        &mut self,
        mesh: &PolygonMesh,
        content: &Content,
        transform: Affine,
    ) -> RenderResult<Range<usize>> {
        let start = self.vertices.len();
        let requested = start + mesh.vertex_count();
        if requested > self.capacity {
            return Err(RendererError::AllocationFailure {
                requested,
                capacity: self.capacity,
            });
        }
        self.vertices
            .try_reserve(mesh.vertex_count())
            .map_err(|_| RendererError::AllocationFailure {
                requested,
                capacity: self.capacity,
            })?;

        let size = content.size;
        let normalize = |value: f64, extent: f64| {
            if extent > 0.0 { (value / extent) as f32 } else { 0.0 }
        };
        self.vertices.extend(mesh.vertices().map(|v| {
            let world = transform * v.position;
            GpuVertex {
                position: [world.x as f32, world.y as f32],
                tex_coords: [
                    normalize(v.tex_coords.x, size.width),
                    normalize(v.tex_coords.y, size.height),
                ],
            }
        }));
        Ok(start..self.vertices.len())
    }

    /// Drop all vertices, keeping the capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[GpuVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Vertices that can still be uploaded.
    pub fn remaining(&self) -> usize {
        self.capacity - self.vertices.len()
    }
}
