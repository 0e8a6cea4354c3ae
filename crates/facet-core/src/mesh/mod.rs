//! Triangulated polygon meshes.
//!
//! A [`PolygonMesh`] is built from a content rectangle and an optional
//! outline. The outline is triangulated by ear-clipping; the resulting
//! triangles carry both the mapped render position and the original outline
//! point as texture coordinate.

mod triangulate;

pub use triangulate::{EPSILON, signed_area, triangle_contains};

use std::collections::TryReserveError;

use kurbo::{Point, Rect, Size};
use thiserror::Error;

/// Mesh build errors.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("Failed to allocate mesh storage: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// A single mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in the node's local space.
    pub position: Point,
    /// Texture coordinate in content pixels.
    pub tex_coords: Point,
}

impl Vertex {
    /// Build a vertex from a content point and the mapping applied to it.
    pub fn mapped(tex_coords: Point, mapping: &dyn Fn(Point) -> Point) -> Self {
        Self {
            position: mapping(tex_coords),
            tex_coords,
        }
    }
}

/// A triangle emitted by triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Positions of the three corners.
    pub fn positions(&self) -> [Point; 3] {
        self.vertices.map(|v| v.position)
    }

    /// Signed area (times two) of the positions; positive for the
    /// normalized winding.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.positions();
        signed_area(a, b, c)
    }

    /// Centroid of the positions.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.positions();
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Check if a point lies inside or on the boundary of this triangle.
    pub fn contains(&self, point: Point) -> bool {
        let [a, b, c] = self.positions();
        triangle_contains(a, b, c, point)
    }
}

/// The full rectangle of a content area, in its fixed fallback winding.
pub fn rectangle_outline(bounds: Size) -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(0.0, bounds.height),
        Point::new(bounds.width, bounds.height),
        Point::new(bounds.width, 0.0),
    ]
}

/// A hit-testable triangle mesh built from a polygon outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonMesh {
    triangles: Vec<Triangle>,
}

impl PolygonMesh {
    /// Mesh covering the whole content rectangle.
    pub fn rectangle(bounds: Size) -> Result<Self, MeshError> {
        Self::build(bounds, &[], &|p| p)
    }

    /// Triangulate `outline` against a content rectangle of size `bounds`.
    ///
    /// Outlines with fewer than three points, or with a point outside
    /// `[0, w] x [0, h]`, are replaced by the full rectangle. So are outlines
    /// the ear-clipper cannot make progress on.
    pub fn build(
        bounds: Size,
        outline: &[Point],
        mapping: &dyn Fn(Point) -> Point,
    ) -> Result<Self, MeshError> {
        let fallback = rectangle_outline(bounds);
        let checked = if accepts_outline(bounds, outline) {
            outline
        } else {
            log::debug!(
                "Outline of {} points rejected for {}x{} content, using full rectangle",
                outline.len(),
                bounds.width,
                bounds.height
            );
            &fallback[..]
        };

        let triangles = match triangulate::ear_clip(checked, mapping)? {
            Some(triangles) => triangles,
            None => {
                log::warn!(
                    "Degenerate outline of {} points, using full rectangle",
                    checked.len()
                );
                triangulate::ear_clip(&fallback, mapping)?.unwrap_or_default()
            }
        };

        Ok(Self { triangles })
    }

    /// Check if a point (in local coordinates) lies inside the mesh.
    pub fn contains(&self, point: Point) -> bool {
        self.triangles.iter().any(|t| t.contains(point))
    }

    /// Triangles in emission order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// All vertices, three per triangle.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.triangles.iter().flat_map(|t| t.vertices.iter())
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Bounding box of the mapped positions.
    pub fn bounds(&self) -> Rect {
        let mut vertices = self.vertices();
        let Some(first) = vertices.next() else {
            return Rect::ZERO;
        };
        vertices.fold(Rect::from_points(first.position, first.position), |r, v| {
            r.union_pt(v.position)
        })
    }
}

fn accepts_outline(bounds: Size, outline: &[Point]) -> bool {
    outline.len() >= 3
        && outline.iter().all(|p| {
            p.x >= 0.0 && p.y >= 0.0 && p.x <= bounds.width && p.y <= bounds.height
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(p: Point) -> Point {
        p
    }

    fn square() -> Vec<Point> {
        vec![
            Point::new(10.0, 10.0),
            Point::new(40.0, 10.0),
            Point::new(40.0, 40.0),
            Point::new(10.0, 40.0),
        ]
    }

    #[test]
    fn test_rectangle_mesh() {
        let mesh = PolygonMesh::rectangle(Size::new(50.0, 30.0)).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 6);
        let bounds = mesh.bounds();
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_outline_uses_rectangle() {
        let bounds = Size::new(20.0, 10.0);
        let mesh = PolygonMesh::build(
            bounds,
            &[Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            &identity,
        )
        .unwrap();
        assert_eq!(mesh, PolygonMesh::rectangle(bounds).unwrap());
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_out_of_bounds_outline_uses_rectangle() {
        let bounds = Size::new(20.0, 10.0);
        let outline = [
            Point::new(0.0, 0.0),
            Point::new(25.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let mesh = PolygonMesh::build(bounds, &outline, &identity).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.contains(Point::new(19.0, 9.0)));
    }

    #[test]
    fn test_outline_on_bounds_is_accepted() {
        let bounds = Size::new(10.0, 10.0);
        let outline = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        let mesh = PolygonMesh::build(bounds, &outline, &identity).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.contains(Point::new(9.0, 9.0)));
    }

    #[test]
    fn test_simple_polygon_triangle_count() {
        let bounds = Size::new(100.0, 100.0);
        // L-shaped hexagon, given clockwise on screen.
        let outline = [
            Point::new(10.0, 10.0),
            Point::new(10.0, 90.0),
            Point::new(90.0, 90.0),
            Point::new(90.0, 60.0),
            Point::new(40.0, 60.0),
            Point::new(40.0, 10.0),
        ];
        let mesh = PolygonMesh::build(bounds, &outline, &identity).unwrap();
        assert_eq!(mesh.triangle_count(), outline.len() - 2);
        for triangle in mesh.triangles() {
            assert!(triangle.signed_area() > 0.0);
        }
        // Inside the L.
        assert!(mesh.contains(Point::new(30.0, 80.0)));
        assert!(mesh.contains(Point::new(80.0, 70.0)));
        // In the notch.
        assert!(!mesh.contains(Point::new(70.0, 30.0)));
    }

    #[test]
    fn test_winding_is_normalized() {
        let bounds = Size::new(50.0, 50.0);
        let forward = square();
        let mut reversed = square();
        reversed.reverse();

        for outline in [forward, reversed] {
            let mesh = PolygonMesh::build(bounds, &outline, &identity).unwrap();
            assert_eq!(mesh.triangle_count(), 2);
            assert!(mesh.triangles().iter().all(|t| t.signed_area() > 0.0));
            assert!(mesh.contains(Point::new(25.0, 25.0)));
        }
    }

    #[test]
    fn test_containment_round_trip() {
        let bounds = Size::new(100.0, 100.0);
        let outline = [
            Point::new(50.0, 0.0),
            Point::new(100.0, 40.0),
            Point::new(80.0, 100.0),
            Point::new(20.0, 100.0),
            Point::new(0.0, 40.0),
        ];
        let mesh = PolygonMesh::build(bounds, &outline, &identity).unwrap();
        assert_eq!(mesh.triangle_count(), 3);
        for triangle in mesh.triangles() {
            assert!(mesh.contains(triangle.centroid()));
            for position in triangle.positions() {
                assert!(mesh.contains(position));
            }
        }
        assert!(!mesh.contains(Point::new(500.0, 500.0)));
        assert!(!mesh.contains(Point::new(-1.0, 50.0)));
    }

    #[test]
    fn test_mapping_moves_positions_not_tex_coords() {
        let bounds = Size::new(10.0, 10.0);
        let double = |p: Point| Point::new(p.x * 2.0, p.y * 2.0);
        let mesh = PolygonMesh::build(bounds, &[], &double).unwrap();
        for vertex in mesh.vertices() {
            assert!((vertex.position.x - vertex.tex_coords.x * 2.0).abs() < f64::EPSILON);
            assert!((vertex.position.y - vertex.tex_coords.y * 2.0).abs() < f64::EPSILON);
        }
        assert!(mesh.contains(Point::new(15.0, 15.0)));
        assert!(!mesh.contains(Point::new(25.0, 15.0)));
    }

    #[test]
    fn test_collinear_outline_falls_back() {
        let bounds = Size::new(30.0, 30.0);
        let outline = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(30.0, 30.0),
        ];
        let mesh = PolygonMesh::build(bounds, &outline, &identity).unwrap();
        assert_eq!(mesh, PolygonMesh::rectangle(bounds).unwrap());
    }

    #[test]
    fn test_empty_mesh_bounds() {
        let mesh = PolygonMesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounds(), Rect::ZERO);
        assert!(!mesh.contains(Point::ZERO));
    }
}
