//! Ear-clipping triangulation of simple polygons.

use kurbo::Point;

use super::{MeshError, Triangle, Vertex};

/// Minimum signed area (times two) for a vertex triple to count as an ear.
pub const EPSILON: f64 = 1e-10;

/// Twice the signed area of triangle `abc`, `(b - a) x (c - a)`.
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

/// Check if `p` lies inside or on the boundary of triangle `abc`.
///
/// The triangle must have positive [`signed_area`].
pub fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    let across_bc = (c - b).cross(p - b);
    let across_ab = (b - a).cross(p - a);
    let across_ca = (a - c).cross(p - c);
    across_bc >= 0.0 && across_ab >= 0.0 && across_ca >= 0.0
}

/// Shoelace sum over consecutive pairs, wrapping last to first.
fn orientation(outline: &[Point]) -> f64 {
    let n = outline.len();
    (0..n)
        .map(|q| {
            let p = (q + n - 1) % n;
            outline[p].x * outline[q].y - outline[q].x * outline[p].y
        })
        .sum()
}

/// Check whether the active triple `(u, v, w)` is a clippable ear.
fn snip(outline: &[Point], active: &[usize], u: usize, v: usize, w: usize) -> bool {
    let a = outline[active[u]];
    let b = outline[active[v]];
    let c = outline[active[w]];

    if signed_area(a, b, c) <= EPSILON {
        return false;
    }

    !active
        .iter()
        .enumerate()
        .filter(|&(p, _)| p != u && p != v && p != w)
        .any(|(_, &index)| triangle_contains(a, b, c, outline[index]))
}

/// Triangulate a simple polygon.
///
/// Returns `Ok(None)` when no ear can be found in a full sweep of the
/// remaining vertices, which happens for collinear or self-intersecting
/// outlines.
pub(super) fn ear_clip(
    outline: &[Point],
    mapping: &dyn Fn(Point) -> Point,
) -> Result<Option<Vec<Triangle>>, MeshError> {
    let n = outline.len();
    if n < 3 {
        return Ok(None);
    }

    let mut active: Vec<usize> = Vec::new();
    active.try_reserve_exact(n)?;
    if orientation(outline) > 0.0 {
        active.extend(0..n);
    } else {
        active.extend((0..n).rev());
    }

    let mut triangles = Vec::new();
    triangles.try_reserve_exact(n - 2)?;

    let mut nv = n;
    let mut budget = 2 * nv;
    let mut v = nv - 1;

    while nv > 2 {
        if budget == 0 {
            return Ok(None);
        }
        budget -= 1;

        let u = if v < nv { v } else { 0 };
        v = if u + 1 < nv { u + 1 } else { 0 };
        let w = if v + 1 < nv { v + 1 } else { 0 };

        if snip(outline, &active, u, v, w) {
            triangles.push(Triangle::new(
                Vertex::mapped(outline[active[u]], mapping),
                Vertex::mapped(outline[active[v]], mapping),
                Vertex::mapped(outline[active[w]], mapping),
            ));
            active.remove(v);
            nv -= 1;
            budget = 2 * nv;
        }
    }

    Ok(Some(triangles))
}
