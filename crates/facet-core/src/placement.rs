//! Local transform of a scene node.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Position, rotation and scale of a node relative to its parent.
///
/// The transform is `translate(position) * rotate(rotation) *
/// scale(scale) * translate(-origin)`, so `origin` is the local point that
/// ends up at `position` and that rotation and scaling pivot around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Offset in parent coordinates.
    #[serde(default)]
    pub position: Vec2,
    /// Rotation angle in radians.
    #[serde(default)]
    pub rotation: f64,
    /// Per-axis scale factor.
    #[serde(default = "unit_scale")]
    pub scale: Vec2,
    /// Pivot in local coordinates.
    #[serde(default)]
    pub origin: Point,
}

fn unit_scale() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: unit_scale(),
            origin: Point::ZERO,
        }
    }
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placement translated to `position`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale = Vec2::new(sx, sy);
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Get the local-to-parent affine transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.position)
            * Affine::rotate(self.rotation)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(-self.origin.to_vec2())
    }

    /// Shift the position by a delta in parent coordinates.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
