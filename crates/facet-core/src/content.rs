//! Node content: the pixel area a node's mesh is textured from.

use kurbo::Size;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// A content source of known pixel size.
///
/// Stands in for a texture: the renderer only needs its size to normalize
/// texture coordinates and a color to paint it with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Size in pixels.
    pub size: Size,
    /// Solid fill of the content area.
    pub color: SerializableColor,
}

impl Content {
    pub fn new(size: Size, color: Color) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }

    /// Content of the given size filled with white.
    pub fn blank(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            color: SerializableColor::white(),
        }
    }

    /// Get the fill as a peniko Color.
    pub fn fill(&self) -> Color {
        self.color.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let color = SerializableColor::new(255, 0, 255, 255);
        let back = SerializableColor::from(Color::from(color));
        assert_eq!(back, color);
    }

    #[test]
    fn test_blank_content() {
        let content = Content::blank(100.0, 50.0);
        assert!((content.size.width - 100.0).abs() < f64::EPSILON);
        assert!((content.size.height - 50.0).abs() < f64::EPSILON);
        assert_eq!(content.color, SerializableColor::white());
    }
}
