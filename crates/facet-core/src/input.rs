//! Input events delivered to the scene.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Kind of an input event, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMoved,
    Scrolled,
    ButtonPressed,
    ButtonReleased,
    KeyPressed,
    KeyReleased,
}

/// An event as delivered by the windowing layer.
///
/// Pointer positions are in the coordinate space of the root transform
/// handed to [`Scene::handle_with`](crate::Scene::handle_with), usually
/// window pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerMoved {
        position: Point,
    },
    Scrolled {
        position: Point,
        delta: f64,
    },
    ButtonPressed {
        position: Point,
        button: MouseButton,
    },
    ButtonReleased {
        position: Point,
        button: MouseButton,
    },
    KeyPressed {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyReleased {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Shorthand for a pointer move.
    pub fn moved(position: Point) -> Self {
        Self::PointerMoved { position }
    }

    /// Shorthand for a button press.
    pub fn pressed(position: Point, button: MouseButton) -> Self {
        Self::ButtonPressed { position, button }
    }

    /// Shorthand for a button release.
    pub fn released(position: Point, button: MouseButton) -> Self {
        Self::ButtonReleased { position, button }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerMoved { .. } => EventKind::PointerMoved,
            Self::Scrolled { .. } => EventKind::Scrolled,
            Self::ButtonPressed { .. } => EventKind::ButtonPressed,
            Self::ButtonReleased { .. } => EventKind::ButtonReleased,
            Self::KeyPressed { .. } => EventKind::KeyPressed,
            Self::KeyReleased { .. } => EventKind::KeyReleased,
        }
    }

    /// Pointer position for pointer-class events, `None` for keyboard events.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerMoved { position }
            | Self::Scrolled { position, .. }
            | Self::ButtonPressed { position, .. }
            | Self::ButtonReleased { position, .. } => Some(*position),
            Self::KeyPressed { .. } | Self::KeyReleased { .. } => None,
        }
    }

    /// Check if this event carries a pointer position.
    pub fn is_pointer(&self) -> bool {
        self.position().is_some()
    }
}
