//! JSON scene description and event script.

use std::path::Path;

use facet_core::{
    Behavior, Button, Content, Draggable, InputEvent, MouseButton, NodeContext, NodeKey,
    Placement, Scene, SceneNode, SerializableColor,
};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

use crate::app::AppConfig;
use crate::error::AppResult;

/// A scene plus the events to replay against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub settings: Settings,
    /// Identifier of the node events are dispatched to.
    pub root: String,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// Optional overrides of [`AppConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex_capacity: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<SerializableColor>,
}

impl Settings {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(capacity) = self.vertex_capacity {
            config.vertex_capacity = capacity;
        }
        if let Some(background) = self.background {
            config.background_color = background.into();
        }
    }
}

/// One node of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    pub width: f64,
    pub height: f64,
    #[serde(default = "SerializableColor::white")]
    pub color: SerializableColor,
    /// Hit/render outline in content coordinates. Empty means the full
    /// content rectangle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outline: Vec<Point>,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub behavior: BehaviorSpec,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Serializable subset of [`Behavior`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BehaviorSpec {
    #[default]
    Passive,
    /// A button whose clicks cycle its own outline through the listed ones.
    Button {
        #[serde(default)]
        left_click: Vec<Vec<Point>>,
        #[serde(default)]
        right_click: Vec<Vec<Point>>,
    },
    Draggable,
}

impl BehaviorSpec {
    fn build(&self, id: &str) -> Behavior {
        match self {
            BehaviorSpec::Passive => Behavior::Passive,
            BehaviorSpec::Draggable => Draggable::new().into(),
            BehaviorSpec::Button {
                left_click,
                right_click,
            } => {
                let mut button = Button::new();
                if !left_click.is_empty() {
                    button.set_left_click(outline_cycle(id, MouseButton::Left, left_click.clone()));
                }
                if !right_click.is_empty() {
                    button.set_right_click(outline_cycle(id, MouseButton::Right, right_click.clone()));
                }
                button.into()
            }
        }
    }
}

/// Click callback that resamples the clicked node with the next outline.
fn outline_cycle(
    id: &str,
    button: MouseButton,
    outlines: Vec<Vec<Point>>,
) -> impl FnMut(&mut NodeContext<'_>) + 'static {
    let id = id.to_string();
    let mut next = 0;
    move |node| {
        let outline = &outlines[next];
        next = (next + 1) % outlines.len();
        log::info!("{:?} click on {}: resampling with {} points", button, id, outline.len());
        if let Err(e) = node.resample(outline) {
            log::error!("Failed to resample {}: {}", id, e);
        }
    }
}

/// Parent/child pair, both by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub parent: String,
    pub child: String,
}

impl SceneFile {
    /// Parse a scene from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let file = Self::from_json(&json)?;
        log::info!(
            "Loaded scene from {:?}: {} nodes, {} events",
            path.as_ref(),
            file.nodes.len(),
            file.events.len()
        );
        Ok(file)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the scene graph and resolve the root.
    ///
    /// Nodes are inserted in file order, so a later node with a repeated
    /// identifier takes over that name for the attachments that follow.
    pub fn build(&self) -> AppResult<(Scene, NodeKey)> {
        let mut scene = Scene::new();
        for spec in &self.nodes {
            let content = Content {
                size: Size::new(spec.width, spec.height),
                color: spec.color,
            };
            let mut node = SceneNode::new(spec.id.as_str(), content)?
                .with_placement(spec.placement)
                .with_behavior(spec.behavior.build(&spec.id))
                .with_enabled(spec.enabled);
            if !spec.outline.is_empty() {
                node.resample_outline(&spec.outline)?;
            }
            scene.insert(node);
        }

        for attachment in &self.attachments {
            let parent = scene.resolve(&attachment.parent)?;
            scene.attach(parent, &attachment.child)?;
        }

        let root = scene.resolve(&self.root)?;
        Ok((scene, root))
    }

    /// The stock scene: a black canvas holding a draggable magenta label
    /// with a yellow button inside it. Left clicks on the button alternate
    /// between a stretched and a square outline.
    pub fn demo() -> Self {
        let rect = |w: f64, h: f64| {
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, h),
                Point::new(w, h),
                Point::new(w, 0.0),
            ]
        };
        let node = |id: &str, w: f64, h: f64, color, behavior, placement| NodeSpec {
            id: id.to_string(),
            width: w,
            height: h,
            color,
            outline: Vec::new(),
            placement,
            behavior,
            enabled: true,
        };

        Self {
            settings: Settings::default(),
            root: "canvas".to_string(),
            nodes: vec![
                node(
                    "canvas",
                    900.0,
                    600.0,
                    SerializableColor::black(),
                    BehaviorSpec::Passive,
                    Placement::default(),
                ),
                node(
                    "label",
                    100.0,
                    100.0,
                    SerializableColor::new(255, 0, 255, 255),
                    BehaviorSpec::Draggable,
                    Placement::at(100.0, 100.0),
                ),
                node(
                    "button",
                    50.0,
                    50.0,
                    SerializableColor::new(255, 255, 0, 255),
                    BehaviorSpec::Button {
                        left_click: vec![rect(150.0, 50.0), rect(50.0, 50.0)],
                        right_click: Vec::new(),
                    },
                    Placement::at(25.0, 25.0),
                ),
            ],
            attachments: vec![
                Attachment {
                    parent: "canvas".to_string(),
                    child: "label".to_string(),
                },
                Attachment {
                    parent: "label".to_string(),
                    child: "button".to_string(),
                },
            ],
            events: demo_script(),
        }
    }
}

/// Click the button twice, then drag the label by (40, 30).
fn demo_script() -> Vec<InputEvent> {
    let at = Point::new;
    vec![
        InputEvent::pressed(at(140.0, 140.0), MouseButton::Left),
        InputEvent::released(at(140.0, 140.0), MouseButton::Left),
        InputEvent::pressed(at(140.0, 140.0), MouseButton::Left),
        InputEvent::released(at(140.0, 140.0), MouseButton::Left),
        InputEvent::pressed(at(110.0, 110.0), MouseButton::Left),
        InputEvent::moved(at(130.0, 125.0)),
        InputEvent::moved(at(150.0, 140.0)),
        InputEvent::released(at(150.0, 140.0), MouseButton::Left),
    ]
}
