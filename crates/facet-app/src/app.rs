//! Application state and the event/frame loop.

use std::path::Path;

use facet_core::{InputEvent, NodeKey, Scene};
use facet_render::{DrawList, render_scene};
use kurbo::Affine;
use peniko::Color;

use crate::error::AppResult;
use crate::scene_file::SceneFile;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Vertices the frame's draw list can hold.
    pub vertex_capacity: usize,
    pub background_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Facet".to_string(),
            width: 900,
            height: 600,
            vertex_capacity: 4096,
            background_color: Color::from_rgba8(0, 0, 0, 255),
        }
    }
}

/// Outcome of one dispatched event and the frame drawn after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub handled: bool,
    pub nodes_drawn: usize,
    pub draw_commands: usize,
    pub vertices: usize,
}

/// Totals for a replayed script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub handled: usize,
    pub frames: usize,
    pub draw_commands: usize,
    pub vertices: usize,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    scene: Scene,
    root: NodeKey,
    draw_list: DrawList,
    script: Vec<InputEvent>,
}

impl App {
    /// Build an app from a scene description. The file's settings override
    /// `config`.
    pub fn new(mut config: AppConfig, file: SceneFile) -> AppResult<Self> {
        file.settings.apply(&mut config);
        let (scene, root) = file.build()?;
        Ok(Self {
            draw_list: DrawList::new(config.vertex_capacity),
            config,
            scene,
            root,
            script: file.events,
        })
    }

    /// The stock demo scene and script.
    pub fn demo(config: AppConfig) -> AppResult<Self> {
        Self::new(config, SceneFile::demo())
    }

    /// Load a scene file from disk.
    pub fn load(config: AppConfig, path: impl AsRef<Path>) -> AppResult<Self> {
        Self::new(config, SceneFile::load(path)?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Events still waiting to be replayed.
    pub fn script(&self) -> &[InputEvent] {
        &self.script
    }

    /// Route one event through the scene.
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        let handled = self.scene.handle(self.root, event);
        log::debug!("{:?} -> handled: {}", event.kind(), handled);
        handled
    }

    /// Record a fresh frame into the draw list.
    pub fn render_frame(&mut self) -> AppResult<FrameStats> {
        self.draw_list.clear();
        let nodes_drawn =
            render_scene(&self.scene, self.root, Affine::IDENTITY, &mut self.draw_list)?;
        Ok(FrameStats {
            handled: false,
            nodes_drawn,
            draw_commands: self.draw_list.commands().len(),
            vertices: self.draw_list.vertex_count(),
        })
    }

    /// Dispatch `event`, then draw the frame that follows it.
    pub fn step(&mut self, event: &InputEvent) -> AppResult<FrameStats> {
        let handled = self.dispatch(event);
        let stats = self.render_frame()?;
        Ok(FrameStats { handled, ..stats })
    }

    /// Replay the whole script, one frame per event.
    ///
    /// With an empty script a single frame is still drawn.
    pub fn run(&mut self) -> AppResult<RunSummary> {
        log::info!(
            "Running {} ({}x{}, background {:?})",
            self.config.title,
            self.config.width,
            self.config.height,
            self.config.background_color.to_rgba8()
        );

        let script = std::mem::take(&mut self.script);
        let mut summary = RunSummary {
            events: script.len(),
            ..Default::default()
        };

        if script.is_empty() {
            let stats = self.render_frame()?;
            summary.frames = 1;
            summary.draw_commands = stats.draw_commands;
            summary.vertices = stats.vertices;
        }

        for event in &script {
            let stats = self.step(event)?;
            if stats.handled {
                summary.handled += 1;
            }
            summary.frames += 1;
            summary.draw_commands += stats.draw_commands;
            summary.vertices += stats.vertices;
            log::debug!("Frame {}: {:?}", summary.frames, stats);
        }

        log::info!(
            "Replayed {} events ({} handled), {} frames, {} draw commands, {} vertices",
            summary.events,
            summary.handled,
            summary.frames,
            summary.draw_commands,
            summary.vertices
        );
        Ok(summary)
    }
}
