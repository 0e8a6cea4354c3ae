//! Facet Application
//!
//! Headless application shell: builds a scene (the stock demo or a JSON
//! description), replays an input script through it and records a frame
//! after every event.

mod app;
mod error;
mod scene_file;

pub use app::{App, AppConfig, FrameStats, RunSummary};
pub use error::{AppError, AppResult};
pub use scene_file::{Attachment, BehaviorSpec, NodeSpec, SceneFile, Settings};
