//! Facet Render Library
//!
//! Draw traversal over a Facet scene plus a recording target.
//! Backends implement [`DrawTarget`]; [`DrawList`] uploads into a bounded
//! [`VertexBuffer`] and keeps one [`DrawCommand`] per drawn node.

mod draw_list;
mod renderer;
mod vertex_buffer;

pub use draw_list::{DrawCommand, DrawList};
pub use renderer::{DrawTarget, RenderResult, RendererError, render_scene};
pub use vertex_buffer::{GpuVertex, VertexBuffer};
