//! WebGPU rendering module
//!
//! Wireframe line rendering for entities plus a bitmap-font HUD overlay.

pub mod overlay;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use overlay::{GLYPH_H, GLYPH_W, OverlayTextBuilder};
pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};
