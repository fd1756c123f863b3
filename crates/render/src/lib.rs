//! Rendering Adapter: renderer-agnostic interface over the live point field.
//!
//! # Invariants
//! - Renderers read fields; they never mutate them.
//! - GPU-side resources tied to a field are released through the controller's dispose hook.
//!
//! # Workaround
//! Ships a debug text renderer and a CPU-side buffer registry in place of a
//! real GPU backend. The traits are stable; a wgpu implementation slots in
//! without changing consumers.

mod buffers;
mod material;
mod renderer;

pub use buffers::{BufferRegistry, ResidentBuffers};
pub use material::{Blending, PointMaterial};
pub use renderer::{DebugTextRenderer, PointsRenderer};

pub fn crate_info() -> &'static str {
    "galaxy-render v0.1.0"
}
