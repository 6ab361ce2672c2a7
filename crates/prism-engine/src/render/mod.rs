//! GPU rendering subsystem.
//!
//! Renderers consume `prism_scene` data and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers) and builds them
//! lazily on first use, keyed on the target formats.
//!
//! Convention:
//! - the frame clears colour + depth before any renderer runs
//! - renderers open their own pass and load the attachments

mod ctx;
mod flat;
mod mesh;
pub mod shader;
pub mod uniforms;
mod viewport;

pub use ctx::{RenderCtx, RenderTarget};
pub use flat::FlatRenderer;
pub use mesh::{GpuModel, MeshRenderer, MeshStyle, Shading};
pub use shader::{ShaderError, ShaderProgram};
pub use viewport::Viewport;
