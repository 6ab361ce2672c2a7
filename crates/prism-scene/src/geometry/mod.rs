//! Procedural geometry.
//!
//! All generators are deterministic and infallible. Out-of-range tessellation
//! is clamped (with a warning) rather than rejected.

mod grid;
mod mesh;
mod primitives;
mod star;

pub use mesh::MeshData;
pub use primitives::{plane, plane_with, sphere, sphere_with, torus, torus_with};
pub use star::{star_fan, star_outline, star_scene, FlatVertex};

/// Named primitive with the fixed tessellation used by the demos.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeometryKind {
    Torus,
    Sphere,
    Plane,
}

impl GeometryKind {
    pub fn build(self) -> MeshData {
        match self {
            GeometryKind::Torus => torus(),
            GeometryKind::Sphere => sphere(),
            GeometryKind::Plane => plane(),
        }
    }
}
