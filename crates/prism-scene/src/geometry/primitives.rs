use std::f32::consts::{PI, TAU};

use glam::Vec3;
use log::warn;

use super::grid::parametric;
use super::MeshData;

/// Largest segment count per grid axis; keeps `(n + 1) * (m + 1)` within `u16` indices.
const MAX_SEGMENTS: u32 = 200;

fn clamp_segments(what: &str, value: u32, min: u32) -> u32 {
    let clamped = value.clamp(min, MAX_SEGMENTS);
    if clamped != value {
        warn!("{what}: {value} segments out of range, clamping to {clamped}");
    }
    clamped
}

fn clamp_positive(what: &str, value: f32) -> f32 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        warn!("{what}: must be > 0.0 (got {value}), clamping to 0.001");
        0.001
    }
}

/// Torus around the Z axis: major radius 0.5, tube radius 0.15, 32 × 16 segments.
pub fn torus() -> MeshData {
    torus_with(0.5, 0.15, 32, 16)
}

/// Generates a torus lying in the XY plane (ring axis = Z).
///
/// # Arguments
/// * `major_radius` - Distance from the torus center to the tube center
/// * `minor_radius` - Tube radius
/// * `major_segments` - Segments around the ring (min 3)
/// * `minor_segments` - Segments around the tube (min 3)
pub fn torus_with(
    major_radius: f32,
    minor_radius: f32,
    major_segments: u32,
    minor_segments: u32,
) -> MeshData {
    let major_radius = clamp_positive("torus major_radius", major_radius);
    let minor_radius = clamp_positive("torus minor_radius", minor_radius);
    let n = clamp_segments("torus major_segments", major_segments, 3);
    let m = clamp_segments("torus minor_segments", minor_segments, 3);

    parametric(n, m, |s, t| {
        let (sin_u, cos_u) = (s * TAU).sin_cos();
        let (sin_v, cos_v) = (t * TAU).sin_cos();
        let ring = major_radius + minor_radius * cos_v;

        let position = Vec3::new(ring * cos_u, ring * sin_u, minor_radius * sin_v);
        let normal = Vec3::new(cos_v * cos_u, cos_v * sin_u, sin_v);
        (position, normal)
    })
}

/// Unit sphere, 16 latitude bands × 32 longitude segments.
pub fn sphere() -> MeshData {
    sphere_with(1.0, 16, 32)
}

/// Generates a UV sphere centered at the origin with smooth normals.
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `rings` - Latitude bands from +Y to -Y (min 2)
/// * `segments` - Longitude segments (min 3)
pub fn sphere_with(radius: f32, rings: u32, segments: u32) -> MeshData {
    let radius = clamp_positive("sphere radius", radius);
    let n = clamp_segments("sphere rings", rings, 2);
    let m = clamp_segments("sphere segments", segments, 3);

    parametric(n, m, |s, t| {
        let (sin_theta, cos_theta) = (s * PI).sin_cos();
        let (sin_phi, cos_phi) = (t * TAU).sin_cos();

        // -z keeps ∂P/∂θ × ∂P/∂φ pointing outward.
        let normal = Vec3::new(sin_theta * cos_phi, cos_theta, -sin_theta * sin_phi);
        (normal * radius, normal)
    })
}

/// 5 × 5 plane on XZ at y = 0, 10 × 10 cells.
pub fn plane() -> MeshData {
    plane_with(5.0, 5.0, 10, 10)
}

/// Generates a plane on the XZ plane (y = 0) facing +Y, centered at the origin.
///
/// # Arguments
/// * `size_x` - Width along X
/// * `size_z` - Depth along Z
/// * `cells_x` - Subdivisions along X (min 1)
/// * `cells_z` - Subdivisions along Z (min 1)
pub fn plane_with(size_x: f32, size_z: f32, cells_x: u32, cells_z: u32) -> MeshData {
    let size_x = clamp_positive("plane size_x", size_x);
    let size_z = clamp_positive("plane size_z", size_z);
    let n = clamp_segments("plane cells_z", cells_z, 1);
    let m = clamp_segments("plane cells_x", cells_x, 1);

    // s walks +Z, t walks +X: Z × X = +Y.
    parametric(n, m, |s, t| {
        let position = Vec3::new((t - 0.5) * size_x, 0.0, (s - 0.5) * size_z);
        (position, Vec3::Y)
    })
}
