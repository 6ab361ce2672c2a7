//! CPU mirrors of the WGSL uniform blocks in `shaders/phong.wgsl` and
//! `shaders/color.wgsl`.
//!
//! Layouts follow WGSL uniform rules: `vec3` fields are paired with a scalar
//! to fill a 16-byte slot, matrices are column-major `mat4x4`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use prism_scene::scene::{Illumination, Model};

/// Number of light slots in the frame uniform.
pub const MAX_LIGHTS: usize = 4;

/// Light layout (32 bytes):
///
///  offset  0  position  vec3<f32>  (eye space)
///  offset 12  is_on     u32
///  offset 16  color     vec3<f32>
///  offset 28  pad0      f32
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub is_on: u32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Per-frame data shared by every model (208 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct FrameUniform {
    pub projection: [[f32; 4]; 4],
    pub ambient: [f32; 3],
    pub light_count: u32,
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl FrameUniform {
    /// Builds the frame block; light positions are moved into eye space by `view`.
    ///
    /// Lights past [`MAX_LIGHTS`] are dropped with a warning.
    pub fn new(projection: Mat4, view: Mat4, illumination: &Illumination) -> Self {
        if illumination.lights.len() > MAX_LIGHTS {
            log::warn!(
                "{} lights configured, only the first {MAX_LIGHTS} are shaded",
                illumination.lights.len()
            );
        }

        let mut lights = [LightUniform::default(); MAX_LIGHTS];
        for (slot, light) in lights.iter_mut().zip(&illumination.lights) {
            *slot = LightUniform {
                position: light.view_position(view).to_array(),
                is_on: light.on as u32,
                color: light.color.to_array(),
                _pad: 0.0,
            };
        }

        Self {
            projection: projection.to_cols_array_2d(),
            ambient: illumination.ambient.to_array(),
            light_count: illumination.lights.len().min(MAX_LIGHTS) as u32,
            lights,
        }
    }
}

/// Per-model data (208 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ModelUniform {
    pub model_view: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub line_color: [f32; 4],
    pub ka: [f32; 3],
    pub ke: f32,
    pub kd: [f32; 3],
    pub _pad0: f32,
    pub ks: [f32; 3],
    pub _pad1: f32,
}

impl ModelUniform {
    /// Snapshot of `model` after `update_transforms`; `line_color` overrides the
    /// wireframe colour when set, otherwise lines use the model colour.
    pub fn new(model: &Model, line_color: Option<[f32; 4]>) -> Self {
        let color = model.color.to_array();
        Self {
            model_view: model.model_view.to_cols_array_2d(),
            normal_matrix: padded_normal_matrix(model.normal_matrix),
            color,
            line_color: line_color.unwrap_or(color),
            ka: model.material.ka.to_array(),
            ke: model.material.ke,
            kd: model.material.kd.to_array(),
            _pad0: 0.0,
            ks: model.material.ks.to_array(),
            _pad1: 0.0,
        }
    }
}

/// Normal matrix padded into the `mat4x4` slot the shaders read columns from.
#[inline]
pub fn padded_normal_matrix(m: Mat3) -> [[f32; 4]; 4] {
    Mat4::from_mat3(m).to_cols_array_2d()
}
