use glam::{Mat3, Mat4, Quat, Vec3};

use crate::color::Color;
use crate::geometry::MeshData;

use super::Material;

/// How a model is rasterized.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DrawMode {
    /// Filled triangles.
    #[default]
    Fill,
    /// Line wireframe only.
    Wireframe,
    /// Filled triangles with the wireframe on top.
    FillAndWireframe,
}

impl DrawMode {
    #[inline]
    pub fn fills(self) -> bool {
        matches!(self, DrawMode::Fill | DrawMode::FillAndWireframe)
    }

    #[inline]
    pub fn draws_lines(self) -> bool {
        matches!(self, DrawMode::Wireframe | DrawMode::FillAndWireframe)
    }
}

/// One drawable object: geometry, appearance and transform.
///
/// `translate`, `rotate` (Euler angles in radians, applied X then Y then Z) and
/// `scale` are the editable fields. The three matrices are derived by
/// [`Model::update_transforms`] and are stale until it runs.
#[derive(Debug, Clone)]
pub struct Model {
    pub mesh: MeshData,
    pub draw_mode: DrawMode,
    pub color: Color,
    pub material: Material,

    pub translate: Vec3,
    pub rotate: Vec3,
    pub scale: Vec3,

    pub model_matrix: Mat4,
    pub model_view: Mat4,
    pub normal_matrix: Mat3,
}

impl Model {
    pub fn new(mesh: MeshData) -> Self {
        Self {
            mesh,
            draw_mode: DrawMode::Fill,
            color: Color::WHITE,
            material: Material::phong(),
            translate: Vec3::ZERO,
            rotate: Vec3::ZERO,
            scale: Vec3::ONE,
            model_matrix: Mat4::IDENTITY,
            model_view: Mat4::IDENTITY,
            normal_matrix: Mat3::IDENTITY,
        }
    }

    pub fn draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = mode;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn translate(mut self, t: impl Into<Vec3>) -> Self {
        self.translate = t.into();
        self
    }

    pub fn rotate(mut self, r: impl Into<Vec3>) -> Self {
        self.rotate = r.into();
        self
    }

    pub fn scale(mut self, s: impl Into<Vec3>) -> Self {
        self.scale = s.into();
        self
    }

    /// Rotation `Rx · Ry · Rz` built from the Euler fields.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.rotate.x)
            * Quat::from_rotation_y(self.rotate.y)
            * Quat::from_rotation_z(self.rotate.z)
    }

    /// Recomputes the model, model-view and normal matrices against `view`.
    ///
    /// `model = T · Rx · Ry · Rz · S`, `model_view = view · model`, and the normal
    /// matrix is the inverse-transpose of the upper 3×3 of `model_view`. A
    /// singular model-view (e.g. a zero scale axis) yields the identity.
    pub fn update_transforms(&mut self, view: Mat4) {
        self.model_matrix =
            Mat4::from_scale_rotation_translation(self.scale, self.rotation(), self.translate);
        self.model_view = view * self.model_matrix;
        self.normal_matrix = normal_matrix(self.model_view);
    }
}

/// Inverse-transpose of the upper-left 3×3 block.
pub fn normal_matrix(model_view: Mat4) -> Mat3 {
    let upper = Mat3::from_mat4(model_view);
    let det = upper.determinant();
    if det == 0.0 || !det.is_finite() {
        return Mat3::IDENTITY;
    }
    let inverse = upper.inverse();
    if !inverse.is_finite() {
        return Mat3::IDENTITY;
    }
    inverse.transpose()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::geometry::GeometryKind;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn model_matrix_applies_scale_then_rotation_then_translation() {
        let mut m = Model::new(MeshData::new())
            .translate([1.0, 2.0, 3.0])
            .rotate([0.0, 0.0, FRAC_PI_2])
            .scale([2.0, 1.0, 1.0]);
        m.update_transforms(Mat4::IDENTITY);

        // x axis scaled to 2, rotated onto +y, then moved.
        let p = m.model_matrix.transform_point3(Vec3::X);
        assert!(approx(p, Vec3::new(1.0, 4.0, 3.0)), "{p:?}");
    }

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        let m = Model::new(MeshData::new()).rotate([0.3, 0.7, -1.1]);
        let expected = Mat4::from_rotation_x(0.3) * Mat4::from_rotation_y(0.7) * Mat4::from_rotation_z(-1.1);
        let actual = Mat4::from_quat(m.rotation());
        assert!(actual.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn model_view_includes_view() {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
        let mut m = Model::new(MeshData::new()).translate([1.0, 0.0, 0.0]);
        m.update_transforms(view);
        let p = m.model_view.transform_point3(Vec3::ZERO);
        assert!(approx(p, Vec3::new(1.0, 0.0, -4.0)));
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular_under_non_uniform_scale() {
        let mut m = Model::new(MeshData::new()).scale([4.0, 1.0, 1.0]).rotate([0.0, 0.4, 0.0]);
        m.update_transforms(Mat4::IDENTITY);

        // Surface tangent (1, 1, 0) with normal (1, -1, 0).
        let tangent = m.model_view.transform_vector3(Vec3::new(1.0, 1.0, 0.0));
        let normal = m.normal_matrix * Vec3::new(1.0, -1.0, 0.0);
        assert!(tangent.dot(normal).abs() < 1e-4);
    }

    #[test]
    fn singular_model_view_gives_identity_normal_matrix() {
        let mut m = Model::new(MeshData::new()).scale([0.0, 1.0, 1.0]);
        m.update_transforms(Mat4::IDENTITY);
        assert_eq!(m.normal_matrix, Mat3::IDENTITY);
    }

    #[test]
    fn tiny_uniform_scale_keeps_rotation_in_normal_matrix() {
        let mut m = Model::new(MeshData::new()).scale([0.004; 3]).rotate([0.0, 1.0, 0.0]);
        m.update_transforms(Mat4::IDENTITY);

        assert_ne!(m.normal_matrix, Mat3::IDENTITY);
        // (s·R)^-T = R / s
        let unscaled = m.normal_matrix * 0.004;
        assert!(unscaled.abs_diff_eq(Mat3::from_rotation_y(1.0), 1e-4), "{unscaled:?}");
    }

    #[test]
    fn draw_mode_flags() {
        assert!(DrawMode::Fill.fills() && !DrawMode::Fill.draws_lines());
        assert!(!DrawMode::Wireframe.fills() && DrawMode::Wireframe.draws_lines());
        assert!(DrawMode::FillAndWireframe.fills() && DrawMode::FillAndWireframe.draws_lines());
    }

    #[test]
    fn builder_sets_fields() {
        let m = Model::new(GeometryKind::Sphere.build())
            .draw_mode(DrawMode::Wireframe)
            .color([0.0, 1.0, 1.0, 1.0]);
        assert_eq!(m.draw_mode, DrawMode::Wireframe);
        assert_eq!(m.color, Color::rgb(0.0, 1.0, 1.0));
        assert!(m.mesh.vertex_count() > 0);
    }
}
