use glam::{Mat4, Vec3, Vec4};

/// Projection kind.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Projection {
    #[default]
    Perspective,
    /// Box `±lrtb` on x/y, depth `ortho_near..ortho_far`.
    Orthographic,
    /// Off-axis frustum `±lrtb / 2` at the near plane.
    Frustum,
}

/// Orbiting look-at camera.
///
/// The eye circles `center` in the XZ plane at `distance`, at angle `z_angle`
/// measured from +Z towards +X. `eye.y` is set directly and survives orbiting.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,

    /// Vertical field of view in radians (perspective only).
    pub fovy: f32,
    /// Half extent of the orthographic box; full extent of the frustum near plane.
    pub lrtb: f32,
    pub projection: Projection,

    pub z_angle: f32,
    pub distance: f32,

    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub ortho_near: f32,
    pub ortho_far: f32,

    pub view: Mat4,
    pub projection_matrix: Mat4,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.0, 4.0),
            center: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 60f32.to_radians(),
            lrtb: 2.0,
            projection: Projection::Perspective,
            z_angle: 0.0,
            distance: 4.0,
            aspect: 1.0,
            near: 1.0,
            far: 10.0,
            ortho_near: -10.0,
            ortho_far: 100.0,
            view: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        }
    }

    /// Overrides the orthographic depth range.
    pub fn with_ortho_depth(mut self, near: f32, far: f32) -> Self {
        self.ortho_near = near;
        self.ortho_far = far;
        self
    }

    /// Places the eye on its orbit: `center + (distance·sin z, eye.y, distance·cos z)`.
    pub fn orbit(&mut self) {
        let (sin, cos) = self.z_angle.sin_cos();
        self.eye.x = self.center.x + self.distance * sin;
        self.eye.z = self.center.z + self.distance * cos;
    }

    /// Builds the projection matrix for the current kind. Depth maps to `[0, 1]`.
    pub fn compute_projection(&self) -> Mat4 {
        let v = self.lrtb;
        match self.projection {
            Projection::Orthographic => {
                Mat4::orthographic_rh(-v, v, -v, v, self.ortho_near, self.ortho_far)
            }
            Projection::Frustum => {
                frustum_rh(-v / 2.0, v / 2.0, -v / 2.0, v / 2.0, self.near, self.far)
            }
            Projection::Perspective => {
                Mat4::perspective_rh(self.fovy, self.aspect.max(f32::EPSILON), self.near, self.far)
            }
        }
    }

    /// Per-frame refresh: aspect, orbit, projection and view.
    pub fn update(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
        self.orbit();
        self.projection_matrix = self.compute_projection();
        self.view = Mat4::look_at_rh(self.eye, self.center, self.up);
    }

    /// Switches projection kind, touching only the fields that kind depends on.
    ///
    /// Orthographic resets `lrtb` to 2, frustum to 1.2; perspective leaves it alone.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        match projection {
            Projection::Orthographic => self.lrtb = 2.0,
            Projection::Frustum => self.lrtb = 1.2,
            Projection::Perspective => {}
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Right-handed off-axis perspective frustum with `[0, 1]` depth.
pub fn frustum_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = near - far;
    Mat4::from_cols(
        Vec4::new(2.0 * near / w, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / h, 0.0, 0.0),
        Vec4::new((right + left) / w, (top + bottom) / h, far / d, -1.0),
        Vec4::new(0.0, 0.0, near * far / d, 0.0),
    )
}
