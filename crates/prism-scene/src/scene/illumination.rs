use glam::{Mat4, Vec3};

/// Point light in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub on: bool,
    pub position: Vec3,
    pub color: Vec3,
}

impl Light {
    pub fn white(position: impl Into<Vec3>) -> Self {
        Self { on: true, position: position.into(), color: Vec3::ONE }
    }

    /// Position transformed into eye space by `view`.
    #[inline]
    pub fn view_position(&self, view: Mat4) -> Vec3 {
        view.transform_point3(self.position)
    }
}

/// Ambient term plus an ordered list of point lights.
#[derive(Debug, Clone, PartialEq)]
pub struct Illumination {
    pub ambient: Vec3,
    pub lights: Vec<Light>,
}

impl Illumination {
    pub fn new(ambient: impl Into<Vec3>) -> Self {
        Self { ambient: ambient.into(), lights: Vec::new() }
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }
}

impl Default for Illumination {
    /// Grey ambient and two white lights left and right of the origin.
    fn default() -> Self {
        Self::new(Vec3::splat(0.5))
            .with_light(Light::white([3.0, 1.0, 0.0]))
            .with_light(Light::white([-3.0, 1.0, 0.0]))
    }
}

/// Moves the first two lights around a horizontal circle, opposite each other.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightOrbit {
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self { angle: 0.0, speed: 0.1, radius: 3.0 }
    }
}

impl LightOrbit {
    /// Advances the angle by `speed` and repositions lights 0 and 1.
    ///
    /// Light 0 goes to `(r·cos a, y, r·sin a)`, light 1 to the point mirrored
    /// through the Y axis. Heights are kept; missing lights are skipped.
    pub fn advance(&mut self, illumination: &mut Illumination) {
        self.angle += self.speed;
        let (sin, cos) = self.angle.sin_cos();
        let offset = Vec3::new(self.radius * cos, 0.0, self.radius * sin);

        if let Some(l) = illumination.lights.get_mut(0) {
            l.position.x = offset.x;
            l.position.z = offset.z;
        }
        if let Some(l) = illumination.lights.get_mut(1) {
            l.position.x = -offset.x;
            l.position.z = -offset.z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_two_lights() {
        let ill = Illumination::default();
        assert_eq!(ill.lights.len(), 2);
        assert!(ill.lights.iter().all(|l| l.on));
    }

    #[test]
    fn orbit_places_lights_opposite_on_circle() {
        let mut ill = Illumination::default();
        let mut orbit = LightOrbit::default();
        orbit.advance(&mut ill);

        let a = ill.lights[0].position;
        let b = ill.lights[1].position;
        assert!((a.x - 3.0 * 0.1f32.cos()).abs() < 1e-6);
        assert!((a.z - 3.0 * 0.1f32.sin()).abs() < 1e-6);
        assert_eq!(a.y, 1.0);
        assert!((a.x + b.x).abs() < 1e-6 && (a.z + b.z).abs() < 1e-6);
    }

    #[test]
    fn orbit_tolerates_missing_lights() {
        let mut ill = Illumination::new(Vec3::ZERO);
        LightOrbit::default().advance(&mut ill);
        assert!(ill.lights.is_empty());
    }

    #[test]
    fn view_position_uses_view_matrix() {
        let l = Light::white([1.0, 2.0, 3.0]);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(l.view_position(view), Vec3::new(1.0, 2.0, -1.0));
    }
}
