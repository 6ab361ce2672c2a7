//! Satellites circling the interactive model.
//!
//! The satellites ride a circle of radius `radius`, shifted by `x_shift` along
//! the local X axis, in the frame spun by the interactive model's X/Y rotation.
//! While enabled, every tick advances the circle angle and spins the interactive
//! model a little further.

use std::f32::consts::FRAC_PI_2;
use std::ops::Range;

use glam::{Mat4, Vec2, Vec3};
use log::debug;

use crate::scene::Scene;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitAnimation {
    pub enabled: bool,
    /// Current circle angle in radians.
    pub angle: f32,
    /// Radians added to `angle` per tick.
    pub speed: f32,
    pub radius: f32,
    pub x_shift: f32,
    /// Radians added to the interactive model's X and Y rotation per tick.
    pub spin: Vec2,
    /// Model indices of the satellites; satellite `k` starts `k · π/2` ahead.
    pub satellites: Range<usize>,
}

impl OrbitAnimation {
    pub fn new(satellites: Range<usize>) -> Self {
        Self {
            enabled: true,
            angle: 0.0,
            speed: 0.035,
            radius: 1.5,
            x_shift: 1.5,
            spin: Vec2::new(0.02 * 0.3, 0.02 * 0.4),
            satellites,
        }
    }

    /// Flips `enabled` and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        debug!("animation {}", if self.enabled { "resumed" } else { "paused" });
        self.enabled
    }

    /// Advances one tick. No-op while disabled.
    pub fn step(&mut self, scene: &mut Scene) {
        if !self.enabled {
            return;
        }

        self.angle += self.speed;
        if let Some(m) = scene.interactive_model_mut() {
            m.rotate.x += self.spin.x;
            m.rotate.y += self.spin.y;
        }
        self.place_satellites(scene);
    }

    /// Local (unspun) position of satellite `k`.
    pub fn local_position(&self, k: usize) -> Vec3 {
        let theta = self.angle + k as f32 * FRAC_PI_2;
        let (sin, cos) = theta.sin_cos();
        Vec3::new(self.radius * cos + self.x_shift, 0.0, self.radius * sin)
    }

    /// Writes every satellite's translate from the current angle and the
    /// interactive model's `Rx · Ry` rotation. Out-of-range indices are skipped.
    pub fn place_satellites(&self, scene: &mut Scene) {
        let spin = scene
            .interactive_model()
            .map(|m| Mat4::from_rotation_x(m.rotate.x) * Mat4::from_rotation_y(m.rotate.y))
            .unwrap_or(Mat4::IDENTITY);

        for (k, index) in self.satellites.clone().enumerate() {
            let world = spin.transform_point3(self.local_position(k));
            if let Some(model) = scene.models.get_mut(index) {
                model.translate = world;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MeshData;
    use crate::scene::Model;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        for _ in 0..6 {
            scene.push(Model::new(MeshData::new()));
        }
        scene
    }

    #[test]
    fn place_without_spin_lays_satellites_on_shifted_circle() {
        let mut s = scene();
        let anim = OrbitAnimation::new(2..6);
        anim.place_satellites(&mut s);

        let expected = [
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 1.5),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, -1.5),
        ];
        for (i, e) in expected.iter().enumerate() {
            assert!((s.models[i + 2].translate - *e).length() < 1e-5, "satellite {i}");
        }
        assert_eq!(s.models[0].translate, Vec3::ZERO);
    }

    #[test]
    fn step_advances_angle_spin_and_translation() {
        let mut s = scene();
        let mut anim = OrbitAnimation::new(2..6);
        anim.place_satellites(&mut s);
        let before = s.models[2].translate;

        anim.step(&mut s);
        assert!((anim.angle - 0.035).abs() < 1e-6);
        assert!((s.models[0].rotate.x - 0.006).abs() < 1e-6);
        assert!((s.models[0].rotate.y - 0.008).abs() < 1e-6);
        assert_ne!(s.models[2].translate, before);
    }

    #[test]
    fn disabled_step_is_noop() {
        let mut s = scene();
        let mut anim = OrbitAnimation::new(2..6);
        assert!(!anim.toggle());

        let snapshot = anim.clone();
        anim.step(&mut s);
        assert_eq!(anim, snapshot);
        assert!(s.models.iter().all(|m| m.translate == Vec3::ZERO && m.rotate == Vec3::ZERO));

        assert!(anim.toggle());
        anim.step(&mut s);
        assert!(anim.angle > 0.0);
    }

    #[test]
    fn satellites_follow_interactive_spin() {
        let mut s = scene();
        s.models[0].rotate.x = FRAC_PI_2;
        let anim = OrbitAnimation::new(2..3);
        anim.place_satellites(&mut s);
        // Rx(90°) keeps +X satellites on X.
        assert!((s.models[2].translate - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);

        s.models[0].rotate = Vec3::new(0.0, FRAC_PI_2, 0.0);
        anim.place_satellites(&mut s);
        // Ry(90°) sends +X to -Z.
        assert!((s.models[2].translate - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-5);
    }

    #[test]
    fn satellite_range_past_end_is_ignored() {
        let mut s = scene();
        OrbitAnimation::new(4..10).place_satellites(&mut s);
        assert_eq!(s.models.len(), 6);
    }
}
