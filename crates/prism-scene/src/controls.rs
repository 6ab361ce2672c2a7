//! Keyboard commands.
//!
//! Keys are single letters, case-insensitive; holding Shift flips the sign of
//! the step. Each command mutates exactly one field group of the scene.
//!
//! | Key | Effect |
//! |-----|--------|
//! | `X` `Y` `Z` | rotate the interactive model about that axis |
//! | `S` | squeeze the interactive model (x, z grow while y shrinks) |
//! | `O` `F` `P` | orthographic / frustum / perspective projection |
//! | `C` | orbit the camera around its center |
//! | `H` | raise or lower the eye |
//! | `D` | move the eye closer or farther |
//! | `V` | widen or narrow the field of view |
//! | `B` | grow or shrink the near-plane extents |
//! | `L` | advance the lights along their circle (if enabled) |
//! | `K` | pause or resume the animation (if enabled) |

use std::f32::consts::PI;

use log::debug;

use crate::animation::OrbitAnimation;
use crate::scene::{LightOrbit, Projection, Scene};

/// Step direction chosen by the Shift modifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub fn from_shift(shift: bool) -> Self {
        if shift { Sign::Negative } else { Sign::Positive }
    }

    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A decoded key press.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Rotate(Axis, Sign),
    Squeeze(Sign),
    SetProjection(Projection),
    Orbit(Sign),
    Height(Sign),
    Distance(Sign),
    FieldOfView(Sign),
    NearPlane(Sign),
    MoveLights,
    ToggleAnimation,
}

impl Command {
    /// Maps a key character and Shift state to a command.
    ///
    /// Returns `None` for unbound keys and for `L` / `K` when the demo has not
    /// enabled lights or animation in `config`.
    pub fn decode(ch: char, shift: bool, config: &ControlConfig) -> Option<Self> {
        let sign = Sign::from_shift(shift);
        let cmd = match ch.to_ascii_uppercase() {
            'X' => Command::Rotate(Axis::X, sign),
            'Y' => Command::Rotate(Axis::Y, sign),
            'Z' => Command::Rotate(Axis::Z, sign),
            'S' => Command::Squeeze(sign),
            'O' => Command::SetProjection(Projection::Orthographic),
            'F' => Command::SetProjection(Projection::Frustum),
            'P' => Command::SetProjection(Projection::Perspective),
            'C' => Command::Orbit(sign),
            'H' => Command::Height(sign),
            'D' => Command::Distance(sign),
            'V' => Command::FieldOfView(sign),
            'B' => Command::NearPlane(sign),
            'L' if config.lights => Command::MoveLights,
            'K' if config.animation => Command::ToggleAnimation,
            _ => return None,
        };
        Some(cmd)
    }
}

/// Step sizes and optional command groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlConfig {
    /// Radians per rotate / orbit step.
    pub rotate_step: f32,
    /// World units per height / distance step.
    pub translate_step: f32,
    /// Relative change per squeeze step.
    pub scale_step: f32,
    /// Radians per field-of-view step.
    pub fovy_step: f32,
    /// Units per near-plane extent step.
    pub lrtb_step: f32,
    /// Enables `L`.
    pub lights: bool,
    /// Enables `K`.
    pub animation: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            rotate_step: PI / 36.0,
            translate_step: 0.05,
            scale_step: 0.05,
            fovy_step: 5.0 * PI / 180.0,
            lrtb_step: 0.1,
            lights: false,
            animation: false,
        }
    }
}

/// What the application should do after a command ran.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Outcome {
    /// A command matched and the scene must be repainted.
    pub redraw: bool,
    /// New animation state when the command toggled it.
    pub animation: Option<bool>,
}

/// Keyboard handler state: configuration plus the light orbit it drives.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pub config: ControlConfig,
    pub light_orbit: LightOrbit,
}

impl Controls {
    pub fn new(config: ControlConfig) -> Self {
        Self { config, light_orbit: LightOrbit::default() }
    }

    /// Decodes and applies one key press.
    pub fn handle_key(
        &mut self,
        ch: char,
        shift: bool,
        scene: &mut Scene,
        animation: Option<&mut OrbitAnimation>,
    ) -> Outcome {
        match Command::decode(ch, shift, &self.config) {
            Some(cmd) => self.apply(scene, cmd, animation),
            None => Outcome::default(),
        }
    }

    /// Applies `cmd` to `scene`.
    ///
    /// Model commands act on `scene.interactive`; with no models they are no-ops
    /// but still request a redraw.
    pub fn apply(
        &mut self,
        scene: &mut Scene,
        cmd: Command,
        animation: Option<&mut OrbitAnimation>,
    ) -> Outcome {
        debug!("command {cmd:?}");
        let cfg = &self.config;
        let camera = &mut scene.camera;

        let mut outcome = Outcome { redraw: true, animation: None };
        match cmd {
            Command::Rotate(axis, sign) => {
                if let Some(m) = scene.models.get_mut(scene.interactive) {
                    m.rotate[axis.index()] += sign.value() * cfg.rotate_step;
                }
            }
            Command::Squeeze(sign) => {
                if let Some(m) = scene.models.get_mut(scene.interactive) {
                    let s = sign.value() * cfg.scale_step;
                    m.scale.x *= 1.0 + s;
                    m.scale.y *= 1.0 - s;
                    m.scale.z *= 1.0 + s;
                }
            }
            Command::SetProjection(p) => {
                camera.set_projection(p);
                debug!("projection {p:?}, lrtb {}", camera.lrtb);
            }
            Command::Orbit(sign) => camera.z_angle += sign.value() * cfg.rotate_step,
            Command::Height(sign) => camera.eye.y += sign.value() * cfg.translate_step,
            Command::Distance(sign) => camera.distance += sign.value() * cfg.translate_step,
            Command::FieldOfView(sign) => camera.fovy += sign.value() * cfg.fovy_step,
            Command::NearPlane(sign) => camera.lrtb += sign.value() * cfg.lrtb_step,
            Command::MoveLights => self.light_orbit.advance(&mut scene.illumination),
            Command::ToggleAnimation => match animation {
                Some(anim) => outcome.animation = Some(anim.toggle()),
                None => debug!("no animation to toggle"),
            },
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::MeshData;
    use crate::scene::Model;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(Model::new(MeshData::new()).rotate([0.1, 0.2, 0.3]));
        scene.push(Model::new(MeshData::new()));
        scene
    }

    #[test]
    fn decode_is_case_insensitive_and_shift_flips_sign() {
        let cfg = ControlConfig::default();
        assert_eq!(Command::decode('x', false, &cfg), Some(Command::Rotate(Axis::X, Sign::Positive)));
        assert_eq!(Command::decode('X', true, &cfg), Some(Command::Rotate(Axis::X, Sign::Negative)));
        assert_eq!(Command::decode('q', false, &cfg), None);
    }

    #[test]
    fn optional_commands_need_config() {
        let mut cfg = ControlConfig::default();
        assert_eq!(Command::decode('L', false, &cfg), None);
        assert_eq!(Command::decode('K', false, &cfg), None);
        cfg.lights = true;
        cfg.animation = true;
        assert_eq!(Command::decode('l', false, &cfg), Some(Command::MoveLights));
        assert_eq!(Command::decode('k', true, &cfg), Some(Command::ToggleAnimation));
    }

    #[test]
    fn rotation_adds_signed_step() {
        let mut controls = Controls::default();
        let step = controls.config.rotate_step;

        for (axis, ch) in [(Axis::X, 'X'), (Axis::Y, 'Y'), (Axis::Z, 'Z')] {
            for shift in [false, true] {
                let mut s = scene();
                let before = s.models[0].rotate[axis.index()];
                let out = controls.handle_key(ch, shift, &mut s, None);
                assert!(out.redraw);
                let expected = before + Sign::from_shift(shift).value() * step;
                assert!((s.models[0].rotate[axis.index()] - expected).abs() < 1e-6);
                // Other axes and other models untouched.
                let others: Vec<usize> = (0..3).filter(|&i| i != axis.index()).collect();
                for i in others {
                    assert_eq!(s.models[0].rotate[i], scene().models[0].rotate[i]);
                }
                assert_eq!(s.models[1].rotate, Vec3::ZERO);
            }
        }
    }

    #[test]
    fn rotation_targets_interactive_model() {
        let mut controls = Controls::default();
        let mut s = scene();
        s.interactive = 1;
        controls.handle_key('Y', false, &mut s, None);
        assert!(s.models[1].rotate.y > 0.0);
        assert_eq!(s.models[0].rotate, Vec3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn squeeze_trades_height_for_width() {
        let mut controls = Controls::default();
        let mut s = scene();
        controls.handle_key('S', false, &mut s, None);
        assert!((s.models[0].scale - Vec3::new(1.05, 0.95, 1.05)).length() < 1e-6);
        controls.handle_key('S', true, &mut s, None);
        assert!((s.models[0].scale - Vec3::new(1.05 * 0.95, 0.95 * 1.05, 1.05 * 0.95)).length() < 1e-6);
    }

    #[test]
    fn camera_commands_move_one_field() {
        let mut controls = Controls::default();
        let cfg = controls.config.clone();
        let mut s = scene();
        let base = s.camera.clone();

        controls.handle_key('C', false, &mut s, None);
        assert_eq!(s.camera.z_angle, base.z_angle + cfg.rotate_step);
        controls.handle_key('H', true, &mut s, None);
        assert_eq!(s.camera.eye.y, base.eye.y - cfg.translate_step);
        controls.handle_key('D', false, &mut s, None);
        assert_eq!(s.camera.distance, base.distance + cfg.translate_step);
        controls.handle_key('V', true, &mut s, None);
        assert_eq!(s.camera.fovy, base.fovy - cfg.fovy_step);
        controls.handle_key('B', false, &mut s, None);
        assert_eq!(s.camera.lrtb, base.lrtb + cfg.lrtb_step);
        assert_eq!(s.camera.projection, base.projection);
    }

    #[test]
    fn projection_keys_switch_kind() {
        let mut controls = Controls::default();
        let mut s = scene();
        controls.handle_key('o', false, &mut s, None);
        assert_eq!(s.camera.projection, Projection::Orthographic);
        assert_eq!(s.camera.lrtb, 2.0);
        controls.handle_key('f', false, &mut s, None);
        assert_eq!(s.camera.projection, Projection::Frustum);
        assert_eq!(s.camera.lrtb, 1.2);
        controls.handle_key('p', false, &mut s, None);
        assert_eq!(s.camera.projection, Projection::Perspective);
    }

    #[test]
    fn move_lights_advances_orbit() {
        let mut controls = Controls::new(ControlConfig { lights: true, ..ControlConfig::default() });
        let mut s = scene();
        let before = s.illumination.lights[0].position;
        controls.handle_key('L', false, &mut s, None);
        assert_ne!(s.illumination.lights[0].position, before);
        assert!((controls.light_orbit.angle - 0.1).abs() < 1e-6);
    }

    #[test]
    fn toggle_animation_reports_new_state() {
        let mut controls = Controls::new(ControlConfig { animation: true, ..ControlConfig::default() });
        let mut s = scene();
        let mut anim = OrbitAnimation::new(1..2);
        assert!(anim.enabled);

        let out = controls.handle_key('K', false, &mut s, Some(&mut anim));
        assert_eq!(out.animation, Some(false));
        assert!(!anim.enabled);

        let out = controls.handle_key('K', false, &mut s, Some(&mut anim));
        assert_eq!(out.animation, Some(true));
    }

    #[test]
    fn unbound_key_requests_nothing() {
        let mut controls = Controls::default();
        let mut s = scene();
        assert_eq!(controls.handle_key('?', false, &mut s, None), Outcome::default());
    }
}
