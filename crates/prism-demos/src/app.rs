use winit::dpi::LogicalSize;

use prism_engine::core::{App as EngineApp, AppControl, FrameCtx, RedrawMode};
use prism_engine::device::GpuInit;
use prism_engine::input::InputFrame;
use prism_engine::render::{FlatRenderer, MeshRenderer, MeshStyle};
use prism_engine::window::{Runtime, RuntimeConfig};
use prism_scene::animation::OrbitAnimation;
use prism_scene::controls::{ControlConfig, Controls};
use prism_scene::geometry::FlatVertex;
use prism_scene::{Color, Scene};

// ── Demo ──────────────────────────────────────────────────────────────────

/// Demo window builder.
///
/// Configure the window, key bindings and look, then hand over the scene:
///
/// ```rust,ignore
/// Demo::new()
///     .title("Lighting")
///     .controls(ControlConfig { lights: true, ..ControlConfig::default() })
///     .style(MeshStyle { wire_color: Some(Color::BLACK), ..MeshStyle::default() })
///     .run_scene(scenes::lighting())?;
/// ```
pub struct Demo {
    title: String,
    width: f64,
    height: f64,
    controls: ControlConfig,
    style: MeshStyle,
    animation: Option<OrbitAnimation>,
}

impl Demo {
    pub fn new() -> Self {
        Self {
            title: "prism".to_string(),
            width: 800.0,
            height: 600.0,
            controls: ControlConfig::default(),
            style: MeshStyle::default(),
            animation: None,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn controls(mut self, config: ControlConfig) -> Self {
        self.controls = config;
        self
    }

    pub fn style(mut self, style: MeshStyle) -> Self {
        self.style = style;
        self
    }

    /// Attach an orbit animation; the window redraws continuously while it runs.
    pub fn animation(mut self, animation: OrbitAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            ..RuntimeConfig::default()
        }
    }

    // ── Entry points ──────────────────────────────────────────────────────

    /// Opens the window and renders `scene` until it is closed.
    pub fn run_scene(self, scene: Scene) -> anyhow::Result<()> {
        let config = self.runtime_config();
        let state = SceneApp::new(self, scene);
        Runtime::run(config, GpuInit::default(), state)
    }

    /// Opens the window and draws flat 2D triangles on black until it is closed.
    pub fn run_flat(self, vertices: Vec<FlatVertex>) -> anyhow::Result<()> {
        let config = self.runtime_config();
        let state = FlatApp {
            vertices,
            renderer: FlatRenderer::new(),
            error: None,
        };
        Runtime::run(config, GpuInit::flat(), state)
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

// ── SceneApp ──────────────────────────────────────────────────────────────

/// Keyboard-driven 3D scene: input, optional animation, update, draw.
pub(crate) struct SceneApp {
    scene: Scene,
    controls: Controls,
    animation: Option<OrbitAnimation>,
    renderer: MeshRenderer,
    error: Option<anyhow::Error>,
}

impl SceneApp {
    fn new(demo: Demo, scene: Scene) -> Self {
        let mut app = Self {
            scene,
            controls: Controls::new(demo.controls),
            animation: demo.animation,
            renderer: MeshRenderer::new(demo.style),
            error: None,
        };
        app.place_satellites();
        app
    }

    /// Applies every key press of the frame in arrival order.
    pub(crate) fn handle_input(&mut self, input: &InputFrame) -> bool {
        let mut redraw = false;
        for press in &input.presses {
            let Some((ch, shift)) = press.typed() else { continue };

            let outcome =
                self.controls
                    .handle_key(ch, shift, &mut self.scene, self.animation.as_mut());
            if let Some(running) = outcome.animation {
                log::info!("animation {}", if running { "on" } else { "off" });
            }
            redraw |= outcome.redraw;
        }
        redraw
    }

    /// Advances the animation (no-op when paused) and re-seats the satellites,
    /// which follow the interactive model even while paused.
    pub(crate) fn tick(&mut self) {
        if let Some(animation) = self.animation.as_mut() {
            animation.step(&mut self.scene);
        }
        self.place_satellites();
    }

    fn place_satellites(&mut self) {
        if let Some(animation) = self.animation.as_ref() {
            animation.place_satellites(&mut self.scene);
        }
    }

    pub(crate) fn mode(&self) -> RedrawMode {
        match &self.animation {
            Some(a) if a.enabled => RedrawMode::Continuous,
            _ => RedrawMode::OnDemand,
        }
    }

    #[cfg(test)]
    pub(crate) fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl EngineApp for SceneApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.handle_input(ctx.input_frame);
        self.tick();

        if let Some(aspect) = ctx.window.viewport().aspect() {
            self.scene.update(aspect);
        }

        let clear = self.renderer.style().clear;
        let (renderer, scene, error) = (&mut self.renderer, &self.scene, &mut self.error);

        ctx.render(clear, |rctx, target| match renderer.render(rctx, target, scene) {
            Ok(()) => AppControl::Continue,
            Err(e) => {
                *error = Some(e.into());
                AppControl::Exit
            }
        })
    }

    fn redraw_mode(&self) -> RedrawMode {
        self.mode()
    }

    fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }
}

// ── FlatApp ───────────────────────────────────────────────────────────────

/// Static 2D drawing; repaints only on expose/resize.
struct FlatApp {
    vertices: Vec<FlatVertex>,
    renderer: FlatRenderer,
    error: Option<anyhow::Error>,
}

impl EngineApp for FlatApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (renderer, vertices, error) = (&mut self.renderer, &self.vertices, &mut self.error);

        ctx.render(Color::BLACK, |rctx, target| {
            match renderer.render(rctx, target, vertices) {
                Ok(()) => AppControl::Continue,
                Err(e) => {
                    *error = Some(e.into());
                    AppControl::Exit
                }
            }
        })
    }

    fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use prism_engine::input::{InputEvent, InputState, Key, KeyState, Modifiers};

    use super::*;
    use crate::scenes;

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key, shift: bool) {
        state.apply_event(
            frame,
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                modifiers: Modifiers { shift, ..Modifiers::default() },
                code: 0,
                repeat: false,
            },
        );
    }

    fn orbit_app() -> SceneApp {
        let (scene, animation) = scenes::orbit();
        let demo = Demo::new()
            .controls(ControlConfig { animation: true, ..ControlConfig::default() })
            .animation(animation);
        SceneApp::new(demo, scene)
    }

    #[test]
    fn key_presses_rotate_interactive_model() {
        let mut app = SceneApp::new(Demo::new(), scenes::lighting());
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());

        press(&mut state, &mut frame, Key::Y, false);
        press(&mut state, &mut frame, Key::Y, false);
        press(&mut state, &mut frame, Key::Y, true);

        assert!(app.handle_input(&frame));
        let step = ControlConfig::default().rotate_step;
        assert!((app.scene().models[0].rotate.y - step).abs() < 1e-6);
    }

    #[test]
    fn non_command_keys_do_not_redraw() {
        let mut app = SceneApp::new(Demo::new(), scenes::lighting());
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());

        press(&mut state, &mut frame, Key::Space, false);
        press(&mut state, &mut frame, Key::Q, false);

        assert!(!app.handle_input(&frame));
    }

    #[test]
    fn toggling_animation_switches_redraw_mode() {
        let mut app = orbit_app();
        assert_eq!(app.mode(), RedrawMode::Continuous);

        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut state, &mut frame, Key::K, false);
        app.handle_input(&frame);
        assert_eq!(app.mode(), RedrawMode::OnDemand);

        let before = app.scene().models[2].translate;
        app.tick();
        assert_eq!(app.scene().models[2].translate, before);

        frame.clear();
        press(&mut state, &mut frame, Key::K, false);
        app.handle_input(&frame);
        assert_eq!(app.mode(), RedrawMode::Continuous);
        app.tick();
        assert_ne!(app.scene().models[2].translate, before);
    }

    #[test]
    fn paused_satellites_follow_model_rotation() {
        let mut app = orbit_app();
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        press(&mut state, &mut frame, Key::K, false);
        press(&mut state, &mut frame, Key::X, false);
        app.handle_input(&frame);

        // Satellite 1 sits off the X axis, so an X rotation moves it.
        let before = app.scene().models[3].translate;
        app.tick();
        assert_ne!(app.scene().models[3].translate, before);
    }

    #[test]
    fn static_scene_redraws_on_demand() {
        let app = SceneApp::new(Demo::new(), scenes::lighting());
        assert_eq!(app.mode(), RedrawMode::OnDemand);
    }
}
