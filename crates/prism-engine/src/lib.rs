//! Prism engine crate.
//!
//! Owns the platform + GPU runtime: the window and event loop, keyboard input,
//! the wgpu device and surface, and the renderers that draw a
//! [`prism_scene::Scene`].
//!
//! A demo implements [`core::App`] and hands it to [`window::Runtime::run`]:
//!
//! ```no_run
//! use prism_engine::core::{App, AppControl, FrameCtx};
//! use prism_engine::device::GpuInit;
//! use prism_engine::window::{Runtime, RuntimeConfig};
//! use prism_scene::Color;
//!
//! struct Blank;
//!
//! impl App for Blank {
//!     fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
//!         ctx.render(Color::BLACK, |_, _| AppControl::Continue)
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     Runtime::run(RuntimeConfig::default(), GpuInit::default(), Blank)
//! }
//! ```

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
