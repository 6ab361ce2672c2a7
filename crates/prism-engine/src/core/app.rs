use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// When the runtime schedules frames.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RedrawMode {
    /// Redraw only after input, resize or an explicit request.
    #[default]
    OnDemand,
    /// Redraw every time the event loop goes idle.
    Continuous,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Queried after every frame and event; switching back to `OnDemand`
    /// stops self-rescheduling.
    fn redraw_mode(&self) -> RedrawMode {
        RedrawMode::OnDemand
    }

    /// Error that ended the app, reported by `Runtime::run` after the loop exits.
    fn take_error(&mut self) -> Option<anyhow::Error> {
        None
    }
}
