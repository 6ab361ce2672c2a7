//! Time subsystem.
//!
//! Frame timing utilities decoupled from the runtime:
//! - one `FrameClock` per window, ticked once per presented frame
//! - an `FpsCounter` for periodic frame-rate diagnostics

mod frame_clock;

pub use frame_clock::{FpsCounter, FrameClock, FrameTime};
