use std::fmt;
use std::time::Instant;

use mother_model::PointerKind;

/// Host frame clock.
///
/// The window never loops on its own. It asks for a frame while momentum is
/// running and for a wake-up when a settle deadline is pending; the host
/// answers by calling `Window::tick(now)`.
pub trait FrameScheduler {
    /// Request one `tick` on the next animation frame.
    fn request_frame(&mut self);

    /// Request a `tick` no earlier than `deadline`. Later requests supersede
    /// earlier ones.
    fn request_wakeup(&mut self, deadline: Instant) {
        let _ = deadline;
    }
}

/// Document-wide pointer tracking.
///
/// Move/up/cancel delivery is attached only while a drag is active so
/// repeated drags never accumulate listeners.
pub trait PointerCapture {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Platform capabilities injected at construction instead of sniffed
/// globally.
pub struct Platform {
    /// Pointer family; mouse input only starts drags on the primary button.
    pub pointer: PointerKind,
    /// Receives frame and wake-up requests.
    pub frames: Box<dyn FrameScheduler>,
    /// Attached for the length of each drag.
    pub capture: Box<dyn PointerCapture>,
}

impl Platform {
    /// Bundle the given hooks.
    pub fn new(
        pointer: PointerKind,
        frames: Box<dyn FrameScheduler>,
        capture: Box<dyn PointerCapture>,
    ) -> Self {
        Self {
            pointer,
            frames,
            capture,
        }
    }

    /// Platform with no-op hooks, for hosts that poll `tick` every frame.
    pub fn headless(pointer: PointerKind) -> Self {
        Self::new(pointer, Box::new(NoopFrames), Box::new(NoopCapture))
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::headless(PointerKind::default())
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform")
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

/// Frame scheduler that ignores requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFrames;

impl FrameScheduler for NoopFrames {
    fn request_frame(&mut self) {}
}

/// Pointer capture that ignores attach/detach.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}
