//! Trait surfaces that describe how a window talks to its collaborators.
//!
//! The engine never creates content or paints anything itself. Hosts plug in
//! a [`content::ContentFactory`] for per-slot content and a
//! [`platform::Platform`] bundle for frame scheduling and pointer capture.

/// Per-slot content and the factory that creates it
pub mod content;
/// Frame scheduling and pointer capture hooks
pub mod platform;

/// Frequently used traits for host and renderer crates.
pub mod prelude {
    pub use super::content::{
        ContentFactory, LoadOutcome, SlotContent, SlotContext,
    };
    pub use super::platform::{
        FrameScheduler, NoopCapture, NoopFrames, Platform, PointerCapture,
    };
    pub use mother_model::prelude::*;
}
