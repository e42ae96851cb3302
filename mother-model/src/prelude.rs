//! Engine focused snapshot of the types surface.
//! Prefer importing from this module when wiring a host or a content
//! renderer.

pub use super::geometry::{Boundaries, SwapKind};
pub use super::input::{PointerButton, PointerEvent, PointerKind};
pub use super::vector::Vec2;
