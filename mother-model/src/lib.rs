//! Core value types shared across the mother crates.
#![allow(missing_docs)]

pub mod geometry;
pub mod input;
pub mod prelude;
pub mod vector;

// Intentionally curated re-exports for downstream consumers.
pub use geometry::{Boundaries, SwapKind};
pub use input::{PointerButton, PointerEvent, PointerKind};
pub use vector::Vec2;
