//! Viewport and slot geometry

use mother_model::{Boundaries, Vec2};

use crate::constants::layout::POOL_FACTOR;
use crate::error::{Result, WindowError};

/// Layout derived from the viewport and the slot size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub viewport: Vec2,
    pub slot: Vec2,
    /// Slots needed to cover the viewport: `ceil(viewport / slot)`.
    pub slots_in_view: usize,
    pub boundaries: Boundaries,
}

impl Geometry {
    pub fn compute(viewport: Vec2, slot: Vec2, margin: f64) -> Result<Self> {
        if !viewport.x.is_finite() || viewport.x <= 0.0 || !viewport.y.is_finite()
        {
            return Err(WindowError::InvalidViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }
        if !slot.x.is_finite() || slot.x <= 0.0 || !slot.y.is_finite() {
            return Err(WindowError::InvalidSlotDimensions {
                width: slot.x,
                height: slot.y,
            });
        }

        // A shift past a margin of a full slot or more would reduce the
        // strip's displacement by whole cells and move every slot.
        if margin >= slot.x {
            return Err(WindowError::MarginExceedsSlot {
                margin,
                slot_width: slot.x,
            });
        }

        let slots_in_view = ((viewport.x / slot.x).ceil() as usize).max(1);
        Ok(Self {
            viewport,
            slot,
            slots_in_view,
            boundaries: Boundaries::for_view(slots_in_view, slot.x, margin),
        })
    }

    /// Number of slots in the pool: one viewport of slots on each side of
    /// the visible one.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.slots_in_view * POOL_FACTOR
    }

    #[inline]
    pub fn slot_width(&self) -> f64 {
        self.slot.x
    }

    /// Home offset for a slot at `index`: `(index - slots_in_view) * width`.
    #[inline]
    pub fn slot_offset(&self, index: usize) -> Vec2 {
        let cells = index as f64 - self.slots_in_view as f64;
        Vec2::horizontal(cells * self.slot.x)
    }

    /// Index of the slot whose home is x = 0.
    #[inline]
    pub fn anchor_index(&self) -> usize {
        self.slots_in_view
    }
}
