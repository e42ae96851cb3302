//! Recyclable slot

use std::fmt;

use mother_contracts::content::{
    ContentFactory, LoadOutcome, SlotContent, SlotContext,
};
use mother_model::Vec2;

use crate::geometry::Geometry;

/// One recyclable unit of the strip.
///
/// The content object is created once and reused for every logical item the
/// slot shows over its lifetime.
pub struct Slot {
    index: usize,
    position: Vec2,
    slot_offset: Vec2,
    origin: i64,
    loading: bool,
    content: Box<dyn SlotContent>,
}

impl Slot {
    /// Create a slot at its home position and render its content.
    pub(crate) fn create(
        index: usize,
        geometry: &Geometry,
        swap_offset: i64,
        factory: &dyn ContentFactory,
    ) -> Self {
        let slot_offset = geometry.slot_offset(index);
        let origin = origin_for(index, geometry, swap_offset);
        let context = SlotContext {
            index,
            origin,
            position: slot_offset,
            dimensions: geometry.slot,
        };
        let mut slot = Self {
            index,
            position: slot_offset,
            slot_offset,
            origin,
            loading: true,
            content: factory.create(&context),
        };
        slot.content.render(&context);
        slot
    }

    /// Move the slot to `index`, keeping its displacement within its
    /// slot-width cell so it does not visually jump.
    pub(crate) fn place(&mut self, index: usize, geometry: &Geometry) {
        let previous_offset = self.slot_offset;
        self.index = index;
        self.slot_offset = geometry.slot_offset(index);

        let mut moved = self
            .position
            .delta(previous_offset)
            .remainder(geometry.slot);
        if moved.x < 0.0 {
            moved.plus(Vec2::horizontal(geometry.slot_width()));
        }
        self.position
            .set(self.slot_offset.x + moved.x, self.position.y);
    }

    /// Put the slot at an explicit cell displacement from its home offset.
    pub(crate) fn place_at(
        &mut self,
        index: usize,
        geometry: &Geometry,
        cell_offset: f64,
    ) {
        self.index = index;
        self.slot_offset = geometry.slot_offset(index);
        self.position.set(self.slot_offset.x + cell_offset, self.position.y);
    }

    pub(crate) fn assign_origin(&mut self, geometry: &Geometry, swap_offset: i64) {
        self.origin = origin_for(self.index, geometry, swap_offset);
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        // Only the x axis has meaning for a horizontal strip.
        self.position.plus(Vec2::horizontal(delta.x));
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn render(&mut self, dimensions: Vec2) {
        let context = self.context(dimensions);
        self.content.render(&context);
    }

    pub(crate) fn load(&mut self, dimensions: Vec2) -> LoadOutcome {
        let context = self.context(dimensions);
        let outcome = self.content.load(&context);
        self.loading = !outcome.is_ready();
        outcome
    }

    pub(crate) fn clean(&mut self, dimensions: Vec2) {
        let context = self.context(dimensions);
        self.content.clean(&context);
    }

    pub fn context(&self, dimensions: Vec2) -> SlotContext {
        SlotContext {
            index: self.index,
            origin: self.origin,
            position: self.position,
            dimensions,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn slot_offset(&self) -> Vec2 {
        self.slot_offset
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Displacement of the slot within its slot-width cell, in
    /// `[0, slot_width)`.
    pub fn cell_offset(&self, slot_width: f64) -> f64 {
        let raw = (self.position.x - self.slot_offset.x) % slot_width;
        if raw < 0.0 { raw + slot_width } else { raw }
    }

    /// Single-axis translation to paint the slot at.
    pub fn translation(&self) -> f64 {
        self.position.x
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("index", &self.index)
            .field("position", &self.position)
            .field("slot_offset", &self.slot_offset)
            .field("origin", &self.origin)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

/// Logical item number for the slot at `index`.
///
/// Origin 0 is the slot whose home is x = 0 when no swaps have happened.
#[inline]
pub(crate) fn origin_for(
    index: usize,
    geometry: &Geometry,
    swap_offset: i64,
) -> i64 {
    swap_offset + index as i64 - geometry.slots_in_view as i64
}
