use mother_model::{SwapKind, Vec2};
use tracing::{debug, trace};

use super::Window;
use crate::events::WindowEvent;

impl Window {
    /// Move every slot by `delta` as one rigid strip, then recycle.
    pub(super) fn apply_delta(&mut self, delta: Vec2) {
        if delta.x == 0.0 {
            return;
        }
        for slot in self.slots.iter_mut() {
            slot.translate(delta);
        }
        trace!(dx = delta.x, "strip moved");

        let traveled = self.tracker.distance();
        self.emit(WindowEvent::PositionSet { delta, traveled });
        self.recycle();
    }

    /// At most one pop and one shift per call.
    fn recycle(&mut self) {
        let boundaries = self.geometry.boundaries;

        let past_edge = self
            .slots
            .back()
            .is_some_and(|last| last.position().x > boundaries.right);
        if past_edge && self.can_swap(SwapKind::Pop) {
            self.swap(SwapKind::Pop);
        }

        let future_edge = self
            .slots
            .front()
            .is_some_and(|first| first.position().x < boundaries.left);
        if future_edge && self.can_swap(SwapKind::Shift) {
            self.swap(SwapKind::Shift);
        }
    }

    /// Whether the configured limits allow another swap of `kind`.
    ///
    /// Evaluated against the live swap offset before every boundary check,
    /// so a fast drag cannot overshoot a limit.
    pub fn can_swap(&self, kind: SwapKind) -> bool {
        match kind {
            SwapKind::Pop => !self.at_max_past(),
            SwapKind::Shift => !self.at_max_future(),
        }
    }

    /// No further past content may be revealed.
    pub fn at_max_past(&self) -> bool {
        self.config
            .max_past
            .is_some_and(|max| self.swap_offset <= -(max as i64))
    }

    /// No further future content may be revealed.
    pub fn at_max_future(&self) -> bool {
        self.config
            .max_future
            .is_some_and(|max| self.swap_offset >= max as i64)
    }

    fn swap(&mut self, kind: SwapKind) {
        let recycled_index = match kind {
            SwapKind::Pop => {
                let Some(last) = self.slots.pop_back() else {
                    return;
                };
                self.slots.push_front(last);
                0
            }
            SwapKind::Shift => {
                let Some(first) = self.slots.pop_front() else {
                    return;
                };
                self.slots.push_back(first);
                self.slots.len() - 1
            }
        };
        self.swap_offset += kind.offset_step();
        self.reindex();

        let geometry = self.geometry;
        let swap_offset = self.swap_offset;
        let slot = &mut self.slots[recycled_index];
        slot.assign_origin(&geometry, swap_offset);
        slot.set_loading(true);
        slot.render(geometry.slot);
        let origin = slot.origin();

        debug!(
            %kind,
            origin,
            swap_offset,
            x = slot.position().x,
            "slot recycled"
        );
        self.emit(WindowEvent::Swap {
            kind,
            origin,
            swap_offset,
        });
    }

    /// Recompute every slot's index and home offset from its sequence
    /// position, preserving each slot's offset within its cell.
    fn reindex(&mut self) {
        let geometry = self.geometry;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.place(index, &geometry);
        }
    }
}
