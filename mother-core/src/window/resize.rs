use mother_model::Vec2;
use tracing::debug;

use super::Window;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::slot::Slot;

impl Window {
    /// Adapt to a new viewport without resetting logical state.
    ///
    /// The swap offset and every surviving slot (content, origin, home
    /// offset) are kept. When more slots fit in view, one new slot per
    /// extra column is added at the front and two at the back; when fewer
    /// fit, the same counts are cleaned and dropped. New slots continue the
    /// strip at its current displacement and start out loading.
    pub fn resize(&mut self, viewport: Vec2) -> Result<()> {
        let geometry = Geometry::compute(
            viewport,
            self.geometry.slot,
            self.config.boundary_margin,
        )?;
        let before = self.geometry.slots_in_view;
        let after = geometry.slots_in_view;

        // Front slot's signed distance from home; every slot shares it.
        let displacement = self
            .slots
            .front()
            .map(|slot| slot.position().x - slot.slot_offset().x)
            .unwrap_or(0.0);

        if after > before {
            let grow = after - before;
            let front_len = self.slots.len() + grow;
            for index in (0..grow).rev() {
                let slot = Slot::create(
                    index,
                    &geometry,
                    self.swap_offset,
                    self.factory.as_ref(),
                );
                self.slots.push_front(slot);
            }
            for index in front_len..front_len + 2 * grow {
                let slot = Slot::create(
                    index,
                    &geometry,
                    self.swap_offset,
                    self.factory.as_ref(),
                );
                self.slots.push_back(slot);
            }
        } else if after < before {
            let shrink = before - after;
            let dimensions = self.geometry.slot;
            for mut slot in self.slots.drain(..shrink) {
                slot.clean(dimensions);
            }
            let back_start = self.slots.len().saturating_sub(2 * shrink);
            for mut slot in self.slots.drain(back_start..) {
                slot.clean(dimensions);
            }
        }

        self.geometry = geometry;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.place_at(index, &geometry, displacement);
            slot.assign_origin(&geometry, self.swap_offset);
        }

        debug!(
            viewport = %viewport,
            slots_in_view = after,
            pool = self.slots.len(),
            left = geometry.boundaries.left,
            right = geometry.boundaries.right,
            swap_offset = self.swap_offset,
            "window resized"
        );
        Ok(())
    }
}
