use std::time::{Duration, Instant};

use mother_model::Vec2;
use tracing::{debug, trace};

use super::Window;
use crate::events::WindowEvent;
use crate::interaction::Release;
use crate::momentum::{MomentumKind, Projection};

impl Window {
    /// Advance time-driven state to `now`.
    ///
    /// Samples the momentum run (if any) and fires the settle load once its
    /// deadline has passed. Hosts call this from their frame callback and
    /// from the wake-ups requested through the frame scheduler.
    pub fn tick(&mut self, now: Instant) {
        if let Some(frame) = self.momentum.sample(now) {
            let delta = self.tracker.update(frame.point, now);
            self.apply_delta(delta);

            if frame.finished {
                self.finish_momentum(now);
            } else {
                trace!(x = frame.point.x, "momentum frame");
                self.schedule_settle(now);
                self.platform.frames.request_frame();
            }
        }

        if self.settle.fire_if_due(now) {
            self.load_now();
        }
    }

    /// Stop a running momentum or bounce where it is. Returns `true` when a
    /// run was cancelled.
    pub fn cancel_momentum(&mut self) -> bool {
        if !self.momentum.is_active() {
            return false;
        }
        self.momentum.cancel();
        debug!(kind = ?self.momentum.kind(), "momentum cancelled");
        true
    }

    /// Run a load pass immediately: every slot's content is asked to load
    /// and a single `Load` event is emitted.
    pub fn load_now(&mut self) {
        self.settle.cancel();
        let dimensions = self.geometry.slot;
        let mut pending = 0usize;
        for slot in self.slots.iter_mut() {
            if !slot.load(dimensions).is_ready() {
                pending += 1;
            }
        }
        debug!(
            slots = self.slots.len(),
            pending,
            swap_offset = self.swap_offset,
            "load pass"
        );
        let slots = self.slots.len();
        let swap_offset = self.swap_offset;
        self.emit(WindowEvent::Load { slots, swap_offset });
    }

    /// Mark the slot showing `origin` as loaded after an asynchronous
    /// [`LoadOutcome::Pending`](mother_contracts::content::LoadOutcome).
    ///
    /// Returns `false` when no loading slot shows that origin any more,
    /// which happens when it was recycled while the content was in flight.
    pub fn finish_loading(&mut self, origin: i64) -> bool {
        match self
            .slots
            .iter_mut()
            .find(|slot| slot.origin() == origin && slot.is_loading())
        {
            Some(slot) => {
                slot.set_loading(false);
                true
            }
            None => false,
        }
    }

    /// Decide what a finished drag turns into: a bounce back from a
    /// configured edge, an inertial run, or an immediate load.
    pub(super) fn settle_release(&mut self, release: Release, now: Instant) {
        if self.try_bounce(now) {
            return;
        }

        if release.duration.is_zero()
            || release.duration >= self.config.velocity_quantum()
        {
            self.load_now();
            return;
        }

        let displacement = release.displacement.x;
        if displacement.abs() < self.config.trigger_distance {
            self.load_now();
            return;
        }

        match Projection::from_release(
            displacement,
            release.duration,
            self.config.max_speed,
            self.config.friction,
        ) {
            Some(projection) if projection.distance != 0.0 => {
                debug!(
                    speed = projection.speed,
                    distance = projection.distance,
                    duration_ms = projection.duration_ms,
                    "momentum projected"
                );
                self.start_momentum(
                    MomentumKind::Inertia,
                    projection.distance,
                    projection.duration(),
                    now,
                );
            }
            _ => self.load_now(),
        }
    }

    /// Start a bounce when the strip is past a configured edge.
    pub(super) fn try_bounce(&mut self, now: Instant) -> bool {
        let Some(correction) = self.edge_overshoot() else {
            return false;
        };
        debug!(correction, swap_offset = self.swap_offset, "bouncing back");
        let duration = self.config.bounce_duration();
        self.start_momentum(MomentumKind::Bounce, correction, duration, now);
        true
    }

    /// Pointer movement needed to bring the anchor slot back to x = 0, if
    /// the strip overshot a configured edge.
    fn edge_overshoot(&self) -> Option<f64> {
        let anchor = self.slots.get(self.geometry.anchor_index())?;
        let x = anchor.position().x;
        let overshot = (self.at_max_past() && x > 0.0)
            || (self.at_max_future() && x < 0.0);
        overshot.then_some(-x)
    }

    fn start_momentum(
        &mut self,
        kind: MomentumKind,
        distance: f64,
        duration: Duration,
        now: Instant,
    ) {
        let from = self.tracker.current().point;
        let to = from + Vec2::horizontal(distance);
        self.momentum.start(kind, from, to, duration, now);
        self.platform.frames.request_frame();
    }

    fn finish_momentum(&mut self, now: Instant) {
        let kind = self.momentum.kind();
        let traveled = self.tracker.distance();
        debug!(?kind, traveled = %traveled, "momentum stopped");
        self.emit(WindowEvent::MomentumStop { kind, traveled });

        if kind == MomentumKind::Inertia && self.try_bounce(now) {
            return;
        }
        self.load_now();
    }

    pub(super) fn schedule_settle(&mut self, now: Instant) {
        let deadline = self.settle.reschedule(now);
        self.platform.frames.request_wakeup(deadline);
    }
}
