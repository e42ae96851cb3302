use std::time::Instant;

use mother_model::{PointerButton, PointerEvent, PointerKind};
use tracing::{debug, trace};

use super::Window;

impl Window {
    /// Start a drag. Returns `true` when a new drag began.
    ///
    /// Ignored while a drag is already active, and for non-primary mouse
    /// buttons. A running momentum or bounce is cancelled before anything
    /// else, so no further frame of it can write positions.
    pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
        if self.platform.pointer == PointerKind::Mouse
            && event.button != PointerButton::Primary
        {
            trace!(button = ?event.button, "ignoring non-primary button");
            return false;
        }
        if self.tracker.is_active() {
            return false;
        }

        if self.cancel_momentum() {
            debug!(
                traveled = %self.tracker.distance(),
                "momentum interrupted by drag"
            );
        }
        self.settle.cancel();

        self.tracker.begin(event.point, event.time);
        self.acquire_capture();
        true
    }

    /// Apply one pointer-move sample to the strip.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        if !self.tracker.is_active() {
            return;
        }
        let delta = self.tracker.update(event.point, event.time);
        self.apply_delta(delta);
        self.schedule_settle(event.time);
    }

    /// Finish a drag and hand the release to the physics.
    ///
    /// Any distance between the last move and the release point is applied
    /// to the strip first. A release carrying more than one contact is
    /// ambiguous and ignored: the drag stays active and nothing is swapped
    /// or launched.
    pub fn pointer_up(&mut self, event: PointerEvent) {
        if event.is_multi_touch() {
            trace!(contacts = event.contacts, "ignoring multi-contact release");
            return;
        }
        if !self.tracker.is_active() {
            return;
        }

        // The release point may differ from the last move; the strip follows
        // it before the physics take over from there.
        if !event.point.equals(self.tracker.current().point) {
            let delta = self.tracker.update(event.point, event.time);
            self.apply_delta(delta);
        }

        let release = self.tracker.end(event.point, event.time);
        self.release_capture();
        self.settle_release(release, event.time);
    }

    /// Abort a drag (touch cancel, lost capture). Content loads where the
    /// strip stopped; no momentum is launched.
    pub fn pointer_cancel(&mut self, time: Instant) {
        if !self.tracker.is_active() {
            return;
        }
        let current = self.tracker.current().point;
        self.tracker.end(current, time);
        self.release_capture();

        if !self.try_bounce(time) {
            self.load_now();
        }
    }

    pub(super) fn acquire_capture(&mut self) {
        if !self.captured {
            self.platform.capture.attach();
            self.captured = true;
        }
    }

    pub(super) fn release_capture(&mut self) {
        if self.captured {
            self.platform.capture.detach();
            self.captured = false;
        }
    }
}
