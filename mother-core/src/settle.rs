//! Debounced settle trigger for content loading

use std::time::{Duration, Instant};

/// Holds at most one pending load deadline.
///
/// Rescheduling replaces the deadline, so there is never more than one load
/// pending no matter how many updates arrive.
#[derive(Debug, Clone)]
pub struct SettleTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl SettleTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending deadline and arm a new one `delay` after `now`.
    pub fn reschedule(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Returns `true` exactly once
    /// per armed deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reschedule_replaces_pending_deadline() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::new(Duration::from_millis(300));
        timer.reschedule(t0);
        timer.reschedule(t0 + Duration::from_millis(200));

        assert!(!timer.fire_if_due(t0 + Duration::from_millis(300)));
        assert!(timer.fire_if_due(t0 + Duration::from_millis(500)));
        assert!(!timer.fire_if_due(t0 + Duration::from_millis(900)));
    }

    #[test]
    fn cancel_clears_deadline() {
        let t0 = Instant::now();
        let mut timer = SettleTimer::new(Duration::from_millis(300));
        timer.reschedule(t0);
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.fire_if_due(t0 + Duration::from_secs(1)));
    }
}
