//! Pointer interaction tracking
//!
//! Keeps the samples needed both for live dragging (per-call deltas) and for
//! measuring release velocity against a windowed baseline ("context").

use std::time::{Duration, Instant};

use mother_model::Vec2;

/// A pointer location with the time it was observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub point: Vec2,
    pub time: Instant,
}

impl Sample {
    pub fn new(point: Vec2, time: Instant) -> Self {
        Self { point, time }
    }
}

/// What a release measured against the current baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Time since the velocity baseline was taken.
    pub duration: Duration,
    /// Pointer displacement since the velocity baseline.
    pub displacement: Vec2,
}

/// Drag state for one pointer: the samples behind per-move deltas, the
/// velocity baseline and the cumulative distance traveled.
#[derive(Debug, Clone)]
pub struct InteractionTracker {
    /// Whether a drag is in progress.
    active: bool,
    /// Initial point at drag start
    start: Sample,
    /// Latest point
    current: Sample,
    /// Point before the latest one
    previous: Sample,
    /// Velocity baseline, re-taken every `quantum`
    context: Sample,
    /// Cumulative negated deltas since creation
    distance: Vec2,
    quantum: Duration,
}

impl InteractionTracker {
    pub fn new(now: Instant, quantum: Duration) -> Self {
        let origin = Sample::new(Vec2::ZERO, now);
        Self {
            active: false,
            start: origin,
            current: origin,
            previous: origin,
            context: origin,
            distance: Vec2::ZERO,
            quantum,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a drag at `point`. Returns `false` (and changes nothing) when a
    /// drag is already active.
    pub fn begin(&mut self, point: Vec2, time: Instant) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.rebase(point, time);
        true
    }

    /// Reset every sample to `point` without touching the active flag or
    /// the cumulative distance.
    pub fn rebase(&mut self, point: Vec2, time: Instant) {
        let sample = Sample::new(point, time);
        self.start = sample;
        self.context = sample;
        self.current = sample;
        self.previous = sample;
    }

    /// Record a new pointer sample and return the delta since the previous
    /// one.
    pub fn update(&mut self, point: Vec2, time: Instant) -> Vec2 {
        self.previous = self.current;
        self.current = Sample::new(point, time);

        let delta = self.current.point.delta(self.previous.point);
        self.distance.minus(delta);

        if time.saturating_duration_since(self.context.time) > self.quantum {
            self.context = self.current;
        }
        delta
    }

    /// Finish the drag and report velocity inputs relative to the baseline.
    pub fn end(&mut self, point: Vec2, time: Instant) -> Release {
        self.active = false;
        Release {
            duration: time.saturating_duration_since(self.context.time),
            displacement: point.delta(self.context.point),
        }
    }

    pub fn start(&self) -> Sample {
        self.start
    }

    pub fn current(&self) -> Sample {
        self.current
    }

    pub fn previous(&self) -> Sample {
        self.previous
    }

    pub fn context(&self) -> Sample {
        self.context
    }

    /// Cumulative negated drag distance since creation. Dragging left
    /// accumulates positive x (future content).
    pub fn distance(&self) -> Vec2 {
        self.distance
    }
}
