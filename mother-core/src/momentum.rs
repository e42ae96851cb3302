//! Release physics and the momentum run
//!
//! [`Projection`] turns a release into a stop distance and duration.
//! [`Momentum`] is a time-based tween from the release pointer position to
//! that target. It never schedules itself; the window samples it once per
//! host frame and drops it on cancel, so a cancelled run cannot write again.

use std::time::{Duration, Instant};

use mother_model::Vec2;

/// Stop distance and duration projected from a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Release speed after capping (px/ms).
    pub speed: f64,
    /// Signed distance (px) the pointer keeps travelling.
    pub distance: f64,
    /// Time (ms) until the motion stops.
    pub duration_ms: f64,
}

impl Projection {
    /// Project a release of `displacement` px over `elapsed`.
    ///
    /// `speed = min(|d| / t, max_speed)`,
    /// `distance = sign(d) * speed² / (2 * friction)`,
    /// `duration = speed / friction`.
    ///
    /// Returns `None` for an instantaneous release (zero elapsed time), a
    /// motionless one, or a non-positive friction.
    pub fn from_release(
        displacement: f64,
        elapsed: Duration,
        max_speed: f64,
        friction: f64,
    ) -> Option<Self> {
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        if elapsed_ms <= 0.0 || friction <= 0.0 || displacement == 0.0 {
            return None;
        }
        let speed = (displacement.abs() / elapsed_ms).min(max_speed);
        if !speed.is_finite() || speed <= 0.0 {
            return None;
        }
        Some(Self {
            speed,
            distance: displacement.signum() * speed * speed / (2.0 * friction),
            duration_ms: speed / friction,
        })
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_ms / 1000.0)
    }
}

/// Why a momentum run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MomentumKind {
    /// Inertial decay after a fast release.
    #[default]
    Inertia,
    /// Fixed-duration return to a configured edge.
    Bounce,
}

/// One interpolated pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumFrame {
    pub point: Vec2,
    /// The run reached its target on this frame.
    pub finished: bool,
}

/// A polled tween between two pointer positions.
///
/// Nothing runs on its own; [`Momentum::sample`] is called once per frame
/// and dropping the run (`cancel`) guarantees no further writes.
#[derive(Debug, Clone)]
pub struct Momentum {
    active: bool,
    kind: MomentumKind,
    from: Vec2,
    to: Vec2,
    started_at: Instant,
    duration_ms: f64,
}

impl Default for Momentum {
    fn default() -> Self {
        Self {
            active: false,
            kind: MomentumKind::Inertia,
            from: Vec2::ZERO,
            to: Vec2::ZERO,
            started_at: Instant::now(),
            duration_ms: 0.0,
        }
    }
}

impl Momentum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn kind(&self) -> MomentumKind {
        self.kind
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    pub fn start(
        &mut self,
        kind: MomentumKind,
        from: Vec2,
        to: Vec2,
        duration: Duration,
        now: Instant,
    ) {
        self.active = true;
        self.kind = kind;
        self.from = from;
        self.to = to;
        self.started_at = now;
        self.duration_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Pointer position at `fraction` of the run, eased out.
    pub fn point_at(&self, fraction: f64) -> Vec2 {
        let eased = ease_out_circ(fraction);
        self.from + self.to.delta(self.from) * eased
    }

    /// Returns the next frame when running, or `None` when inactive.
    pub fn sample(&mut self, now: Instant) -> Option<MomentumFrame> {
        if !self.active {
            return None;
        }
        let elapsed_ms =
            now.saturating_duration_since(self.started_at).as_secs_f64()
                * 1000.0;
        if elapsed_ms >= self.duration_ms {
            self.active = false;
            return Some(MomentumFrame {
                point: self.to,
                finished: true,
            });
        }
        let fraction = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        Some(MomentumFrame {
            point: self.point_at(fraction),
            finished: false,
        })
    }

    /// Cancel the current run immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// `sqrt(1 - (1 - t)²)`: fast start, gentle stop.
pub fn ease_out_circ(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    (1.0 - inv * inv).sqrt()
}
