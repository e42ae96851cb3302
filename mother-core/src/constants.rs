//! Window constants
//!
//! Compiled defaults for geometry, interaction timing and momentum physics.
//! `WindowConfig::default()` reads from here so tuning happens in one place.

/// Slot layout defaults.
pub mod layout {
    /// Slot width used when the content factory declares no dimensions.
    pub const DEFAULT_SLOT_WIDTH: f64 = 200.0;
    /// Slot height used when the content factory declares no dimensions.
    pub const DEFAULT_SLOT_HEIGHT: f64 = 200.0;
    /// Extra distance past one viewport of slots before the first slot is
    /// shifted to the back.
    pub const BOUNDARY_MARGIN: f64 = 100.0;
    /// Pool size as a multiple of the slots needed to cover the viewport:
    /// one viewport of slots on each side of the visible one.
    pub const POOL_FACTOR: usize = 3;
}

/// Pointer tracking and settle timing.
pub mod interaction {
    /// Window (ms) after which the velocity baseline is re-taken. Releases
    /// later than this after the baseline skip momentum.
    pub const VELOCITY_QUANTUM_MS: u64 = 300;
    /// Delay (ms) after the last drag or momentum update before slots load.
    pub const LOAD_DELAY_MS: u64 = 300;
    /// Release displacement (px) below which no momentum is launched.
    pub const TRIGGER_DISTANCE: f64 = 10.0;
}

/// Release physics.
pub mod momentum {
    /// Deceleration in px/ms².
    pub const FRICTION: f64 = 0.0025;
    /// Release speed cap in px/ms.
    pub const MAX_SPEED: f64 = 3.0;
    /// Fixed duration (ms) of an edge bounce-back.
    pub const BOUNCE_DURATION_MS: u64 = 300;
}
