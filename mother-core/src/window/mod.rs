//! Window engine: a fixed pool of slots recycled to simulate an unbounded
//! horizontal strip.
//!
//! The engine is split by concern:
//! - `input`: pointer down/move/up/cancel handling and pointer capture
//! - `recycle`: applying deltas to the strip and shift/pop swaps
//! - `motion`: release physics, momentum/bounce runs, frame ticks, loading
//! - `resize`: geometry changes that keep logical state

mod input;
mod motion;
mod recycle;
mod resize;

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use mother_contracts::content::ContentFactory;
use mother_contracts::platform::Platform;
use mother_model::{Boundaries, Vec2};
use tracing::debug;

use crate::config::WindowConfig;
use crate::error::Result;
use crate::events::{EventEmitter, EventKind, SubscriptionId, WindowEvent};
use crate::geometry::Geometry;
use crate::interaction::InteractionTracker;
use crate::momentum::Momentum;
use crate::settle::SettleTimer;
use crate::slot::Slot;

/// An endless horizontal strip of recyclable slots.
///
/// Owns the slot pool, the interaction tracker, the momentum run and the
/// settle timer. Hosts forward pointer input, call [`Window::tick`] when the
/// frame scheduler asks, and paint each slot at its translation.
pub struct Window {
    config: WindowConfig,
    geometry: Geometry,
    factory: Box<dyn ContentFactory>,
    platform: Platform,
    /// Left-to-right visible order; `slots[i].index() == i` at all times.
    slots: VecDeque<Slot>,
    /// Net swaps since creation: shift +1, pop -1.
    swap_offset: i64,
    tracker: InteractionTracker,
    momentum: Momentum,
    settle: SettleTimer,
    events: EventEmitter,
    /// Whether document-wide pointer delivery is attached.
    captured: bool,
}

impl Window {
    /// Build a window over a `viewport`-sized container.
    ///
    /// Slot size comes from the factory's declared dimensions, falling back
    /// to the configured default. Every slot's content is created and
    /// rendered before this returns.
    pub fn new<F>(
        viewport: Vec2,
        factory: F,
        platform: Platform,
        config: WindowConfig,
    ) -> Result<Self>
    where
        F: ContentFactory + 'static,
    {
        config.validate()?;

        let slot_size = factory
            .dimensions()
            .unwrap_or_else(|| config.default_slot_dimensions());
        let geometry =
            Geometry::compute(viewport, slot_size, config.boundary_margin)?;

        let slots = (0..geometry.pool_size())
            .map(|index| Slot::create(index, &geometry, 0, &factory))
            .collect::<VecDeque<_>>();

        debug!(
            viewport = %viewport,
            slot = %slot_size,
            slots_in_view = geometry.slots_in_view,
            pool = slots.len(),
            left = geometry.boundaries.left,
            right = geometry.boundaries.right,
            "window populated"
        );

        let now = Instant::now();
        Ok(Self {
            tracker: InteractionTracker::new(now, config.velocity_quantum()),
            settle: SettleTimer::new(config.load_delay()),
            momentum: Momentum::new(),
            events: EventEmitter::new(),
            config,
            geometry,
            factory: Box::new(factory),
            platform,
            slots,
            swap_offset: 0,
            captured: false,
        })
    }

    // ===== Subscriptions =====

    pub fn on<H>(&mut self, kind: EventKind, handler: H) -> SubscriptionId
    where
        H: FnMut(&WindowEvent) + 'static,
    {
        self.events.on(kind, handler)
    }

    /// Subscribe by event name: `"load"`, `"position.set"`,
    /// `"momentum.stop"` or `"swap"`.
    pub fn on_named<H>(&mut self, name: &str, handler: H) -> Result<SubscriptionId>
    where
        H: FnMut(&WindowEvent) + 'static,
    {
        let kind = name.parse::<EventKind>()?;
        Ok(self.events.on(kind, handler))
    }

    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.events.off(id)
    }

    // ===== State access =====

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn boundaries(&self) -> Boundaries {
        self.geometry.boundaries
    }

    pub fn slots_in_view(&self) -> usize {
        self.geometry.slots_in_view
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in left-to-right order.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = &Slot> + '_ {
        self.slots.iter()
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Slot currently showing the logical item `origin`, if any.
    pub fn slot_for_origin(&self, origin: i64) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.origin() == origin)
    }

    pub fn swap_offset(&self) -> i64 {
        self.swap_offset
    }

    /// Cumulative negated drag distance since creation, momentum included.
    pub fn distance_traveled(&self) -> Vec2 {
        self.tracker.distance()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    /// True while a momentum or bounce run is in flight.
    pub fn is_decelerating(&self) -> bool {
        self.momentum.is_active()
    }

    pub fn is_pointer_captured(&self) -> bool {
        self.captured
    }

    /// Pending settle deadline, for hosts that sleep between frames.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    fn emit(&mut self, event: WindowEvent) {
        self.events.emit(&event);
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.release_capture();
        let dimensions = self.geometry.slot;
        for slot in self.slots.iter_mut() {
            slot.clean(dimensions);
        }
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("geometry", &self.geometry)
            .field("slots", &self.slots)
            .field("swap_offset", &self.swap_offset)
            .field("dragging", &self.tracker.is_active())
            .field("decelerating", &self.momentum.is_active())
            .field("captured", &self.captured)
            .finish_non_exhaustive()
    }
}
