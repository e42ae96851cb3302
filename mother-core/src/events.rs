//! Window event notifications
//!
//! A single typed emitter owned by the window. Handlers run synchronously at
//! the point the event is raised.

use std::fmt;
use std::str::FromStr;

use mother_model::{SwapKind, Vec2};

use crate::error::WindowError;
use crate::momentum::MomentumKind;

/// Subscribable event families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Every slot was asked to load after a settle.
    Load,
    /// Slot positions changed by a drag or momentum frame.
    PositionSet,
    /// A momentum or bounce run reached its target.
    MomentumStop,
    /// A slot was recycled to the opposite end.
    Swap,
}

impl EventKind {
    pub const ALL: [Self; 4] = [
        Self::Load,
        Self::PositionSet,
        Self::MomentumStop,
        Self::Swap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::PositionSet => "position.set",
            Self::MomentumStop => "momentum.stop",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| WindowError::UnknownEvent(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    Load {
        slots: usize,
        swap_offset: i64,
    },
    PositionSet {
        /// Delta applied to every slot.
        delta: Vec2,
        /// Cumulative negated drag distance after the delta.
        traveled: Vec2,
    },
    MomentumStop {
        kind: MomentumKind,
        traveled: Vec2,
    },
    Swap {
        kind: SwapKind,
        /// Origin the recycled slot now shows.
        origin: i64,
        swap_offset: i64,
    },
}

impl WindowEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            WindowEvent::Load { .. } => EventKind::Load,
            WindowEvent::PositionSet { .. } => EventKind::PositionSet,
            WindowEvent::MomentumStop { .. } => EventKind::MomentumStop,
            WindowEvent::Swap { .. } => EventKind::Swap,
        }
    }
}

/// Handle returned by `on`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&WindowEvent)>;

/// Synchronous event registry keyed by [`SubscriptionId`].
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    handlers: Vec<(SubscriptionId, EventKind, Handler)>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&WindowEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns `false` if it was already gone.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _, _)| *sub != id);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: &WindowEvent) {
        let kind = event.kind();
        for (_, _, handler) in
            self.handlers.iter_mut().filter(|(_, k, _)| *k == kind)
        {
            handler(event);
        }
    }

    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.handlers.iter().any(|(_, k, _)| *k == kind)
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
