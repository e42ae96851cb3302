//! # Mother Core
//!
//! An unbounded horizontal scroller built from a fixed pool of slots.
//!
//! ## Overview
//!
//! The [`Window`] lays `3 × slots_in_view` slots side by side and moves them
//! as one strip while the user drags. When a slot leaves the strip past the
//! left or right boundary it is recycled to the opposite end and its content
//! is re-rendered for the logical item (its *origin*) it now shows. A release
//! launches an eased momentum run; expensive content loads once scrolling has
//! settled for a while.
//!
//! - **Slots**: [`slot::Slot`] keeps its sequence index, home offset,
//!   position, origin and content object
//! - **Interaction**: [`interaction::InteractionTracker`] turns pointer
//!   samples into per-move deltas and release velocity
//! - **Momentum**: [`momentum::Projection`] and [`momentum::Momentum`]
//! - **Events**: [`events::EventEmitter`] with `load`, `position.set`,
//!   `momentum.stop` and `swap`
//!
//! The engine is single-threaded and never schedules itself: the host feeds
//! pointer events and calls [`Window::tick`] when asked through the
//! [`FrameScheduler`](mother_contracts::platform::FrameScheduler).
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`WindowConfig`] and
//!   the model types
//!
//! ## Examples
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use mother_contracts::prelude::*;
//! use mother_core::{Window, WindowConfig};
//!
//! struct Label;
//!
//! impl SlotContent for Label {
//!     fn render(&mut self, _slot: &SlotContext) {}
//!     fn load(&mut self, _slot: &SlotContext) -> LoadOutcome {
//!         LoadOutcome::Ready
//!     }
//!     fn clean(&mut self, _slot: &SlotContext) {}
//! }
//!
//! struct Labels;
//!
//! impl ContentFactory for Labels {
//!     fn create(&self, _slot: &SlotContext) -> Box<dyn SlotContent> {
//!         Box::new(Label)
//!     }
//!     fn dimensions(&self) -> Option<Vec2> {
//!         Some(Vec2::new(300.0, 200.0))
//!     }
//! }
//!
//! let mut window = Window::new(
//!     Vec2::new(900.0, 200.0),
//!     Labels,
//!     Platform::headless(PointerKind::Touch),
//!     WindowConfig::default(),
//! )?;
//! assert_eq!(window.len(), 9);
//!
//! let t0 = Instant::now();
//! window.pointer_down(PointerEvent::new(Vec2::new(500.0, 50.0), t0));
//! window.pointer_move(PointerEvent::new(
//!     Vec2::new(380.0, 50.0),
//!     t0 + Duration::from_millis(16),
//! ));
//! assert_eq!(window.distance_traveled().x, 120.0);
//! # Ok::<(), mother_core::WindowError>(())
//! ```

#![allow(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod geometry;
pub mod interaction;
pub mod momentum;
pub mod settle;
pub mod slot;
pub mod window;

pub use config::WindowConfig;
pub use error::{Result, WindowError};
pub use events::{EventKind, SubscriptionId, WindowEvent};
pub use geometry::Geometry;
pub use momentum::{Momentum, MomentumKind, Projection};
pub use slot::Slot;
pub use window::Window;
