//! Window configuration
//!
//! Every knob the engine reads is carried explicitly by [`WindowConfig`] and
//! handed to `Window::new`; nothing is shared between windows. Defaults come
//! from [`crate::constants`].

use std::time::Duration;

use mother_model::Vec2;

use crate::constants;
use crate::error::{Result, WindowError};

/// Tuning for one window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WindowConfig {
    /// Delay (ms) after the last drag or momentum update before every slot
    /// is asked to load.
    pub load_delay_ms: u64,
    /// Velocity baseline window (ms). The release velocity is measured
    /// against a baseline no older than this; slower releases skip momentum.
    pub velocity_quantum_ms: u64,
    /// Release displacement (px) below which momentum is not launched.
    pub trigger_distance: f64,
    /// Release speed cap (px/ms).
    pub max_speed: f64,
    /// Momentum deceleration (px/ms²).
    pub friction: f64,
    /// Duration (ms) of the bounce-back run at a configured edge.
    pub bounce_duration_ms: u64,
    /// Extra distance (px) past the left boundary before shifting. Must be
    /// smaller than the slot width in use.
    pub boundary_margin: f64,
    /// Slot width when the content factory declares no dimensions.
    pub default_slot_width: f64,
    /// Slot height when the content factory declares no dimensions.
    pub default_slot_height: f64,
    /// How many items before origin 0 may be revealed. `None` (or `false`
    /// in config files) leaves the past unbounded.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "limit::deserialize")
    )]
    pub max_past: Option<u64>,
    /// How many items after origin 0 may be revealed. `None` (or `false`
    /// in config files) leaves the future unbounded.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "limit::deserialize")
    )]
    pub max_future: Option<u64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        use constants::{interaction, layout, momentum};
        Self {
            load_delay_ms: interaction::LOAD_DELAY_MS,
            velocity_quantum_ms: interaction::VELOCITY_QUANTUM_MS,
            trigger_distance: interaction::TRIGGER_DISTANCE,
            max_speed: momentum::MAX_SPEED,
            friction: momentum::FRICTION,
            bounce_duration_ms: momentum::BOUNCE_DURATION_MS,
            boundary_margin: layout::BOUNDARY_MARGIN,
            default_slot_width: layout::DEFAULT_SLOT_WIDTH,
            default_slot_height: layout::DEFAULT_SLOT_HEIGHT,
            max_past: None,
            max_future: None,
        }
    }
}

impl WindowConfig {
    /// Reject values the physics cannot work with.
    pub fn validate(&self) -> Result<()> {
        positive("friction", self.friction)?;
        positive("max_speed", self.max_speed)?;
        positive("default_slot_width", self.default_slot_width)?;
        non_negative("default_slot_height", self.default_slot_height)?;
        non_negative("boundary_margin", self.boundary_margin)?;
        non_negative("trigger_distance", self.trigger_distance)?;
        if self.velocity_quantum_ms == 0 {
            return Err(WindowError::config(
                "velocity_quantum_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn velocity_quantum(&self) -> Duration {
        Duration::from_millis(self.velocity_quantum_ms)
    }

    pub fn bounce_duration(&self) -> Duration {
        Duration::from_millis(self.bounce_duration_ms)
    }

    /// Fallback slot size when the content factory declares none.
    pub fn default_slot_dimensions(&self) -> Vec2 {
        Vec2::new(self.default_slot_width, self.default_slot_height)
    }

    pub fn with_limits(
        mut self,
        max_past: Option<u64>,
        max_future: Option<u64>,
    ) -> Self {
        self.max_past = max_past;
        self.max_future = max_future;
        self
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WindowError::config(
            field,
            format!("expected a positive finite number, got {value}"),
        ));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(WindowError::config(
            field,
            format!("expected a non-negative finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Swap limits accept a count, `false`, or nothing.
#[cfg(feature = "serde")]
mod limit {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Count(u64),
        Flag(bool),
    }

    pub(super) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Flag(false)) => Ok(None),
            Some(Raw::Count(n)) => Ok(Some(n)),
            Some(Raw::Flag(true)) => Err(D::Error::custom(
                "expected a count or `false` for an unbounded limit",
            )),
        }
    }
}
