use std::time::Instant;

use crate::vector::Vec2;

/// Pointer family the host delivers events for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Button that produced a pointer event. Touch contacts report `Primary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Other(u8),
}

/// One pointer sample as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Page coordinates of the (first) contact.
    pub point: Vec2,
    pub time: Instant,
    pub button: PointerButton,
    /// Simultaneous contacts carried by the event. Mouse events report 1.
    pub contacts: usize,
}

impl PointerEvent {
    /// Primary-button, single-contact event.
    pub fn new(point: Vec2, time: Instant) -> Self {
        Self {
            point,
            time,
            button: PointerButton::Primary,
            contacts: 1,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_contacts(mut self, contacts: usize) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn is_multi_touch(&self) -> bool {
        self.contacts > 1
    }
}
