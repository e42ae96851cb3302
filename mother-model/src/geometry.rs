use std::fmt;

/// X thresholds in the window's continuous coordinate space at which a slot
/// must be recycled to the opposite end of the strip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundaries {
    /// A first slot whose x falls below this is shifted to the back.
    pub left: f64,
    /// A last slot whose x rises above this is popped to the front.
    pub right: f64,
}

impl Boundaries {
    /// Derive boundaries for `slots_in_view` slots of `slot_width`.
    ///
    /// `left = -(slots_in_view * slot_width) - margin`,
    /// `right = 2 * slots_in_view * slot_width`.
    pub fn for_view(slots_in_view: usize, slot_width: f64, margin: f64) -> Self {
        let span = slots_in_view as f64 * slot_width;
        Self {
            left: -span - margin,
            right: 2.0 * span,
        }
    }
}

/// Direction of a recycling swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapKind {
    /// First slot moved to the back; reveals future content.
    Shift,
    /// Last slot moved to the front; reveals past content.
    Pop,
}

impl SwapKind {
    /// Change applied to the window's swap offset.
    pub const fn offset_step(self) -> i64 {
        match self {
            SwapKind::Shift => 1,
            SwapKind::Pop => -1,
        }
    }
}

impl fmt::Display for SwapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapKind::Shift => write!(f, "shift"),
            SwapKind::Pop => write!(f, "pop"),
        }
    }
}
