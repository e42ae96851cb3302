use mother_model::Vec2;

// ===== Content Renderer Contract =====
//
// One content object exists per slot for the window's lifetime. The window
// hands it a fresh `SlotContext` every time the slot is created, recycled or
// asked to load, so renderers never need to hold a reference back into the
// engine.

/// Snapshot of the slot a content object is attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotContext {
    /// Position in the live sequence (0..N-1).
    pub index: usize,
    /// Stable logical item number. Origin 0 is the slot that first rendered
    /// at x = 0; negative origins lie in the past.
    pub origin: i64,
    /// Current location in the window's coordinate space.
    pub position: Vec2,
    /// Slot size the window lays out with.
    pub dimensions: Vec2,
}

/// Result of asking a slot's content to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadOutcome {
    /// Content is on screen; the slot leaves its loading state.
    #[default]
    Ready,
    /// Content arrives later; the host calls `Window::finish_loading`.
    Pending,
}

impl LoadOutcome {
    /// Whether the slot can leave its loading state.
    pub fn is_ready(self) -> bool {
        matches!(self, LoadOutcome::Ready)
    }
}

/// Content bound to one slot.
pub trait SlotContent {
    /// Draw whatever is cheap to draw immediately (placeholders, labels).
    /// Called once on creation and again right after every recycle.
    fn render(&mut self, slot: &SlotContext);

    /// Fetch or draw the expensive content once scrolling settles.
    fn load(&mut self, slot: &SlotContext) -> LoadOutcome;

    /// Release resources. Called when the slot is destroyed.
    fn clean(&mut self, slot: &SlotContext);
}

/// Produces content objects for new slots.
pub trait ContentFactory {
    /// Build the content object for a freshly created slot.
    fn create(&self, slot: &SlotContext) -> Box<dyn SlotContent>;

    /// Declared slot size. The window falls back to its configured default
    /// when this is `None`.
    fn dimensions(&self) -> Option<Vec2> {
        None
    }
}
