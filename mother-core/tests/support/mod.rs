//! Recording collaborators shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use mother_contracts::prelude::*;
use mother_core::{EventKind, Window, WindowConfig, WindowEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCall {
    Create { origin: i64 },
    Render { origin: i64, index: usize },
    Load { origin: i64 },
    Clean { origin: i64 },
}

pub type CallLog = Rc<RefCell<Vec<ContentCall>>>;

pub struct RecordingContent {
    log: CallLog,
    outcome: LoadOutcome,
}

impl SlotContent for RecordingContent {
    fn render(&mut self, slot: &SlotContext) {
        self.log.borrow_mut().push(ContentCall::Render {
            origin: slot.origin,
            index: slot.index,
        });
    }

    fn load(&mut self, slot: &SlotContext) -> LoadOutcome {
        self.log
            .borrow_mut()
            .push(ContentCall::Load { origin: slot.origin });
        self.outcome
    }

    fn clean(&mut self, slot: &SlotContext) {
        self.log
            .borrow_mut()
            .push(ContentCall::Clean { origin: slot.origin });
    }
}

pub struct RecordingFactory {
    pub log: CallLog,
    pub dimensions: Option<Vec2>,
    pub outcome: LoadOutcome,
}

impl RecordingFactory {
    pub fn new(dimensions: Option<Vec2>) -> Self {
        Self {
            log: Rc::default(),
            dimensions,
            outcome: LoadOutcome::Ready,
        }
    }
}

impl ContentFactory for RecordingFactory {
    fn create(&self, slot: &SlotContext) -> Box<dyn SlotContent> {
        self.log
            .borrow_mut()
            .push(ContentCall::Create { origin: slot.origin });
        Box::new(RecordingContent {
            log: Rc::clone(&self.log),
            outcome: self.outcome,
        })
    }

    fn dimensions(&self) -> Option<Vec2> {
        self.dimensions
    }
}

#[derive(Clone, Default)]
pub struct FrameLog {
    pub frames: Rc<Cell<usize>>,
    pub wakeups: Rc<RefCell<Vec<Instant>>>,
}

impl FrameScheduler for FrameLog {
    fn request_frame(&mut self) {
        self.frames.set(self.frames.get() + 1);
    }

    fn request_wakeup(&mut self, deadline: Instant) {
        self.wakeups.borrow_mut().push(deadline);
    }
}

#[derive(Clone, Default)]
pub struct CaptureLog {
    pub attached: Rc<Cell<usize>>,
    pub detached: Rc<Cell<usize>>,
}

impl PointerCapture for CaptureLog {
    fn attach(&mut self) {
        self.attached.set(self.attached.get() + 1);
    }

    fn detach(&mut self) {
        self.detached.set(self.detached.get() + 1);
    }
}

/// A window plus handles onto everything it talked to.
pub struct Harness {
    pub window: Window,
    pub content: CallLog,
    pub frames: FrameLog,
    pub capture: CaptureLog,
    pub events: Rc<RefCell<Vec<WindowEvent>>>,
    pub t0: Instant,
}

pub const SLOT: f64 = 300.0;

/// 900x200 viewport with 300x200 slots: 3 in view, 9 in the pool.
pub fn harness() -> Harness {
    harness_with(WindowConfig::default(), PointerKind::Touch, LoadOutcome::Ready)
}

pub fn harness_with(
    config: WindowConfig,
    pointer: PointerKind,
    outcome: LoadOutcome,
) -> Harness {
    let mut factory = RecordingFactory::new(Some(Vec2::new(SLOT, 200.0)));
    factory.outcome = outcome;
    let content = Rc::clone(&factory.log);
    let frames = FrameLog::default();
    let capture = CaptureLog::default();
    let platform = Platform::new(
        pointer,
        Box::new(frames.clone()),
        Box::new(capture.clone()),
    );

    let mut window =
        Window::new(Vec2::new(900.0, 200.0), factory, platform, config)
            .expect("window");

    let events = Rc::new(RefCell::new(Vec::new()));
    for kind in EventKind::ALL {
        let sink = Rc::clone(&events);
        window.on(kind, move |event| sink.borrow_mut().push(*event));
    }

    Harness {
        window,
        content,
        frames,
        capture,
        events,
        t0: Instant::now(),
    }
}

impl Harness {
    pub fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    pub fn event(&self, x: f64, ms: u64) -> PointerEvent {
        PointerEvent::new(Vec2::new(x, 50.0), self.at(ms))
    }

    pub fn down(&mut self, x: f64, ms: u64) -> bool {
        let event = self.event(x, ms);
        self.window.pointer_down(event)
    }

    pub fn move_to(&mut self, x: f64, ms: u64) {
        let event = self.event(x, ms);
        self.window.pointer_move(event);
    }

    pub fn up(&mut self, x: f64, ms: u64) {
        let event = self.event(x, ms);
        self.window.pointer_up(event);
    }

    /// Move the pointer from `from` by `step` px per sample, `count`
    /// samples, one every `every_ms` starting after `start_ms`.
    pub fn drag_steps(
        &mut self,
        from: f64,
        step: f64,
        count: u32,
        start_ms: u64,
        every_ms: u64,
    ) -> f64 {
        let mut x = from;
        for i in 1..=u64::from(count) {
            x += step;
            self.move_to(x, start_ms + i * every_ms);
        }
        x
    }

    /// Tick every 16 ms from `from_ms` until momentum stops or `until_ms`.
    pub fn run_frames(&mut self, from_ms: u64, until_ms: u64) -> u64 {
        let mut ms = from_ms;
        while ms <= until_ms {
            let now = self.at(ms);
            self.window.tick(now);
            if !self.window.is_decelerating() {
                break;
            }
            ms += 16;
        }
        ms
    }

    pub fn events_of(&self, kind: EventKind) -> Vec<WindowEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .copied()
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events_of(kind).len()
    }

    pub fn content_calls(&self, matches: impl Fn(&ContentCall) -> bool) -> usize {
        self.content.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn positions(&self) -> Vec<f64> {
        self.window.slots().map(|slot| slot.position().x).collect()
    }

    pub fn origins(&self) -> Vec<i64> {
        self.window.slots().map(|slot| slot.origin()).collect()
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Every slot sits at `origin * width - distance traveled`, the sequence is
/// indexed 0..N-1 and sorted by x.
pub fn assert_strip_consistent(window: &Window) {
    let traveled = window.distance_traveled().x;
    let width = window.geometry().slot_width();
    let mut previous_x = f64::NEG_INFINITY;
    for (i, slot) in window.slots().enumerate() {
        assert_eq!(slot.index(), i, "index out of order");
        assert!(slot.position().x > previous_x, "positions not ascending");
        previous_x = slot.position().x;
        let expected = slot.origin() as f64 * width - traveled;
        assert!(
            (slot.position().x - expected).abs() < 1e-6,
            "slot {i} (origin {}) at {} but expected {expected}",
            slot.origin(),
            slot.position().x,
        );
    }
}
