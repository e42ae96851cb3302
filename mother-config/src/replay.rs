//! Scripted drag replay against a headless window.
//!
//! A [`ReplayScript`] lists pointer, resize and frame steps at millisecond
//! offsets. [`run`] drives a [`Window`] through them with label content and
//! no-op platform hooks, and reports every event plus the final layout.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use mother_contracts::prelude::*;
use mother_core::{EventKind, Window, WindowConfig, WindowEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

fn default_slot() -> Size {
    Size {
        width: 300.0,
        height: 200.0,
    }
}

fn default_frame_interval() -> u64 {
    16
}

fn single_contact() -> usize {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        Vec2::new(size.width, size.height)
    }
}

/// Drag script. Steps must be ordered by `at_ms`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReplayScript {
    pub viewport: Size,
    #[serde(default = "default_slot")]
    pub slot: Size,
    #[serde(default)]
    pub pointer: PointerKind,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Down {
        at_ms: u64,
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Move {
        at_ms: u64,
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Up {
        at_ms: u64,
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default = "single_contact")]
        contacts: usize,
    },
    Cancel {
        at_ms: u64,
    },
    Resize {
        at_ms: u64,
        width: f64,
        height: f64,
    },
    /// One `tick` at `at_ms`.
    Tick {
        at_ms: u64,
    },
    /// Tick every `every_ms` from `at_ms` through `until_ms`.
    Frames {
        at_ms: u64,
        until_ms: u64,
        #[serde(default = "default_frame_interval")]
        every_ms: u64,
    },
}

impl Step {
    pub fn at_ms(&self) -> u64 {
        match self {
            Step::Down { at_ms, .. }
            | Step::Move { at_ms, .. }
            | Step::Up { at_ms, .. }
            | Step::Cancel { at_ms }
            | Step::Resize { at_ms, .. }
            | Step::Tick { at_ms }
            | Step::Frames { at_ms, .. } => *at_ms,
        }
    }
}

impl ReplayScript {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| {
            format!("failed to read replay script {}", path.display())
        })?;
        Self::parse(&raw).with_context(|| {
            format!("invalid replay script {}", path.display())
        })
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let script: Self = serde_json::from_str(raw)?;
        script.check_order()?;
        Ok(script)
    }

    fn check_order(&self) -> anyhow::Result<()> {
        for pair in self.steps.windows(2) {
            if pair[1].at_ms() < pair[0].at_ms() {
                bail!(
                    "steps out of order: {}ms follows {}ms",
                    pair[1].at_ms(),
                    pair[0].at_ms()
                );
            }
        }
        Ok(())
    }
}

/// One event as observed during a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub at_ms: u64,
    pub name: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRecord {
    pub index: usize,
    pub origin: i64,
    pub x: f64,
    pub loading: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub events: Vec<EventRecord>,
    pub slots: Vec<SlotRecord>,
    pub swap_offset: i64,
    pub traveled: f64,
}

impl ReplayReport {
    pub fn count(&self, kind: EventKind) -> usize {
        self.events
            .iter()
            .filter(|event| event.name == kind.name())
            .count()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            let _ = writeln!(
                out,
                "{:>7}ms  {:<14} {}",
                event.at_ms, event.name, event.detail
            );
        }
        let _ = writeln!(
            out,
            "\nswap_offset={} traveled={}",
            self.swap_offset, self.traveled
        );
        for slot in &self.slots {
            let _ = writeln!(
                out,
                "  [{:>2}] origin={:>4} x={:>9.1}{}  {}",
                slot.index,
                slot.origin,
                slot.x,
                if slot.loading { " loading" } else { "" },
                slot.label
            );
        }
        out
    }
}

type Labels = Rc<RefCell<BTreeMap<i64, String>>>;

/// Label content: records what it shows for each origin.
struct LabelContent {
    labels: Labels,
}

impl SlotContent for LabelContent {
    fn render(&mut self, slot: &SlotContext) {
        self.labels
            .borrow_mut()
            .insert(slot.origin, format!("item {}", slot.origin));
    }

    fn load(&mut self, slot: &SlotContext) -> LoadOutcome {
        self.labels
            .borrow_mut()
            .insert(slot.origin, format!("item {} (loaded)", slot.origin));
        LoadOutcome::Ready
    }

    fn clean(&mut self, slot: &SlotContext) {
        self.labels.borrow_mut().remove(&slot.origin);
    }
}

struct LabelFactory {
    labels: Labels,
    dimensions: Vec2,
}

impl ContentFactory for LabelFactory {
    fn create(&self, _slot: &SlotContext) -> Box<dyn SlotContent> {
        Box::new(LabelContent {
            labels: Rc::clone(&self.labels),
        })
    }

    fn dimensions(&self) -> Option<Vec2> {
        Some(self.dimensions)
    }
}

/// Replay `script` and collect what happened.
pub fn run(
    script: &ReplayScript,
    config: WindowConfig,
) -> anyhow::Result<ReplayReport> {
    let labels: Labels = Rc::default();
    let factory = LabelFactory {
        labels: Rc::clone(&labels),
        dimensions: script.slot.into(),
    };
    let mut window = Window::new(
        script.viewport.into(),
        factory,
        Platform::headless(script.pointer),
        config,
    )
    .context("failed to build window")?;

    let clock = Rc::new(Cell::new(0u64));
    let events = Rc::new(RefCell::new(Vec::new()));
    for kind in EventKind::ALL {
        let clock = Rc::clone(&clock);
        let events = Rc::clone(&events);
        window.on(kind, move |event| {
            events.borrow_mut().push(EventRecord {
                at_ms: clock.get(),
                name: kind.name(),
                detail: describe(event),
            });
        });
    }

    info!(
        steps = script.steps.len(),
        slots = window.len(),
        "replaying script"
    );

    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);
    for step in &script.steps {
        clock.set(step.at_ms());
        debug!(?step, "step");
        match *step {
            Step::Down { at_ms, x, y } => {
                let event = PointerEvent::new(Vec2::new(x, y), at(at_ms));
                window.pointer_down(event);
            }
            Step::Move { at_ms, x, y } => {
                let event = PointerEvent::new(Vec2::new(x, y), at(at_ms));
                window.pointer_move(event);
            }
            Step::Up {
                at_ms,
                x,
                y,
                contacts,
            } => {
                let event = PointerEvent::new(Vec2::new(x, y), at(at_ms))
                    .with_contacts(contacts);
                window.pointer_up(event);
            }
            Step::Cancel { at_ms } => window.pointer_cancel(at(at_ms)),
            Step::Resize { width, height, .. } => {
                window
                    .resize(Vec2::new(width, height))
                    .with_context(|| format!("resize at {}ms", step.at_ms()))?;
            }
            Step::Tick { at_ms } => window.tick(at(at_ms)),
            Step::Frames {
                at_ms,
                until_ms,
                every_ms,
            } => {
                let every_ms = every_ms.max(1);
                let mut ms = at_ms;
                while ms <= until_ms {
                    clock.set(ms);
                    window.tick(at(ms));
                    ms += every_ms;
                }
            }
        }
    }

    let labels = labels.borrow();
    let slots = window
        .slots()
        .map(|slot| SlotRecord {
            index: slot.index(),
            origin: slot.origin(),
            x: slot.translation(),
            loading: slot.is_loading(),
            label: labels.get(&slot.origin()).cloned().unwrap_or_default(),
        })
        .collect();

    let report = ReplayReport {
        events: events.borrow().clone(),
        slots,
        swap_offset: window.swap_offset(),
        traveled: window.distance_traveled().x,
    };
    Ok(report)
}

fn describe(event: &WindowEvent) -> String {
    match *event {
        WindowEvent::Load { slots, swap_offset } => {
            format!("slots={slots} swap_offset={swap_offset}")
        }
        WindowEvent::PositionSet { delta, traveled } => {
            format!("dx={:.1} traveled={:.1}", delta.x, traveled.x)
        }
        WindowEvent::MomentumStop { kind, traveled } => {
            format!("kind={kind:?} traveled={:.1}", traveled.x)
        }
        WindowEvent::Swap {
            kind,
            origin,
            swap_offset,
        } => format!("kind={kind} origin={origin} swap_offset={swap_offset}"),
    }
}
