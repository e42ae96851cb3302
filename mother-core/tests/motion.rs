mod support;

use mother_contracts::prelude::*;
use mother_core::momentum::ease_out_circ;
use mother_core::{EventKind, MomentumKind, WindowConfig, WindowEvent};

use support::*;

/// 300 px left in 200 ms: projects 450 px more over 600 ms.
fn fast_flick(h: &mut Harness) {
    assert!(h.down(600.0, 0));
    h.move_to(450.0, 100);
    h.move_to(300.0, 200);
    h.up(300.0, 200);
}

fn stop_kinds(h: &Harness) -> Vec<MomentumKind> {
    h.events_of(EventKind::MomentumStop)
        .into_iter()
        .filter_map(|event| match event {
            WindowEvent::MomentumStop { kind, .. } => Some(kind),
            _ => None,
        })
        .collect()
}

#[test]
fn fast_release_runs_momentum_to_projected_target() {
    let mut h = harness();
    fast_flick(&mut h);
    assert!(h.window.is_decelerating());
    assert!(h.frames.frames.get() >= 1);
    assert_eq!(h.count(EventKind::Load), 0);

    let stopped_at = h.run_frames(216, 1000);
    assert!(stopped_at >= 800);
    assert!(!h.window.is_decelerating());
    assert!(approx(h.window.distance_traveled().x, 750.0));
    assert_eq!(h.window.swap_offset(), 3);
    assert_strip_consistent(&h.window);

    assert_eq!(stop_kinds(&h), vec![MomentumKind::Inertia]);
    assert_eq!(h.count(EventKind::Load), 1);
    let events = h.events.borrow();
    let tail = &events[events.len() - 2..];
    assert_eq!(tail[0].kind(), EventKind::MomentumStop);
    assert_eq!(tail[1].kind(), EventKind::Load);
    drop(events);

    assert!(h.window.next_deadline().is_none());
}

#[test]
fn release_away_from_last_move_carries_the_strip() {
    let mut h = harness();
    h.down(600.0, 0);
    h.move_to(450.0, 100);
    h.up(300.0, 200);

    assert_eq!(h.count(EventKind::PositionSet), 2);
    assert!(approx(h.window.distance_traveled().x, 300.0));
    assert_strip_consistent(&h.window);
    assert!(h.window.is_decelerating());

    h.run_frames(216, 1000);
    assert!(approx(h.window.distance_traveled().x, 750.0));
    assert_eq!(h.window.swap_offset(), 3);
    assert_strip_consistent(&h.window);
}

#[test]
fn drag_during_momentum_stops_it_in_place() {
    let mut h = harness();
    fast_flick(&mut h);

    let mut ms = 216;
    while ms < 500 {
        let now = h.at(ms);
        h.window.tick(now);
        ms += 16;
    }
    let now = h.at(500);
    h.window.tick(now);

    let expected = 300.0 + 450.0 * ease_out_circ(0.5);
    assert!(approx(h.window.distance_traveled().x, expected));
    let frozen = h.positions();
    let writes = h.count(EventKind::PositionSet);

    assert!(h.down(200.0, 500));
    assert!(!h.window.is_decelerating());
    assert!(h.window.is_dragging());

    let later = h.at(516);
    h.window.tick(later);
    let much_later = h.at(1200);
    h.window.tick(much_later);

    assert_eq!(h.positions(), frozen);
    assert_eq!(h.count(EventKind::PositionSet), writes);
    assert_eq!(h.count(EventKind::MomentumStop), 0);
    assert_eq!(h.count(EventKind::Load), 0);
}

#[test]
fn cancel_momentum_reports_whether_a_run_was_live() {
    let mut h = harness();
    assert!(!h.window.cancel_momentum());
    fast_flick(&mut h);
    assert!(h.window.cancel_momentum());
    assert!(!h.window.is_decelerating());
    assert!(!h.window.cancel_momentum());
}

#[test]
fn slow_release_loads_immediately() {
    let mut h = harness();
    h.down(500.0, 0);
    h.move_to(400.0, 100);
    h.up(400.0, 300);

    assert!(!h.window.is_decelerating());
    assert_eq!(
        h.events_of(EventKind::Load),
        vec![WindowEvent::Load {
            slots: 9,
            swap_offset: 0,
        }]
    );
    assert_eq!(h.content_calls(|c| matches!(c, ContentCall::Load { .. })), 9);
    assert!(h.window.slots().all(|slot| !slot.is_loading()));
}

#[test]
fn instantaneous_release_loads_immediately() {
    let mut h = harness();
    h.down(500.0, 0);
    h.move_to(400.0, 0);
    h.up(400.0, 0);

    assert!(!h.window.is_decelerating());
    assert_eq!(h.count(EventKind::Load), 1);
}

#[test]
fn release_below_trigger_distance_loads_immediately() {
    let mut h = harness();
    h.down(500.0, 0);
    h.move_to(495.0, 20);
    h.up(495.0, 30);

    assert!(!h.window.is_decelerating());
    assert_eq!(h.count(EventKind::Load), 1);
}

#[test]
fn velocity_is_measured_against_recent_baseline() {
    let mut h = harness();
    h.down(500.0, 0);
    // Baseline is re-taken here: 350 ms since the drag began.
    h.move_to(400.0, 350);
    h.move_to(250.0, 400);
    h.up(250.0, 450);

    assert!(h.window.is_decelerating());
    h.run_frames(466, 1500);
    // 150 px in 100 ms projects 450 px beyond the 250 px dragged.
    assert!(approx(h.window.distance_traveled().x, 700.0));
}

#[test]
fn settle_load_is_debounced() {
    let mut h = harness();
    h.down(500.0, 0);
    h.move_to(480.0, 10);
    h.move_to(460.0, 20);
    h.move_to(440.0, 30);

    assert_eq!(h.window.next_deadline(), Some(h.at(330)));
    assert_eq!(h.frames.wakeups.borrow().len(), 3);
    assert_eq!(h.frames.wakeups.borrow().last().copied(), Some(h.at(330)));

    let early = h.at(329);
    h.window.tick(early);
    assert_eq!(h.count(EventKind::Load), 0);

    let due = h.at(330);
    h.window.tick(due);
    assert_eq!(h.count(EventKind::Load), 1);
    assert_eq!(h.content_calls(|c| matches!(c, ContentCall::Load { .. })), 9);

    let later = h.at(700);
    h.window.tick(later);
    assert_eq!(h.count(EventKind::Load), 1);
}

#[test]
fn drag_begin_cancels_pending_settle() {
    let mut h = harness();
    fast_flick(&mut h);
    assert_eq!(h.window.next_deadline(), Some(h.at(500)));

    assert!(h.down(300.0, 210));
    assert!(h.window.next_deadline().is_none());

    let now = h.at(600);
    h.window.tick(now);
    assert_eq!(h.count(EventKind::Load), 0);
}

#[test]
fn pending_content_stays_loading_until_finished() {
    let mut h = harness_with(
        WindowConfig::default(),
        PointerKind::Touch,
        LoadOutcome::Pending,
    );
    h.window.load_now();
    assert!(h.window.slots().all(|slot| slot.is_loading()));

    assert!(h.window.finish_loading(0));
    assert!(!h.window.slot_for_origin(0).expect("anchor").is_loading());
    assert!(!h.window.finish_loading(0));
    assert!(!h.window.finish_loading(99));
}

#[test]
fn past_limit_refuses_pops_and_bounces_back() {
    let config = WindowConfig::default().with_limits(Some(0), None);
    let mut h = harness_with(config, PointerKind::Touch, LoadOutcome::Ready);
    h.down(500.0, 0);
    h.drag_steps(500.0, 50.0, 8, 0, 16);

    assert_eq!(h.count(EventKind::Swap), 0);
    assert_eq!(h.window.slot(8).expect("last").position().x, 1900.0);
    assert!(h.window.at_max_past());

    h.up(900.0, 500);
    assert!(h.window.is_decelerating());
    h.run_frames(516, 1200);

    assert!(!h.window.is_decelerating());
    let anchor = h.window.slot_for_origin(0).expect("anchor");
    assert!(approx(anchor.position().x, 0.0));
    assert_eq!(h.window.swap_offset(), 0);
    assert_eq!(stop_kinds(&h), vec![MomentumKind::Bounce]);
    assert_eq!(h.count(EventKind::Load), 1);
}

#[test]
fn future_limit_stops_shifting_and_bounces_back() {
    let config = WindowConfig::default().with_limits(None, Some(1));
    let mut h = harness_with(config, PointerKind::Touch, LoadOutcome::Ready);
    h.down(500.0, 0);
    h.drag_steps(500.0, -50.0, 12, 0, 16);

    assert_eq!(h.window.swap_offset(), 1);
    assert_eq!(h.count(EventKind::Swap), 1);
    assert!(!h.window.can_swap(SwapKind::Shift));
    assert!(h.window.can_swap(SwapKind::Pop));

    h.up(-100.0, 500);
    h.run_frames(516, 1200);

    let anchor = h.window.slot(h.window.slots_in_view()).expect("anchor");
    assert_eq!(anchor.origin(), 1);
    assert!(approx(anchor.position().x, 0.0));
    assert!(approx(h.window.distance_traveled().x, 300.0));
    assert_strip_consistent(&h.window);
}

#[test]
fn inertia_past_a_limit_ends_in_a_bounce() {
    let config = WindowConfig::default().with_limits(None, Some(1));
    let mut h = harness_with(config, PointerKind::Touch, LoadOutcome::Ready);
    h.down(600.0, 0);
    h.move_to(450.0, 50);
    h.up(450.0, 100);
    assert!(h.window.is_decelerating());

    h.run_frames(116, 2000);

    assert!(!h.window.is_decelerating());
    assert_eq!(
        stop_kinds(&h),
        vec![MomentumKind::Inertia, MomentumKind::Bounce]
    );
    assert_eq!(h.count(EventKind::Load), 1);
    assert!(approx(h.window.distance_traveled().x, 300.0));
    assert!(approx(
        h.window.slot_for_origin(1).expect("anchor").position().x,
        0.0
    ));
}
