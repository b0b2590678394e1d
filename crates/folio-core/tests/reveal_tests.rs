//! Reveal controller tests
//!
//! Drives reveal targets through the in-memory viewport host.
//!
use folio_core::reveal::{RevealController, RevealOptions, RevealState};
use folio_core::{RevealConfig, RootMargin};
use folio_test_utils::FakeViewport;
use proptest::prelude::*;

fn controller(viewport: &FakeViewport) -> RevealController {
    RevealController::new(viewport.adapter(), RevealConfig::default())
}

#[test]
fn test_reveal_latches_on_first_visibility() {
    let viewport = FakeViewport::new(800.0).with_element("card", 1500.0, 200.0);
    let target = controller(&viewport).mount("card", RevealOptions::new());

    assert_eq!(viewport.run_intersection_check(), 1);
    assert!(!target.is_visible());
    assert!(target.is_watching());

    viewport.scroll_to(1200.0);
    viewport.advance_clock(16.0);
    viewport.run_intersection_check();

    assert_eq!(target.state(), RevealState::Revealed { at_ms: 16.0 });
    assert!(!target.is_watching());
    assert_eq!(viewport.observer_count(), 0);
}

#[test]
fn test_reveal_never_reverts_after_scrolling_away() {
    let viewport = FakeViewport::new(800.0).with_element("card", 1500.0, 200.0);
    let target = controller(&viewport).mount("card", RevealOptions::new());

    viewport.scroll_to(1400.0);
    viewport.run_intersection_check();
    assert!(target.is_visible());

    viewport.scroll_to(0.0);
    assert_eq!(viewport.run_intersection_check(), 0);
    assert!(target.is_visible());
    assert!((target.style().opacity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_above_the_fold_block_transitions_on_first_check() {
    let viewport = FakeViewport::new(800.0).with_element("hero-copy", 100.0, 300.0);
    let target = controller(&viewport).mount("hero-copy", RevealOptions::new());

    let before = target.style();
    assert!(before.opacity.abs() < f64::EPSILON);
    assert!((before.translate_y_px - 20.0).abs() < f64::EPSILON);

    viewport.run_intersection_check();

    let after = target.style();
    assert!(target.is_visible());
    assert!((after.opacity - 1.0).abs() < f64::EPSILON);
    assert!(after.translate_y_px.abs() < f64::EPSILON);
    assert_eq!(after.transition, before.transition);
}

#[test]
fn test_staggered_siblings_start_in_delay_order() {
    let viewport = FakeViewport::new(800.0)
        .with_element("card-0", 100.0, 100.0)
        .with_element("card-1", 220.0, 100.0)
        .with_element("card-2", 340.0, 100.0)
        .with_element("card-3", 460.0, 100.0);
    let targets = controller(&viewport).mount_staggered(["card-0", "card-1", "card-2", "card-3"]);

    let delays: Vec<_> = targets.iter().map(|t| t.delay_ms()).collect();
    assert_eq!(delays, vec![0, 150, 300, 450]);

    viewport.advance_clock(1000.0);
    assert_eq!(viewport.run_intersection_check(), 4);

    let starts: Vec<f64> = targets
        .iter()
        .map(|t| t.transition_starts_at().expect("revealed"))
        .collect();
    assert_eq!(starts, vec![1000.0, 1150.0, 1300.0, 1450.0]);

    let mut order: Vec<usize> = (0..targets.len()).collect();
    order.sort_by(|a, b| starts[*a].total_cmp(&starts[*b]));
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_explicit_delays_order_independent_of_mount_order() {
    let viewport = FakeViewport::new(800.0)
        .with_element("a", 0.0, 100.0)
        .with_element("b", 100.0, 100.0);
    let reveals = controller(&viewport);
    let late = reveals.mount("a", RevealOptions::new().with_delay(450));
    let early = reveals.mount("b", RevealOptions::new().with_delay(0));

    viewport.run_intersection_check();
    assert!(early.transition_starts_at() < late.transition_starts_at());
}

#[test]
fn test_unmount_before_visible_deregisters_watch() {
    let viewport = FakeViewport::new(800.0).with_element("card", 2000.0, 200.0);
    let target = controller(&viewport).mount("card", RevealOptions::new());
    assert_eq!(viewport.observer_count(), 1);

    target.unmount();
    assert_eq!(viewport.observer_count(), 0);

    viewport.scroll_to(1900.0);
    assert_eq!(viewport.run_intersection_check(), 0);
}

#[test]
fn test_remount_cycles_do_not_leak_watches() {
    let viewport = FakeViewport::new(800.0).with_element("card", 2000.0, 200.0);
    let reveals = controller(&viewport);
    for _ in 0..10 {
        let target = reveals.mount("card", RevealOptions::new());
        assert_eq!(viewport.observer_count(), 1);
        drop(target);
    }
    assert_eq!(viewport.observer_count(), 0);
}

#[test]
fn test_unsupported_observation_fails_open() {
    let viewport = FakeViewport::new(800.0)
        .with_element("card", 5000.0, 200.0)
        .without_intersection();
    let target = controller(&viewport).mount("card", RevealOptions::new().with_delay(300));

    assert!(target.is_visible());
    assert!(!target.is_watching());
    assert_eq!(target.transition_starts_at(), Some(300.0));
    assert!((target.style().opacity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_element_stays_hidden_without_watch() {
    let viewport = FakeViewport::new(800.0);
    let target = controller(&viewport).mount("ghost", RevealOptions::new());

    assert!(!target.is_visible());
    assert!(!target.is_watching());
    assert_eq!(viewport.observer_count(), 0);
    assert!(target.style().opacity.abs() < f64::EPSILON);
}

#[test]
fn test_non_finite_threshold_uses_configured_default() {
    for threshold in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let viewport = FakeViewport::new(800.0).with_element("card", 5000.0, 200.0);
        let target = controller(&viewport).mount("card", RevealOptions::new().with_threshold(threshold));

        viewport.run_intersection_check();
        assert!(!target.is_visible(), "offscreen card revealed with threshold {threshold}");
        assert!(target.is_watching());

        viewport.scroll_to(4500.0);
        viewport.run_intersection_check();
        assert!(target.is_visible());
    }
}

#[test]
fn test_threshold_override() {
    let viewport = FakeViewport::new(800.0).with_element("tall", 900.0, 1000.0);
    let target = controller(&viewport).mount(
        "tall",
        RevealOptions::new()
            .with_threshold(0.5)
            .with_root_margin(RootMargin::default()),
    );

    // 30% visible
    viewport.scroll_to(400.0);
    viewport.run_intersection_check();
    assert!(!target.is_visible());

    // 60% visible
    viewport.scroll_to(700.0);
    viewport.run_intersection_check();
    assert!(target.is_visible());
}

#[test]
fn test_default_root_margin_shrinks_viewport_bottom() {
    let viewport = FakeViewport::new(800.0).with_element("edge", 780.0, 100.0);
    let target = controller(&viewport).mount("edge", RevealOptions::new());

    viewport.run_intersection_check();
    assert!(!target.is_visible());

    viewport.scroll_to(100.0);
    viewport.run_intersection_check();
    assert!(target.is_visible());
}

#[test]
fn test_inline_style_carries_delay() {
    let viewport = FakeViewport::new(800.0).with_element("card", 0.0, 100.0);
    let target = controller(&viewport).mount("card", RevealOptions::new().with_delay(150));
    let css = target.style().to_inline_css();
    assert!(css.starts_with("opacity: 0; transform: translateY(20px);"));
    assert!(css.contains("opacity 800ms ease-out 150ms"));
}

proptest! {
    #[test]
    fn prop_reveal_is_monotonic_under_random_scrolling(
        offsets in proptest::collection::vec(0.0f64..4000.0, 1..40),
    ) {
        let viewport = FakeViewport::new(800.0).with_element("card", 2000.0, 300.0);
        let target = controller(&viewport).mount("card", RevealOptions::new());

        let mut was_visible = false;
        for offset in offsets {
            viewport.scroll_to(offset);
            viewport.advance_clock(16.0);
            viewport.run_intersection_check();
            let visible = target.is_visible();
            prop_assert!(!(was_visible && !visible));
            was_visible = visible;
        }
        prop_assert_eq!(viewport.observer_count(), usize::from(!was_visible));
    }
}
