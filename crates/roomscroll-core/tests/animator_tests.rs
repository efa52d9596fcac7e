// Host-side tests for the scroll animator and its easing curve.

use roomscroll_core::*;

#[test]
fn ease_out_cubic_hits_endpoints_and_clamps() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-0.5), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn ease_out_cubic_is_monotonic_and_front_loaded() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let t = i as f64 / 100.0;
        let e = ease_out_cubic(t);
        assert!(e >= prev, "easing went backwards at t={t}");
        assert!(e >= t, "ease-out should lead linear progress at t={t}");
        prev = e;
    }
}

#[test]
fn instant_mode_jumps() {
    let mut anim = ScrollAnimator::new(SCROLL_DURATION_MS);
    let start = anim.start(
        ScrollAxis::Horizontal,
        0.0,
        400.0,
        TransitionMode::Instant,
        false,
        0.0,
    );
    assert_eq!(start, AnimationStart::Jump(400.0));
    assert!(!anim.is_animating(ScrollAxis::Horizontal));
}

#[test]
fn reduced_motion_overrides_animated_requests() {
    let mut anim = ScrollAnimator::new(SCROLL_DURATION_MS);
    let start = anim.start(
        ScrollAxis::Vertical,
        900.0,
        0.0,
        TransitionMode::Animated,
        true,
        0.0,
    );
    assert_eq!(start, AnimationStart::Jump(0.0));
}

#[test]
fn tiny_moves_jump() {
    let mut anim = ScrollAnimator::new(SCROLL_DURATION_MS);
    let start = anim.start(
        ScrollAxis::Horizontal,
        100.0,
        100.2,
        TransitionMode::Animated,
        false,
        0.0,
    );
    assert_eq!(start, AnimationStart::Jump(100.2));
}

#[test]
fn animated_frames_follow_the_curve_and_finish_on_target() {
    let mut anim = ScrollAnimator::new(600.0);
    let AnimationStart::Animate(ticket) = anim.start(
        ScrollAxis::Horizontal,
        0.0,
        1000.0,
        TransitionMode::Animated,
        false,
        50.0,
    ) else {
        panic!("expected an animated start");
    };

    // A frame stamped before the start clamps to the origin.
    assert_eq!(
        anim.frame(ticket, 40.0),
        FrameStep::Write {
            offset: 0.0,
            done: false
        }
    );

    match anim.frame(ticket, 350.0) {
        FrameStep::Write { offset, done } => {
            assert!(!done);
            assert!((offset - 875.0).abs() < 1e-9, "half-way offset {offset}");
        }
        other => panic!("unexpected {other:?}"),
    }

    assert_eq!(
        anim.frame(ticket, 700.0),
        FrameStep::Write {
            offset: 1000.0,
            done: true
        }
    );
    assert!(!anim.is_animating(ScrollAxis::Horizontal));
    assert_eq!(anim.frame(ticket, 716.0), FrameStep::Superseded);
}

#[test]
fn a_new_request_supersedes_the_old_loop() {
    let mut anim = ScrollAnimator::new(SCROLL_DURATION_MS);
    let AnimationStart::Animate(old) = anim.start(
        ScrollAxis::Horizontal,
        0.0,
        500.0,
        TransitionMode::Animated,
        false,
        0.0,
    ) else {
        panic!("expected an animated start");
    };
    let AnimationStart::Animate(new) = anim.start(
        ScrollAxis::Horizontal,
        120.0,
        900.0,
        TransitionMode::Animated,
        false,
        100.0,
    ) else {
        panic!("expected an animated start");
    };

    assert_eq!(anim.frame(old, 200.0), FrameStep::Superseded);
    assert!(matches!(anim.frame(new, 200.0), FrameStep::Write { .. }));
}

#[test]
fn an_instant_jump_also_supersedes() {
    let mut anim = ScrollAnimator::new(SCROLL_DURATION_MS);
    let AnimationStart::Animate(old) = anim.start(
        ScrollAxis::Vertical,
        0.0,
        500.0,
        TransitionMode::Animated,
        false,
        0.0,
    ) else {
        panic!("expected an animated start");
    };
    anim.start(
        ScrollAxis::Vertical,
        0.0,
        10.0,
        TransitionMode::Instant,
        false,
        5.0,
    );
    assert_eq!(anim.frame(old, 16.0), FrameStep::Superseded);
}

#[test]
fn axes_are_independent_and_cancel_is_explicit() {
    let mut anim = ScrollAnimator::new(SCROLL_DURATION_MS);
    let AnimationStart::Animate(h) = anim.start(
        ScrollAxis::Horizontal,
        0.0,
        500.0,
        TransitionMode::Animated,
        false,
        0.0,
    ) else {
        panic!("expected an animated start");
    };
    let AnimationStart::Animate(v) = anim.start(
        ScrollAxis::Vertical,
        0.0,
        500.0,
        TransitionMode::Animated,
        false,
        0.0,
    ) else {
        panic!("expected an animated start");
    };
    assert!(matches!(anim.frame(h, 16.0), FrameStep::Write { .. }));

    anim.cancel(ScrollAxis::Horizontal);
    assert_eq!(anim.frame(h, 32.0), FrameStep::Superseded);
    assert!(matches!(anim.frame(v, 32.0), FrameStep::Write { .. }));

    let before = anim.generation(ScrollAxis::Vertical);
    anim.cancel_all();
    assert!(anim.generation(ScrollAxis::Vertical) > before);
    assert_eq!(anim.frame(v, 48.0), FrameStep::Superseded);
}
