use tezga_catalog::{PROGRESS_TICK_MS, RotationCfg, RotationPhase, RotationSession};

#[test]
fn single_image_never_starts_a_session() {
    let mut session = RotationSession::new();
    assert!(!session.start(0, 0, 3000));
    assert_eq!(session.phase(), RotationPhase::Idle);
    assert!(!session.start(1, 0, 3000));
    assert_eq!(session.phase(), RotationPhase::Idle);
    assert!(session.start(2, 0, 3000));
    assert_eq!(session.phase(), RotationPhase::Running);
}

#[test]
fn one_interval_of_ticks_fills_the_bar_then_advance_resets_it() {
    let mut session = RotationSession::new();
    assert!(session.start(3, 0, 3000));

    // run one full interval worth of progress ticks
    let ticks = session.ticks_per_interval();
    assert_eq!(ticks, 3000 / PROGRESS_TICK_MS);
    let mut last = 0.0;
    for _ in 0..ticks {
        let now = session.progress_tick();
        assert!(now >= last, "progress must grow monotonically");
        assert!(now <= 100.0, "progress must clamp at 100");
        last = now;
    }
    assert!((last - 100.0).abs() < 0.01);

    // the advance tick lands at the end of the interval
    assert_eq!(session.advance(), 1);
    assert_eq!(session.progress(), 0.0);
}

#[test]
fn advance_wraps_around_the_image_list() {
    let mut session = RotationSession::new();
    assert!(session.start(3, 2, 3000));
    assert_eq!(session.index(), 2);
    assert_eq!(session.advance(), 0);
    assert_eq!(session.advance(), 1);
    assert_eq!(session.advance(), 2);
    assert_eq!(session.advance(), 0);
}

#[test]
fn progress_never_exceeds_100_even_with_extra_ticks() {
    let mut session = RotationSession::new();
    assert!(session.start(2, 0, 500));
    for _ in 0..50 {
        assert!(session.progress_tick() <= 100.0);
    }
    assert!((session.progress() - 100.0).abs() < 0.01);
}

#[test]
fn starting_twice_leaves_exactly_one_live_session() {
    let mut session = RotationSession::new();
    assert!(session.start(4, 1, 3000));
    session.progress_tick();
    session.advance();

    // the second start fully replaces the first session's state
    assert!(session.start(2, 0, 1000));
    assert_eq!(session.phase(), RotationPhase::Running);
    assert_eq!(session.index(), 0);
    assert_eq!(session.progress(), 0.0);
    assert_eq!(session.image_count(), 2);
    assert_eq!(session.interval_ms(), 1000);
}

#[test]
fn ticks_after_stop_change_nothing() {
    let mut session = RotationSession::new();
    assert!(session.start(3, 0, 3000));
    session.advance();
    session.stop();
    assert_eq!(session.phase(), RotationPhase::Stopped);
    assert_eq!(session.progress(), 0.0);

    // a tick already queued when the session stopped may still fire once;
    // it must not move the image or the bar
    assert_eq!(session.advance(), 1);
    assert_eq!(session.progress_tick(), 0.0);
    assert_eq!(session.index(), 1);
}

#[test]
fn pause_keeps_index_and_progress_resume_restarts_the_bar() {
    let mut session = RotationSession::new();
    assert!(session.start(3, 0, 1000));
    for _ in 0..5 {
        session.progress_tick();
    }
    let paused_progress = session.progress();
    assert!(paused_progress > 0.0);

    session.pause();
    assert_eq!(session.phase(), RotationPhase::Paused);
    assert_eq!(session.progress(), paused_progress);
    assert_eq!(session.progress_tick(), paused_progress);

    // resume intentionally restarts the bar at 0%
    assert!(session.resume());
    assert_eq!(session.phase(), RotationPhase::Running);
    assert_eq!(session.progress(), 0.0);
    assert_eq!(session.index(), 0);
}

#[test]
fn resume_is_only_legal_from_paused() {
    let mut session = RotationSession::new();
    assert!(!session.resume());
    assert!(session.start(2, 0, 3000));
    assert!(!session.resume());
    session.stop();
    assert!(!session.resume());
}

#[test]
fn select_jumps_resets_progress_and_holds_for_restart() {
    let mut session = RotationSession::new();
    assert!(session.start(4, 0, 3000));
    for _ in 0..10 {
        session.progress_tick();
    }

    session.select(2);
    assert_eq!(session.index(), 2);
    assert_eq!(session.progress(), 0.0);
    assert_eq!(session.phase(), RotationPhase::Paused);

    // the delayed restart re-arms from the selected index
    assert!(session.resume());
    assert_eq!(session.index(), 2);
    assert_eq!(session.advance(), 3);
}

#[test]
fn select_out_of_range_wraps() {
    let mut session = RotationSession::new();
    assert!(session.start(3, 0, 3000));
    session.select(7);
    assert_eq!(session.index(), 1);
}

#[test]
fn disabled_config_suppresses_start_and_resume_attempts() {
    let cfg = RotationCfg {
        enabled: false,
        ..RotationCfg::default()
    };
    // callers consult the config before start/resume; a running session is
    // left alone until its next attempt
    assert!(!cfg.allows(true));
    assert!(!cfg.allows(false));

    let mut session = RotationSession::new();
    assert!(session.start(3, 0, 3000));
    session.pause();
    if cfg.allows(true) {
        session.resume();
    }
    assert_eq!(session.phase(), RotationPhase::Paused);
}

#[test]
fn interval_below_tick_period_is_clamped() {
    let mut session = RotationSession::new();
    assert!(session.start(2, 0, 10));
    assert_eq!(session.interval_ms(), PROGRESS_TICK_MS);
    assert!(session.progress_step() <= 100.0);
}
