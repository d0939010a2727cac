//! End-to-end scenarios for the infotainment unit
//!
//! These tests drive the lock screen, indicators and screen navigation the
//! way a rider would: through key presses and simulated time.

use std::fs;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infotainment_core::{
    blink::{AUTO_STOP_AFTER, BLINK_PERIOD},
    BlinkController, Indicator, Key, NavEvent, Navigator, PinOutcome, PinPad, PinPhase,
    PlaybackState, Screen,
};
use infotainment_tui::app::{App, ScreenState, TuiConfig};

fn press_all(pad: &mut PinPad, keys: &str) -> PinOutcome {
    let mut outcome = PinOutcome::InProgress;
    for c in keys.chars() {
        outcome = pad.press(Key::from_char(c).unwrap());
    }
    outcome
}

fn key(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Secret "1234": accept, reject, clear on empty
#[test]
fn test_pin_gatekeeper_scenario() {
    let mut pad = PinPad::new("1234").unwrap();

    // ==========================================
    // STEP 1: Correct entry is accepted
    // ==========================================
    assert_eq!(press_all(&mut pad, "1234E"), PinOutcome::Accepted);
    assert!(pad.is_empty());

    // ==========================================
    // STEP 2: Wrong entry is rejected and cleared
    // ==========================================
    assert_eq!(press_all(&mut pad, "1235E"), PinOutcome::Rejected);
    assert!(pad.is_empty());
    assert_eq!(pad.phase(), PinPhase::Idle);

    // ==========================================
    // STEP 3: Clear on an empty entry is a no-op
    // ==========================================
    pad.press(Key::Clear);
    assert!(pad.is_empty());

    // Extra digits beyond four are dropped
    press_all(&mut pad, "123456");
    assert_eq!(pad.mask(), "••••");
    assert_eq!(press_all(&mut pad, "E"), PinOutcome::Accepted);
}

/// startLeft, startRight, stopRight leaves both signals off
#[test]
fn test_turn_signal_hand_over_scenario() {
    let now = Instant::now();
    let mut blink = BlinkController::new();

    blink.start_left(now);
    assert!(blink.is_lit(Indicator::Left));

    blink.start_right(now);
    assert!(!blink.is_active(Indicator::Left));
    assert!(!blink.is_lit(Indicator::Left));
    assert!(blink.is_active(Indicator::Right));

    blink.stop_right();
    assert!(!blink.is_active(Indicator::Left));
    assert!(!blink.is_active(Indicator::Right));
    assert!(!blink.is_lit(Indicator::Right));
}

#[test]
fn test_turn_signal_blinks_then_auto_stops() {
    let start = Instant::now();
    let mut blink = BlinkController::new();
    blink.start_left(start);

    // Blinks on a fixed period
    let mut lit = Vec::new();
    for period in 1..=4 {
        blink.poll(start + BLINK_PERIOD * period);
        lit.push(blink.is_lit(Indicator::Left));
    }
    assert_eq!(lit, vec![false, true, false, true]);

    // Nobody cancels it; the deadline does
    blink.poll(start + AUTO_STOP_AFTER);
    assert!(!blink.is_active(Indicator::Left));
    assert!(!blink.is_lit(Indicator::Left));
}

#[test]
fn test_hazard_overrides_and_restores() {
    let now = Instant::now();
    let mut blink = BlinkController::new();

    assert!(blink.toggle_hazard(now));
    for indicator in Indicator::ALL {
        assert!(blink.is_active(indicator));
        assert!(blink.is_lit(indicator));
    }

    // Hazard has no deadline
    blink.poll(now + AUTO_STOP_AFTER + Duration::from_secs(5));
    assert!(blink.is_active(Indicator::Left));
    assert!(blink.is_active(Indicator::Right));

    assert!(!blink.toggle_hazard(now + AUTO_STOP_AFTER + Duration::from_secs(5)));
    for indicator in Indicator::ALL {
        assert!(!blink.is_active(indicator));
        assert!(!blink.is_lit(indicator));
    }
}

#[test]
fn test_navigation_state_machine() {
    let mut nav = Navigator::new(Screen::Home);

    assert_eq!(nav.handle(NavEvent::SwipeUp), Some(Screen::Lock));
    assert_eq!(nav.handle(NavEvent::SwipeLeftToRight), Some(Screen::Home));
    assert_eq!(nav.handle(NavEvent::SwipeUp), Some(Screen::Lock));
    assert_eq!(nav.handle(NavEvent::PinAccepted), Some(Screen::Dashboard));
    assert!(!nav.can_go_back());

    assert_eq!(nav.handle(NavEvent::OpenNavigation), Some(Screen::Navigation));
    assert_eq!(nav.breadcrumb(), vec!["Infotainment", "Navigation"]);
    assert_eq!(nav.handle(NavEvent::Back), Some(Screen::Dashboard));
    assert_eq!(nav.handle(NavEvent::Back), None);

    assert_eq!(nav.handle(NavEvent::Lock), Some(Screen::Lock));
    assert_eq!(nav.depth(), 1);
}

/// A full ride: wake, unlock, signal, visit the control center, lock again
#[test]
fn test_full_session_through_the_front_end() {
    let music = tempfile::tempdir().unwrap();
    fs::write(music.path().join("b.ogg"), b"").unwrap();
    fs::write(music.path().join("a.mp3"), b"").unwrap();
    fs::write(music.path().join("notes.txt"), b"").unwrap();

    let config = TuiConfig {
        music_folder: Some(music.path().to_path_buf()),
        ..TuiConfig::default()
    };
    let mut app = App::new(config, None).unwrap();

    // ==========================================
    // STEP 1: Swipe up from home, unlock
    // ==========================================
    assert_eq!(app.state.current_screen(), Screen::Home);
    key(&mut app, KeyCode::Up);
    assert_eq!(app.state.current_screen(), Screen::Lock);

    for c in ['1', '2', '3', '5'] {
        key(&mut app, KeyCode::Char(c));
    }
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.current_screen(), Screen::Lock);

    for c in ['1', '2', '3', '4'] {
        key(&mut app, KeyCode::Char(c));
    }
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state.current_screen(), Screen::Dashboard);

    // ==========================================
    // STEP 2: Indicate, let the signal time out
    // ==========================================
    key(&mut app, KeyCode::Right);
    app.on_tick(Instant::now() + AUTO_STOP_AFTER + Duration::from_secs(1));
    match &app.state.screen {
        ScreenState::Dashboard(dashboard) => {
            assert!(!dashboard.blink.is_active(Indicator::Right));
        }
        _ => panic!("expected dashboard"),
    }

    // ==========================================
    // STEP 3: Control center music
    // ==========================================
    key(&mut app, KeyCode::Char('c'));
    match &app.state.screen {
        ScreenState::ControlCenter(center) => {
            assert_eq!(center.playlist.tracks().len(), 2);
            assert_eq!(center.playlist.status_text(), "a.mp3");
            assert_eq!(center.playlist.state(), PlaybackState::Playing);
        }
        _ => panic!("expected control center"),
    }
    key(&mut app, KeyCode::Char(']'));
    key(&mut app, KeyCode::Char(' '));
    match &app.state.screen {
        ScreenState::ControlCenter(center) => {
            assert_eq!(center.playlist.status_text(), "b.ogg");
            assert_eq!(center.playlist.state(), PlaybackState::Paused);
        }
        _ => panic!("expected control center"),
    }

    // ==========================================
    // STEP 4: Back to the dashboard, then lock
    // ==========================================
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.state.current_screen(), Screen::Dashboard);
    key(&mut app, KeyCode::Char('k'));
    assert_eq!(app.state.current_screen(), Screen::Lock);

    // The fresh lock screen starts with an empty entry
    match &app.state.screen {
        ScreenState::Lock(lock) => assert!(lock.pad.is_empty()),
        _ => panic!("expected lock screen"),
    }
}
