//! Turn signal and hazard blink controller
//!
//! Each indicator has its own toggle timer. Left and right exclude each
//! other and switch themselves off after [`AUTO_STOP_AFTER`]; hazard drives
//! both in phase with no auto-stop. Timers are cooperative: the host loop
//! calls [`BlinkController::poll`] with the current instant and every due
//! toggle or auto-stop fires in order.

use std::fmt;
use std::time::{Duration, Instant};

/// Interval between lit/unlit flips
pub const BLINK_PERIOD: Duration = Duration::from_millis(500);

/// Turn signals switch off on their own after this long
pub const AUTO_STOP_AFTER: Duration = Duration::from_secs(10);

/// A blinking lamp on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Left,
    Right,
    Hazard,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Left, Indicator::Right, Indicator::Hazard];
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indicator::Left => "left",
            Indicator::Right => "right",
            Indicator::Hazard => "hazard",
        };
        f.write_str(name)
    }
}

/// Timer and visual phase of one indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlinkState {
    active: bool,
    lit: bool,
    next_toggle: Option<Instant>,
    auto_stop_deadline: Option<Instant>,
}

impl BlinkState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn next_toggle(&self) -> Option<Instant> {
        self.next_toggle
    }

    pub fn auto_stop_deadline(&self) -> Option<Instant> {
        self.auto_stop_deadline
    }

    fn start(&mut self, now: Instant, auto_stop: bool) {
        self.active = true;
        self.lit = true;
        self.next_toggle = Some(now + BLINK_PERIOD);
        self.auto_stop_deadline = auto_stop.then(|| now + AUTO_STOP_AFTER);
    }

    fn stop(&mut self) {
        *self = Self::default();
    }

    fn flip(&mut self) {
        if !self.active {
            return;
        }
        self.lit = !self.lit;
        self.next_toggle = self.next_toggle.map(|at| at + BLINK_PERIOD);
    }
}

/// Something visible changed during [`BlinkController::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkEvent {
    Toggled { indicator: Indicator, lit: bool },
    AutoStopped(Indicator),
}

/// Owns the three indicators for one dashboard lifetime
#[derive(Debug, Clone, Default)]
pub struct BlinkController {
    left: BlinkState,
    right: BlinkState,
    hazard: BlinkState,
}

impl BlinkController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, indicator: Indicator) -> &BlinkState {
        match indicator {
            Indicator::Left => &self.left,
            Indicator::Right => &self.right,
            Indicator::Hazard => &self.hazard,
        }
    }

    fn state_mut(&mut self, indicator: Indicator) -> &mut BlinkState {
        match indicator {
            Indicator::Left => &mut self.left,
            Indicator::Right => &mut self.right,
            Indicator::Hazard => &mut self.hazard,
        }
    }

    pub fn is_active(&self, indicator: Indicator) -> bool {
        self.state(indicator).active
    }

    pub fn is_lit(&self, indicator: Indicator) -> bool {
        self.state(indicator).lit
    }

    pub fn hazard_active(&self) -> bool {
        self.hazard.active
    }

    /// Start the left turn signal, switching the right one off first
    pub fn start_left(&mut self, now: Instant) {
        self.start_turn(Indicator::Left, now);
    }

    /// Start the right turn signal, switching the left one off first
    pub fn start_right(&mut self, now: Instant) {
        self.start_turn(Indicator::Right, now);
    }

    fn start_turn(&mut self, indicator: Indicator, now: Instant) {
        let opposite = match indicator {
            Indicator::Left => Indicator::Right,
            _ => Indicator::Left,
        };
        if self.is_active(opposite) {
            self.stop(opposite);
        }

        let state = self.state_mut(indicator);
        if state.active {
            return;
        }
        state.start(now, true);
        tracing::info!(%indicator, "turn signal on");
    }

    pub fn stop_left(&mut self) {
        self.stop(Indicator::Left);
    }

    pub fn stop_right(&mut self) {
        self.stop(Indicator::Right);
    }

    fn stop(&mut self, indicator: Indicator) {
        let state = self.state_mut(indicator);
        if state.active {
            tracing::info!(%indicator, "indicator off");
        }
        state.stop();
    }

    /// Flip the visual phase of an active indicator
    pub fn tick(&mut self, indicator: Indicator) {
        self.state_mut(indicator).flip();
    }

    /// The auto-stop deadline of a turn signal elapsed
    pub fn auto_stop_fire(&mut self, indicator: Indicator) {
        tracing::debug!(%indicator, "auto-stop deadline reached");
        self.stop(indicator);
    }

    /// Switch hazard mode, returning whether it is now on
    ///
    /// Turning hazard on starts both turn signals in phase with it and with
    /// no auto-stop. Turning it off stops all three.
    pub fn toggle_hazard(&mut self, now: Instant) -> bool {
        if self.hazard.active {
            self.hazard.stop();
            self.left.stop();
            self.right.stop();
            tracing::info!("hazard off");
            false
        } else {
            self.hazard.start(now, false);
            self.left.start(now, false);
            self.right.start(now, false);
            tracing::info!("hazard on");
            true
        }
    }

    /// Fire every toggle and auto-stop due at or before `now`
    pub fn poll(&mut self, now: Instant) -> Vec<BlinkEvent> {
        let mut events = Vec::new();

        while let Some((at, indicator, is_deadline)) = self.earliest_due(now) {
            if is_deadline {
                self.auto_stop_fire(indicator);
                events.push(BlinkEvent::AutoStopped(indicator));
            } else {
                self.tick(indicator);
                events.push(BlinkEvent::Toggled {
                    indicator,
                    lit: self.is_lit(indicator),
                });
            }
            tracing::trace!(%indicator, ?at, "timer fired");
        }

        events
    }

    /// Earliest pending timer not later than `now`; deadlines win ties
    fn earliest_due(&self, now: Instant) -> Option<(Instant, Indicator, bool)> {
        let mut due: Option<(Instant, Indicator, bool)> = None;

        for indicator in Indicator::ALL {
            let state = self.state(indicator);
            if !state.active {
                continue;
            }
            let candidates = [
                state.auto_stop_deadline.map(|at| (at, true)),
                state.next_toggle.map(|at| (at, false)),
            ];
            for (at, is_deadline) in candidates.into_iter().flatten() {
                if at > now {
                    continue;
                }
                let earlier = match due {
                    None => true,
                    Some((best, _, best_is_deadline)) => {
                        at < best || (at == best && is_deadline && !best_is_deadline)
                    }
                };
                if earlier {
                    due = Some((at, indicator, is_deadline));
                }
            }
        }

        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_left_lights_immediately() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.start_left(now);

        let left = blink.state(Indicator::Left);
        assert!(left.is_active());
        assert!(left.is_lit());
        assert_eq!(left.auto_stop_deadline(), Some(now + AUTO_STOP_AFTER));
    }

    #[test]
    fn test_left_then_right_excludes() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.start_left(now);
        blink.start_right(now);

        assert!(!blink.is_active(Indicator::Left));
        assert!(!blink.is_lit(Indicator::Left));
        assert!(blink.is_active(Indicator::Right));
    }

    #[test]
    fn test_restart_does_not_extend_deadline() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.start_left(now);
        blink.start_left(now + Duration::from_secs(4));

        assert_eq!(
            blink.state(Indicator::Left).auto_stop_deadline(),
            Some(now + AUTO_STOP_AFTER)
        );
    }

    #[test]
    fn test_poll_toggles_every_period() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.start_right(now);

        let events = blink.poll(now + BLINK_PERIOD);
        assert_eq!(
            events,
            vec![BlinkEvent::Toggled {
                indicator: Indicator::Right,
                lit: false
            }]
        );

        let events = blink.poll(now + BLINK_PERIOD * 3);
        assert_eq!(events.len(), 2);
        assert!(!blink.is_lit(Indicator::Right));
    }

    #[test]
    fn test_auto_stop_after_ten_seconds() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.start_left(now);

        let events = blink.poll(now + AUTO_STOP_AFTER);
        assert_eq!(events.last(), Some(&BlinkEvent::AutoStopped(Indicator::Left)));
        assert!(!blink.is_active(Indicator::Left));
        assert!(!blink.is_lit(Indicator::Left));
        assert!(blink.poll(now + AUTO_STOP_AFTER * 2).is_empty());
    }

    #[test]
    fn test_stop_forces_off() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.start_right(now);
        blink.stop_right();

        assert_eq!(*blink.state(Indicator::Right), BlinkState::default());
    }

    #[test]
    fn test_tick_on_inactive_is_noop() {
        let mut blink = BlinkController::new();
        blink.tick(Indicator::Left);
        assert!(!blink.is_lit(Indicator::Left));
    }

    #[test]
    fn test_hazard_runs_both_without_auto_stop() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        assert!(blink.toggle_hazard(now));

        assert!(blink.is_active(Indicator::Left));
        assert!(blink.is_active(Indicator::Right));
        assert_eq!(blink.state(Indicator::Left).auto_stop_deadline(), None);

        blink.poll(now + AUTO_STOP_AFTER * 2);
        assert!(blink.is_active(Indicator::Left));
        assert!(blink.is_active(Indicator::Right));
        // Still in phase
        assert_eq!(blink.is_lit(Indicator::Left), blink.is_lit(Indicator::Hazard));
        assert_eq!(blink.is_lit(Indicator::Right), blink.is_lit(Indicator::Hazard));
    }

    #[test]
    fn test_hazard_clears_pending_auto_stop() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.start_left(now);
        blink.toggle_hazard(now + Duration::from_secs(2));

        blink.poll(now + AUTO_STOP_AFTER + Duration::from_secs(1));
        assert!(blink.is_active(Indicator::Left));
    }

    #[test]
    fn test_hazard_off_stops_everything() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.toggle_hazard(now);
        assert!(!blink.toggle_hazard(now + BLINK_PERIOD));

        for indicator in Indicator::ALL {
            assert!(!blink.is_active(indicator));
            assert!(!blink.is_lit(indicator));
        }
    }

    #[test]
    fn test_turn_signal_during_hazard_stops_opposite_side() {
        let now = Instant::now();
        let mut blink = BlinkController::new();
        blink.toggle_hazard(now);
        blink.start_left(now);

        assert!(!blink.is_active(Indicator::Right));
        assert!(!blink.is_lit(Indicator::Right));
        // Left was already running under hazard: untouched, still no deadline
        assert!(blink.is_active(Indicator::Left));
        assert_eq!(blink.state(Indicator::Left).auto_stop_deadline(), None);
        assert!(blink.hazard_active());
    }
}
