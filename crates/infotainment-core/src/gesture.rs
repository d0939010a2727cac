//! Swipe detection from press/release pairs

/// Position of a pointer event, in whatever unit the front end uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A recognised swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved towards the top of the screen
    Up,
    /// Finger moved right to left
    Left,
    /// Finger moved left to right
    Right,
}

/// Minimum travel before a drag counts as a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeThresholds {
    pub vertical: i32,
    pub horizontal: i32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        // Pixel distances of the touch panel build
        Self {
            vertical: 50,
            horizontal: 80,
        }
    }
}

/// Tracks one drag from press to release
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    thresholds: SwipeThresholds,
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            start: None,
        }
    }

    pub fn thresholds(&self) -> SwipeThresholds {
        self.thresholds
    }

    /// Primary button went down
    pub fn press(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Primary button came up; classify the drag
    pub fn release(&mut self, at: Point) -> Option<Swipe> {
        let start = self.start.take()?;
        let dx = start.x - at.x;
        let dy = start.y - at.y;

        if dy > self.thresholds.vertical {
            Some(Swipe::Up)
        } else if dx > self.thresholds.horizontal {
            Some(Swipe::Left)
        } else if -dx > self.thresholds.horizontal {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    /// Drop a drag in progress
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(tracker: &mut SwipeTracker, from: (i32, i32), to: (i32, i32)) -> Option<Swipe> {
        tracker.press(Point::new(from.0, from.1));
        tracker.release(Point::new(to.0, to.1))
    }

    #[test]
    fn test_swipe_up() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(drag(&mut tracker, (100, 300), (100, 200)), Some(Swipe::Up));
    }

    #[test]
    fn test_short_drag_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(drag(&mut tracker, (100, 300), (100, 250)), None);
        assert_eq!(drag(&mut tracker, (100, 300), (180, 300)), None);
    }

    #[test]
    fn test_horizontal_directions() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(drag(&mut tracker, (300, 100), (200, 100)), Some(Swipe::Left));
        assert_eq!(drag(&mut tracker, (200, 100), (300, 100)), Some(Swipe::Right));
    }

    #[test]
    fn test_vertical_wins() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(drag(&mut tracker, (300, 300), (100, 100)), Some(Swipe::Up));
    }

    #[test]
    fn test_release_without_press() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.release(Point::new(0, 0)), None);
        tracker.press(Point::new(0, 100));
        tracker.cancel();
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.release(Point::new(0, 0)), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut tracker = SwipeTracker::new(SwipeThresholds {
            vertical: 2,
            horizontal: 6,
        });
        assert_eq!(drag(&mut tracker, (10, 10), (10, 7)), Some(Swipe::Up));
        assert_eq!(drag(&mut tracker, (10, 10), (3, 10)), Some(Swipe::Left));
    }
}
