//! Pointer gesture recognition shared by touch and mouse input.
//!
//! Input adapters only extract a coordinate along one [`Axis`]; everything
//! else is written once against [`PointerSession`].

use crate::config::{carousel::SWIPE_THRESHOLD, overlay::DRAG_DISMISS_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A press, any number of moves, then a release.
pub trait PointerSession {
    type Outcome;

    fn start(&mut self, at: f64);
    fn update(&mut self, at: f64);
    fn end(&mut self) -> Self::Outcome;
}

/// What a released bottom sheet drag asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    Dismiss,
    SnapBack,
}

/// Vertical drag that pulls a panel down and dismisses it past a threshold.
#[derive(Debug, Clone)]
pub struct DragToDismiss {
    enabled: bool,
    threshold: f64,
    dragging: bool,
    start_y: f64,
    start_offset: f64,
    offset: f64,
}

impl DragToDismiss {
    pub fn new(enabled: bool) -> Self {
        Self::with_threshold(enabled, DRAG_DISMISS_THRESHOLD)
    }

    pub fn with_threshold(enabled: bool, threshold: f64) -> Self {
        Self {
            enabled,
            threshold,
            dragging: false,
            start_y: 0.0,
            start_offset: 0.0,
            offset: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current downward displacement, never negative.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn reset(&mut self) {
        self.dragging = false;
        self.offset = 0.0;
    }
}

impl PointerSession for DragToDismiss {
    /// `None` when no drag was in progress.
    type Outcome = Option<DragRelease>;

    fn start(&mut self, at: f64) {
        if !self.enabled {
            return;
        }
        self.dragging = true;
        self.start_y = at;
        self.start_offset = self.offset;
    }

    fn update(&mut self, at: f64) {
        if !self.enabled || !self.dragging {
            return;
        }
        self.offset = (self.start_offset + at - self.start_y).max(0.0);
    }

    fn end(&mut self) -> Option<DragRelease> {
        if !self.enabled || !self.dragging {
            return None;
        }
        self.dragging = false;
        if self.offset > self.threshold {
            // offset is kept until the closing overlay resets it
            Some(DragRelease::Dismiss)
        } else {
            self.offset = 0.0;
            Some(DragRelease::SnapBack)
        }
    }
}

/// Direction the content was flicked towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left: show the next slide.
    Left,
    /// Finger travelled right: show the previous slide.
    Right,
}

/// Horizontal swipe recognizer for the carousel.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    enabled: bool,
    threshold: f64,
    start: Option<f64>,
    last: Option<f64>,
}

impl SwipeTracker {
    pub fn new(enabled: bool) -> Self {
        Self::with_threshold(enabled, SWIPE_THRESHOLD)
    }

    pub fn with_threshold(enabled: bool, threshold: f64) -> Self {
        Self {
            enabled,
            threshold,
            start: None,
            last: None,
        }
    }
}

impl PointerSession for SwipeTracker {
    type Outcome = Option<SwipeDirection>;

    fn start(&mut self, at: f64) {
        if !self.enabled {
            return;
        }
        self.start = Some(at);
        self.last = None;
    }

    fn update(&mut self, at: f64) {
        if !self.enabled || self.start.is_none() {
            return;
        }
        self.last = Some(at);
    }

    fn end(&mut self) -> Option<SwipeDirection> {
        let (start, last) = (self.start.take(), self.last.take());
        if !self.enabled {
            return None;
        }
        // a tap without movement is not a swipe
        let distance = start? - last?;
        if distance > self.threshold {
            Some(SwipeDirection::Left)
        } else if distance < -self.threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(d: &mut DragToDismiss, from: f64, to: f64) -> Option<DragRelease> {
        d.start(from);
        d.update((from + to) / 2.0);
        d.update(to);
        d.end()
    }

    fn swipe(s: &mut SwipeTracker, from: f64, to: f64) -> Option<SwipeDirection> {
        s.start(from);
        s.update(to);
        s.end()
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut d = DragToDismiss::new(true);
        assert_eq!(drag(&mut d, 200.0, 280.0), Some(DragRelease::SnapBack));
        assert_eq!(d.offset(), 0.0);
        assert!(!d.is_dragging());
    }

    #[test]
    fn test_long_drag_dismisses() {
        let mut d = DragToDismiss::new(true);
        assert_eq!(drag(&mut d, 200.0, 320.0), Some(DragRelease::Dismiss));
        assert_eq!(d.offset(), 120.0);
        d.reset();
        assert_eq!(d.offset(), 0.0);
    }

    #[test]
    fn test_drag_follows_pointer_one_to_one() {
        let mut d = DragToDismiss::new(true);
        d.start(100.0);
        d.update(137.5);
        assert!(d.is_dragging());
        assert_eq!(d.offset(), 37.5);
    }

    #[test]
    fn test_upward_drag_is_clamped() {
        let mut d = DragToDismiss::new(true);
        d.start(300.0);
        d.update(100.0);
        assert_eq!(d.offset(), 0.0);
        d.update(330.0);
        assert_eq!(d.offset(), 30.0);
        assert_eq!(d.end(), Some(DragRelease::SnapBack));
    }

    #[test]
    fn test_disabled_drag_ignores_input() {
        let mut d = DragToDismiss::new(false);
        assert_eq!(drag(&mut d, 0.0, 500.0), None);
        assert_eq!(d.offset(), 0.0);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut d = DragToDismiss::new(true);
        d.update(400.0);
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.end(), None);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut d = DragToDismiss::new(true);
        assert_eq!(drag(&mut d, 0.0, 100.0), Some(DragRelease::SnapBack));
        let mut s = SwipeTracker::new(true);
        assert_eq!(swipe(&mut s, 100.0, 50.0), None);
    }

    #[test]
    fn test_small_swipe_is_ignored() {
        let mut s = SwipeTracker::new(true);
        assert_eq!(swipe(&mut s, 200.0, 170.0), None);
        assert_eq!(swipe(&mut s, 200.0, 230.0), None);
    }

    #[test]
    fn test_swipe_directions() {
        let mut s = SwipeTracker::new(true);
        assert_eq!(swipe(&mut s, 200.0, 140.0), Some(SwipeDirection::Left));
        assert_eq!(swipe(&mut s, 140.0, 200.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_tap_is_not_a_swipe() {
        let mut s = SwipeTracker::new(true);
        s.start(10.0);
        assert_eq!(s.end(), None);
        // the previous gesture's position does not leak into the next one
        s.start(300.0);
        s.update(200.0);
        s.end();
        s.start(100.0);
        assert_eq!(s.end(), None);
    }

    #[test]
    fn test_disabled_swipe() {
        let mut s = SwipeTracker::new(false);
        assert_eq!(swipe(&mut s, 300.0, 0.0), None);
    }
}
