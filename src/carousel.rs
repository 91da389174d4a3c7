//! Carousel navigation and autoplay, independent of rendering.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

use crate::config::carousel::{AUTOPLAY_PRESET_INTERVAL_MS, DEFAULT_INTERVAL_MS};
use crate::gesture::SwipeDirection;

/// Behaviour and chrome of a carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOptions {
    pub autoplay: bool,
    pub interval: Duration,
    pub infinite: bool,
    pub pause_on_hover: bool,
    pub touch_enabled: bool,
    pub show_arrows: bool,
    pub show_dots: bool,
    pub show_play_pause: bool,
    /// Extra classes for the slide track, usually its height.
    pub track_class: &'static str,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            infinite: true,
            pause_on_hover: true,
            touch_enabled: true,
            show_arrows: true,
            show_dots: true,
            show_play_pause: false,
            track_class: "h-64 md:h-96",
        }
    }
}

impl CarouselOptions {
    pub fn autoplay() -> Self {
        Self {
            autoplay: true,
            show_play_pause: true,
            pause_on_hover: true,
            interval: Duration::from_millis(AUTOPLAY_PRESET_INTERVAL_MS),
            ..Self::default()
        }
    }

    pub fn image_gallery() -> Self {
        Self {
            show_dots: true,
            show_arrows: true,
            touch_enabled: true,
            track_class: "h-80 md:h-96",
            ..Self::default()
        }
    }

    pub fn product() -> Self {
        Self {
            infinite: false,
            show_play_pause: false,
            show_dots: true,
            track_class: "h-72 md:h-80",
            ..Self::default()
        }
    }

    pub fn minimal() -> Self {
        Self {
            show_arrows: false,
            show_dots: true,
            autoplay: false,
            ..Self::default()
        }
    }
}

/// What the host should do with its single autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    Keep,
    Cancel,
    /// Replace any pending timer with one firing after this delay.
    Schedule(Duration),
}

/// Remaining time until the next autoplay advance.
///
/// Suspending keeps what is left of the current interval so a hover pause
/// resumes the same phase; `reset` forgets it.
#[derive(Debug, Clone)]
struct AutoplayClock {
    interval: TimeDelta,
    remaining: TimeDelta,
    running_since: Option<DateTime<Utc>>,
}

impl AutoplayClock {
    fn new(interval: Duration) -> Self {
        let interval = TimeDelta::from_std(interval).unwrap_or(TimeDelta::MAX);
        Self {
            interval,
            remaining: interval,
            running_since: None,
        }
    }

    fn resume(&mut self, now: DateTime<Utc>) -> Duration {
        self.running_since = Some(now);
        self.remaining.to_std().unwrap_or_default()
    }

    fn suspend(&mut self, now: DateTime<Utc>) {
        if let Some(since) = self.running_since.take() {
            self.remaining = (self.remaining - (now - since)).max(TimeDelta::zero());
        }
    }

    fn reset(&mut self) {
        self.running_since = None;
        self.remaining = self.interval;
    }

    fn restart(&mut self, now: DateTime<Utc>) -> Duration {
        self.remaining = self.interval;
        self.resume(now)
    }
}

/// Index navigation plus autoplay state for one carousel.
///
/// Methods that can change whether autoplay is running return a
/// [`TimerDirective`] for the host's timer.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    current: usize,
    total: usize,
    infinite: bool,
    pause_on_hover: bool,
    playing: bool,
    hover_paused: bool,
    clock: AutoplayClock,
}

impl CarouselEngine {
    pub fn new(total: usize, options: &CarouselOptions) -> Self {
        Self {
            current: 0,
            total,
            infinite: options.infinite,
            pause_on_hover: options.pause_on_hover,
            playing: options.autoplay,
            hover_paused: false,
            clock: AutoplayClock::new(options.interval),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.hover_paused
    }

    /// More than one slide, so arrows and dots mean something.
    pub fn has_navigation(&self) -> bool {
        self.total > 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.has_navigation() && (self.infinite || self.current > 0)
    }

    pub fn can_go_next(&self) -> bool {
        self.has_navigation() && (self.infinite || self.current + 1 < self.total)
    }

    fn autoplay_active(&self) -> bool {
        self.playing && !self.hover_paused && self.total > 1
    }

    /// Jump straight to `index`. Callers pass an index below `total`.
    pub fn go_to(&mut self, index: usize) {
        debug_assert!(index < self.total, "slide {index} out of {}", self.total);
        if index < self.total {
            self.current = index;
        }
    }

    pub fn previous(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = if self.infinite {
            (self.current + self.total - 1) % self.total
        } else {
            self.current.saturating_sub(1)
        };
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = if self.infinite {
            (self.current + 1) % self.total
        } else {
            (self.current + 1).min(self.total - 1)
        };
    }

    /// Moves one slide in the direction of a recognised swipe.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
        }
    }

    /// Starts the timer for a freshly mounted carousel.
    pub fn start(&mut self, now: DateTime<Utc>) -> TimerDirective {
        if self.autoplay_active() {
            TimerDirective::Schedule(self.clock.resume(now))
        } else {
            TimerDirective::Keep
        }
    }

    /// The autoplay timer fired.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TimerDirective {
        if !self.autoplay_active() {
            return TimerDirective::Cancel;
        }
        self.next();
        TimerDirective::Schedule(self.clock.restart(now))
    }

    pub fn toggle_play(&mut self, now: DateTime<Utc>) -> TimerDirective {
        let was_active = self.autoplay_active();
        self.playing = !self.playing;
        if !self.playing {
            self.clock.reset();
        }
        self.timer_change(was_active, now)
    }

    pub fn hover_enter(&mut self, now: DateTime<Utc>) -> TimerDirective {
        if !self.pause_on_hover {
            return TimerDirective::Keep;
        }
        let was_active = self.autoplay_active();
        self.hover_paused = true;
        self.timer_change(was_active, now)
    }

    pub fn hover_leave(&mut self, now: DateTime<Utc>) -> TimerDirective {
        if !self.pause_on_hover {
            return TimerDirective::Keep;
        }
        let was_active = self.autoplay_active();
        self.hover_paused = false;
        self.timer_change(was_active, now)
    }

    fn timer_change(&mut self, was_active: bool, now: DateTime<Utc>) -> TimerDirective {
        match (was_active, self.autoplay_active()) {
            (false, true) => TimerDirective::Schedule(self.clock.resume(now)),
            (true, false) => {
                self.clock.suspend(now);
                TimerDirective::Cancel
            }
            _ => TimerDirective::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{PointerSession, SwipeTracker};

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn engine(total: usize, infinite: bool) -> CarouselEngine {
        let options = CarouselOptions {
            infinite,
            ..CarouselOptions::default()
        };
        CarouselEngine::new(total, &options)
    }

    fn playing(total: usize) -> CarouselEngine {
        CarouselEngine::new(
            total,
            &CarouselOptions {
                autoplay: true,
                ..CarouselOptions::default()
            },
        )
    }

    #[test]
    fn test_infinite_next_wraps_around() {
        let n = 4;
        let mut c = engine(n, true);
        for _ in 0..n {
            c.next();
        }
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_infinite_previous_from_first() {
        let mut c = engine(5, true);
        c.previous();
        assert_eq!(c.current(), 4);
        assert!(c.can_go_previous());
        assert!(c.can_go_next());
    }

    #[test]
    fn test_finite_clamps_at_end() {
        let n = 3;
        let mut c = engine(n, false);
        for _ in 0..n + 5 {
            c.next();
        }
        assert_eq!(c.current(), n - 1);
        assert!(!c.can_go_next());
        assert!(c.can_go_previous());
    }

    #[test]
    fn test_finite_clamps_at_start() {
        let mut c = engine(3, false);
        assert!(!c.can_go_previous());
        c.previous();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_swipe_moves_exactly_one_slide() {
        let mut c = engine(4, false);
        let mut tracker = SwipeTracker::new(true);
        tracker.start(200.0);
        tracker.update(170.0);
        tracker.update(140.0);
        let direction = tracker.end();
        assert_eq!(direction, Some(SwipeDirection::Left));
        if let Some(direction) = direction {
            c.swipe(direction);
        }
        assert_eq!(c.current(), 1);

        c.swipe(SwipeDirection::Right);
        c.swipe(SwipeDirection::Right);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_go_to_slide() {
        let mut c = engine(6, false);
        c.go_to(4);
        assert_eq!(c.current(), 4);
        c.go_to(0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_empty_and_single_have_no_navigation() {
        let mut empty = engine(0, true);
        assert!(empty.is_empty());
        empty.next();
        empty.previous();
        assert_eq!(empty.current(), 0);
        assert!(!empty.can_go_next());
        assert!(!empty.can_go_previous());

        let single = engine(1, true);
        assert!(!single.has_navigation());
        assert!(!single.can_go_next());
        assert!(!single.can_go_previous());
    }

    #[test]
    fn test_autoplay_schedules_and_advances() {
        let mut c = playing(3);
        assert_eq!(c.start(at(0)), TimerDirective::Schedule(ms(3000)));
        assert_eq!(c.tick(at(3000)), TimerDirective::Schedule(ms(3000)));
        assert_eq!(c.current(), 1);
        c.tick(at(6000));
        c.tick(at(9000));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_autoplay_needs_two_slides() {
        let mut c = playing(1);
        assert_eq!(c.start(at(0)), TimerDirective::Keep);
        assert_eq!(c.tick(at(3000)), TimerDirective::Cancel);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_autoplay_stops_at_end_when_finite() {
        let mut c = CarouselEngine::new(
            2,
            &CarouselOptions {
                autoplay: true,
                infinite: false,
                ..CarouselOptions::default()
            },
        );
        c.start(at(0));
        c.tick(at(3000));
        c.tick(at(6000));
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_hover_pause_keeps_phase() {
        let mut c = playing(3);
        c.start(at(0));
        assert_eq!(c.hover_enter(at(1000)), TimerDirective::Cancel);
        assert!(c.is_paused());
        // 2000ms of the interval were left when the pointer arrived
        assert_eq!(c.hover_leave(at(9000)), TimerDirective::Schedule(ms(2000)));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_hover_ignored_without_pause_on_hover() {
        let mut c = CarouselEngine::new(
            3,
            &CarouselOptions {
                autoplay: true,
                pause_on_hover: false,
                ..CarouselOptions::default()
            },
        );
        c.start(at(0));
        assert_eq!(c.hover_enter(at(500)), TimerDirective::Keep);
        assert!(!c.is_paused());
    }

    #[test]
    fn test_toggle_during_hover_pause_has_no_extra_advance() {
        let mut c = playing(3);
        c.start(at(0));
        c.hover_enter(at(2000));
        assert_eq!(c.toggle_play(at(2500)), TimerDirective::Keep);
        assert!(!c.is_playing());
        assert_eq!(c.toggle_play(at(2600)), TimerDirective::Keep);
        assert!(c.is_playing());
        // a full interval, not the 1000ms left before the toggle
        assert_eq!(c.hover_leave(at(4000)), TimerDirective::Schedule(ms(3000)));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_toggle_off_and_on_restarts_interval() {
        let mut c = playing(3);
        c.start(at(0));
        assert_eq!(c.toggle_play(at(2900)), TimerDirective::Cancel);
        assert_eq!(c.toggle_play(at(3000)), TimerDirective::Schedule(ms(3000)));
    }

    #[test]
    fn test_navigation_does_not_touch_timer() {
        let mut c = playing(4);
        c.start(at(0));
        c.go_to(2);
        c.previous();
        assert_eq!(c.current(), 1);
        assert_eq!(c.tick(at(3000)), TimerDirective::Schedule(ms(3000)));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_presets() {
        let auto = CarouselOptions::autoplay();
        assert!(auto.autoplay && auto.show_play_pause && auto.pause_on_hover);
        assert_eq!(auto.interval, ms(4000));
        assert!(!CarouselOptions::product().infinite);
        assert!(!CarouselOptions::minimal().show_arrows);
        assert_eq!(CarouselOptions::image_gallery().track_class, "h-80 md:h-96");
        assert_eq!(CarouselOptions::default().interval, ms(3000));
    }
}
