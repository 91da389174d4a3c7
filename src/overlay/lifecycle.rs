use std::time::Duration;

use crate::config::overlay::ENTER_FRAMES;

/// Animation phase of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    /// Mounted in its initial visual state, waiting for it to be painted.
    Entering,
    Open,
    /// Playing the exit transition before unmounting.
    Leaving,
}

impl Phase {
    /// Whether anything should be rendered.
    pub fn is_mounted(self) -> bool {
        self != Phase::Hidden
    }

    /// Whether the panel should be drawn in its off-screen/transparent state.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Phase::Entering | Phase::Leaving)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The external `open` flag now has this value.
    SetOpen(bool),
    /// An animation frame passed while entering.
    FramePainted,
    /// The exit animation delay elapsed.
    ExitElapsed,
    /// The owning component is going away.
    Unmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    NextFrame,
    Exit(Duration),
}

/// Side effects the host has to carry out after a transition, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCommand {
    /// Drop the single pending timer.
    CancelTimer,
    Schedule(TimerKind),
    LockScroll,
    ReleaseScroll,
    /// Return any gesture displacement to rest.
    ResetDrag,
}

/// State machine behind every overlay surface.
///
/// All input goes through [`OverlayLifecycle::handle`]. At most one timer is
/// ever pending: scheduling always cancels the previous one first, so a
/// superseded exit timer can never fire after a re-open.
#[derive(Debug, Clone)]
pub struct OverlayLifecycle {
    phase: Phase,
    pending: Option<TimerKind>,
    /// Frames still to pass before `Entering` becomes `Open`.
    frames_left: u8,
    scroll_locked: bool,
    exit_delay: Duration,
}

impl OverlayLifecycle {
    pub fn new(exit_delay: Duration) -> Self {
        Self {
            phase: Phase::Hidden,
            pending: None,
            frames_left: 0,
            scroll_locked: false,
            exit_delay,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.pending
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn handle(&mut self, event: LifecycleEvent) -> Vec<LifecycleCommand> {
        let mut out = Vec::new();
        match (self.phase, event) {
            (Phase::Hidden | Phase::Leaving, LifecycleEvent::SetOpen(true)) => {
                self.lock_scroll(&mut out);
                self.phase = Phase::Entering;
                self.frames_left = ENTER_FRAMES;
                self.schedule(TimerKind::NextFrame, &mut out);
            }
            (Phase::Entering, LifecycleEvent::FramePainted) => {
                self.pending = None;
                self.frames_left = self.frames_left.saturating_sub(1);
                if self.frames_left > 0 {
                    // a frame requested from inside a frame callback runs
                    // only after the hidden pose has been painted
                    self.schedule(TimerKind::NextFrame, &mut out);
                } else {
                    self.phase = Phase::Open;
                }
            }
            (Phase::Entering | Phase::Open, LifecycleEvent::SetOpen(false)) => {
                self.release_scroll(&mut out);
                out.push(LifecycleCommand::ResetDrag);
                self.phase = Phase::Leaving;
                self.schedule(TimerKind::Exit(self.exit_delay), &mut out);
            }
            (Phase::Leaving, LifecycleEvent::ExitElapsed) => {
                self.pending = None;
                self.phase = Phase::Hidden;
            }
            (_, LifecycleEvent::Unmount) => {
                if self.pending.take().is_some() {
                    out.push(LifecycleCommand::CancelTimer);
                }
                self.release_scroll(&mut out);
                self.phase = Phase::Hidden;
            }
            // repeated flags and stray timer callbacks
            _ => {}
        }
        if !out.is_empty() {
            log::debug!("overlay {:?} -> {:?}", event, self.phase);
        }
        out
    }

    fn schedule(&mut self, timer: TimerKind, out: &mut Vec<LifecycleCommand>) {
        if self.pending.take().is_some() {
            out.push(LifecycleCommand::CancelTimer);
        }
        self.pending = Some(timer);
        out.push(LifecycleCommand::Schedule(timer));
    }

    fn lock_scroll(&mut self, out: &mut Vec<LifecycleCommand>) {
        if !self.scroll_locked {
            self.scroll_locked = true;
            out.push(LifecycleCommand::LockScroll);
        }
    }

    fn release_scroll(&mut self, out: &mut Vec<LifecycleCommand>) {
        if self.scroll_locked {
            self.scroll_locked = false;
            out.push(LifecycleCommand::ReleaseScroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXIT: Duration = Duration::from_millis(300);

    fn open_fully(lc: &mut OverlayLifecycle) {
        for _ in 0..ENTER_FRAMES {
            lc.handle(LifecycleEvent::FramePainted);
        }
    }

    // Plays commands against a tiny model of the host and checks the
    // invariants after every step.
    #[derive(Default)]
    struct Host {
        pending: usize,
        locks: usize,
        resets: usize,
    }

    impl Host {
        fn run(&mut self, lifecycle: &mut OverlayLifecycle, event: LifecycleEvent) {
            let is_timer = matches!(
                event,
                LifecycleEvent::FramePainted | LifecycleEvent::ExitElapsed
            );
            let fired = matches!(
                (event, lifecycle.pending_timer()),
                (LifecycleEvent::FramePainted, Some(TimerKind::NextFrame))
                    | (LifecycleEvent::ExitElapsed, Some(TimerKind::Exit(_)))
            );
            if fired {
                self.pending -= 1;
            }
            let before = lifecycle.phase();
            let cmds = lifecycle.handle(event);
            if is_timer && !fired {
                // a callback nobody is waiting for is inert
                assert!(cmds.is_empty());
                assert_eq!(lifecycle.phase(), before);
            }
            for cmd in cmds {
                match cmd {
                    LifecycleCommand::CancelTimer => self.pending -= 1,
                    LifecycleCommand::Schedule(_) => self.pending += 1,
                    LifecycleCommand::LockScroll => self.locks += 1,
                    LifecycleCommand::ReleaseScroll => self.locks -= 1,
                    LifecycleCommand::ResetDrag => self.resets += 1,
                }
            }
            assert!(self.pending <= 1, "more than one timer pending");
            assert_eq!(self.pending, lifecycle.pending_timer().map_or(0, |_| 1));
            assert_eq!(self.locks == 1, lifecycle.is_scroll_locked());
        }
    }

    #[test]
    fn test_open_sequence() {
        let mut lc = OverlayLifecycle::new(EXIT);
        assert_eq!(lc.phase(), Phase::Hidden);

        let cmds = lc.handle(LifecycleEvent::SetOpen(true));
        assert_eq!(
            cmds,
            vec![
                LifecycleCommand::LockScroll,
                LifecycleCommand::Schedule(TimerKind::NextFrame)
            ]
        );
        assert_eq!(lc.phase(), Phase::Entering);
        assert!(lc.phase().is_transitioning());

        open_fully(&mut lc);
        assert_eq!(lc.phase(), Phase::Open);
        assert_eq!(lc.pending_timer(), None);
    }

    #[test]
    fn test_first_frame_keeps_hidden_pose() {
        let mut lc = OverlayLifecycle::new(EXIT);
        lc.handle(LifecycleEvent::SetOpen(true));

        // the frame that mounts the panel has not painted it yet
        let cmds = lc.handle(LifecycleEvent::FramePainted);
        assert_eq!(cmds, vec![LifecycleCommand::Schedule(TimerKind::NextFrame)]);
        assert_eq!(lc.phase(), Phase::Entering);
        assert!(lc.phase().is_transitioning());

        assert!(lc.handle(LifecycleEvent::FramePainted).is_empty());
        assert_eq!(lc.phase(), Phase::Open);
    }

    #[test]
    fn test_close_between_enter_frames_cancels_second_frame() {
        let mut lc = OverlayLifecycle::new(EXIT);
        lc.handle(LifecycleEvent::SetOpen(true));
        open_fully(&mut lc);

        let cmds = lc.handle(LifecycleEvent::SetOpen(false));
        assert!(cmds.contains(&LifecycleCommand::CancelTimer));
        assert_eq!(lc.pending_timer(), Some(TimerKind::Exit(EXIT)));
        assert!(lc.handle(LifecycleEvent::FramePainted).is_empty());
        assert_eq!(lc.phase(), Phase::Leaving);
    }

    #[test]
    fn test_close_waits_for_exit_animation() {
        let mut lc = OverlayLifecycle::new(EXIT);
        lc.handle(LifecycleEvent::SetOpen(true));
        open_fully(&mut lc);

        let cmds = lc.handle(LifecycleEvent::SetOpen(false));
        assert_eq!(
            cmds,
            vec![
                LifecycleCommand::ReleaseScroll,
                LifecycleCommand::ResetDrag,
                LifecycleCommand::Schedule(TimerKind::Exit(EXIT))
            ]
        );
        assert_eq!(lc.phase(), Phase::Leaving);
        assert!(lc.phase().is_mounted());

        lc.handle(LifecycleEvent::ExitElapsed);
        assert_eq!(lc.phase(), Phase::Hidden);
    }

    #[test]
    fn test_close_while_entering_cancels_frame() {
        let mut lc = OverlayLifecycle::new(EXIT);
        lc.handle(LifecycleEvent::SetOpen(true));
        let cmds = lc.handle(LifecycleEvent::SetOpen(false));
        assert_eq!(cmds[0], LifecycleCommand::ReleaseScroll);
        assert!(cmds.contains(&LifecycleCommand::CancelTimer));
        assert_eq!(lc.phase(), Phase::Leaving);

        // the cancelled frame callback arriving late changes nothing
        assert!(lc.handle(LifecycleEvent::FramePainted).is_empty());
        assert_eq!(lc.phase(), Phase::Leaving);
    }

    #[test]
    fn test_reopen_while_leaving_restarts_cleanly() {
        let mut lc = OverlayLifecycle::new(EXIT);
        lc.handle(LifecycleEvent::SetOpen(true));
        open_fully(&mut lc);
        lc.handle(LifecycleEvent::SetOpen(false));

        let cmds = lc.handle(LifecycleEvent::SetOpen(true));
        assert_eq!(
            cmds,
            vec![
                LifecycleCommand::LockScroll,
                LifecycleCommand::CancelTimer,
                LifecycleCommand::Schedule(TimerKind::NextFrame)
            ]
        );
        assert_eq!(lc.phase(), Phase::Entering);

        // a stale exit callback must not hide the re-opened overlay
        lc.handle(LifecycleEvent::ExitElapsed);
        assert_eq!(lc.phase(), Phase::Entering);
    }

    #[test]
    fn test_unmount_while_open_releases_scroll() {
        let mut lc = OverlayLifecycle::new(EXIT);
        lc.handle(LifecycleEvent::SetOpen(true));
        open_fully(&mut lc);

        let cmds = lc.handle(LifecycleEvent::Unmount);
        assert_eq!(cmds, vec![LifecycleCommand::ReleaseScroll]);
        assert_eq!(lc.phase(), Phase::Hidden);
        assert!(!lc.is_scroll_locked());
    }

    #[test]
    fn test_unmount_while_leaving_cancels_exit_timer() {
        let mut lc = OverlayLifecycle::new(EXIT);
        lc.handle(LifecycleEvent::SetOpen(true));
        lc.handle(LifecycleEvent::SetOpen(false));

        let cmds = lc.handle(LifecycleEvent::Unmount);
        assert_eq!(cmds, vec![LifecycleCommand::CancelTimer]);
        assert_eq!(lc.pending_timer(), None);
    }

    #[test]
    fn test_repeated_flags_are_ignored() {
        let mut lc = OverlayLifecycle::new(EXIT);
        assert!(lc.handle(LifecycleEvent::SetOpen(false)).is_empty());
        lc.handle(LifecycleEvent::SetOpen(true));
        assert!(lc.handle(LifecycleEvent::SetOpen(true)).is_empty());
        assert!(lc.handle(LifecycleEvent::ExitElapsed).is_empty());
        assert_eq!(lc.phase(), Phase::Entering);
    }

    #[test]
    fn test_rapid_toggling_keeps_invariants() {
        let mut lc = OverlayLifecycle::new(EXIT);
        let mut host = Host::default();
        let script = [
            LifecycleEvent::SetOpen(true),
            LifecycleEvent::SetOpen(false),
            LifecycleEvent::SetOpen(true),
            LifecycleEvent::FramePainted,
            LifecycleEvent::SetOpen(false),
            LifecycleEvent::SetOpen(true),
            LifecycleEvent::SetOpen(false),
            LifecycleEvent::ExitElapsed,
            LifecycleEvent::SetOpen(true),
            LifecycleEvent::FramePainted,
            LifecycleEvent::SetOpen(false),
            LifecycleEvent::FramePainted,
            LifecycleEvent::ExitElapsed,
        ];
        for event in script {
            host.run(&mut lc, event);
        }
        assert_eq!(lc.phase(), Phase::Hidden);
        assert_eq!(host.pending, 0);
        assert_eq!(host.locks, 0);
        assert_eq!(host.resets, 4);
    }

    #[test]
    fn test_every_toggle_sequence_ends_consistent() {
        // exhaustive over all open/close/timer sequences of length 6
        let events = [
            LifecycleEvent::SetOpen(true),
            LifecycleEvent::SetOpen(false),
            LifecycleEvent::FramePainted,
            LifecycleEvent::ExitElapsed,
        ];
        for mut code in 0..events.len().pow(6) {
            let mut lc = OverlayLifecycle::new(EXIT);
            let mut host = Host::default();
            for _ in 0..6 {
                host.run(&mut lc, events[code % events.len()]);
                code /= events.len();
            }
            // whatever happened, visibly closed means unlocked
            if matches!(lc.phase(), Phase::Hidden | Phase::Leaving) {
                assert_eq!(host.locks, 0);
            } else {
                assert_eq!(host.locks, 1);
            }
            host.run(&mut lc, LifecycleEvent::Unmount);
            assert_eq!(host.locks, 0);
            assert_eq!(host.pending, 0);
        }
    }
}
