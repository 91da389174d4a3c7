use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared lock for the page body; every open overlay holds one guard.
pub static SCROLL_LOCK: ScrollLock = ScrollLock::new();

/// Something whose scrolling can be switched off, usually the page body.
pub trait ScrollHost {
    fn set_scroll_locked(&self, locked: bool);
}

impl<T: ScrollHost + ?Sized> ScrollHost for &T {
    fn set_scroll_locked(&self, locked: bool) {
        (**self).set_scroll_locked(locked)
    }
}

/// Counts holders and only touches the host on the first acquire and the
/// last release, so two open overlays do not unlock each other.
#[derive(Debug)]
pub struct ScrollLock {
    holders: AtomicUsize,
}

impl ScrollLock {
    pub const fn new() -> Self {
        Self {
            holders: AtomicUsize::new(0),
        }
    }

    pub fn acquire<H: ScrollHost>(&self, host: H) -> ScrollLockGuard<'_, H> {
        if self.holders.fetch_add(1, Ordering::AcqRel) == 0 {
            log::debug!("locking page scroll");
            host.set_scroll_locked(true);
        }
        ScrollLockGuard { lock: self, host }
    }

    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }

    fn release<H: ScrollHost>(&self, host: &H) {
        if self.holders.fetch_sub(1, Ordering::AcqRel) == 1 {
            log::debug!("restoring page scroll");
            host.set_scroll_locked(false);
        }
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the page locked until dropped.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<'a, H: ScrollHost> {
    lock: &'a ScrollLock,
    host: H,
}

impl<H: ScrollHost> Drop for ScrollLockGuard<'_, H> {
    fn drop(&mut self) {
        self.lock.release(&self.host);
    }
}
