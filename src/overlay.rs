//! Framework-free pieces shared by the modal and the bottom sheet.
//!
//! - [`dismiss`] - which clicks and keys close an overlay
//! - [`lifecycle`] - the hidden/entering/open/leaving state machine
//! - [`portal`] - reference-counted registry of portal root nodes
//! - [`scroll_lock`] - reference-counted page scroll suspension

pub mod dismiss;
pub mod lifecycle;
pub mod portal;
pub mod scroll_lock;

pub use dismiss::{confirm_action, DismissInput};
pub use lifecycle::{LifecycleCommand, LifecycleEvent, OverlayLifecycle, Phase, TimerKind};
pub use portal::{next_instance, PortalHost, PortalKind, PortalRegistry, PORTALS};
pub use scroll_lock::{ScrollHost, ScrollLock, ScrollLockGuard, SCROLL_LOCK};
