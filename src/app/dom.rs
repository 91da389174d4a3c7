//! Thin adapters between the browser and the framework-free logic modules.

use std::time::Duration;

use leptos::{ev, prelude::*};
use thiserror::Error;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::overlay::{PortalHost, PortalKind, ScrollHost};
use crate::sections::SectionId;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("could not create <{0}>")]
    CreateElement(&'static str),
    #[error("could not attach #{0} to the body")]
    Append(&'static str),
    #[error("could not set style `{0}`")]
    Style(&'static str),
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("could not schedule a timer")]
    Timer,
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// The page body, whose overflow is hidden while an overlay is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl BodyScroll {
    fn apply(locked: bool) -> Result<(), DomError> {
        let style = body()?.style();
        if locked {
            style
                .set_property("overflow", "hidden")
                .map_err(|_| DomError::Style("overflow"))
        } else {
            style
                .remove_property("overflow")
                .map(|_| ())
                .map_err(|_| DomError::Style("overflow"))
        }
    }
}

impl ScrollHost for BodyScroll {
    fn set_scroll_locked(&self, locked: bool) {
        if let Err(err) = Self::apply(locked) {
            log::warn!("page scroll lock: {err}");
        }
    }
}

/// Portal roots live as direct children of the body, looked up by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPortalHost;

impl PortalHost for DomPortalHost {
    type Root = Element;
    type Error = DomError;

    fn find_root(&self, kind: PortalKind) -> Option<Element> {
        document().ok()?.get_element_by_id(kind.root_id())
    }

    fn create_root(&self, kind: PortalKind) -> Result<Element, DomError> {
        let doc = document()?;
        let root = doc
            .create_element("div")
            .map_err(|_| DomError::CreateElement("div"))?;
        root.set_id(kind.root_id());
        root.set_attribute("style", kind.root_style())
            .map_err(|_| DomError::Style("style"))?;
        doc.body()
            .ok_or(DomError::NoBody)?
            .append_child(&root)
            .map_err(|_| DomError::Append(kind.root_id()))?;
        Ok(root)
    }

    fn remove_root(&self, kind: PortalKind) -> Result<(), DomError> {
        if let Some(root) = self.find_root(kind) {
            root.remove();
        }
        Ok(())
    }
}

/// An element the caller placed in the page for one overlay to render into.
pub fn find_container(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

pub fn scroll_to_section(section: SectionId) {
    let target = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(section.id()));
    let Some(target) = target else {
        log::warn!("no element for section #{section}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Vertical position of the first finger still on the screen.
pub fn touch_y(ev: &ev::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| f64::from(t.client_y()))
}

pub fn touch_x(ev: &ev::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| f64::from(t.client_x()))
}

pub fn mouse_y(ev: &ev::MouseEvent) -> f64 {
    f64::from(ev.client_y())
}

#[derive(Debug)]
enum Pending {
    Timeout(TimeoutHandle),
    Frame(AnimationFrameRequestHandle),
}

/// A scheduled callback that is cancelled when the guard is dropped.
///
/// Components keep their guard in a `StoredValue`, so disposing the owner
/// clears the timer along with everything else it owned.
#[derive(Debug)]
#[must_use = "dropping the guard cancels the timer"]
pub struct TimerGuard(Option<Pending>);

impl TimerGuard {
    pub fn timeout(delay: Duration, f: impl FnOnce() + 'static) -> Result<Self, DomError> {
        set_timeout_with_handle(f, delay)
            .map(|h| Self(Some(Pending::Timeout(h))))
            .map_err(|_| DomError::Timer)
    }

    pub fn next_frame(f: impl FnOnce() + 'static) -> Result<Self, DomError> {
        request_animation_frame_with_handle(f)
            .map(|h| Self(Some(Pending::Frame(h))))
            .map_err(|_| DomError::Timer)
    }

    /// Forget a timer whose callback already ran.
    pub fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        match self.0.take() {
            Some(Pending::Timeout(h)) => h.clear(),
            Some(Pending::Frame(h)) => h.cancel(),
            None => {}
        }
    }
}

/// Slot holding at most one pending [`TimerGuard`].
pub type TimerSlot = StoredValue<Option<TimerGuard>, LocalStorage>;

pub fn timer_slot() -> TimerSlot {
    StoredValue::new_local(None)
}

/// Called first thing in a timer callback, so the slot no longer cancels it.
pub fn timer_fired(slot: TimerSlot) {
    slot.try_update_value(|pending| pending.take().map(TimerGuard::disarm));
}
