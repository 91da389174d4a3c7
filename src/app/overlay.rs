use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};
use web_sys::Element;

use super::dom::{self, BodyScroll, DomError, DomPortalHost, TimerGuard, TimerSlot};
use crate::config::overlay::EXIT_ANIMATION_MS;
use crate::overlay::{
    confirm_action, next_instance, DismissInput, LifecycleCommand, LifecycleEvent,
    OverlayLifecycle, Phase, PortalKind, ScrollLockGuard, TimerKind, PORTALS, SCROLL_LOCK,
};

/// Inline style of the layer that fills the portal root and takes input.
pub const LAYER_STYLE: &str =
    "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; pointer-events: auto;";

type ScrollSlot = StoredValue<Option<ScrollLockGuard<'static, BodyScroll>>, LocalStorage>;

/// Reactive side of one overlay: runs [`OverlayLifecycle`] commands against
/// the browser and exposes the phase and render target to the view.
#[derive(Clone, Copy)]
pub struct OverlaySurface {
    kind: PortalKind,
    instance: usize,
    container: StoredValue<Option<String>>,
    machine: StoredValue<OverlayLifecycle>,
    phase: RwSignal<Phase>,
    root: RwSignal<Option<Element>, LocalStorage>,
    timer: TimerSlot,
    scroll: ScrollSlot,
    on_reset_drag: Option<Callback<()>>,
}

/// Drives an overlay of `kind` from the `open` flag.
///
/// With a `container` id the overlay renders into that element and the
/// shared portal root is never touched.
pub fn use_overlay_surface(
    kind: PortalKind,
    open: Signal<bool>,
    container: Option<String>,
    on_reset_drag: Option<Callback<()>>,
) -> OverlaySurface {
    let surface = OverlaySurface {
        kind,
        instance: next_instance(),
        container: StoredValue::new(container),
        machine: StoredValue::new(OverlayLifecycle::new(Duration::from_millis(
            EXIT_ANIMATION_MS,
        ))),
        phase: RwSignal::new(Phase::Hidden),
        root: RwSignal::new_local(None),
        timer: dom::timer_slot(),
        scroll: StoredValue::new_local(None),
        on_reset_drag,
    };

    Effect::watch(
        move || open.get(),
        move |is_open, _, _| surface.dispatch(LifecycleEvent::SetOpen(*is_open)),
        true,
    );
    on_cleanup(move || surface.dispatch(LifecycleEvent::Unmount));

    surface
}

impl OverlaySurface {
    /// Entering or leaving: draw the panel in its hidden pose.
    pub fn is_transitioning(&self) -> bool {
        self.phase.get().is_transitioning()
    }

    /// Id for the element holding this overlay's title.
    pub fn title_id(&self) -> String {
        self.kind.title_id(self.instance)
    }

    /// Where to render, once mounted and a target exists.
    pub fn root(&self) -> Option<Element> {
        self.root.get()
    }

    pub fn dispatch(self, event: LifecycleEvent) {
        let Some(commands) = self.machine.try_update_value(|m| m.handle(event)) else {
            return;
        };
        for command in commands {
            self.run(command);
        }
        if let Some(phase) = self.machine.try_with_value(|m| m.phase()) {
            self.sync_root(phase);
            self.phase.try_set(phase);
        }
    }

    fn run(self, command: LifecycleCommand) {
        match command {
            LifecycleCommand::CancelTimer => {
                self.timer.try_update_value(|slot| *slot = None);
            }
            LifecycleCommand::Schedule(timer) => self.schedule(timer),
            LifecycleCommand::LockScroll => {
                let guard = SCROLL_LOCK.acquire(BodyScroll);
                self.scroll.try_update_value(|slot| *slot = Some(guard));
            }
            LifecycleCommand::ReleaseScroll => {
                self.scroll.try_update_value(|slot| *slot = None);
            }
            LifecycleCommand::ResetDrag => {
                if let Some(reset) = self.on_reset_drag {
                    reset.run(());
                }
            }
        }
    }

    fn schedule(self, timer: TimerKind) {
        let (event, scheduled) = match timer {
            TimerKind::NextFrame => {
                let event = LifecycleEvent::FramePainted;
                (event, TimerGuard::next_frame(move || self.fire(event)))
            }
            TimerKind::Exit(delay) => {
                let event = LifecycleEvent::ExitElapsed;
                (event, TimerGuard::timeout(delay, move || self.fire(event)))
            }
        };
        match scheduled {
            Ok(guard) => {
                self.timer.try_update_value(|slot| *slot = Some(guard));
            }
            Err(err) => {
                log::warn!("{err}, skipping overlay animation");
                self.dispatch(event);
            }
        }
    }

    fn fire(self, event: LifecycleEvent) {
        dom::timer_fired(self.timer);
        self.dispatch(event);
    }

    fn sync_root(self, phase: Phase) {
        let attached = self
            .root
            .try_with_untracked(Option::is_some)
            .unwrap_or(false);
        if phase.is_mounted() && !attached {
            match self.resolve_root() {
                Ok(root) => {
                    self.root.try_set(Some(root));
                }
                Err(err) => log::warn!("overlay has nowhere to render: {err}"),
            }
        } else if !phase.is_mounted() && attached {
            self.root.try_set(None);
            if !self.has_container() {
                if let Err(err) = PORTALS.detach(self.kind, &DomPortalHost) {
                    log::warn!("removing portal root: {err}");
                }
            }
        }
    }

    fn has_container(self) -> bool {
        self.container
            .try_with_value(Option::is_some)
            .unwrap_or(false)
    }

    fn resolve_root(self) -> Result<Element, DomError> {
        match self.container.try_with_value(Clone::clone).flatten() {
            Some(id) => dom::find_container(&id),
            None => PORTALS.attach(self.kind, &DomPortalHost),
        }
    }
}

/// Calls `on_close` on Escape while `open` is set.
pub fn close_on_escape(open: Signal<bool>, on_close: Callback<()>) {
    let _ = use_event_listener(use_document(), ev::keydown, move |ev: ev::KeyboardEvent| {
        if DismissInput::Key(&ev.key()).dismisses(open.get_untracked()) {
            on_close.run(());
        }
    });
}

#[component]
pub fn Backdrop(
    surface: OverlaySurface,
    open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "fixed inset-0 bg-black transition-opacity duration-300 ease-out {}",
                    if surface.is_transitioning() { "opacity-0" } else { "opacity-50" },
                )
            }
            on:click=move |ev: ev::MouseEvent| {
                let click = DismissInput::BackdropClick {
                    on_backdrop: ev.target() == ev.current_target(),
                };
                if click.dismisses(open.get_untracked()) {
                    on_close.run(());
                }
            }
        />
    }
}

#[component]
pub fn OverlayFooter(
    on_close: Callback<()>,
    on_confirm: Option<Callback<()>>,
    confirm_text: &'static str,
    cancel_text: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let confirm = confirm_action(on_confirm, on_close);
    view! {
        <div class=format!("flex justify-end gap-3 p-6 border-t border-gray-200 bg-white {class}")>
            <button
                type="button"
                on:click=move |_| on_close.run(())
                class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-md transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-gray-500 focus:ring-offset-2"
            >
                {cancel_text}
            </button>
            <button
                type="button"
                on:click=move |_| confirm.run(())
                class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-md transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
            >
                {confirm_text}
            </button>
        </div>
    }
}
