use leptos::{ev, portal::Portal, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::dom::{mouse_y, touch_y};
use super::overlay::{close_on_escape, use_overlay_surface, Backdrop, OverlayFooter, LAYER_STYLE};
use crate::gesture::{DragRelease, DragToDismiss, PointerSession};
use crate::overlay::PortalKind;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SheetHeight {
    #[default]
    Auto,
    Half,
    Full,
    /// Any CSS length, e.g. `"60vh"`.
    Custom(String),
}

impl SheetHeight {
    fn class(&self) -> String {
        match self {
            SheetHeight::Auto => "h-full max-h-[80vh]".to_string(),
            SheetHeight::Half => "h-1/2".to_string(),
            SheetHeight::Full => "h-full".to_string(),
            SheetHeight::Custom(value) => format!("h-[{value}]"),
        }
    }
}

/// Panel anchored to the bottom of the viewport that can be dragged down
/// to dismiss.
#[component]
pub fn BottomSheet(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] height: SheetHeight,
    #[prop(default = true)] show_handle: bool,
    #[prop(default = true)] show_header: bool,
    #[prop(default = true)] show_footer: bool,
    #[prop(optional, into)] on_confirm: Option<Callback<()>>,
    #[prop(default = "Confirm")] confirm_text: &'static str,
    #[prop(default = "Cancel")] cancel_text: &'static str,
    #[prop(optional, into)] container: Option<String>,
    #[prop(default = true)] draggable: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let drag = StoredValue::new(DragToDismiss::new(draggable));
    let offset = RwSignal::new(0.0_f64);
    let dragging = RwSignal::new(false);

    let reset_drag = Callback::new(move |_| {
        drag.update_value(|d| d.reset());
        dragging.set(false);
        offset.set(0.0);
    });
    let surface = use_overlay_surface(PortalKind::BottomSheet, open, container, Some(reset_drag));
    close_on_escape(open, on_close);
    let title_id = surface.title_id();

    let start = move |y: f64| {
        drag.update_value(|d| d.start(y));
        dragging.set(drag.with_value(|d| d.is_dragging()));
    };
    let follow = move |y: f64| {
        if !dragging.get_untracked() {
            return;
        }
        if let Some(at) = drag.try_update_value(|d| {
            d.update(y);
            d.offset()
        }) {
            offset.set(at);
        }
    };
    let release = move || {
        if !dragging.get_untracked() {
            return;
        }
        let outcome = drag.try_update_value(|d| d.end()).flatten();
        dragging.set(false);
        log::debug!("sheet drag released: {outcome:?}");
        match outcome {
            Some(DragRelease::Dismiss) => on_close.run(()),
            Some(DragRelease::SnapBack) => offset.set(0.0),
            None => {}
        }
    };

    // a mouse drag keeps tracking once the pointer leaves the panel
    let _ = use_event_listener(use_document(), ev::mousemove, move |ev| {
        follow(mouse_y(&ev))
    });
    let _ = use_event_listener(use_document(), ev::mouseup, move |_| release());

    let panel_class = format!(
        "relative bg-white text-gray-900 rounded-t-xl shadow-2xl w-full max-w-7xl {} overflow-hidden flex flex-col",
        height.class()
    );
    let transform = move || {
        if surface.is_transitioning() {
            "translateY(100%)".to_string()
        } else {
            format!("translateY({}px)", offset.get())
        }
    };
    let transition = move || {
        if dragging.get() {
            "none"
        } else {
            "transform 300ms ease-out"
        }
    };

    move || {
        surface.root().map(|mount| {
            let title = title.clone().filter(|_| show_header);
            let title_id = title_id.clone();
            let panel_class = panel_class.clone();
            let children = children.clone();
            view! {
                <Portal mount=mount>
                    <div class="flex items-end justify-center min-h-screen" style=LAYER_STYLE>
                        <Backdrop surface open on_close />
                        <div
                            class=panel_class.clone()
                            role="dialog"
                            aria-modal="true"
                            aria-labelledby=title.as_ref().map(|_| title_id.clone())
                            style:transform=transform
                            style:transition=transition
                            on:touchstart=move |ev| {
                                if let Some(y) = touch_y(&ev) {
                                    start(y);
                                }
                            }
                            on:touchmove=move |ev| {
                                if let Some(y) = touch_y(&ev) {
                                    follow(y);
                                }
                            }
                            on:touchend=move |_| release()
                            on:mousedown=move |ev| start(mouse_y(&ev))
                        >
                            {show_handle
                                .then(|| {
                                    view! {
                                        <div class="flex justify-center pt-3 pb-2">
                                            <div class="w-12 h-1 bg-gray-300 rounded-full cursor-grab active:cursor-grabbing"></div>
                                        </div>
                                    }
                                })}
                            {title
                                .clone()
                                .map(|title| {
                                    view! {
                                        <div class="flex items-center justify-between px-6 pb-4 border-b border-gray-200">
                                            <h2 id=title_id.clone() class="text-xl font-semibold">
                                                {title}
                                            </h2>
                                        </div>
                                    }
                                })}
                            <div class="overflow-y-auto p-6 flex-1">{children()}</div>
                            {show_footer
                                .then(|| {
                                    view! {
                                        <OverlayFooter on_close on_confirm confirm_text cancel_text />
                                    }
                                })}
                        </div>
                    </div>
                </Portal>
            }
        })
    }
}
