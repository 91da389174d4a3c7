use leptos::{portal::Portal, prelude::*};

use super::overlay::{close_on_escape, use_overlay_surface, Backdrop, OverlayFooter, LAYER_STYLE};
use crate::overlay::PortalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    fn max_width(self) -> &'static str {
        match self {
            ModalSize::Sm => "max-w-sm",
            ModalSize::Md => "max-w-md",
            ModalSize::Lg => "max-w-lg",
            ModalSize::Xl => "max-w-xl",
        }
    }
}

/// Centered dialog with a title bar and a cancel/confirm footer.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional)] size: ModalSize,
    #[prop(default = true)] show_footer: bool,
    #[prop(optional, into)] on_confirm: Option<Callback<()>>,
    #[prop(default = "Confirm")] confirm_text: &'static str,
    #[prop(default = "Cancel")] cancel_text: &'static str,
    /// Id of an element to render into instead of the shared modal root.
    #[prop(optional, into)]
    container: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let surface = use_overlay_surface(PortalKind::Modal, open, container, None);
    close_on_escape(open, on_close);
    let title_id = surface.title_id();

    let panel_class = move || {
        format!(
            "relative bg-white text-gray-900 rounded-lg shadow-2xl {} w-full max-h-[90vh] overflow-hidden transform transition-all duration-300 ease-out {}",
            size.max_width(),
            if surface.is_transitioning() {
                "scale-95 opacity-0 translate-y-4"
            } else {
                "scale-100 opacity-100 translate-y-0"
            },
        )
    };

    move || {
        surface.root().map(|mount| {
            let title = title.clone();
            let title_id = title_id.clone();
            let children = children.clone();
            view! {
                <Portal mount=mount>
                    <div class="flex items-center justify-center p-4 min-h-screen" style=LAYER_STYLE>
                        <Backdrop surface open on_close />
                        <div
                            class=panel_class
                            role="dialog"
                            aria-modal="true"
                            aria-labelledby=title_id.clone()
                        >
                            <div class="flex items-center justify-between p-6 border-b border-gray-200 bg-white sticky top-0 z-10">
                                <h2 id=title_id.clone() class="text-xl font-semibold pr-4">
                                    {title.clone()}
                                </h2>
                                <button
                                    type="button"
                                    on:click=move |_| on_close.run(())
                                    class="text-gray-400 hover:text-gray-600 transition-colors duration-200 hover:bg-gray-100 rounded-full p-1 flex-shrink-0"
                                    aria-label="Close modal"
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="p-6 overflow-y-auto max-h-[calc(90vh-140px)]">
                                {children()}
                            </div>
                            {show_footer
                                .then(|| {
                                    view! {
                                        <OverlayFooter
                                            on_close
                                            on_confirm
                                            confirm_text
                                            cancel_text
                                            class="sticky bottom-0 z-10"
                                        />
                                    }
                                })}
                        </div>
                    </div>
                </Portal>
            }
        })
    }
}
