use leptos::prelude::*;

use super::modal::{Modal, ModalSize};
use super::SectionHeading;
use crate::content::{EMAIL, LINKEDIN_URL};

fn open_mail_client() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(&format!("mailto:{EMAIL}")) {
        log::warn!("could not open mail client: {err:?}");
    }
}

#[component]
pub fn Contact(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let show_email = RwSignal::new(false);

    view! {
        <SectionHeading visible title="Get In Touch">
            <div class="max-w-2xl mx-auto text-center">
                <p class="text-xl text-gray-300 mb-8 animate-fade-in-up">
                    "I'm always open to discussing new opportunities and interesting projects. Let's connect and build something amazing together!"
                </p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <button
                        type="button"
                        on:click=move |_| show_email.set(true)
                        class="bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 px-8 py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 hover:shadow-xl flex items-center justify-center animate-bounce-subtle"
                    >
                        <span class="mr-2">"✉"</span>
                        "Send Email"
                    </button>
                    <a
                        href=LINKEDIN_URL
                        class="border border-gray-600 hover:border-gray-400 px-8 py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 hover:shadow-xl flex items-center justify-center animate-bounce-subtle"
                        style="animation-delay: 0.2s"
                    >
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </SectionHeading>
        <Modal
            title="Send me an email"
            open=show_email
            on_close=move |_| show_email.set(false)
            on_confirm=move |_| {
                show_email.set(false);
                open_mail_client();
            }
            confirm_text="Open mail app"
            size=ModalSize::Sm
        >
            <p class="text-gray-700">"Drop me a line at"</p>
            <p class="mt-2 font-mono text-blue-600 break-all">{EMAIL}</p>
        </Modal>
    }
}
