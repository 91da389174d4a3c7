use leptos::prelude::*;

use super::dom::{self, scroll_to_section, TimerGuard, TimerSlot};
use crate::config::hero::TYPED_WORDS;
use crate::hero::Typewriter;
use crate::sections::SectionId;

fn type_next(typer: StoredValue<Typewriter>, text: RwSignal<&'static str>, timer: TimerSlot) {
    let Some(delay) = typer.try_with_value(|t| t.next_delay()) else {
        return;
    };
    let scheduled = TimerGuard::timeout(delay, move || {
        dom::timer_fired(timer);
        if let Some(next) = typer.try_update_value(|t| {
            t.advance();
            t.text()
        }) {
            text.set(next);
            type_next(typer, text, timer);
        }
    });
    match scheduled {
        Ok(guard) => {
            timer.try_update_value(|slot| *slot = Some(guard));
        }
        Err(err) => log::warn!("{err}, typing animation stopped"),
    }
}

#[component]
fn FloatingIcon(icon: &'static str, class: &'static str, delay: f64) -> impl IntoView {
    view! {
        <div
            class=format!("absolute animate-pulse text-3xl {class}")
            style=format!("animation-delay: {delay}s; animation-duration: 3s;")
        >
            {icon}
        </div>
    }
}

#[component]
pub fn Hero(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let typer = StoredValue::new(Typewriter::new(TYPED_WORDS));
    let text = RwSignal::new("");
    let timer = dom::timer_slot();

    Effect::watch(|| (), move |_, _, _| type_next(typer, text, timer), true);

    view! {
        <div class="absolute inset-0 bg-gradient-to-br from-blue-900/20 via-purple-900/20 to-pink-900/20"></div>
        <FloatingIcon icon="💻" class="top-20 left-10" delay=0.0 />
        <FloatingIcon icon="🗄️" class="top-40 right-20" delay=1.0 />
        <FloatingIcon icon="🖥️" class="bottom-40 left-20" delay=2.0 />
        <FloatingIcon icon="🌐" class="bottom-20 right-10" delay=0.5 />
        <div class="relative z-10 text-center max-w-4xl mx-auto px-4">
            <div class=move || {
                format!(
                    "transform transition-all duration-1000 {}",
                    if visible.get() { "translate-y-0 opacity-100" } else { "translate-y-10 opacity-0" },
                )
            }>
                <div class="mb-6">
                    <h1 class="text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 bg-clip-text text-transparent">
                        "Hi, I'm a"
                    </h1>
                    <div class="text-4xl md:text-6xl font-bold text-white h-20 flex items-center justify-center">
                        <span class="animate-pulse">{move || text.get()}</span>
                        <span class="animate-blink text-blue-400">"|"</span>
                    </div>
                </div>
                <p class="text-xl md:text-2xl text-gray-300 mb-8 leading-relaxed animate-fade-in-up">
                    "Creating innovative solutions with modern technologies 🚀"
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        type="button"
                        on:click=move |_| scroll_to_section(SectionId::Projects)
                        class="bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 px-8 py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 hover:shadow-xl animate-bounce-subtle"
                    >
                        "View My Work"
                    </button>
                    <button
                        type="button"
                        on:click=move |_| scroll_to_section(SectionId::Contact)
                        class="border border-gray-600 hover:border-gray-400 px-8 py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 hover:shadow-xl animate-bounce-subtle"
                        style="animation-delay: 0.2s"
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </div>
        <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce text-3xl text-gray-400">
            "⌄"
        </div>
    }
}
