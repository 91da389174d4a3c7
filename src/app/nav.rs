use leptos::prelude::*;

use super::dom::scroll_to_section;
use crate::sections::SectionId;

#[component]
pub fn NavBar(#[prop(into)] active: Signal<SectionId>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go = move |section: SectionId| {
        scroll_to_section(section);
        set_menu_open.set(false);
    };

    view! {
        <nav class="fixed top-0 w-full bg-gray-900/95 backdrop-blur-md z-50 border-b border-gray-800 transition-all duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent animate-pulse">
                        "Portfolio"
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            {SectionId::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            type="button"
                                            on:click=move |_| go(section)
                                            class=move || {
                                                if active.get() == section {
                                                    "px-3 py-2 rounded-md text-sm font-medium transition-all duration-300 transform hover:scale-110 text-blue-400 bg-gray-800 shadow-lg"
                                                } else {
                                                    "px-3 py-2 rounded-md text-sm font-medium transition-all duration-300 transform hover:scale-110 text-gray-300 hover:text-white hover:bg-gray-800"
                                                }
                                            }
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:hidden">
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class="text-gray-300 hover:text-white p-2 text-2xl transition-all duration-300 transform hover:scale-110"
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <div class=move || {
                format!(
                    "md:hidden bg-gray-800 border-t border-gray-700 transition-all duration-300 overflow-hidden {}",
                    if menu_open.get() { "max-h-96 opacity-100" } else { "max-h-0 opacity-0" },
                )
            }>
                <div class="px-2 pt-2 pb-3 space-y-1">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| go(section)
                                    class="block px-3 py-2 text-base font-medium text-gray-300 hover:text-white hover:bg-gray-700 w-full text-left transition-all duration-300 transform hover:translate-x-2"
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
