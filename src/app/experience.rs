use leptos::prelude::*;

use super::SectionHeading;
use crate::content::EXPERIENCES;

#[component]
pub fn Experience(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <SectionHeading visible title="Experience">
            <div class="space-y-8">
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(index, exp)| {
                        let (glyph, glyph_class) = exp.icon;
                        view! {
                            <div
                                class="bg-gray-800/50 p-6 rounded-xl backdrop-blur-sm border border-gray-700 hover:border-gray-600 transition-all duration-500 transform hover:scale-105 animate-slide-in-right relative overflow-hidden group"
                                style=format!("animation-delay: {}s", index as f64 * 0.2)
                            >
                                <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-blue-500 to-purple-600 transform scale-x-0 group-hover:scale-x-100 transition-transform duration-500"></div>
                                <div class="flex items-start space-x-4">
                                    <div class=format!(
                                        "flex-shrink-0 p-2 bg-gray-700 rounded-lg group-hover:bg-gray-600 transition-colors duration-300 font-bold {glyph_class}",
                                    )>{glyph}</div>
                                    <div class="flex-1">
                                        <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                                            <div>
                                                <h3 class="text-xl font-semibold text-blue-400 group-hover:text-blue-300 transition-colors duration-300">
                                                    {exp.position}
                                                </h3>
                                                <p class="text-gray-300 group-hover:text-white transition-colors duration-300">
                                                    {exp.company}
                                                </p>
                                            </div>
                                            <span class="text-gray-400 text-sm mt-2 md:mt-0 transform group-hover:scale-110 transition-transform duration-300">
                                                {exp.duration}
                                            </span>
                                        </div>
                                        <p class="text-gray-300 mb-4 group-hover:text-white transition-colors duration-300">
                                            {exp.description}
                                        </p>
                                        <div class="space-y-2">
                                            {exp
                                                .achievements
                                                .iter()
                                                .enumerate()
                                                .map(|(i, achievement)| {
                                                    view! {
                                                        <div
                                                            class="flex items-start transform translate-x-[-10px] group-hover:translate-x-0 transition-transform duration-300"
                                                            style=format!("transition-delay: {}s", i as f64 * 0.1)
                                                        >
                                                            <span class="text-yellow-400 mr-2 flex-shrink-0">"★"</span>
                                                            <span class="text-gray-300 group-hover:text-white transition-colors duration-300">
                                                                {*achievement}
                                                            </span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionHeading>
    }
}
