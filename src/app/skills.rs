use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{SkillCategory, SKILLS};

#[component]
fn SkillCard(category: SkillCategory, index: usize) -> impl IntoView {
    let color = category.color;
    view! {
        <div
            class=format!(
                "bg-gray-800/50 p-6 rounded-xl backdrop-blur-sm border border-gray-700 hover:border-{color}-500 transition-all duration-500 transform hover:scale-105 hover:rotate-1 animate-fade-in-up",
            )
            style=format!("animation-delay: {}s", index as f64 * 0.2)
        >
            <div class="flex items-center mb-4">
                <span class=format!("text-{color}-400 mr-3 text-2xl animate-pulse")>{category.icon}</span>
                <h3 class="text-xl font-semibold">{category.title}</h3>
            </div>
            <div class="flex flex-wrap gap-2">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <span
                                class=format!(
                                    "bg-{color}-500/20 text-{color}-300 px-3 py-1 rounded-full text-sm transition-all duration-300 hover:scale-110 animate-fade-in",
                                )
                                style=format!("animation-delay: {}s", i as f64 * 0.1)
                            >
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Skills(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <SectionHeading visible title="Skills & Technologies">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(index, category)| view! { <SkillCard category=*category index /> })
                    .collect_view()}
            </div>
        </SectionHeading>
    }
}
