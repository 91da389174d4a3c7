use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::dom::{self, TimerGuard, TimerSlot};
use super::SectionHeading;
use crate::config::sections::COUNTER_DURATION_MS;
use crate::content::{ABOUT, EMAIL, GITHUB_URL, LINKEDIN_URL, YEARS_OF_EXPERIENCE};
use crate::hero::count_up;

fn count_frame(started: DateTime<Utc>, count: RwSignal<u32>, frame: TimerSlot) {
    let duration = Duration::from_millis(COUNTER_DURATION_MS);
    let elapsed = (Utc::now() - started).to_std().unwrap_or_default();
    // try_set hands the value back once the counter is gone
    if count
        .try_set(count_up(YEARS_OF_EXPERIENCE, elapsed, duration))
        .is_some()
    {
        return;
    }
    if elapsed >= duration {
        return;
    }
    match TimerGuard::next_frame(move || {
        dom::timer_fired(frame);
        count_frame(started, count, frame);
    }) {
        Ok(guard) => {
            frame.try_update_value(|slot| *slot = Some(guard));
        }
        Err(err) => {
            log::warn!("{err}, skipping count-up");
            count.set(YEARS_OF_EXPERIENCE);
        }
    }
}

/// Counts from zero to the years of experience the first time it is shown.
#[component]
fn ExperienceCounter(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let count = RwSignal::new(0_u32);
    let frame = dom::timer_slot();
    let started = StoredValue::new(false);

    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible && !started.get_value() {
                started.set_value(true);
                count_frame(Utc::now(), count, frame);
            }
        },
        true,
    );

    view! {
        <span class="text-6xl font-bold text-blue-400 mb-2">{move || count.get()} "+"</span>
    }
}

#[component]
pub fn About(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <SectionHeading visible title="About Me">
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <div class="space-y-6">
                    {ABOUT
                        .iter()
                        .enumerate()
                        .map(|(i, paragraph)| {
                            view! {
                                <div
                                    class="animate-slide-in-left"
                                    style=format!("animation-delay: {}s", i as f64 * 0.2)
                                >
                                    <p class="text-lg text-gray-300 leading-relaxed">{*paragraph}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div
                        class="flex space-x-6 animate-slide-in-left text-blue-400"
                        style="animation-delay: 0.4s"
                    >
                        <a href=GITHUB_URL class="hover:text-blue-300 transition-all duration-300 transform hover:scale-125">
                            "GitHub"
                        </a>
                        <a href=LINKEDIN_URL class="hover:text-blue-300 transition-all duration-300 transform hover:scale-125">
                            "LinkedIn"
                        </a>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="hover:text-blue-300 transition-all duration-300 transform hover:scale-125"
                        >
                            "Email"
                        </a>
                    </div>
                </div>
                <div class="relative animate-slide-in-right">
                    <div class="w-80 h-80 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full mx-auto opacity-20 animate-pulse-slow"></div>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class="text-center">
                            <div class="mb-2">
                                <ExperienceCounter visible />
                            </div>
                            <div class="text-lg text-gray-300">"Years Experience"</div>
                        </div>
                    </div>
                </div>
            </div>
        </SectionHeading>
    }
}
