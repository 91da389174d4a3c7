use chrono::{DateTime, Utc};
use leptos::{either::Either, prelude::*};

use super::dom::{self, touch_x, TimerGuard, TimerSlot};
use crate::carousel::{CarouselEngine, CarouselOptions, TimerDirective};
use crate::gesture::{PointerSession, SwipeTracker};

/// Owns the single autoplay timer of a carousel.
#[derive(Clone, Copy)]
struct Autoplay {
    engine: RwSignal<CarouselEngine>,
    timer: TimerSlot,
}

impl Autoplay {
    fn run(self, f: impl FnOnce(&mut CarouselEngine, DateTime<Utc>) -> TimerDirective) {
        let now = Utc::now();
        if let Some(directive) = self.engine.try_update(|engine| f(engine, now)) {
            self.apply(directive);
        }
    }

    fn apply(self, directive: TimerDirective) {
        match directive {
            TimerDirective::Keep => {}
            TimerDirective::Cancel => {
                self.timer.try_update_value(|slot| *slot = None);
            }
            TimerDirective::Schedule(delay) => {
                match TimerGuard::timeout(delay, move || self.fire()) {
                    Ok(guard) => {
                        self.timer.try_update_value(|slot| *slot = Some(guard));
                    }
                    Err(err) => log::warn!("{err}, autoplay stopped"),
                }
            }
        }
    }

    fn fire(self) {
        dom::timer_fired(self.timer);
        self.run(CarouselEngine::tick);
    }
}

#[component]
pub fn Carousel(
    slides: Vec<AnyView>,
    #[prop(optional)] options: CarouselOptions,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let total = slides.len();
    if total == 0 {
        return Either::Left(view! {
            <div class=format!(
                "relative w-full {} bg-gray-100 rounded-lg flex items-center justify-center {class}",
                options.track_class,
            )>
                <p class="text-gray-500">"No slides available"</p>
            </div>
        });
    }

    let engine = RwSignal::new(CarouselEngine::new(total, &options));
    let autoplay = Autoplay {
        engine,
        timer: dom::timer_slot(),
    };
    let swipe = StoredValue::new(SwipeTracker::new(options.touch_enabled));

    Effect::watch(|| (), move |_, _, _| autoplay.run(CarouselEngine::start), true);

    let on_swipe_end = move || {
        let direction = swipe.try_update_value(|s| s.end()).flatten();
        log::debug!("carousel swipe: {direction:?}");
        if let Some(direction) = direction {
            engine.update(|e| e.swipe(direction));
        }
    };

    let has_navigation = total > 1;
    let arrows = (options.show_arrows && has_navigation).then(|| {
        view! {
            <CarouselArrow
                label="Previous slide"
                glyph="‹"
                side="left-4"
                disabled=Signal::derive(move || !engine.with(|e| e.can_go_previous()))
                on_click=move || engine.update(|e| e.previous())
            />
            <CarouselArrow
                label="Next slide"
                glyph="›"
                side="right-4"
                disabled=Signal::derive(move || !engine.with(|e| e.can_go_next()))
                on_click=move || engine.update(|e| e.next())
            />
        }
    });
    let play_pause = (options.show_play_pause && has_navigation).then(|| {
        view! {
            <button
                type="button"
                class="absolute top-4 right-4 p-2 rounded-full bg-black/50 text-white hover:bg-black/70 transition-colors duration-200"
                aria-label=move || {
                    if engine.with(|e| e.is_playing()) { "Pause slideshow" } else { "Play slideshow" }
                }
                on:click=move |_| autoplay.run(CarouselEngine::toggle_play)
            >
                {move || if engine.with(|e| e.is_playing()) { "⏸" } else { "▶" }}
            </button>
        }
    });
    let dots = (options.show_dots && has_navigation).then(|| {
        view! {
            <div class="flex justify-center mt-4 space-x-2">
                {(0..total)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                aria-label=format!("Go to slide {}", index + 1)
                                class=move || {
                                    if engine.with(|e| e.current() == index) {
                                        "w-3 h-3 rounded-full bg-blue-600 scale-125 transition-all duration-200"
                                    } else {
                                        "w-3 h-3 rounded-full bg-gray-300 hover:bg-gray-400 transition-all duration-200"
                                    }
                                }
                                on:click=move |_| engine.update(|e| e.go_to(index))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    Either::Right(view! {
        <div class=format!("relative w-full {class}")>
            <div
                class=format!("relative overflow-hidden rounded-lg {}", options.track_class)
                on:mouseenter=move |_| autoplay.run(CarouselEngine::hover_enter)
                on:mouseleave=move |_| autoplay.run(CarouselEngine::hover_leave)
                on:touchstart=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        swipe.update_value(|s| s.start(x));
                    }
                }
                on:touchmove=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        swipe.update_value(|s| s.update(x));
                    }
                }
                on:touchend=move |_| on_swipe_end()
            >
                <div
                    class="flex h-full transition-transform duration-500 ease-in-out"
                    style:transform=move || {
                        format!("translateX(-{}%)", engine.with(|e| e.current()) * 100)
                    }
                >
                    {slides
                        .into_iter()
                        .map(|slide| view! { <div class="w-full h-full flex-shrink-0">{slide}</div> })
                        .collect_view()}
                </div>
                {arrows}
                {play_pause}
            </div>
            {dots}
        </div>
    })
}

#[component]
fn CarouselArrow(
    label: &'static str,
    glyph: &'static str,
    side: &'static str,
    disabled: Signal<bool>,
    on_click: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-label=label
            disabled=disabled
            on:click=move |_| on_click()
            class=format!(
                "absolute {side} top-1/2 -translate-y-1/2 w-10 h-10 flex items-center justify-center rounded-full bg-white/80 text-gray-800 text-2xl shadow-lg hover:bg-white transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed",
            )
        >
            {glyph}
        </button>
    }
}

/// A full-size image slide with an optional caption. Without a source it
/// shows a gradient placeholder.
#[component]
pub fn ImageSlide(
    #[prop(optional, into)] src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    let image = match src {
        Some(src) => Either::Left(view! {
            <img src=src alt=alt class="w-full h-full object-contain bg-gray-100" />
        }),
        None => Either::Right(view! {
            <div class="w-full h-full bg-gradient-to-br from-blue-400 to-purple-500 flex items-center justify-center text-white text-xl font-semibold">
                {alt}
            </div>
        }),
    };
    view! {
        <div class="relative w-full h-full">
            {image}
            {caption
                .map(|caption| {
                    view! {
                        <div class="absolute bottom-0 inset-x-0 bg-black/50 text-white text-sm px-4 py-2">
                            {caption}
                        </div>
                    }
                })}
        </div>
    }
}
