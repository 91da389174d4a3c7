use leptos::{html, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{
    use_intersection_observer_with_options, use_interval_fn, use_mouse, use_window_size,
    UseIntersectionObserverOptions, UseMouseReturn, UseWindowSizeReturn,
};

use super::about::About;
use super::contact::Contact;
use super::dom::scroll_to_section;
use super::experience::Experience;
use super::footer::Footer;
use super::hero::Hero;
use super::nav::NavBar;
use super::projects::Projects;
use super::skills::Skills;
use crate::config::hero::{PARTICLE_COUNT, PARTICLE_TICK_MS};
use crate::config::sections::INTERSECTION_THRESHOLD;
use crate::hero::ParticleField;
use crate::sections::{SectionId, SectionVisibility};

/// A page section that reports when it scrolls in and out of view.
#[component]
fn PageSection(
    section: SectionId,
    visibility: RwSignal<SectionVisibility>,
    #[prop(default = "py-20 px-4")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();

    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                visibility.maybe_update(|v| v.observe(section, entry.is_intersecting()));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![INTERSECTION_THRESHOLD]),
    );

    view! {
        <section node_ref=node id=section.id() class=class>
            {children()}
        </section>
    }
}

#[component]
fn Particles() -> impl IntoView {
    let UseWindowSizeReturn { width, height } = use_window_size();
    let field = RwSignal::new(ParticleField::default());

    Effect::watch(
        move || (width.get(), height.get()),
        move |(width, height), _, _| {
            // the server reports an unbounded window
            if width.is_finite() && height.is_finite() {
                field.set(ParticleField::generate(
                    PARTICLE_COUNT,
                    *width,
                    *height,
                    &mut js_sys::Math::random,
                ));
            }
        },
        true,
    );

    use_interval_fn(
        move || {
            let (width, height) = (width.get_untracked(), height.get_untracked());
            field.update(|field| field.advance(width, height));
        },
        PARTICLE_TICK_MS,
    );

    view! {
        <div class="fixed inset-0 pointer-events-none z-0">
            {move || {
                field
                    .with(|field| {
                        field
                            .particles()
                            .iter()
                            .map(|p| {
                                view! {
                                    <div
                                        class="absolute w-1 h-1 bg-blue-400 rounded-full"
                                        style=p.style()
                                    ></div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}

/// Soft glow trailing the pointer.
#[component]
fn MouseFollower() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();

    view! {
        <div
            class="fixed w-6 h-6 bg-blue-500/20 rounded-full pointer-events-none z-50 transition-all duration-300 ease-out"
            style=move || format!("left: {}px; top: {}px; transform: scale(1.5);", x.get() - 12.0, y.get() - 12.0)
        ></div>
    }
}

/// Scrolls to the section named in the URL fragment, e.g. `/#projects`.
fn scroll_to_fragment() {
    let location = use_location();
    Effect::watch(
        move || location.hash.get(),
        |hash, _, _| {
            let id = hash.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            match id.parse::<SectionId>() {
                Ok(section) => scroll_to_section(section),
                Err(err) => log::debug!("ignoring fragment: {err}"),
            }
        },
        true,
    );
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let visibility = RwSignal::new(SectionVisibility::default());
    let active = Memo::new(move |_| visibility.with(|v| v.active()));
    let visible =
        move |section: SectionId| Signal::derive(move || visibility.with(|v| v.is_visible(section)));

    scroll_to_fragment();

    view! {
        <div class="min-h-screen bg-gray-900 text-white overflow-x-hidden">
            <Particles />
            <MouseFollower />
            <NavBar active />
            <PageSection
                section=SectionId::Home
                visibility
                class="min-h-screen flex items-center justify-center relative overflow-hidden"
            >
                <Hero visible=visible(SectionId::Home) />
            </PageSection>
            <PageSection section=SectionId::About visibility>
                <About visible=visible(SectionId::About) />
            </PageSection>
            <PageSection section=SectionId::Skills visibility class="py-20 px-4 bg-gray-800/30">
                <Skills visible=visible(SectionId::Skills) />
            </PageSection>
            <PageSection section=SectionId::Projects visibility>
                <Projects visible=visible(SectionId::Projects) />
            </PageSection>
            <PageSection section=SectionId::Experience visibility class="py-20 px-4 bg-gray-800/30">
                <Experience visible=visible(SectionId::Experience) />
            </PageSection>
            <PageSection section=SectionId::Contact visibility>
                <Contact visible=visible(SectionId::Contact) />
            </PageSection>
            <Footer />
        </div>
    }
}
