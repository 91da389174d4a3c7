use leptos::{either::EitherOf4, prelude::*};

use super::bottom_sheet::BottomSheet;
use super::carousel::{Carousel, ImageSlide};
use super::SectionHeading;
use crate::carousel::CarouselOptions;
use crate::content::{ProjectDemo, ProjectEntry, PROJECTS};

/// What the preview sheet shows for a project.
#[component]
fn DemoPreview(title: &'static str, demo: ProjectDemo) -> impl IntoView {
    match demo {
        ProjectDemo::Video(src) => EitherOf4::A(view! { <video class="w-full" autoplay=true controls=true src=src></video> }),
        ProjectDemo::Images([only]) => EitherOf4::B(view! {
            <img class="border border-gray-400 m-auto block my-2" src=*only alt=title />
        }),
        ProjectDemo::Images(images) => {
            let slides = images
                .iter()
                .enumerate()
                .map(|(i, src)| {
                    view! {
                        <ImageSlide
                            src=*src
                            alt=format!("{title} screenshot {}", i + 1)
                        />
                    }
                        .into_any()
                })
                .collect::<Vec<_>>();
            EitherOf4::C(view! { <Carousel slides options=CarouselOptions::image_gallery() /> })
        }
        ProjectDemo::None => EitherOf4::D(()),
    }
}

#[component]
fn ProjectCard(project: ProjectEntry, index: usize) -> impl IntoView {
    let show_demo = RwSignal::new(false);

    let preview = project.demo.is_some().then(|| {
        // images speak for themselves, a video gets the footer buttons
        let show_footer = matches!(project.demo, ProjectDemo::Video(_));
        view! {
            <button
                type="button"
                on:click=move |_| show_demo.set(true)
                class="flex items-center text-blue-400 hover:text-blue-300 transition-all duration-300 transform hover:scale-110"
            >
                <span class="mr-2">"↗"</span>
                "Preview"
            </button>
            <BottomSheet
                title=project.title
                open=show_demo
                on_close=move |_| show_demo.set(false)
                show_footer
            >
                <DemoPreview title=project.title demo=project.demo />
            </BottomSheet>
        }
    });

    view! {
        <div
            class="bg-gray-800/50 rounded-xl overflow-hidden backdrop-blur-sm border border-gray-700 hover:border-gray-600 transition-all duration-500 transform hover:scale-105 hover:-rotate-1 animate-slide-in-up group"
            style=format!("animation-delay: {}s", index as f64 * 0.2)
        >
            <div class=format!(
                "h-48 {} flex items-center justify-center relative overflow-hidden",
                project.gradient,
            )>
                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/10 transition-all duration-300"></div>
                <div class="text-white text-2xl font-bold z-10 transform group-hover:scale-110 transition-all duration-300">
                    {project.title}
                </div>
            </div>
            <div class="p-6">
                <div class="flex items-baseline justify-between mb-2">
                    <h3 class="text-xl font-semibold group-hover:text-blue-400 transition-colors duration-300">
                        {project.title}
                    </h3>
                    <span class="text-sm text-gray-400">{project.year}</span>
                </div>
                <p class="text-gray-300 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-gray-700 text-gray-300 px-3 py-1 rounded-full text-sm transition-all duration-300 hover:bg-gray-600 hover:scale-110">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-4">
                    {project
                        .repository
                        .map(|href| {
                            view! {
                                <a
                                    target="_blank"
                                    href=href
                                    class="flex items-center text-blue-400 hover:text-blue-300 transition-all duration-300 transform hover:scale-110"
                                >
                                    <span class="mr-2">"⌥"</span>
                                    "Code"
                                </a>
                            }
                        })}
                    {preview}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <SectionHeading visible title="Featured Projects">
            <div class="grid md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                    .collect_view()}
            </div>
        </SectionHeading>
    }
}
