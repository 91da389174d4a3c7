mod about;
mod bottom_sheet;
mod carousel;
mod contact;
mod dom;
mod experience;
mod footer;
mod hero;
mod modal;
mod nav;
mod overlay;
mod portfolio;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{SITE_DESCRIPTION, SITE_TITLE};
use portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Portfolio />
                </Routes>
            </main>
        </Router>
    }
}

/// Section container with a gradient title that fades in once the section
/// scrolls into view.
#[component]
fn SectionHeading(
    #[prop(into)] visible: Signal<bool>,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "max-w-7xl mx-auto transform transition-all duration-1000 {}",
                if visible.get() { "translate-y-0 opacity-100" } else { "translate-y-10 opacity-0" },
            )
        }>
            <h2 class="text-4xl font-bold text-center mb-16 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                {title}
            </h2>
            {children()}
        </div>
    }
}
