use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::config::OWNER_NAME;

/// Year the site was built, stamped by the build script.
fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|built| built.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-gray-800">
            <div class="max-w-7xl mx-auto text-center text-gray-400 animate-fade-in">
                <p>{format!("© {} {OWNER_NAME}. All rights reserved.", build_year())}</p>
            </div>
        </footer>
    }
}
