#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod gesture;
pub mod hero;
pub mod overlay;
pub mod sections;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // a second init only happens on hot reload
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}
