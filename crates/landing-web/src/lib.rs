//! 100Networks Landing Page
//!
//! Leptos-based WASM frontend. Content blocks fade in as they scroll into
//! view; the skills orbit spins six icons around the brand badge.

mod app;
mod components;
mod hooks;
mod pages;
mod theme;

pub use app::App;
pub use components::{AnimateIn, SkillsOrbit};
pub use hooks::use_in_view;
pub use theme::{use_theme, Theme};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
