//! Web UI for recipe-catalog
//!
//! A Yew front end for The Vegan Table: a filterable recipe grid on
//! `index.html` and a recipe page on `recipe.html`.

mod app;
mod browser;
mod components;
mod loader;

use recipe_catalog::PageMode;
use wasm_bindgen::prelude::*;

pub use browser::{encode, href, parse_query};

/// Mount the list page (card grid, navigation, search).
#[wasm_bindgen]
pub fn run_list_page() {
    start(PageMode::List);
}

/// Mount the detail page for the `id` query parameter.
#[wasm_bindgen]
pub fn run_detail_page() {
    start(PageMode::Detail);
}

fn start(mode: PageMode) {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let props = app::AppProps { mode };
    match gloo::utils::document().get_element_by_id("app") {
        Some(root) => yew::Renderer::<app::App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<app::App>::with_props(props).render(),
    };
}
