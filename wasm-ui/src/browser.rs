//! Thin wrappers over the browser APIs the pages need.

use gloo::console;
use gloo::utils::{document, window};
use recipe_catalog::{PageQuery, Route, SiteConfig};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, UrlSearchParams};

/// Percent-encode a query value the way `encodeURIComponent` does.
pub fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// Link target for a route, with values percent-encoded.
pub fn href(route: &Route, config: &SiteConfig) -> String {
    route.href(config, encode)
}

/// Parse a `location.search` string ("?id=3&category=Mains").
pub fn parse_query(search: &str) -> PageQuery {
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return PageQuery::default();
    };
    PageQuery::from_pairs(
        ["id", "category"]
            .into_iter()
            .filter_map(|key| params.get(key).map(|value| (key, value))),
    )
}

/// Query parameters of the current page.
pub fn page_query() -> PageQuery {
    let search = window().location().search().unwrap_or_default();
    parse_query(&search)
}

/// Leave the page for `href`.
pub fn navigate(href: &str) {
    if let Err(e) = window().location().set_href(href) {
        console::error!("navigation failed", e);
    }
}

/// Smoothly scroll the element with `id` into view, if it exists.
pub fn scroll_to(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn set_title(title: &str) {
    document().set_title(title);
}
