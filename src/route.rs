//! Page modes, query parameters and navigation targets.
//!
//! Percent-encoding is left to the caller: the browser front end passes
//! `encodeURIComponent`, tests pass the identity function.

use crate::config::SiteConfig;

/// Which view a page hosts. Chosen by the hosting page at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Card grid with navigation, hero and search.
    List,
    /// Single recipe plus related recipes.
    Detail,
}

/// Query parameters read on page load. Never written back to the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Selected recipe on the detail page.
    pub id: Option<String>,
    /// Initial category filter on the list page. Empty values are dropped.
    pub category: Option<String>,
}

impl PageQuery {
    /// Build from already-decoded `(key, value)` pairs. The first occurrence
    /// of a key wins, as with `URLSearchParams.get`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut id = None;
        let mut category: Option<String> = None;
        for (key, value) in pairs {
            match key.as_ref() {
                "id" if id.is_none() => id = Some(value.into()),
                "category" if category.is_none() => category = Some(value.into()),
                _ => {}
            }
        }
        PageQuery {
            id,
            category: category.filter(|c| !c.is_empty()),
        }
    }
}

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Detail page for one recipe.
    Detail { id: String },
    /// List page, optionally pre-filtered, scrolled to the recipes section.
    ListCategory { category: String },
    /// Plain list page.
    List,
}

impl Route {
    pub fn href(&self, config: &SiteConfig, encode: impl Fn(&str) -> String) -> String {
        match self {
            Route::Detail { id } => format!("{}?id={}", config.detail_page, encode(id)),
            Route::ListCategory { category } => format!(
                "{}?category={}#{}",
                config.list_page,
                encode(category),
                config.recipes_anchor
            ),
            Route::List => config.list_page.clone(),
        }
    }
}
