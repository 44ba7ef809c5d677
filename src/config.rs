//! Site-wide constants.

use crate::filter::ALL_RECIPES;

/// Fixed settings shared by the browser UI and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Appended to every page title.
    pub site_name: String,
    /// Catalog location, relative to the page.
    pub data_path: String,
    /// Page hosting the list view.
    pub list_page: String,
    /// Page hosting the detail view.
    pub detail_page: String,
    /// Element id of the recipes section (scroll target and URL fragment).
    pub recipes_anchor: String,
    /// Navigation button labels, in display order.
    pub nav_categories: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "The Vegan Table".to_string(),
            data_path: "data/recipes.json".to_string(),
            list_page: "index.html".to_string(),
            detail_page: "recipe.html".to_string(),
            recipes_anchor: "recipes".to_string(),
            nav_categories: [ALL_RECIPES, "Breakfast", "Mains", "Desserts"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SiteConfig {
    /// `"<title> - <site name>"`.
    pub fn page_title(&self, title: &str) -> String {
        format!("{} - {}", title, self.site_name)
    }
}
