//! View models derived from the catalog.
//!
//! Each view decides *what* a container shows (cards, a notice, a recipe);
//! the browser front end turns it into DOM and the CLI into text. A view is
//! always rebuilt in full, never patched.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::filter::ListFilter;
use crate::recipe::Recipe;

/// Shown in the active container when the catalog could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load recipes.";
/// Shown in the grid when a filter or search matches nothing.
pub const NO_RECIPES_MESSAGE: &str = "No recipes found.";
/// Shown on the detail page when the id matches no recipe.
pub const NOT_FOUND_MESSAGE: &str = "Recipe not found.";
/// Page title prefix for the not-found state.
pub const NOT_FOUND_TITLE: &str = "Recipe Not Found";

/// Progress of the single catalog fetch for this page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Content of the recipe grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridView<'a> {
    /// Catalog not loaded yet and nothing applied; the grid stays empty.
    Loading,
    /// Load failed before any filter was applied.
    LoadFailed,
    /// Filter matched nothing.
    NoResults,
    /// One card per recipe, in catalog order.
    Cards(Vec<&'a Recipe>),
}

impl<'a> GridView<'a> {
    /// Derive the grid contents.
    ///
    /// `filter` is `None` until something has explicitly been applied; the
    /// grid then reflects the load status. An applied filter always runs
    /// against the catalog as it is, which is empty while loading.
    pub fn build(status: LoadStatus, catalog: &'a Catalog, filter: Option<&ListFilter>) -> Self {
        let recipes = match (status, filter) {
            (_, Some(filter)) => filter.apply(catalog),
            (LoadStatus::Loading, None) => return GridView::Loading,
            (LoadStatus::Failed, None) => return GridView::LoadFailed,
            (LoadStatus::Ready, None) => ListFilter::All.apply(catalog),
        };
        if recipes.is_empty() {
            GridView::NoResults
        } else {
            GridView::Cards(recipes)
        }
    }

    /// User-facing notice, if the grid shows one instead of cards.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            GridView::LoadFailed => Some(LOAD_FAILED_MESSAGE),
            GridView::NoResults => Some(NO_RECIPES_MESSAGE),
            GridView::Loading | GridView::Cards(_) => None,
        }
    }

    /// Plain-text rendering, one line per card.
    pub fn to_text(&self) -> String {
        match self {
            GridView::Cards(recipes) => recipes
                .iter()
                .map(|r| format!("[{}] {} ({}) - {}\n", r.id, r.title, r.category, r.description))
                .collect(),
            other => other.notice().map(|n| format!("{n}\n")).unwrap_or_default(),
        }
    }
}

/// Content of the detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    LoadFailed,
    /// No recipe with the requested id (or no id at all). The related
    /// section is still filled.
    NotFound {
        /// Every recipe whose id differs from the requested one.
        related: Vec<&'a Recipe>,
    },
    Found {
        recipe: &'a Recipe,
        /// Every other recipe, in catalog order.
        related: Vec<&'a Recipe>,
    },
}

impl<'a> DetailView<'a> {
    pub fn build(status: LoadStatus, catalog: &'a Catalog, id: Option<&str>) -> Self {
        match status {
            LoadStatus::Loading => DetailView::Loading,
            LoadStatus::Failed => DetailView::LoadFailed,
            LoadStatus::Ready => match id.and_then(|id| catalog.find(id)) {
                Some(recipe) => DetailView::Found {
                    recipe,
                    related: catalog.related(&recipe.id),
                },
                None => DetailView::NotFound {
                    related: match id {
                        Some(id) => catalog.related(id),
                        None => catalog.recipes().iter().collect(),
                    },
                },
            },
        }
    }

    /// Recipes for the related section. Empty while loading or after a
    /// failed load.
    pub fn related(&self) -> &[&'a Recipe] {
        match self {
            DetailView::Found { related, .. } | DetailView::NotFound { related } => related,
            DetailView::Loading | DetailView::LoadFailed => &[],
        }
    }

    /// Document title for this view. `None` leaves the static title alone.
    pub fn page_title(&self, config: &SiteConfig) -> Option<String> {
        match self {
            DetailView::Found { recipe, .. } => Some(config.page_title(&recipe.title)),
            DetailView::NotFound { .. } => Some(config.page_title(NOT_FOUND_TITLE)),
            DetailView::Loading | DetailView::LoadFailed => None,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            DetailView::LoadFailed => Some(LOAD_FAILED_MESSAGE),
            DetailView::NotFound { .. } => Some(NOT_FOUND_MESSAGE),
            DetailView::Loading | DetailView::Found { .. } => None,
        }
    }

    /// Plain-text rendering of the detail page and its related titles.
    pub fn to_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        match self {
            DetailView::Found { recipe, .. } => {
                lines.push(recipe.title.clone());
                lines.push(recipe.description.clone());
                lines.push(String::new());
                lines.extend(facts(recipe).map(|(label, value)| format!("{label}: {value}")));
                for group in &recipe.ingredients {
                    lines.push(String::new());
                    lines.push(group.name.clone());
                    lines.extend(group.items.iter().map(|item| format!("  - {item}")));
                }
                lines.push(String::new());
                lines.push("Instructions".to_string());
                lines.extend(
                    recipe
                        .numbered_steps()
                        .map(|(n, step)| format!("  {n}. {step}")),
                );
                if let Some(tips) = recipe.tips() {
                    lines.push(String::new());
                    lines.push(format!("Tips: {tips}"));
                }
            }
            other => lines.extend(other.notice().map(str::to_string)),
        }

        let related = self.related();
        if !related.is_empty() {
            lines.push(String::new());
            lines.push("Related".to_string());
            lines.extend(related.iter().map(|r| format!("  [{}] {}", r.id, r.title)));
        }

        if lines.is_empty() {
            return String::new();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// The three fixed metadata fields shown under the description.
pub fn facts(recipe: &Recipe) -> [(&'static str, &str); 3] {
    [
        ("COOKING TIME", recipe.cooking_time.as_str()),
        ("DIFFICULTY", recipe.difficulty.as_str()),
        ("SERVINGS", recipe.servings.as_str()),
    ]
}
