//! List filters.
//!
//! Two independent predicates narrow the catalog for the grid: a category
//! match and a title search. They are never combined; whichever was applied
//! last decides what the grid shows.

use crate::catalog::Catalog;
use crate::recipe::Recipe;

/// Category label that matches every recipe.
pub const ALL_RECIPES: &str = "All Recipes";

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// True when `category` is the "All Recipes" sentinel, ignoring case and
/// surrounding whitespace.
pub fn is_all_recipes(category: &str) -> bool {
    normalize(category) == normalize(ALL_RECIPES)
}

/// Recipes whose category equals `category` (trimmed, case-insensitive).
///
/// The "All Recipes" sentinel returns every recipe. The recipe's own
/// category is compared as stored, only lowercased.
pub fn by_category<'a>(recipes: &'a [Recipe], category: &str) -> Vec<&'a Recipe> {
    if is_all_recipes(category) {
        return recipes.iter().collect();
    }
    let wanted = normalize(category);
    recipes
        .iter()
        .filter(|r| r.category.to_lowercase() == wanted)
        .collect()
}

/// Recipes whose title contains `query`, ignoring case.
///
/// Description and ingredients are not searched. An empty query matches
/// everything.
pub fn by_title<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}

/// The filter currently shaping the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListFilter {
    /// Unfiltered catalog.
    #[default]
    All,
    /// Category match, see [`by_category`].
    Category(String),
    /// Title search, see [`by_title`].
    Search(String),
}

impl ListFilter {
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Recipe> {
        match self {
            ListFilter::All => catalog.recipes().iter().collect(),
            ListFilter::Category(category) => by_category(catalog.recipes(), category),
            ListFilter::Search(query) => by_title(catalog.recipes(), query),
        }
    }

    /// The category to highlight in the navigation, if this is a category filter.
    pub fn category(&self) -> Option<&str> {
        match self {
            ListFilter::Category(category) => Some(category),
            _ => None,
        }
    }
}

/// Index of the navigation label matching `category` exactly (trimmed,
/// case-insensitive). `None` clears every active marker.
pub fn active_nav_index<S: AsRef<str>>(labels: &[S], category: &str) -> Option<usize> {
    let wanted = normalize(category);
    labels.iter().position(|label| normalize(label.as_ref()) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{chili_and_bread, recipe};

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_category_mains() {
        let recipes = chili_and_bread();
        assert_eq!(ids(&by_category(&recipes, "Mains")), vec!["1"]);
    }

    #[test]
    fn test_category_case_and_whitespace_insensitive() {
        let recipes = chili_and_bread();
        let expected = ids(&by_category(&recipes, "Desserts"));
        assert_eq!(expected, vec!["2"]);
        assert_eq!(ids(&by_category(&recipes, " desserts ")), expected);
        assert_eq!(ids(&by_category(&recipes, "DESSERTS")), expected);
    }

    #[test]
    fn test_category_idempotent() {
        let recipes = chili_and_bread();
        let once: Vec<Recipe> = by_category(&recipes, "Mains").into_iter().cloned().collect();
        let twice = by_category(&once, "Mains");
        assert_eq!(ids(&twice), vec!["1"]);
    }

    #[test]
    fn test_all_recipes_sentinel() {
        let recipes = chili_and_bread();
        for label in ["All Recipes", "all recipes", "  ALL RECIPES "] {
            assert_eq!(ids(&by_category(&recipes, label)), vec!["1", "2"]);
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let recipes = chili_and_bread();
        assert!(by_category(&recipes, "Soups").is_empty());
    }

    #[test]
    fn test_search_title_only() {
        let recipes = chili_and_bread();
        assert_eq!(ids(&by_title(&recipes, "bread")), vec!["2"]);
        // "walnuts" only appears in the banana bread description.
        assert!(by_title(&recipes, "walnuts").is_empty());
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let recipes = chili_and_bread();
        assert_eq!(ids(&by_title(&recipes, "CHIL")), vec!["1"]);
        assert_eq!(ids(&by_title(&recipes, "an")), vec!["1", "2"]);
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let recipes = chili_and_bread();
        assert_eq!(by_title(&recipes, "").len(), 2);
    }

    #[test]
    fn test_search_does_not_trim() {
        let recipes = chili_and_bread();
        assert!(by_title(&recipes, " chili ").is_empty());
    }

    #[test]
    fn test_list_filter_apply_keeps_order() {
        let mut recipes = chili_and_bread();
        recipes.push(recipe("3", "Chickpea Curry", "Mains", ""));
        let catalog = Catalog::new(recipes);

        assert_eq!(ids(&ListFilter::All.apply(&catalog)), vec!["1", "2", "3"]);
        assert_eq!(
            ids(&ListFilter::Category("mains".into()).apply(&catalog)),
            vec!["1", "3"]
        );
        assert_eq!(ids(&ListFilter::Search("curry".into()).apply(&catalog)), vec!["3"]);
    }

    #[test]
    fn test_filters_on_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(ListFilter::Category("Mains".into()).apply(&catalog).is_empty());
        assert!(ListFilter::Search("x".into()).apply(&catalog).is_empty());
    }

    #[test]
    fn test_active_nav_index() {
        let labels = ["All Recipes", "Breakfast", "Mains", "Desserts"];
        assert_eq!(active_nav_index(&labels, " mains"), Some(2));
        assert_eq!(active_nav_index(&labels, "ALL RECIPES"), Some(0));
        assert_eq!(active_nav_index(&labels, "Soups"), None);
        assert_eq!(active_nav_index(&labels, "Main"), None);
    }

    #[test]
    fn test_list_filter_category_accessor() {
        assert_eq!(ListFilter::Category("Mains".into()).category(), Some("Mains"));
        assert_eq!(ListFilter::Search("Mains".into()).category(), None);
        assert_eq!(ListFilter::All.category(), None);
    }
}
