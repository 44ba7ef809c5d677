//! The in-memory recipe catalog.
//!
//! A catalog is built once per page load and never mutated afterwards. Every
//! view (grid, detail, related) is derived from it without copying records.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::recipe::Recipe;

/// Ordered, immutable collection of recipes.
///
/// Ids are expected to be unique. Duplicates are kept as loaded; lookups
/// resolve to the first record with a given id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// A catalog with no recipes, used before loading and after a failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog. Source order is kept.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Parse a JSON array of recipes.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(text)?;
        Ok(Self::new(recipes))
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Exact id lookup. No trimming or case folding.
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Ids that occur more than once, each reported once, in order of
    /// their second occurrence.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.recipes.len());
        let mut duplicates = Vec::new();
        for recipe in &self.recipes {
            let id = recipe.id.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Every recipe except the one with `current_id`, in catalog order.
    ///
    /// Category is deliberately not considered.
    pub fn related(&self, current_id: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.id != current_id).collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::recipe::{IngredientGroup, Recipe};

    pub fn recipe(id: &str, title: &str, category: &str, description: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            image: format!("images/{id}.jpg"),
            cooking_time: "30 mins".to_string(),
            difficulty: "Easy".to_string(),
            servings: "4".to_string(),
            ingredients: vec![IngredientGroup::new("Main", vec!["water".to_string()])],
            instructions: vec!["Cook.".to_string()],
            tips: None,
        }
    }

    /// The two-recipe catalog used across module tests.
    pub fn chili_and_bread() -> Vec<Recipe> {
        vec![
            recipe("1", "Vegan Chili", "Mains", "Hearty and warming."),
            recipe("2", "Banana Bread", "Desserts", "Moist loaf with walnuts."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{chili_and_bread, recipe};
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": "b", "title": "Pancakes", "category": "Breakfast", "description": "",
         "image": "p.jpg", "cookingTime": "20 mins", "difficulty": "Easy",
         "servings": "2", "ingredients": {"Batter": ["flour"]}, "instructions": ["Mix."]},
        {"id": "a", "title": "Lentil Soup", "category": "Mains", "description": "",
         "image": "s.jpg", "cookingTime": "40 mins", "difficulty": "Medium",
         "servings": "4", "ingredients": {}, "instructions": []}
    ]"#;

    #[test]
    fn test_from_json_keeps_source_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let ids: Vec<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = Catalog::from_json(r#"{"id": "1"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let err = Catalog::from_json(r#"[{"id": "1", "title": "x"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_duplicate_id_keeps_every_record() {
        let json = r#"[
            {"id": "1", "title": "First", "category": "Mains", "description": "",
             "image": "", "cookingTime": "", "difficulty": "", "servings": "",
             "instructions": []},
            {"id": "1", "title": "Second", "category": "Mains", "description": "",
             "image": "", "cookingTime": "", "difficulty": "", "servings": "",
             "instructions": []}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        // Lookup resolves to the first record with the id.
        assert_eq!(catalog.find("1").map(|r| r.title.as_str()), Some("First"));
        assert_eq!(catalog.duplicate_ids(), vec!["1"]);
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let catalog = Catalog::new(vec![
            recipe("1", "A", "Mains", ""),
            recipe("2", "B", "Mains", ""),
            recipe("1", "C", "Mains", ""),
            recipe("1", "D", "Mains", ""),
        ]);
        assert_eq!(catalog.duplicate_ids(), vec!["1"]);
        assert!(Catalog::new(chili_and_bread()).duplicate_ids().is_empty());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::empty());
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = Catalog::new(chili_and_bread());
        assert_eq!(catalog.find("1").map(|r| r.title.as_str()), Some("Vegan Chili"));
        assert!(catalog.find("3").is_none());
        assert!(catalog.find(" 1").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_related_excludes_only_current() {
        let mut recipes = chili_and_bread();
        recipes.push(recipe("3", "Chickpea Curry", "Mains", ""));
        let catalog = Catalog::new(recipes);

        let related: Vec<&str> = catalog.related("1").iter().map(|r| r.id.as_str()).collect();
        // Different category ("Desserts") is still included.
        assert_eq!(related, vec!["2", "3"]);
    }

    #[test]
    fn test_related_unknown_id_returns_everything() {
        let catalog = Catalog::new(chili_and_bread());
        assert_eq!(catalog.related("nope").len(), 2);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        match Catalog::from_path(&path) {
            Err(CatalogError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
