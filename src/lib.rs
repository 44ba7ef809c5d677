//! # recipe-catalog
//!
//! Model, filters and view models for a small static recipe site.
//!
//! The site is a card grid (list page) and a recipe page (detail page),
//! both fed by one JSON file loaded once per page view. This crate holds
//! everything that does not need a browser, so the same logic drives the
//! Yew front end in `wasm-ui` and the `catalog-run` CLI.
//!
//! ## Example
//!
//! ```
//! use recipe_catalog::{Catalog, GridView, ListFilter, LoadStatus};
//!
//! let json = r#"[
//!   {"id": "1", "title": "Vegan Chili", "category": "Mains",
//!    "description": "", "image": "chili.jpg", "cookingTime": "45 mins",
//!    "difficulty": "Easy", "servings": "4", "instructions": []},
//!   {"id": "2", "title": "Banana Bread", "category": "Desserts",
//!    "description": "", "image": "bread.jpg", "cookingTime": "1 hr",
//!    "difficulty": "Easy", "servings": "8", "instructions": []}
//! ]"#;
//!
//! let catalog = Catalog::from_json(json).unwrap();
//! let filter = ListFilter::Category(" mains ".to_string());
//!
//! match GridView::build(LoadStatus::Ready, &catalog, Some(&filter)) {
//!     GridView::Cards(cards) => assert_eq!(cards[0].id, "1"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod recipe;
pub mod route;
pub mod view;

pub use catalog::Catalog;
pub use config::SiteConfig;
pub use error::CatalogError;
pub use filter::{ALL_RECIPES, ListFilter, active_nav_index, by_category, by_title, is_all_recipes};
pub use recipe::{IngredientGroup, Recipe};
pub use route::{PageMode, PageQuery, Route};
pub use view::{
    DetailView, GridView, LOAD_FAILED_MESSAGE, LoadStatus, NO_RECIPES_MESSAGE, NOT_FOUND_MESSAGE,
    NOT_FOUND_TITLE, facts,
};
