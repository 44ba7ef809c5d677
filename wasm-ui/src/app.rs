//! Main application component.
//!
//! One component serves both pages; the hosting page picks the
//! [`PageMode`]. The catalog is fetched once on mount and kept as an
//! immutable snapshot in the reducer state.

use std::rc::Rc;

use recipe_catalog::{
    Catalog, DetailView, ListFilter, LoadStatus, PageMode, PageQuery, Route, SiteConfig,
    active_nav_index,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser;
use crate::components::{Footer, Hero, NavBar, RecipeDetail, RecipeGrid, SearchBox};
use crate::loader::load_catalog;

/// Page state. The load step is the only writer of `catalog`.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub status: LoadStatus,
    pub catalog: Rc<Catalog>,
    /// Filter shaping the grid; `None` until one is applied.
    pub filter: Option<ListFilter>,
    /// Category whose nav button is highlighted.
    pub active_category: Option<String>,
    /// Current search box text.
    pub search_text: String,
    /// Bumped whenever the recipes section should be scrolled into view
    /// after the next render.
    pub scroll_request: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            status: LoadStatus::Loading,
            catalog: Rc::new(Catalog::empty()),
            filter: None,
            active_category: None,
            search_text: String::new(),
            scroll_request: 0,
        }
    }
}

/// State transitions.
pub enum Action {
    /// Catalog arrived; apply the URL category, if any.
    Loaded {
        catalog: Catalog,
        initial_category: Option<String>,
    },
    /// Catalog could not be loaded.
    LoadFailed,
    /// Nav button or URL category.
    SelectCategory(String),
    /// Search box input.
    Search(String),
    /// Hero call to action: show everything.
    ShowAll,
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Action::Loaded {
                catalog,
                initial_category,
            } => {
                next.status = LoadStatus::Ready;
                next.catalog = Rc::new(catalog);
                // A fresh catalog replaces whatever was applied while loading.
                next.filter = None;
                if let Some(category) = initial_category {
                    next.select_category(category);
                }
            }
            Action::LoadFailed => {
                next.status = LoadStatus::Failed;
                next.filter = None;
            }
            Action::SelectCategory(category) => next.select_category(category),
            Action::Search(text) => {
                next.filter = Some(ListFilter::Search(text.clone()));
                next.search_text = text;
            }
            Action::ShowAll => {
                next.filter = Some(ListFilter::All);
                next.scroll_request += 1;
            }
        }
        Rc::new(next)
    }
}

impl AppState {
    fn select_category(&mut self, category: String) {
        self.filter = Some(ListFilter::Category(category.clone()));
        self.active_category = Some(category);
        self.scroll_request += 1;
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub mode: PageMode,
}

/// Main application component.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let mode = props.mode;
    let state = use_reducer(AppState::default);
    let config = use_memo((), |_| SiteConfig::default());
    let query = use_memo((), |_| browser::page_query());

    // Single fetch on mount.
    {
        let state = state.clone();
        let config = config.clone();
        let query = query.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_catalog(&config.data_path).await {
                    Some(catalog) => state.dispatch(Action::Loaded {
                        catalog,
                        initial_category: initial_category(mode, &query),
                    }),
                    None => state.dispatch(Action::LoadFailed),
                }
            });
            || ()
        });
    }

    // Scroll once the new grid has been committed to the DOM.
    {
        let anchor = config.recipes_anchor.clone();
        use_effect_with(state.scroll_request, move |request| {
            if *request > 0 {
                browser::scroll_to(&anchor);
            }
            || ()
        });
    }

    // Page title follows the detail view.
    {
        let title = match mode {
            PageMode::Detail => {
                DetailView::build(state.status, &state.catalog, query.id.as_deref())
                    .page_title(&config)
            }
            PageMode::List => None,
        };
        use_effect_with(title, |title| {
            if let Some(title) = title {
                browser::set_title(title);
            }
            || ()
        });
    }

    let on_nav_select = {
        let state = state.clone();
        let config = config.clone();
        Callback::from(move |category: String| match mode {
            PageMode::List => state.dispatch(Action::SelectCategory(category)),
            PageMode::Detail => {
                browser::navigate(&browser::href(&Route::ListCategory { category }, &config))
            }
        })
    };

    let on_search = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(Action::Search(text)))
    };

    let on_explore = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::ShowAll))
    };

    let active = state
        .active_category
        .as_deref()
        .and_then(|category| active_nav_index(config.nav_categories.as_slice(), category));

    html! {
        <div class="app">
            <header class="header">
                <NavBar
                    site_name={config.site_name.clone()}
                    home_href={browser::href(&Route::List, &config)}
                    labels={config.nav_categories.clone()}
                    active={active}
                    on_select={on_nav_select}
                />
            </header>

            <main class="main">
                { match mode {
                    PageMode::List => html! {
                        <>
                            <Hero on_explore={on_explore} />
                            <section class="recipes" id={config.recipes_anchor.clone()}>
                                <SearchBox value={state.search_text.clone()} on_change={on_search} />
                                <RecipeGrid
                                    status={state.status}
                                    catalog={state.catalog.clone()}
                                    filter={state.filter.clone()}
                                    config={config.clone()}
                                />
                            </section>
                        </>
                    },
                    PageMode::Detail => html! {
                        <RecipeDetail
                            status={state.status}
                            catalog={state.catalog.clone()}
                            id={query.id.clone()}
                            config={config.clone()}
                        />
                    },
                }}
            </main>

            <Footer />
        </div>
    }
}

/// URL category to apply once the catalog is in. Only the list page reads it.
fn initial_category(mode: PageMode, query: &PageQuery) -> Option<String> {
    match mode {
        PageMode::List => query.category.clone(),
        PageMode::Detail => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_catalog::{GridView, Recipe};

    fn sample() -> Catalog {
        let recipe = |id: &str, title: &str, category: &str| Recipe {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            cooking_time: String::new(),
            difficulty: String::new(),
            servings: String::new(),
            ingredients: vec![],
            instructions: vec![],
            tips: None,
        };
        Catalog::new(vec![
            recipe("1", "Vegan Chili", "Mains"),
            recipe("2", "Banana Bread", "Desserts"),
        ])
    }

    fn reduce(state: AppState, action: Action) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn grid_ids(state: &AppState) -> Vec<String> {
        match GridView::build(state.status, &state.catalog, state.filter.as_ref()) {
            GridView::Cards(recipes) => recipes.iter().map(|r| r.id.clone()).collect(),
            _ => vec![],
        }
    }

    #[test]
    fn test_loaded_without_category_shows_all() {
        let state = reduce(
            AppState::default(),
            Action::Loaded {
                catalog: sample(),
                initial_category: None,
            },
        );
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(grid_ids(&state), vec!["1", "2"]);
        assert_eq!(state.scroll_request, 0);
    }

    #[test]
    fn test_loaded_with_url_category_filters_and_scrolls() {
        let state = reduce(
            AppState::default(),
            Action::Loaded {
                catalog: sample(),
                initial_category: Some("desserts".to_string()),
            },
        );
        assert_eq!(grid_ids(&state), vec!["2"]);
        assert_eq!(state.active_category.as_deref(), Some("desserts"));
        assert_eq!(state.scroll_request, 1);
    }

    #[test]
    fn test_search_before_load_is_replaced_on_load() {
        let state = reduce(AppState::default(), Action::Search("chili".to_string()));
        assert_eq!(
            GridView::build(state.status, &state.catalog, state.filter.as_ref()),
            GridView::NoResults
        );
        let state = reduce(
            state,
            Action::Loaded {
                catalog: sample(),
                initial_category: None,
            },
        );
        assert_eq!(grid_ids(&state), vec!["1", "2"]);
    }

    #[test]
    fn test_search_replaces_category() {
        let state = reduce(
            AppState::default(),
            Action::Loaded {
                catalog: sample(),
                initial_category: None,
            },
        );
        let state = reduce(state, Action::SelectCategory("Mains".to_string()));
        let state = reduce(state, Action::Search("bread".to_string()));
        // Not composed with the Mains category.
        assert_eq!(grid_ids(&state), vec!["2"]);
        assert_eq!(state.search_text, "bread");
    }

    #[test]
    fn test_show_all_resets_and_scrolls() {
        let state = reduce(
            AppState::default(),
            Action::Loaded {
                catalog: sample(),
                initial_category: Some("Mains".to_string()),
            },
        );
        let state = reduce(state, Action::ShowAll);
        assert_eq!(grid_ids(&state), vec!["1", "2"]);
        assert_eq!(state.scroll_request, 2);
    }

    #[test]
    fn test_load_failed_shows_notice() {
        let state = reduce(AppState::default(), Action::LoadFailed);
        assert_eq!(
            GridView::build(state.status, &state.catalog, state.filter.as_ref()),
            GridView::LoadFailed
        );
    }

    #[test]
    fn test_initial_category_list_only() {
        let query = PageQuery {
            id: Some("1".to_string()),
            category: Some("Mains".to_string()),
        };
        assert_eq!(initial_category(PageMode::List, &query).as_deref(), Some("Mains"));
        assert_eq!(initial_category(PageMode::Detail, &query), None);
    }
}
