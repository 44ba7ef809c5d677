//! UI components for the recipe pages.

use std::rc::Rc;

use recipe_catalog::{
    Catalog, DetailView, GridView, ListFilter, LoadStatus, Recipe, Route, SiteConfig, facts,
};
use yew::prelude::*;

use crate::browser;

fn detail_href(recipe: &Recipe, config: &SiteConfig) -> String {
    browser::href(
        &Route::Detail {
            id: recipe.id.clone(),
        },
        config,
    )
}

fn on_card_click(href: String) -> Callback<MouseEvent> {
    Callback::from(move |_| browser::navigate(&href))
}

/// Notice shown in place of cards or recipe content.
fn notice_html(message: &str) -> Html {
    html! { <p class="notice">{ message }</p> }
}

/// Full-size grid card: image, title, category tag and description.
fn recipe_card(recipe: &Recipe, config: &SiteConfig) -> Html {
    html! {
        <div
            class="recipe-card home-style"
            data-category={recipe.category.clone()}
            onclick={on_card_click(detail_href(recipe, config))}
        >
            <img src={recipe.image.clone()} alt={recipe.title.clone()} />
            <div class="card-content">
                <h3>{ &recipe.title }</h3>
                <span class="tag">{ &recipe.category }</span>
                <p class="meta">{ &recipe.description }</p>
            </div>
        </div>
    }
}

/// Compact card for the related section: image with the title overlaid.
fn related_card(recipe: &Recipe, config: &SiteConfig) -> Html {
    html! {
        <div class="recipe-card home-style" onclick={on_card_click(detail_href(recipe, config))}>
            <img src={recipe.image.clone()} alt={recipe.title.clone()} />
            <div class="card-overlay">
                <h3>{ &recipe.title }</h3>
            </div>
        </div>
    }
}

/// "You might also like" strip under the recipe container.
fn related_section(related: &[&Recipe], config: &SiteConfig) -> Html {
    html! {
        <section class="related">
            <h2 class="section-title">{ "You might also like" }</h2>
            <div class="related-grid" id="relatedRecipes">
                { for related.iter().map(|other| related_card(other, config)) }
            </div>
        </section>
    }
}

/// Category navigation buttons.
#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub site_name: String,
    /// Target of the logo link, the plain list page.
    pub home_href: String,
    pub labels: Vec<String>,
    /// Index of the highlighted label, if any.
    pub active: Option<usize>,
    pub on_select: Callback<String>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="navbar">
            <a class="logo" href={props.home_href.clone()}>{ &props.site_name }</a>
            <div class="nav-links">
                { for props.labels.iter().enumerate().map(|(idx, label)| {
                    let on_click = {
                        let on_select = props.on_select.clone();
                        let label = label.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(label.clone()))
                    };
                    html! {
                        <button
                            class={classes!((props.active == Some(idx)).then_some("active"))}
                            onclick={on_click}
                        >
                            { label }
                        </button>
                    }
                })}
            </div>
        </nav>
    }
}

/// Landing banner with the "Explore Recipes" call to action.
#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_explore: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_click = {
        let on_explore = props.on_explore.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_explore.emit(());
        })
    };

    html! {
        <section class="hero">
            <h1>{ "Plant-based cooking, made simple" }</h1>
            <p>{ "Everyday vegan recipes for breakfast, mains and desserts." }</p>
            <a class="hero-btn" href="#recipes" onclick={on_click}>{ "Explore Recipes" }</a>
        </section>
    }
}

/// Title search box.
#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <div class="search-bar">
            <input
                type="text"
                id="searchInput"
                placeholder="Search recipes..."
                value={props.value.clone()}
                oninput={on_input}
            />
        </div>
    }
}

/// Card grid for the list page.
#[derive(Properties, PartialEq)]
pub struct RecipeGridProps {
    pub status: LoadStatus,
    pub catalog: Rc<Catalog>,
    /// `None` until a filter has been applied.
    pub filter: Option<ListFilter>,
    pub config: Rc<SiteConfig>,
}

#[function_component(RecipeGrid)]
pub fn recipe_grid(props: &RecipeGridProps) -> Html {
    let view = GridView::build(props.status, &props.catalog, props.filter.as_ref());
    let content = match &view {
        GridView::Cards(recipes) => recipes
            .iter()
            .map(|recipe| recipe_card(recipe, &props.config))
            .collect::<Html>(),
        other => other.notice().map(notice_html).unwrap_or_default(),
    };

    html! {
        <div class="recipe-grid" id="recipeGrid">
            { content }
        </div>
    }
}

/// Single recipe with its related recipes.
#[derive(Properties, PartialEq)]
pub struct RecipeDetailProps {
    pub status: LoadStatus,
    pub catalog: Rc<Catalog>,
    pub id: Option<String>,
    pub config: Rc<SiteConfig>,
}

#[function_component(RecipeDetail)]
pub fn recipe_detail(props: &RecipeDetailProps) -> Html {
    let view = DetailView::build(props.status, &props.catalog, props.id.as_deref());

    let DetailView::Found { recipe, related } = &view else {
        let related = match &view {
            DetailView::NotFound { related } => related_section(related, &props.config),
            _ => Html::default(),
        };
        return html! {
            <>
                <div class="recipe-container" id="recipeContainer">
                    if let Some(message) = view.notice() {
                        { notice_html(message) }
                    }
                </div>
                { related }
            </>
        };
    };

    html! {
        <>
            <div class="recipe-container" id="recipeContainer">
                <a class="back-link" href={browser::href(&Route::List, &props.config)}>
                    { "\u{2190} Back to Recipes" }
                </a>

                <img class="recipe-image" src={recipe.image.clone()} alt={recipe.title.clone()} />

                <h1 class="recipe-title">{ &recipe.title }</h1>
                <p class="recipe-description">{ &recipe.description }</p>

                <div class="cooking-info">
                    { for facts(recipe).into_iter().map(|(label, value)| html! {
                        <div class="info-item">
                            <span class="label">{ label }</span>
                            <span class="value">{ value }</span>
                        </div>
                    })}
                </div>

                { for recipe.ingredients.iter().map(|group| html! {
                    <div class="ingredient-group">
                        <h3 class="section-title">{ &group.name }</h3>
                        <div class="ingredients">
                            <ul>
                                { for group.items.iter().map(|item| html! { <li>{ item }</li> }) }
                            </ul>
                        </div>
                    </div>
                })}

                <h3 class="section-title">{ "Instructions" }</h3>
                <div class="instructions">
                    <ol>
                        { for recipe.numbered_steps().map(|(n, step)| html! {
                            <li><span class="step-number">{ n.to_string() }</span>{ step }</li>
                        })}
                    </ol>
                </div>

                if let Some(tips) = recipe.tips() {
                    <div class="tips"><p>{ tips }</p></div>
                }
            </div>

            { related_section(related, &props.config) }
        </>
    }
}

/// Page footer with build stamp.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-row">
                <span>{ "\u{00A9} The Vegan Table" }</span>
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </div>
        </footer>
    }
}
