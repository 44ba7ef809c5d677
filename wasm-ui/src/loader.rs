//! Catalog fetch.

use gloo::console;
use gloo::net::http::Request;
use recipe_catalog::{Catalog, CatalogError};

/// Fetch and parse the catalog. One attempt, no timeout.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    Catalog::from_json(&text)
}

/// Fetch the catalog, logging the outcome. `None` means the load failed
/// and the page should show its failure notice.
pub async fn load_catalog(url: &str) -> Option<Catalog> {
    match fetch_catalog(url).await {
        Ok(catalog) => {
            console::log!(format!("loaded {} recipes from {url}", catalog.len()));
            for id in catalog.duplicate_ids() {
                console::warn!(format!("duplicate recipe id '{id}' in {url}; links resolve to the first"));
            }
            Some(catalog)
        }
        Err(e) => {
            console::error!(format!("failed to load recipes from {url}: {e}"));
            None
        }
    }
}
