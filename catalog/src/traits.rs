//! Catalog trait definitions for dependency injection

use async_trait::async_trait;

use shared::{Category, Recipe, RecipeId, RecipeSummary};
use crate::error::CatalogResult;

/// Read-only access to the remote recipe catalog.
///
/// Every call is a single request/response exchange. No retries are
/// performed; failures surface immediately as `CatalogError::Unavailable`.
#[mockall::automock]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// List all categories in catalog order
    async fn fetch_categories(&self) -> CatalogResult<Vec<Category>>;

    /// Recipes whose name matches `term` by the catalog's own rules.
    ///
    /// "No matches" is an empty list, not an error.
    async fn search_by_name(&self, term: &str) -> CatalogResult<Vec<Recipe>>;

    /// Full record for one recipe; `CatalogError::NotFound` when the catalog has none
    async fn lookup_by_id(&self, id: &RecipeId) -> CatalogResult<Recipe>;

    /// Identifiers and names of recipes in `category`, in catalog order
    async fn filter_by_category(&self, category: &str) -> CatalogResult<Vec<RecipeSummary>>;
}
