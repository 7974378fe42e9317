//! Search orchestrator
//!
//! The single writer of session state. Presentation code submits user
//! intents here and reads back `SessionSnapshot`s; it never mutates state
//! itself.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use catalog::{CatalogClient, CatalogError};
use shared::{Category, Recipe, RecipeId};

use crate::config::ExplorerConfig;
use crate::core::{run_query, SessionSnapshot, SessionState};
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::state::{create_shared_state, SharedSessionState};

/// What happened to a submitted search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDisposition {
    /// Blank term; nothing was sent and nothing changed
    Ignored,
    /// Result set replaced with `result_count` recipes
    Applied { result_count: usize },
    /// A newer query (or a return home) was issued before this one finished
    Superseded,
}

/// Coordinates catalog queries and owns the session state
pub struct SearchOrchestrator<C>
where
    C: CatalogClient + 'static,
{
    catalog: Arc<C>,
    state: SharedSessionState,
    featured_dishes: Vec<String>,
}

impl<C> SearchOrchestrator<C>
where
    C: CatalogClient + 'static,
{
    /// Create new orchestrator with injected catalog client
    pub fn new(catalog: Arc<C>, config: &ExplorerConfig) -> Self {
        Self {
            catalog,
            state: create_shared_state(SessionState::new()),
            featured_dishes: config.featured_dishes.clone(),
        }
    }

    /// Load categories and featured recipes for the home view.
    ///
    /// Neither failure is fatal: each degrades to an empty list.
    pub async fn initialize(&self) {
        let (categories, featured) = tokio::join!(self.load_categories(), self.load_featured());

        info!(
            categories = categories.len(),
            featured = featured.len(),
            "Explorer initialized"
        );

        let mut state = self.state.write().await;
        state.set_categories(categories);
        state.set_featured(featured);
    }

    async fn load_categories(&self) -> Vec<Category> {
        match self.catalog.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "Could not load categories, continuing without filters");
                Vec::new()
            }
        }
    }

    /// First name-search hit for each featured dish, misses skipped
    async fn load_featured(&self) -> Vec<Recipe> {
        let searches = self
            .featured_dishes
            .iter()
            .map(|dish| self.catalog.search_by_name(dish));

        match try_join_all(searches).await {
            Ok(hits) => hits
                .into_iter()
                .filter_map(|recipes| recipes.into_iter().next())
                .collect(),
            Err(e) => {
                warn!(error = %e, "Could not load featured recipes");
                Vec::new()
            }
        }
    }

    /// Submit a free-text search using the currently selected category.
    ///
    /// Blank terms are ignored before any request. Otherwise the trimmed term
    /// is recorded as a recent search, whatever the outcome.
    pub async fn submit_search(&self, term: &str) -> SearchDisposition {
        let term = term.trim();
        if term.is_empty() {
            debug!("Ignoring blank search");
            return SearchDisposition::Ignored;
        }

        let (ticket, category) = {
            let mut state = self.state.write().await;
            let ticket = state.begin_query(term);
            (ticket, state.selected_category().map(str::to_string))
        };

        info!(
            term,
            category = category.as_deref().unwrap_or("all"),
            sequence = ticket.sequence(),
            "Searching catalog"
        );

        let result = run_query(self.catalog.as_ref(), term, category.as_deref()).await;
        if let Err(e) = &result {
            warn!(term, error = %e, "Search failed, showing no results");
        }
        let result_count = result.as_ref().map(Vec::len).unwrap_or(0);

        let mut state = self.state.write().await;
        if state.complete_query(ticket, result) {
            SearchDisposition::Applied { result_count }
        } else {
            debug!(term, sequence = ticket.sequence(), "Discarding superseded search response");
            SearchDisposition::Superseded
        }
    }

    /// Re-run the recent search at zero-based `index`
    pub async fn rerun_recent(&self, index: usize) -> OrchestratorResult<SearchDisposition> {
        let term = {
            let state = self.state.read().await;
            state.recent().get(index).map(str::to_string)
        };

        match term {
            Some(term) => Ok(self.submit_search(&term).await),
            None => Err(OrchestratorError::InvalidSelection { position: index + 1 }),
        }
    }

    /// Set or clear the category filter. Takes effect on the next search.
    ///
    /// Names are matched case-insensitively against the loaded categories.
    /// When no categories could be loaded the name is taken as given.
    pub async fn select_category(&self, category: Option<&str>) -> OrchestratorResult<()> {
        let mut state = self.state.write().await;

        let resolved = match category.map(str::trim).filter(|name| !name.is_empty()) {
            None => None,
            Some(name) if state.categories().is_empty() => Some(name.to_string()),
            Some(name) => Some(
                state
                    .resolve_category(name)
                    .map(str::to_string)
                    .ok_or_else(|| OrchestratorError::UnknownCategory { name: name.to_string() })?,
            ),
        };

        debug!(category = resolved.as_deref().unwrap_or("all"), "Category selected");
        state.set_category(resolved);
        Ok(())
    }

    /// Open the detail view for a recipe.
    ///
    /// Recipes already on screen are used directly; anything else is fetched
    /// by identifier. If the session moved on (new search or return home)
    /// while the lookup was in flight, the recipe is returned but the detail
    /// view stays closed.
    pub async fn open_recipe(&self, id: &RecipeId) -> OrchestratorResult<Recipe> {
        let (loaded, ticket) = {
            let state = self.state.read().await;
            (state.find_loaded(id).cloned(), state.current_ticket())
        };

        let recipe = match loaded {
            Some(recipe) => recipe,
            None => self.catalog.lookup_by_id(id).await.map_err(|e| {
                if !matches!(e, CatalogError::NotFound { .. }) {
                    warn!(%id, error = %e, "Recipe lookup failed");
                }
                OrchestratorError::from(e)
            })?,
        };

        let mut state = self.state.write().await;
        if state.is_current(ticket) {
            state.open_detail(recipe.clone());
        } else {
            debug!(%id, "Session changed during lookup, not opening detail");
        }
        Ok(recipe)
    }

    pub async fn close_detail(&self) {
        self.state.write().await.close_detail();
    }

    /// Clear query, results, filter and detail view; recent searches stay
    pub async fn return_home(&self) {
        self.state.write().await.reset_home();
        debug!("Returned to home view");
    }

    /// Copy of the current session for rendering
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.snapshot()
    }

    pub fn shared_state(&self) -> SharedSessionState {
        Arc::clone(&self.state)
    }
}
