//! Search session state
//!
//! Pure state management for the browsing session: current query, category
//! filter, result set, loading flag and detail pointer. Every query is
//! tagged with a ticket so a slow, superseded response cannot overwrite a
//! newer one.

use serde::Serialize;
use shared::{Category, Recipe, RecipeId};

use catalog::{CatalogError, CatalogResult};
use crate::core::recent::RecentSearches;

/// Sequence number identifying one submitted query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// How the last applied query ended.
///
/// The result set is empty in both `NoMatches` and `Failed`; this keeps the
/// difference visible to callers that care.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryOutcome {
    Matches(usize),
    NoMatches,
    Failed { reason: String },
}

impl QueryOutcome {
    fn from_result(result: &CatalogResult<Vec<Recipe>>) -> Self {
        match result {
            Ok(recipes) if recipes.is_empty() => QueryOutcome::NoMatches,
            Ok(recipes) => QueryOutcome::Matches(recipes.len()),
            Err(CatalogError::NotFound { .. }) => QueryOutcome::NoMatches,
            Err(err) => QueryOutcome::Failed { reason: err.to_string() },
        }
    }
}

/// Read-only copy of the session handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub query: String,
    pub selected_category: Option<String>,
    pub results: Vec<Recipe>,
    pub loading: bool,
    pub last_outcome: Option<QueryOutcome>,
    pub selected_recipe: Option<Recipe>,
    pub categories: Vec<Category>,
    pub featured: Vec<Recipe>,
    pub recent_searches: Vec<String>,
}

impl SessionSnapshot {
    /// Nothing searched and nothing shown: the featured recipes view
    pub fn is_home(&self) -> bool {
        self.query.is_empty() && self.results.is_empty()
    }

    /// A finished query that produced no recipes
    pub fn is_empty_result(&self) -> bool {
        !self.loading && !self.query.is_empty() && self.results.is_empty()
    }
}

/// Core session state; only the orchestrator writes to it
#[derive(Debug, Default)]
pub struct SessionState {
    query: String,
    selected_category: Option<String>,
    results: Vec<Recipe>,
    loading: bool,
    last_outcome: Option<QueryOutcome>,
    selected_recipe: Option<Recipe>,
    categories: Vec<Category>,
    featured: Vec<Recipe>,
    recent: RecentSearches,
    latest_ticket: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a query for an already-trimmed, non-blank term.
    ///
    /// Records the term as a recent search and marks the session loading.
    pub fn begin_query(&mut self, term: &str) -> QueryTicket {
        self.latest_ticket += 1;
        self.query = term.to_string();
        self.loading = true;
        self.recent = self.recent.record(term);
        QueryTicket(self.latest_ticket)
    }

    /// Apply a finished query if it is still the latest one issued.
    ///
    /// Failures collapse to an empty result set. Returns `false` and leaves
    /// the state untouched when the ticket has been superseded.
    pub fn complete_query(&mut self, ticket: QueryTicket, result: CatalogResult<Vec<Recipe>>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.last_outcome = Some(QueryOutcome::from_result(&result));
        self.results = result.unwrap_or_default();
        self.loading = false;
        true
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Ticket of the latest query or reset, without issuing a new one
    pub fn current_ticket(&self) -> QueryTicket {
        QueryTicket(self.latest_ticket)
    }

    /// Back to the home view; any in-flight query is superseded
    pub fn reset_home(&mut self) {
        self.latest_ticket += 1;
        self.query.clear();
        self.results.clear();
        self.loading = false;
        self.last_outcome = None;
        self.selected_category = None;
        self.selected_recipe = None;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn set_featured(&mut self, featured: Vec<Recipe>) {
        self.featured = featured;
    }

    pub fn open_detail(&mut self, recipe: Recipe) {
        self.selected_recipe = Some(recipe);
    }

    pub fn close_detail(&mut self) {
        self.selected_recipe = None;
    }

    /// Find a recipe already on screen, in results or featured
    pub fn find_loaded(&self, id: &RecipeId) -> Option<&Recipe> {
        self.results
            .iter()
            .chain(self.featured.iter())
            .chain(self.selected_recipe.iter())
            .find(|recipe| &recipe.id == id)
    }

    /// Canonical name of a known category, matched case-insensitively
    pub fn resolve_category(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
            .map(|category| category.name.as_str())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_outcome(&self) -> Option<&QueryOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected_recipe.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn featured(&self) -> &[Recipe] {
        &self.featured
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            query: self.query.clone(),
            selected_category: self.selected_category.clone(),
            results: self.results.clone(),
            loading: self.loading,
            last_outcome: self.last_outcome.clone(),
            selected_recipe: self.selected_recipe.clone(),
            categories: self.categories.clone(),
            featured: self.featured.clone(),
            recent_searches: self.recent.terms().to_vec(),
        }
    }
}
