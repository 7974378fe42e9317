//! Test helpers and builder patterns for orchestrator tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate and improve maintainability.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use catalog::{CatalogClient, CatalogError, CatalogResult, MockCatalogClient};
use orchestrator::{ExplorerConfig, SearchOrchestrator};
use shared::{Category, Recipe, RecipeId, RecipeSummary};

use super::fixtures::TestFixtures;

/// Builder pattern for creating test orchestrators over a mocked catalog
pub struct OrchestratorBuilder {
    catalog: MockCatalogClient,
    featured_dishes: Vec<String>,
}

impl OrchestratorBuilder {
    /// Create a new builder with no featured dishes and an empty mock
    pub fn new() -> Self {
        Self {
            catalog: MockCatalogClient::new(),
            featured_dishes: Vec::new(),
        }
    }

    /// Configure the catalog mock with a setup function
    pub fn with_catalog<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockCatalogClient),
    {
        setup(&mut self.catalog);
        self
    }

    pub fn with_featured_dishes(mut self, dishes: &[&str]) -> Self {
        self.featured_dishes = dishes.iter().map(|dish| dish.to_string()).collect();
        self
    }

    /// Mock returns the standard Seafood/Dessert categories
    pub fn with_standard_categories(self) -> Self {
        self.with_catalog(|catalog| {
            catalog
                .expect_fetch_categories()
                .returning(|| Ok(TestFixtures::categories()));
        })
    }

    /// Mock serves the three-dessert listing and lookups for it
    pub fn with_dessert_category(self) -> Self {
        self.with_catalog(|catalog| {
            catalog
                .expect_filter_by_category()
                .withf(|category| category == "Dessert")
                .returning(|_| Ok(TestFixtures::dessert_listing()));
            catalog.expect_lookup_by_id().returning(|id| {
                TestFixtures::dessert_by_id(id).ok_or_else(|| CatalogError::not_found(format!("recipe {id}")))
            });
        })
    }

    pub fn build(self) -> SearchOrchestrator<MockCatalogClient> {
        let config = ExplorerConfig::default().with_featured_dishes(self.featured_dishes);
        SearchOrchestrator::new(Arc::new(self.catalog), &config)
    }
}

/// Common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Build and initialize an orchestrator in one go
    pub async fn initialized(builder: OrchestratorBuilder) -> SearchOrchestrator<MockCatalogClient> {
        let orchestrator = builder.build();
        orchestrator.initialize().await;
        orchestrator
    }

    pub fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|recipe| recipe.name.as_str()).collect()
    }

    /// Drive a scripted console session and return everything it printed
    pub async fn run_script(orchestrator: &SearchOrchestrator<MockCatalogClient>, script: &str) -> String {
        let mut output = Vec::new();
        orchestrator::presentation::run_console(orchestrator, script.as_bytes(), &mut output)
            .await
            .expect("console session should not fail on in-memory io");
        String::from_utf8(output).expect("console output is utf-8")
    }
}

/// Catalog double whose name search for one term blocks until released.
///
/// Lets a test hold an older query in flight while a newer one completes.
/// Lookups of the optional slow recipe are gated the same way.
pub struct GatedCatalog {
    slow_term: String,
    results: HashMap<String, Vec<Recipe>>,
    slow_recipe: Option<Recipe>,
    /// Signalled when the slow search has started
    pub started: Notify,
    /// Released by the test to let the slow search finish
    pub release: Notify,
}

impl GatedCatalog {
    pub fn new(slow_term: &str, results: HashMap<String, Vec<Recipe>>) -> Self {
        Self {
            slow_term: slow_term.to_string(),
            results,
            slow_recipe: None,
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Serve `recipe` from `lookup_by_id`, blocking until released
    pub fn with_slow_lookup(mut self, recipe: Recipe) -> Self {
        self.slow_recipe = Some(recipe);
        self
    }
}

#[async_trait]
impl CatalogClient for GatedCatalog {
    async fn fetch_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(Vec::new())
    }

    async fn search_by_name(&self, term: &str) -> CatalogResult<Vec<Recipe>> {
        if term == self.slow_term {
            self.started.notify_one();
            self.release.notified().await;
        }
        Ok(self.results.get(term).cloned().unwrap_or_default())
    }

    async fn lookup_by_id(&self, id: &RecipeId) -> CatalogResult<Recipe> {
        match &self.slow_recipe {
            Some(recipe) if &recipe.id == id => {
                self.started.notify_one();
                self.release.notified().await;
                Ok(recipe.clone())
            }
            _ => Err(CatalogError::not_found(format!("recipe {id}"))),
        }
    }

    async fn filter_by_category(&self, _category: &str) -> CatalogResult<Vec<RecipeSummary>> {
        Ok(Vec::new())
    }
}
