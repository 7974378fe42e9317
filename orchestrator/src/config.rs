//! Explorer configuration

use catalog::config::CatalogConfig;

use crate::error::OrchestratorResult;

/// Dishes shown on the home view, each resolved by name search
pub const FEATURED_DISHES: [&str; 3] = [
    "Tandoori chicken",
    "Pizza Express Margherita",
    "Vegan Chocolate Cake",
];

#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub catalog: CatalogConfig,
    pub featured_dishes: Vec<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            featured_dishes: FEATURED_DISHES.iter().map(|dish| dish.to_string()).collect(),
        }
    }
}

impl ExplorerConfig {
    /// Command line values first; the environment fills only what they leave unset
    pub fn resolve(catalog_url: Option<&str>, timeout_ms: Option<u64>) -> OrchestratorResult<Self> {
        let catalog = CatalogConfig::from_env_with_overrides(catalog_url, timeout_ms)?;

        Ok(Self {
            catalog,
            ..Self::default()
        })
    }

    pub fn with_featured_dishes(mut self, dishes: Vec<String>) -> Self {
        self.featured_dishes = dishes;
        self
    }

    pub fn timeout_ms(&self) -> u64 {
        self.catalog.request_timeout.as_millis() as u64
    }
}
