//! HTTP catalog client backed by reqwest

use std::time::Instant;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use shared::wire::normalize_all;
use shared::{Category, Recipe, RecipeId, RecipeSummary};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::traits::CatalogClient;
use crate::types::{CategoriesEnvelope, FilterResponse, LookupResponse, SearchResponse};

const CATEGORIES_ENDPOINT: &str = "categories.php";
const SEARCH_ENDPOINT: &str = "search.php";
const FILTER_ENDPOINT: &str = "filter.php";
const LOOKUP_ENDPOINT: &str = "lookup.php";

/// Real catalog client issuing GET requests against TheMealDB-style endpoints
#[derive(Clone)]
pub struct RealCatalogClient {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl RealCatalogClient {
    /// Create new catalog client with its own connection pool
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::Configuration {
                field: format!("failed to build http client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Issue one GET and decode the JSON body (private helper)
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> CatalogResult<T> {
        let url = self.config.endpoint(endpoint)?;
        let request_start = Instant::now();
        debug!(endpoint, ?query, "Sending catalog request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint, error = %e, "Catalog request failed");
                CatalogError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, %status, "Catalog returned non-success status");
            return Err(CatalogError::unavailable(format!("{endpoint} returned HTTP {status}")));
        }

        let body = response.json::<T>().await.map_err(|e| {
            warn!(endpoint, error = %e, "Catalog response could not be parsed");
            CatalogError::from(e)
        })?;

        debug!(
            endpoint,
            elapsed_ms = request_start.elapsed().as_millis() as u64,
            "Catalog request completed"
        );
        Ok(body)
    }
}

#[async_trait]
impl CatalogClient for RealCatalogClient {
    async fn fetch_categories(&self) -> CatalogResult<Vec<Category>> {
        let envelope: CategoriesEnvelope = self.get_json(CATEGORIES_ENDPOINT, &[]).await?;
        Ok(normalize_all(envelope.into_records())?)
    }

    async fn search_by_name(&self, term: &str) -> CatalogResult<Vec<Recipe>> {
        let envelope: SearchResponse = self.get_json(SEARCH_ENDPOINT, &[("s", term)]).await?;
        Ok(normalize_all(envelope.into_records())?)
    }

    async fn lookup_by_id(&self, id: &RecipeId) -> CatalogResult<Recipe> {
        let envelope: LookupResponse = self.get_json(LOOKUP_ENDPOINT, &[("i", id.as_str())]).await?;
        let record = envelope
            .into_records()
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::not_found(format!("recipe {id}")))?;
        Ok(Recipe::try_from(record)?)
    }

    async fn filter_by_category(&self, category: &str) -> CatalogResult<Vec<RecipeSummary>> {
        let envelope: FilterResponse = self.get_json(FILTER_ENDPOINT, &[("c", category)]).await?;
        Ok(normalize_all(envelope.into_records())?)
    }
}
