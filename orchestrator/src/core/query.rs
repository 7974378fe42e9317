//! Combined name + category query workflow
//!
//! Without a category the catalog's own name search is authoritative. With
//! one, the catalog cannot combine both filters, so the category listing is
//! expanded into full records by concurrent lookups and then narrowed by a
//! case-insensitive name match on this side.

use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use catalog::{CatalogClient, CatalogResult};
use shared::{Recipe, RecipeSummary};

/// True when the recipe name contains `term`, ignoring case
pub fn matches_term(recipe: &Recipe, term: &str) -> bool {
    recipe.name_contains(term)
}

/// Run one query against the catalog
pub async fn run_query<C>(catalog: &C, term: &str, category: Option<&str>) -> CatalogResult<Vec<Recipe>>
where
    C: CatalogClient + ?Sized,
{
    match category {
        None => catalog.search_by_name(term).await,
        Some(category) => search_within_category(catalog, term, category).await,
    }
}

/// Recipes in `category` whose names contain `term`, in category-listing order
pub async fn search_within_category<C>(catalog: &C, term: &str, category: &str) -> CatalogResult<Vec<Recipe>>
where
    C: CatalogClient + ?Sized,
{
    let summaries = catalog.filter_by_category(category).await?;
    debug!(category, listed = summaries.len(), "Expanding category listing");

    let recipes = lookup_all(catalog, &summaries).await?;
    Ok(recipes
        .into_iter()
        .filter(|recipe| matches_term(recipe, term))
        .collect())
}

/// Look up every summary concurrently.
///
/// Results land in the slot of their listing index, so output order follows
/// `summaries` regardless of completion order. The first failure aborts the
/// whole batch; remaining lookups are dropped.
pub async fn lookup_all<C>(catalog: &C, summaries: &[RecipeSummary]) -> CatalogResult<Vec<Recipe>>
where
    C: CatalogClient + ?Sized,
{
    let mut slots: Vec<Option<Recipe>> = summaries.iter().map(|_| None).collect();

    let mut pending: FuturesUnordered<_> = summaries
        .iter()
        .enumerate()
        .map(|(index, summary)| async move { (index, catalog.lookup_by_id(&summary.id).await) })
        .collect();

    while let Some((index, result)) = pending.next().await {
        slots[index] = Some(result?);
    }

    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CatalogError, MockCatalogClient};
    use shared::RecipeId;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: name.to_string(),
            category: "Dessert".to_string(),
            area: String::new(),
            thumbnail: None,
            tags: None,
            instructions: String::new(),
            video_url: None,
            ingredients: Vec::new(),
        }
    }

    fn summary(id: &str, name: &str) -> RecipeSummary {
        RecipeSummary {
            id: RecipeId::new(id),
            name: name.to_string(),
            thumbnail: None,
        }
    }

    #[test]
    fn test_matches_term_case_insensitive_substring() {
        let cake = recipe("1", "Chocolate Gateau Cake");

        assert!(matches_term(&cake, "cake"));
        assert!(matches_term(&cake, "GATEAU"));
        assert!(matches_term(&cake, "late ga"));
        assert!(!matches_term(&cake, "pie"));
    }

    #[tokio::test]
    async fn test_no_category_uses_name_search_verbatim() {
        let mut mock = MockCatalogClient::new();
        mock.expect_search_by_name()
            .withf(|term| term == "cake")
            .times(1)
            .returning(|_| Ok(vec![recipe("1", "Pancakes"), recipe("2", "Unrelated Name")]));
        mock.expect_filter_by_category().never();
        mock.expect_lookup_by_id().never();

        let results = run_query(&mock, "cake", None).await.unwrap();

        // The catalog's matching is trusted as-is
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_category_path_filters_by_name() {
        let mut mock = MockCatalogClient::new();
        mock.expect_filter_by_category()
            .withf(|category| category == "Dessert")
            .times(1)
            .returning(|_| Ok(vec![summary("1", "Carrot Cake"), summary("2", "Apple Pie"), summary("3", "Eton Mess")]));
        mock.expect_lookup_by_id()
            .times(3)
            .returning(|id| {
                let name = match id.as_str() {
                    "1" => "Carrot Cake",
                    "2" => "Apple Pie",
                    _ => "Eton Mess",
                };
                Ok(recipe(id.as_str(), name))
            });
        mock.expect_search_by_name().never();

        let results = run_query(&mock, "CAKE", Some("Dessert")).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Carrot Cake");
    }

    #[tokio::test]
    async fn test_any_lookup_failure_fails_whole_query() {
        let mut mock = MockCatalogClient::new();
        mock.expect_filter_by_category()
            .returning(|_| Ok(vec![summary("1", "Carrot Cake"), summary("2", "Cheesecake")]));
        mock.expect_lookup_by_id().returning(|id| {
            if id.as_str() == "2" {
                Err(CatalogError::unavailable("connection reset"))
            } else {
                Ok(recipe(id.as_str(), "Carrot Cake"))
            }
        });

        let result = run_query(&mock, "cake", Some("Dessert")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_all_keeps_listing_order() {
        let mut mock = MockCatalogClient::new();
        mock.expect_lookup_by_id()
            .returning(|id| Ok(recipe(id.as_str(), &format!("Recipe {id}"))));

        let summaries = vec![summary("30", "c"), summary("10", "a"), summary("20", "b")];
        let recipes = lookup_all(&mock, &summaries).await.unwrap();

        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    /// Lookups that finish after a per-id delay
    struct DelayedLookups {
        delays_ms: Vec<(&'static str, u64)>,
    }

    #[async_trait::async_trait]
    impl CatalogClient for DelayedLookups {
        async fn fetch_categories(&self) -> CatalogResult<Vec<shared::Category>> {
            Ok(Vec::new())
        }

        async fn search_by_name(&self, _term: &str) -> CatalogResult<Vec<Recipe>> {
            Ok(Vec::new())
        }

        async fn lookup_by_id(&self, id: &RecipeId) -> CatalogResult<Recipe> {
            let delay = self
                .delays_ms
                .iter()
                .find(|(known, _)| *known == id.as_str())
                .map(|(_, ms)| *ms)
                .unwrap_or(0);
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
            Ok(recipe(id.as_str(), &format!("Recipe {id}")))
        }

        async fn filter_by_category(&self, _category: &str) -> CatalogResult<Vec<RecipeSummary>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_lookup_all_keeps_listing_order_when_completion_is_reversed() {
        // First listed finishes last, last listed finishes first
        let catalog = DelayedLookups {
            delays_ms: vec![("30", 60), ("10", 30), ("20", 1)],
        };
        let summaries = vec![summary("30", "c"), summary("10", "a"), summary("20", "b")];

        let recipes = lookup_all(&catalog, &summaries).await.unwrap();

        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    #[tokio::test]
    async fn test_empty_category_listing_yields_empty() {
        let mut mock = MockCatalogClient::new();
        mock.expect_filter_by_category().returning(|_| Ok(Vec::new()));
        mock.expect_lookup_by_id().never();

        let results = run_query(&mock, "cake", Some("Goat")).await.unwrap();
        assert!(results.is_empty());
    }
}
