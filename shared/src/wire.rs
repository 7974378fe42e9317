//! Catalog wire records and their normalization into domain types
//!
//! The catalog speaks TheMealDB's JSON dialect: `str`-prefixed camel-case
//! keys, nullable strings everywhere, and ingredients spread across twenty
//! numbered `strIngredientN` / `strMeasureN` slots.

use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::{SharedError, SharedResult};
use crate::types::{Category, Ingredient, Recipe, RecipeId, RecipeSummary};

/// Number of numbered ingredient slots in a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// Full meal record from search and lookup endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub video: Option<String>,
    /// Everything else, including the numbered ingredient slots
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MealRecord {
    /// Raw slot value; only null, missing or `""` count as absent
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{prefix}{index}"))
            .and_then(|value| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Ingredient slots where both name and measure are present, in slot order.
    ///
    /// A whitespace-only measure still counts as present; the catalog sends
    /// `" "` for ingredients with no quantity. Values are trimmed for display.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|index| {
                let name = self.slot("strIngredient", index)?;
                let measure = self.slot("strMeasure", index)?;
                Some(Ingredient {
                    name: name.trim().to_string(),
                    measure: measure.trim().to_string(),
                })
            })
            .collect()
    }
}

/// Entry from the category-filter endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MealSummaryRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// Entry from the category listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: &str, field: &str) -> Result<String, SharedError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedError::InvalidRecord {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

impl TryFrom<MealRecord> for Recipe {
    type Error = SharedError;

    fn try_from(record: MealRecord) -> Result<Self, Self::Error> {
        let ingredients = record.ingredients();
        Ok(Recipe {
            id: RecipeId::new(required(&record.id, "idMeal")?),
            name: required(&record.name, "strMeal")?,
            category: record.category.unwrap_or_default(),
            area: record.area.unwrap_or_default(),
            thumbnail: non_blank(record.thumbnail),
            tags: non_blank(record.tags),
            instructions: record.instructions.unwrap_or_default(),
            video_url: non_blank(record.video),
            ingredients,
        })
    }
}

impl TryFrom<MealSummaryRecord> for RecipeSummary {
    type Error = SharedError;

    fn try_from(record: MealSummaryRecord) -> Result<Self, Self::Error> {
        Ok(RecipeSummary {
            id: RecipeId::new(required(&record.id, "idMeal")?),
            name: record.name,
            thumbnail: non_blank(record.thumbnail),
        })
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = SharedError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Ok(Category {
            name: required(&record.name, "strCategory")?,
            description: non_blank(record.description),
            thumbnail: non_blank(record.thumbnail),
        })
    }
}

/// Normalize a batch of wire records, failing on the first malformed one
pub fn normalize_all<R, T>(records: Vec<R>) -> SharedResult<Vec<T>>
where
    T: TryFrom<R, Error = SharedError>,
{
    records.into_iter().map(T::try_from).collect()
}
