//! Response envelopes returned by the catalog endpoints

use serde::Deserialize;
use shared::wire::{CategoryRecord, MealRecord, MealSummaryRecord};

/// `{"meals": [...]}`; the catalog sends `null` when nothing matched
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    /// Records in response order, treating a null or missing field as empty
    pub fn into_records(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// `{"categories": [...]}`
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    pub categories: Option<Vec<CategoryRecord>>,
}

impl CategoriesEnvelope {
    pub fn into_records(self) -> Vec<CategoryRecord> {
        self.categories.unwrap_or_default()
    }
}

pub type SearchResponse = MealsEnvelope<MealRecord>;
pub type LookupResponse = MealsEnvelope<MealRecord>;
pub type FilterResponse = MealsEnvelope<MealSummaryRecord>;
