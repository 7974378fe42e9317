//! Test fixtures and data for orchestrator tests
//!
//! This module provides consistent recipe data used across all test suites.

use shared::{Category, Ingredient, Recipe, RecipeId, RecipeSummary};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const CARROT_CAKE_ID: &'static str = "52897";
    pub const APPLE_PIE_ID: &'static str = "52768";
    pub const ETON_MESS_ID: &'static str = "52791";
    pub const TANDOORI_ID: &'static str = "52806";

    /// A dessert record with the given id and name
    pub fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: name.to_string(),
            category: "Dessert".to_string(),
            area: "British".to_string(),
            thumbnail: Some(format!("https://www.themealdb.com/images/media/meals/{id}.jpg")),
            tags: Some("Cake,Sweet,Baking".to_string()),
            instructions: "Preheat the oven to 180C.\r\nMix everything.\r\nBake for 40 minutes.".to_string(),
            video_url: Some("https://www.youtube.com/watch?v=asjZ4ZQ3kN0".to_string()),
            ingredients: vec![
                Ingredient { name: "Self-raising Flour".to_string(), measure: "200g".to_string() },
                Ingredient { name: "Eggs".to_string(), measure: "3".to_string() },
            ],
        }
    }

    pub fn carrot_cake() -> Recipe {
        Self::recipe(Self::CARROT_CAKE_ID, "Carrot Cake")
    }

    pub fn apple_pie() -> Recipe {
        Self::recipe(Self::APPLE_PIE_ID, "Apple Frangipan Tart")
    }

    pub fn eton_mess() -> Recipe {
        Self::recipe(Self::ETON_MESS_ID, "Eton Mess")
    }

    pub fn tandoori_chicken() -> Recipe {
        let mut recipe = Self::recipe(Self::TANDOORI_ID, "Tandoori chicken");
        recipe.category = "Chicken".to_string();
        recipe.area = "Indian".to_string();
        recipe
    }

    /// Full record for one of the dessert ids
    pub fn dessert_by_id(id: &RecipeId) -> Option<Recipe> {
        [Self::carrot_cake(), Self::apple_pie(), Self::eton_mess()]
            .into_iter()
            .find(|recipe| &recipe.id == id)
    }

    /// The "Dessert" listing: three ids, one of which is a cake
    pub fn dessert_listing() -> Vec<RecipeSummary> {
        [Self::carrot_cake(), Self::apple_pie(), Self::eton_mess()]
            .into_iter()
            .map(|recipe| RecipeSummary {
                id: recipe.id,
                name: recipe.name,
                thumbnail: recipe.thumbnail,
            })
            .collect()
    }

    pub fn categories() -> Vec<Category> {
        vec![Category::named("Seafood"), Category::named("Dessert")]
    }
}
