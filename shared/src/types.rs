//! Core recipe domain types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cards-worth of tags shown next to a recipe name
pub const HEADLINE_TAG_COUNT: usize = 2;

/// Catalog identifier of a single recipe
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One ingredient line: what to use and how much of it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Immutable snapshot of a recipe as the catalog returned it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    pub area: String,
    pub thumbnail: Option<String>,
    /// Comma-separated free text, as stored by the catalog
    pub tags: Option<String>,
    pub instructions: String,
    pub video_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Instruction text split into non-blank steps.
    ///
    /// The catalog separates steps with line breaks, usually `\r\n`.
    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect()
    }

    /// Individual tags, trimmed, blanks dropped
    pub fn tags(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First `count` tags, used on recipe cards
    pub fn headline_tags(&self, count: usize) -> Vec<&str> {
        self.tags().into_iter().take(count).collect()
    }

    /// Case-insensitive substring match on the recipe name
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Recipe category, used purely as a filter key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            thumbnail: None,
        }
    }
}

/// Lightweight listing entry returned when filtering by category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail: Option<String>,
}
