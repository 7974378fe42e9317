//! Plain-text rendering of session snapshots
//!
//! Every function here is pure: snapshot in, text out.

use std::fmt::Write;

use shared::{Category, Recipe, HEADLINE_TAG_COUNT};

use crate::core::SessionSnapshot;

pub const APP_TITLE: &str = "SpiceTrail";
pub const TAGLINE: &str = "Discover delicious recipes from around the world";

pub fn render_header() -> String {
    format!("=== {APP_TITLE} ===\n{TAGLINE}\n")
}

/// One-paragraph card: name, id, category, cuisine and up to two tags
pub fn render_card(recipe: &Recipe) -> String {
    let mut card = format!("* {} [{}]\n  {}", recipe.name, recipe.id, recipe.category);
    if !recipe.area.is_empty() {
        let _ = write!(card, " | {}", recipe.area);
    }

    let tags = recipe.headline_tags(HEADLINE_TAG_COUNT);
    if !tags.is_empty() {
        let _ = write!(card, " | #{}", tags.join(" #"));
    }
    card.push('\n');
    card
}

/// "Found 1 recipe" / "Found 3 recipes"
pub fn render_result_heading(count: usize) -> String {
    let noun = if count == 1 { "recipe" } else { "recipes" };
    format!("Found {count} {noun}\n")
}

pub fn render_empty_state() -> String {
    "No recipes found\nTry searching for something else or change the category filter!\n".to_string()
}

pub fn render_loading(term: &str) -> String {
    format!("Searching for \"{term}\"...\n")
}

/// Category chips with the active one in brackets; "All" means no filter
pub fn render_categories(categories: &[Category], selected: Option<&str>) -> String {
    if categories.is_empty() {
        return match selected {
            Some(name) => format!("Category: [{name}]\n"),
            None => String::new(),
        };
    }

    let chip = |name: &str, active: bool| if active { format!("[{name}]") } else { name.to_string() };

    let chips: Vec<String> = std::iter::once(chip("All", selected.is_none()))
        .chain(categories.iter().map(|category| {
            chip(&category.name, selected == Some(category.name.as_str()))
        }))
        .collect();

    format!("Categories: {}\n", chips.join("  "))
}

/// Numbered so `/recent N` can refer to them
pub fn render_recent(recent: &[String]) -> String {
    if recent.is_empty() {
        return String::new();
    }

    let entries: Vec<String> = recent
        .iter()
        .enumerate()
        .map(|(index, term)| format!("{}) {}", index + 1, term))
        .collect();
    format!("Recent searches: {}\n", entries.join("  "))
}

/// Full recipe: header, ingredients, numbered steps, optional video link
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} ---", recipe.name);

    let mut badges = vec![recipe.category.clone()];
    if !recipe.area.is_empty() {
        badges.push(format!("{} Cuisine", recipe.area));
    }
    if let Some(tags) = &recipe.tags {
        badges.push(tags.clone());
    }
    let _ = writeln!(out, "{}", badges.join(" | "));

    if !recipe.ingredients.is_empty() {
        let _ = writeln!(out, "\nIngredients:");
        for ingredient in &recipe.ingredients {
            if ingredient.measure.is_empty() {
                let _ = writeln!(out, "  - {}", ingredient.name);
            } else {
                let _ = writeln!(out, "  - {} {}", ingredient.measure, ingredient.name);
            }
        }
    }

    let steps = recipe.instruction_steps();
    if !steps.is_empty() {
        let _ = writeln!(out, "\nInstructions:");
        for (index, step) in steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, step);
        }
    }

    if let Some(video) = &recipe.video_url {
        let _ = writeln!(out, "\nWatch on YouTube: {video}");
    }
    out
}

/// The whole screen for a snapshot
pub fn render_view(snapshot: &SessionSnapshot) -> String {
    let mut out = render_header();
    out.push_str(&render_recent(&snapshot.recent_searches));
    out.push_str(&render_categories(&snapshot.categories, snapshot.selected_category.as_deref()));
    out.push('\n');

    if snapshot.is_home() && !snapshot.loading {
        if !snapshot.featured.is_empty() {
            out.push_str("Featured Recipes\n");
            for recipe in &snapshot.featured {
                out.push_str(&render_card(recipe));
            }
        }
    } else if snapshot.loading {
        out.push_str(&render_loading(&snapshot.query));
    } else if snapshot.is_empty_result() {
        out.push_str(&render_empty_state());
    } else {
        out.push_str(&render_result_heading(snapshot.results.len()));
        for recipe in &snapshot.results {
            out.push_str(&render_card(recipe));
        }
    }

    if let Some(recipe) = &snapshot.selected_recipe {
        out.push('\n');
        out.push_str(&render_detail(recipe));
    }
    out
}

pub fn render_help() -> String {
    [
        "Type anything to search recipes by name.",
        "  /category <name>   filter by category (/category or /all clears it)",
        "  /open <id>         show a recipe in detail",
        "  /close             close the detail view",
        "  /recent <n>        run recent search number n again",
        "  /home              back to the featured recipes",
        "  /help              this text",
        "  /quit              leave",
    ]
    .join("\n")
        + "\n"
}
