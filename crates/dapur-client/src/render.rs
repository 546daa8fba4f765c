//! Plain-text views of a kitchen session.

use std::fmt::Write;

use dapur_core::{KeyValueStore, Recipe};

use crate::api::RecipeApi;
use crate::kitchen::Kitchen;

pub const LOADING_MESSAGE: &str = "The tavern chef is cooking...";
pub const FAILURE_MESSAGE: &str = "Failed to generate recipes.";

/// The whole screen: ingredient panel, loading indicator, recipes, favorites.
pub fn render<A: RecipeApi, S: KeyValueStore>(kitchen: &Kitchen<A, S>) -> String {
    let mut out = render_ingredient_panel(kitchen);

    if kitchen.is_loading() {
        out.push('\n');
        out.push_str(LOADING_MESSAGE);
        out.push('\n');
    }

    if !kitchen.recipes().is_empty() {
        out.push('\n');
        out.push_str(&render_recipes(kitchen));
    }

    out.push('\n');
    out.push_str(&render_favorites(kitchen.favorites()));
    out
}

/// Catalog with selection marks, followed by the current selection.
pub fn render_ingredient_panel<A: RecipeApi, S: KeyValueStore>(kitchen: &Kitchen<A, S>) -> String {
    let mut out = String::from("== Choose Your Ingredients ==\n");

    for (i, ingredient) in kitchen.catalog().iter().enumerate() {
        let mark = if kitchen.selection().contains(&ingredient.name) {
            'x'
        } else {
            ' '
        };
        let _ = writeln!(
            out,
            "{:>3}. [{}] {} {}",
            i + 1,
            mark,
            ingredient.icon,
            ingredient.name
        );
    }

    let selected = kitchen.selection();
    if selected.is_empty() {
        out.push_str("Selected: No ingredients selected yet\n");
    } else {
        let _ = writeln!(out, "Selected: {}", selected.as_slice().join(", "));
    }
    out
}

/// Generated recipes, numbered from 1, with favorite marks.
pub fn render_recipes<A: RecipeApi, S: KeyValueStore>(kitchen: &Kitchen<A, S>) -> String {
    let mut out = String::from("== Generated Recipes ==\n");
    for (i, recipe) in kitchen.recipes().iter().enumerate() {
        out.push_str(&render_recipe(i + 1, recipe, kitchen.is_favorite(recipe)));
    }
    out
}

/// A single recipe card.
pub fn render_recipe(number: usize, recipe: &Recipe, favorite: bool) -> String {
    let mut out = String::new();
    let heart = if favorite { "♥" } else { "♡" };

    let _ = writeln!(out, "\n{}. {} {}", number, recipe.title, heart);
    let _ = writeln!(
        out,
        "   Difficulty: {} | Time: {} | Cost: {}",
        recipe.difficulty, recipe.time, recipe.cost
    );

    out.push_str("   Ingredients:\n");
    for item in &recipe.ingredients {
        let _ = writeln!(out, "     - {}", item);
    }

    out.push_str("   Steps:\n");
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "     {}. {}", i + 1, step);
    }

    let _ = writeln!(out, "   Nutrition: {}", recipe.nutrition);
    out
}

pub fn render_favorites(favorites: &[Recipe]) -> String {
    let mut out = String::from("== Favorites ==\n");
    if favorites.is_empty() {
        out.push_str("No favorites yet\n");
        return out;
    }
    for (i, recipe) in favorites.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} ({}, {}, {})",
            i + 1,
            recipe.title,
            recipe.difficulty,
            recipe.time,
            recipe.cost
        );
    }
    out
}
