//! Feed ordering.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::Recipe;
use crate::types::{RecipeId, ViewState};

/// Arithmetic mean of a recipe's review ratings, or 0 with no reviews.
///
/// Not rounded; rounding is a display concern.
pub fn average_rating(recipe: &Recipe) -> f64 {
    if recipe.reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = recipe.reviews.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(sum) / recipe.reviews.len() as f64
}

/// Recipes to show for `view`, best rated first.
///
/// The favorites view keeps only recipes in `favorite_ids`; every other view
/// shows the whole collection. Ties on rating go to the newer recipe, and the
/// sort is stable so equal recipes keep their collection order.
pub fn visible_recipes<'a>(
    recipes: &'a [Recipe],
    favorite_ids: &BTreeSet<RecipeId>,
    view: ViewState,
) -> Vec<&'a Recipe> {
    let mut visible: Vec<(&Recipe, f64)> = recipes
        .iter()
        .filter(|r| view != ViewState::Favorites || favorite_ids.contains(&r.id))
        .map(|r| (r, average_rating(r)))
        .collect();

    visible.sort_by(|(a, rate_a), (b, rate_b)| compare_ranked(a, *rate_a, b, *rate_b));
    visible.into_iter().map(|(r, _)| r).collect()
}

fn compare_ranked(a: &Recipe, rate_a: f64, b: &Recipe, rate_b: f64) -> Ordering {
    rate_b
        .total_cmp(&rate_a)
        .then_with(|| b.created_at.cmp(&a.created_at))
}
