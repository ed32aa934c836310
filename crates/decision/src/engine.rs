use whatsfordinner_shared::{recipe::Recipe, restaurant::Restaurant};

use crate::{
    Answers, FlowResult, MEAL_IDEAS, MealIdea, Mode, RandomSource,
    pool::{meal_pool, recipe_pool, restaurant_pool},
    score::top_tier,
};

/// Read-only view of the user's saved data for one decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot<'a> {
    pub recipes: &'a [Recipe],
    pub restaurants: &'a [Restaurant],
    /// Names of the ingredients currently in the pantry
    pub pantry: &'a [String],
}

/// Builds a fresh suggestion for `mode`. `exclude` is the key of the
/// suggestion being replaced on retry.
pub fn build_result<R: RandomSource>(
    mode: Mode,
    answers: &Answers,
    snapshot: &Snapshot<'_>,
    exclude: Option<&str>,
    rng: &mut R,
) -> FlowResult {
    match mode {
        Mode::Cook => suggest_recipe(snapshot.recipes, answers, exclude, rng),
        Mode::GoOut => suggest_restaurant(snapshot.restaurants, answers, exclude, rng),
        Mode::Generate => suggest_meal(&MEAL_IDEAS, snapshot.pantry, answers, exclude, rng),
    }
}

pub fn suggest_recipe<R: RandomSource>(
    recipes: &[Recipe],
    answers: &Answers,
    exclude: Option<&str>,
    rng: &mut R,
) -> FlowResult {
    let pool = recipe_pool(recipes, answers, exclude);
    tracing::debug!(stage = ?pool.stage, size = pool.items.len(), "Recipe pool built");

    match rng.pick(&pool.items) {
        Some(recipe) => FlowResult::Recipe((*recipe).clone()),
        None => FlowResult::Empty { mode: Mode::Cook },
    }
}

pub fn suggest_restaurant<R: RandomSource>(
    restaurants: &[Restaurant],
    answers: &Answers,
    exclude: Option<&str>,
    rng: &mut R,
) -> FlowResult {
    let pool = restaurant_pool(restaurants, answers, exclude);
    tracing::debug!(stage = ?pool.stage, size = pool.items.len(), "Restaurant pool built");

    match rng.pick(&pool.items) {
        Some(restaurant) => FlowResult::Restaurant((*restaurant).clone()),
        None => FlowResult::Empty { mode: Mode::GoOut },
    }
}

/// Picks among the pooled ideas that best overlap the pantry.
pub fn suggest_meal<R: RandomSource>(
    catalog: &[MealIdea],
    pantry: &[String],
    answers: &Answers,
    exclude: Option<&str>,
    rng: &mut R,
) -> FlowResult {
    let pool = meal_pool(catalog, answers, exclude);
    let tier = top_tier(&pool.items, pantry);
    tracing::debug!(
        stage = ?pool.stage,
        size = pool.items.len(),
        tier = tier.len(),
        "Meal pool built"
    );

    match rng.pick(&tier) {
        Some(idea) => FlowResult::Meal {
            idea: **idea,
            pantry: pantry.to_vec(),
        },
        None => FlowResult::Empty {
            mode: Mode::Generate,
        },
    }
}
