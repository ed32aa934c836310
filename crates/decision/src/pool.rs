//! Candidate pools per mode, with staged relaxation and retry exclusion.

use std::collections::HashSet;

use whatsfordinner_shared::{recipe::Recipe, restaurant::Restaurant};

use crate::{Answers, MealIdea, QuestionKey, predicate::*};

/// Generation keeps relaxing until at least this many distinct ideas are
/// pooled, or the catalog runs out.
pub const MIN_GENERATION_POOL: usize = 6;

/// Candidates left after filtering, and the relaxation stage that produced
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pool<'a, T, S> {
    pub items: Vec<&'a T>,
    pub stage: S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RecipeStage {
    /// time, cuisine and protein
    Strict,
    /// time and cuisine
    WithoutProtein,
    TimeOnly,
    Unfiltered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RestaurantStage {
    ServiceAndVibe,
    /// The vibe filter matched nothing and was dropped
    ServiceOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GenerationStage {
    Strict,
    WithoutProtein,
    CuisineOnly,
    Catalog,
}

/// Removes the excluded candidate, unless it is the only one left.
fn exclude<'a, T>(items: &mut Vec<&'a T>, key: Option<&str>, key_of: impl Fn(&T) -> &str) {
    let Some(key) = key else {
        return;
    };

    if items.len() > 1 {
        items.retain(|item| key_of(item) != key);
    }
}

/// Waterfall over the saved recipes. A stage only runs when the one before
/// it left nothing at all.
pub fn recipe_pool<'a>(
    recipes: &'a [Recipe],
    answers: &Answers,
    exclude_id: Option<&str>,
) -> Pool<'a, Recipe, RecipeStage> {
    let time = answers.get(QuestionKey::Time);
    let cuisine = answers.get(QuestionKey::Cuisine);
    let protein = answers.get(QuestionKey::Protein);

    let filter = |f: &dyn Fn(&Recipe) -> bool| recipes.iter().filter(|r| f(r)).collect::<Vec<_>>();

    let mut stage = RecipeStage::Strict;
    let mut items = filter(&|r| {
        recipe_matches_time(r, time)
            && recipe_matches_cuisine(r, cuisine)
            && recipe_matches_protein(r, protein)
    });

    if items.is_empty() {
        stage = RecipeStage::WithoutProtein;
        items = filter(&|r| recipe_matches_time(r, time) && recipe_matches_cuisine(r, cuisine));
    }

    if items.is_empty() {
        stage = RecipeStage::TimeOnly;
        items = filter(&|r| recipe_matches_time(r, time));
    }

    if items.is_empty() {
        stage = RecipeStage::Unfiltered;
        items = recipes.iter().collect();
    }

    exclude(&mut items, exclude_id, |r| r.id.as_str());

    Pool { items, stage }
}

/// Service is a hard filter, vibe a soft one: a vibe that matches nothing is
/// ignored rather than emptying the pool.
pub fn restaurant_pool<'a>(
    restaurants: &'a [Restaurant],
    answers: &Answers,
    exclude_id: Option<&str>,
) -> Pool<'a, Restaurant, RestaurantStage> {
    let service = answers.get(QuestionKey::Service);
    let vibe = answers.get(QuestionKey::Vibe);

    let mut items = restaurants
        .iter()
        .filter(|r| restaurant_matches_service(r, service))
        .collect::<Vec<_>>();

    let by_vibe = items
        .iter()
        .copied()
        .filter(|r| restaurant_matches_vibe(r, vibe))
        .collect::<Vec<_>>();

    let stage = if by_vibe.is_empty() {
        RestaurantStage::ServiceOnly
    } else {
        items = by_vibe;
        RestaurantStage::ServiceAndVibe
    };

    exclude(&mut items, exclude_id, |r| r.id.as_str());

    Pool { items, stage }
}

struct UniquePool<'a> {
    items: Vec<&'a MealIdea>,
    seen: HashSet<&'a str>,
}

impl<'a> UniquePool<'a> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= MIN_GENERATION_POOL
    }

    /// Appends unseen candidates in order until the pool is full.
    fn extend(&mut self, candidates: impl IntoIterator<Item = &'a MealIdea>, limit: Option<usize>) {
        for idea in candidates {
            if self.seen.insert(idea.name) {
                self.items.push(idea);
            }

            if limit.is_some_and(|limit| self.items.len() >= limit) {
                break;
            }
        }
    }
}

/// Accumulating relaxation over the meal catalog. Later stages only append
/// ideas not already pooled, and stop once [`MIN_GENERATION_POOL`] is reached.
pub fn meal_pool<'a>(
    catalog: &'a [MealIdea],
    answers: &Answers,
    exclude_name: Option<&str>,
) -> Pool<'a, MealIdea, GenerationStage> {
    let time = answers.get(QuestionKey::Time);
    let cuisine = answers.get(QuestionKey::Cuisine);
    let protein = answers.get(QuestionKey::Protein);

    let mut pool = UniquePool::new();
    let mut stage = GenerationStage::Strict;

    pool.extend(
        catalog.iter().filter(|m| {
            meal_matches_time(m, time)
                && meal_matches_cuisine(m, cuisine)
                && meal_matches_protein(m, protein)
        }),
        None,
    );

    if !pool.is_full() {
        stage = GenerationStage::WithoutProtein;
        pool.extend(
            catalog
                .iter()
                .filter(|m| meal_matches_time(m, time) && meal_matches_cuisine(m, cuisine)),
            Some(MIN_GENERATION_POOL),
        );
    }

    if !pool.is_full() {
        stage = GenerationStage::CuisineOnly;
        pool.extend(
            catalog.iter().filter(|m| meal_matches_cuisine(m, cuisine)),
            Some(MIN_GENERATION_POOL),
        );
    }

    if !pool.is_full() {
        stage = GenerationStage::Catalog;
        pool.extend(catalog.iter(), Some(MIN_GENERATION_POOL));
    }

    let mut items = pool.items;
    exclude(&mut items, exclude_name, |m| m.name);

    Pool { items, stage }
}
