//! Match tests between one answer value and one candidate.
//!
//! Every predicate treats [`ANY`] as "match everything", and an answer value
//! it does not recognise matches unconditionally too.

use std::sync::LazyLock;

use regex::Regex;
use whatsfordinner_shared::{recipe::Recipe, restaurant::Restaurant};

use crate::{ANY, MealIdea, ProteinBucket, TimeBucket};

pub const MEAT_KEYWORDS: [&str; 15] = [
    "beef", "chicken", "pork", "lamb", "mince", "steak", "fish", "salmon", "tuna", "cod",
    "shrimp", "prawn", "turkey", "duck", "seafood",
];

const PROTEIN_KEYWORDS: [(&str, &[&str]); 3] = [
    ("chicken", &["chicken"]),
    ("beef", &["beef", "mince", "steak", "ground beef", "brisket"]),
    (
        "seafood",
        &[
            "fish", "salmon", "tuna", "shrimp", "prawn", "seafood", "cod", "tilapia", "squid",
        ],
    ),
];

static RE_FANCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fancy|fine|upscal|pric[ey]|elegant").unwrap());
static RE_CASUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"casual|cheap|easy|laid.back|relaxed").unwrap());
static RE_FAST_FOOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fast|burger|fried|chain|quick").unwrap());
static RE_FAST_CASUAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"casual|burrito|wrap|bowl|taco").unwrap());

fn haystack<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// A recipe without a cook time is never excluded by time.
pub fn recipe_matches_time(recipe: &Recipe, time: &str) -> bool {
    if time == ANY {
        return true;
    }

    let Some(minutes) = recipe.cook_time_minutes else {
        return true;
    };

    match time {
        "quick" => minutes <= 30,
        "normal" => minutes <= 60,
        _ => true,
    }
}

pub fn recipe_matches_cuisine(recipe: &Recipe, cuisine: &str) -> bool {
    if cuisine == ANY {
        return true;
    }

    let text = haystack(
        [recipe.name.as_str(), recipe.description.as_deref().unwrap_or_default()]
            .into_iter()
            .chain(recipe.tags.iter().map(String::as_str)),
    );

    text.contains(&cuisine.to_lowercase())
}

pub fn recipe_matches_protein(recipe: &Recipe, protein: &str) -> bool {
    if protein == ANY {
        return true;
    }

    let text = haystack(
        [recipe.name.as_str(), recipe.description.as_deref().unwrap_or_default()]
            .into_iter()
            .chain(recipe.ingredients.iter().map(|i| i.name.as_str())),
    );

    if protein == "vegetarian" {
        return !MEAT_KEYWORDS.iter().any(|k| text.contains(k));
    }

    match PROTEIN_KEYWORDS.iter().find(|(p, _)| *p == protein) {
        Some((_, keywords)) => keywords.iter().any(|k| text.contains(k)),
        None => text.contains(&protein.to_lowercase()),
    }
}

/// `takeout` is satisfied by delivery as well.
pub fn restaurant_matches_service(restaurant: &Restaurant, service: &str) -> bool {
    match service {
        "dineIn" => restaurant.is_dine_in_available,
        "takeout" => restaurant.is_takeout_available || restaurant.is_delivery_available,
        _ => true,
    }
}

/// Keyword classification of name, cuisine and notes. Categories overlap, so
/// one place can fit several vibes.
pub fn restaurant_matches_vibe(restaurant: &Restaurant, vibe: &str) -> bool {
    let text = haystack([
        restaurant.name.as_str(),
        restaurant.cuisine.as_deref().unwrap_or_default(),
        restaurant.notes.as_deref().unwrap_or_default(),
    ]);

    match vibe {
        "fancy" => RE_FANCY.is_match(&text),
        "casual" => RE_CASUAL.is_match(&text),
        "fastFood" => RE_FAST_FOOD.is_match(&text),
        "fastCasual" => RE_FAST_CASUAL.is_match(&text),
        _ => true,
    }
}

pub fn meal_matches_time(idea: &MealIdea, time: &str) -> bool {
    if time == ANY || idea.time == TimeBucket::Any {
        return true;
    }

    match time {
        "quick" => idea.time == TimeBucket::Quick,
        "normal" => matches!(idea.time, TimeBucket::Quick | TimeBucket::Normal),
        _ => true,
    }
}

/// Ideas tagged with the `any` cuisine fit every requested cuisine.
pub fn meal_matches_cuisine(idea: &MealIdea, cuisine: &str) -> bool {
    cuisine == ANY || idea.cuisine == cuisine || idea.cuisine == ANY
}

pub fn meal_matches_protein(idea: &MealIdea, protein: &str) -> bool {
    protein == ANY || idea.protein == ProteinBucket::Any || idea.protein.as_ref() == protein
}
