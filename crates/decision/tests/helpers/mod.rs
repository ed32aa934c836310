use whatsfordinner_decision::RandomSource;
use whatsfordinner_shared::{
    recipe::{Recipe, RecipeIngredient},
    restaurant::Restaurant,
};

/// Always picks the first candidate.
#[allow(dead_code)]
pub struct First;

impl RandomSource for First {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Always picks the last candidate.
#[allow(dead_code)]
pub struct Last;

impl RandomSource for Last {
    fn pick_index(&mut self, len: usize) -> usize {
        len - 1
    }
}

/// Records every pool size it was asked to pick from.
#[allow(dead_code)]
#[derive(Default)]
pub struct Spy {
    pub lens: Vec<usize>,
}

impl RandomSource for Spy {
    fn pick_index(&mut self, len: usize) -> usize {
        self.lens.push(len);
        0
    }
}

#[allow(dead_code)]
pub fn recipe(id: &str, name: &str, cook_time_minutes: Option<u32>, tags: &[&str]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        cook_time_minutes,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn with_ingredients(mut recipe: Recipe, names: &[&str]) -> Recipe {
    recipe.ingredients = names.iter().map(|n| RecipeIngredient::new(*n)).collect();
    recipe
}

#[allow(dead_code)]
pub fn restaurant(id: &str, dine_in: bool, takeout: bool, notes: Option<&str>) -> Restaurant {
    Restaurant {
        id: id.to_owned(),
        name: id.to_owned(),
        notes: notes.map(str::to_owned),
        is_dine_in_available: dine_in,
        is_takeout_available: takeout,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn pantry(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
