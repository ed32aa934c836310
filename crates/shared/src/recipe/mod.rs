use serde::{Deserialize, Serialize};

/// A measured ingredient reference within a recipe
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    pub cook_time_minutes: Option<u32>,
    pub prep_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Recipe {
    pub fn total_time_minutes(&self) -> Option<u32> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0) + cook.unwrap_or(0)),
        }
    }
}
