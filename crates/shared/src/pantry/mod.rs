use serde::{Deserialize, Serialize};

/// A saved ingredient. Only the names of those flagged `in_pantry` reach the
/// decision engine.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    /// Broad grouping for pantry organisation, e.g. "dairy" or "produce"
    pub category: Option<String>,
    pub in_pantry: bool,
    pub created_at: String,
    pub updated_at: String,
}
