use whatsfordinner_shared::{recipe::Recipe, restaurant::Restaurant};

use crate::{EMPTY_PANTRY, EmptyState, MealIdea, Mode};

pub const CELEBRATION_MESSAGE: &str = "Great choice. Time to make it happen!";

/// How many pantry names a meal result lists before summarising the rest.
pub const PANTRY_PREVIEW_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowResult {
    Recipe(Recipe),
    Restaurant(Restaurant),
    Meal {
        idea: MealIdea,
        /// Pantry names the idea was scored against
        pantry: Vec<String>,
    },
    /// Nothing to suggest for this mode
    Empty { mode: Mode },
    /// Generation was requested with nothing in the pantry
    EmptyPantry,
}

impl FlowResult {
    /// Whether there is a suggestion to retry or confirm.
    pub fn has_content(&self) -> bool {
        !matches!(self, FlowResult::Empty { .. } | FlowResult::EmptyPantry)
    }

    /// Key passed back to the pool builder on "try again": the record id,
    /// or the name for meal ideas.
    pub fn exclusion_key(&self) -> Option<&str> {
        match self {
            FlowResult::Recipe(recipe) => Some(&recipe.id),
            FlowResult::Restaurant(restaurant) => Some(&restaurant.id),
            FlowResult::Meal { idea, .. } => Some(idea.name),
            FlowResult::Empty { .. } | FlowResult::EmptyPantry => None,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            FlowResult::Recipe(recipe) => Some(&recipe.name),
            FlowResult::Restaurant(restaurant) => Some(&restaurant.name),
            FlowResult::Meal { idea, .. } => Some(idea.name),
            FlowResult::Empty { .. } | FlowResult::EmptyPantry => None,
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        match self {
            FlowResult::Empty { mode } => Some(mode.empty_state()),
            FlowResult::EmptyPantry => Some(EMPTY_PANTRY),
            _ => None,
        }
    }
}

/// First few pantry names joined for display, e.g. `Rice, Eggs + 3 more`.
pub fn pantry_preview(pantry: &[String]) -> String {
    let shown = pantry.iter().take(PANTRY_PREVIEW_LEN).cloned().collect::<Vec<_>>();
    let extra = pantry.len().saturating_sub(shown.len());
    let mut preview = shown.join(", ");

    if extra > 0 {
        preview.push_str(&format!(" + {extra} more"));
    }

    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MEAL_IDEAS;

    #[test]
    fn test_keys_and_names() {
        let recipe = FlowResult::Recipe(Recipe {
            id: "01J".to_owned(),
            name: "Tacos".to_owned(),
            ..Default::default()
        });
        assert_eq!(recipe.exclusion_key(), Some("01J"));
        assert_eq!(recipe.display_name(), Some("Tacos"));
        assert!(recipe.has_content());
        assert!(recipe.empty_state().is_none());

        let meal = FlowResult::Meal {
            idea: MEAL_IDEAS[0],
            pantry: vec![],
        };
        assert_eq!(meal.exclusion_key(), Some(MEAL_IDEAS[0].name));

        let empty = FlowResult::Empty { mode: Mode::GoOut };
        assert!(!empty.has_content());
        assert_eq!(empty.exclusion_key(), None);
        assert_eq!(
            empty.empty_state().map(|s| s.title),
            Some("No places saved yet!")
        );
        assert_eq!(FlowResult::EmptyPantry.empty_state(), Some(EMPTY_PANTRY));
    }

    #[test]
    fn test_pantry_preview() {
        let pantry = ["Chicken breast", "Pasta", "Garlic", "Onion", "Olive oil", "Eggs", "Rice", "Tomato sauce"]
            .map(str::to_owned);

        assert_eq!(
            pantry_preview(&pantry),
            "Chicken breast, Pasta, Garlic, Onion, Olive oil, Eggs + 2 more"
        );
        assert_eq!(pantry_preview(&pantry[..2]), "Chicken breast, Pasta");
        assert_eq!(pantry_preview(&[]), "");
    }
}
