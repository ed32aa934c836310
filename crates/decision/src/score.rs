//! Pantry overlap scoring for meal ideas.

use crate::MealIdea;

/// Lower-cased pantry names, ready for [`score_meal`].
pub fn normalize_pantry(pantry: &[String]) -> Vec<String> {
    pantry.iter().map(|p| p.to_lowercase()).collect()
}

/// Number of the idea's keywords that overlap some pantry name. A keyword and
/// a name overlap when either one contains the other, so `chicken breast`
/// counts for `chicken` and `beef` counts for `ground beef`.
pub fn score_meal(idea: &MealIdea, pantry_lower: &[String]) -> usize {
    idea.keywords
        .iter()
        .filter(|k| {
            pantry_lower
                .iter()
                .any(|p| p.contains(*k) || k.contains(p.as_str()))
        })
        .count()
}

/// Ideas tied at the best score. When nothing overlaps the pantry at all the
/// whole pool is returned.
pub fn top_tier<'a>(pool: &[&'a MealIdea], pantry: &[String]) -> Vec<&'a MealIdea> {
    let pantry_lower = normalize_pantry(pantry);
    let mut scored = pool
        .iter()
        .map(|idea| (*idea, score_meal(idea, &pantry_lower)))
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let top_score = scored.first().map(|(_, score)| *score).unwrap_or_default();

    scored
        .into_iter()
        .filter(|(_, score)| top_score == 0 || *score == top_score)
        .map(|(idea, _)| idea)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MEAL_IDEAS, ProteinBucket, TimeBucket};

    fn idea(name: &'static str, keywords: &'static [&'static str]) -> MealIdea {
        MealIdea {
            name,
            description: "",
            cuisine: "any",
            time: TimeBucket::Any,
            protein: ProteinBucket::Any,
            keywords,
        }
    }

    #[test]
    fn test_bidirectional_substring() {
        let chili = idea("Chili", &["ground beef", "beans", "tomato"]);
        let pantry = normalize_pantry(&["Beef".to_owned(), "Tomato sauce".to_owned()]);

        assert_eq!(score_meal(&chili, &pantry), 2);
    }

    #[test]
    fn test_keyword_counted_once() {
        let stir_fry = idea("Stir-fry", &["chicken"]);
        let pantry = normalize_pantry(&["Chicken breast".to_owned(), "Chicken thighs".to_owned()]);

        assert_eq!(score_meal(&stir_fry, &pantry), 1);
    }

    #[test]
    fn test_top_tier_keeps_ties() {
        let a = idea("A", &["rice", "egg"]);
        let b = idea("B", &["rice"]);
        let c = idea("C", &["egg", "rice"]);
        let pantry = vec!["Rice".to_owned(), "Eggs".to_owned()];

        let tier = top_tier(&[&a, &b, &c], &pantry);
        assert_eq!(tier.iter().map(|m| m.name).collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn test_top_tier_zero_scores_keep_pool() {
        let pool = MEAL_IDEAS.iter().take(5).collect::<Vec<_>>();
        let tier = top_tier(&pool, &["Marshmallows".to_owned()]);

        assert_eq!(tier.len(), 5);
    }

    #[test]
    fn test_top_tier_empty_pool() {
        assert!(top_tier(&[], &["Rice".to_owned()]).is_empty());
    }
}
