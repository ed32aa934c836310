use strum::{AsRefStr, Display, EnumString};

/// How long a meal idea takes: `Quick` is under 30 minutes, `Normal` under
/// an hour, `Any` has no restriction.
#[derive(EnumString, Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum TimeBucket {
    Quick,
    Normal,
    Any,
}

#[derive(EnumString, Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum ProteinBucket {
    Chicken,
    Beef,
    Seafood,
    Vegetarian,
    Any,
}

/// A curated dinner suggestion. The name is unique within a catalog and
/// doubles as its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealIdea {
    pub name: &'static str,
    pub description: &'static str,
    /// `italian`, `asian`, `mexican`, `american` or `any`
    pub cuisine: &'static str,
    pub time: TimeBucket,
    pub protein: ProteinBucket,
    /// Matched against pantry names when scoring
    pub keywords: &'static [&'static str],
}

const fn idea(
    name: &'static str,
    description: &'static str,
    cuisine: &'static str,
    time: TimeBucket,
    protein: ProteinBucket,
    keywords: &'static [&'static str],
) -> MealIdea {
    MealIdea {
        name,
        description,
        cuisine,
        time,
        protein,
        keywords,
    }
}

use ProteinBucket::{Beef, Chicken, Seafood, Vegetarian};
use TimeBucket::{Normal, Quick};

/// Dinner-appropriate ideas only.
pub static MEAL_IDEAS: [MealIdea; 30] = [
    // Italian
    idea(
        "Pasta Aglio e Olio",
        "Garlic, olive oil and pasta. A classic pantry meal.",
        "italian",
        Quick,
        Vegetarian,
        &["pasta", "spaghetti", "garlic", "olive oil"],
    ),
    idea(
        "Spaghetti Bolognese",
        "Rich meat sauce over pasta.",
        "italian",
        Normal,
        Beef,
        &["pasta", "spaghetti", "mince", "beef", "tomato"],
    ),
    idea(
        "Risotto",
        "Creamy rice dish, endlessly customisable.",
        "italian",
        Normal,
        Vegetarian,
        &["rice", "arborio", "parmesan", "stock", "broth"],
    ),
    idea(
        "Chicken Alfredo",
        "Creamy pasta with tender chicken.",
        "italian",
        Normal,
        Chicken,
        &["chicken", "pasta", "cream", "parmesan", "butter", "garlic"],
    ),
    idea(
        "Minestrone",
        "Hearty Italian vegetable soup with pasta.",
        "italian",
        Normal,
        Vegetarian,
        &["pasta", "tomato", "onion", "carrot", "celery", "beans"],
    ),
    // Asian
    idea(
        "Veggie Stir-fry with Rice",
        "Toss whatever veg you have in a hot pan with rice.",
        "asian",
        Quick,
        Vegetarian,
        &["rice", "broccoli", "carrot", "onion", "pepper", "vegetables"],
    ),
    idea(
        "Miso Noodle Soup",
        "Simple broth with noodles and any toppings you have.",
        "asian",
        Quick,
        Vegetarian,
        &["noodles", "miso", "tofu", "soy sauce", "stock"],
    ),
    idea(
        "Chicken Stir-fry",
        "Season and fry chicken with whatever veg is on hand.",
        "asian",
        Quick,
        Chicken,
        &["chicken", "soy sauce", "ginger", "garlic", "vegetables"],
    ),
    idea(
        "Pad Thai",
        "Rice noodles stir-fried with a tangy, savoury sauce.",
        "asian",
        Normal,
        ProteinBucket::Any,
        &["noodles", "rice noodles", "soy sauce", "lime", "peanut", "garlic"],
    ),
    idea(
        "Teriyaki Salmon",
        "Glazed salmon with a sweet soy sauce and rice.",
        "asian",
        Quick,
        Seafood,
        &["salmon", "fish", "soy sauce", "rice", "ginger", "garlic"],
    ),
    idea(
        "Beef & Broccoli",
        "Classic Chinese-style beef stir-fry with broccoli.",
        "asian",
        Quick,
        Beef,
        &["beef", "steak", "broccoli", "soy sauce", "garlic", "ginger"],
    ),
    // Mexican
    idea(
        "Chicken Tacos",
        "Season, cook and wrap. Done in 20 minutes.",
        "mexican",
        Quick,
        Chicken,
        &["chicken", "tortilla", "lime", "cumin", "taco"],
    ),
    idea(
        "Bean Burritos",
        "Hearty and filling from pantry staples.",
        "mexican",
        Quick,
        Vegetarian,
        &["beans", "black beans", "tortilla", "rice", "cheese"],
    ),
    idea(
        "Beef Enchiladas",
        "Rolled tortillas with seasoned beef, smothered in sauce.",
        "mexican",
        Normal,
        Beef,
        &["beef", "mince", "tortilla", "tomato", "cheese", "cumin"],
    ),
    idea(
        "Chicken Fajitas",
        "Sizzling strips of chicken with peppers and onions.",
        "mexican",
        Quick,
        Chicken,
        &["chicken", "pepper", "onion", "tortilla", "cumin", "lime"],
    ),
    idea(
        "Prawn Tacos",
        "Juicy prawns with lime slaw in a tortilla.",
        "mexican",
        Quick,
        Seafood,
        &["prawn", "shrimp", "tortilla", "lime", "cabbage"],
    ),
    // American
    idea(
        "Grilled Cheese & Tomato Soup",
        "The ultimate comfort combo.",
        "american",
        Quick,
        Vegetarian,
        &["bread", "cheese", "tomato", "butter", "milk"],
    ),
    idea(
        "Mac & Cheese",
        "From scratch or boxed, both are valid.",
        "american",
        Quick,
        Vegetarian,
        &["pasta", "macaroni", "cheese", "butter", "milk"],
    ),
    idea(
        "Burger & Fries",
        "A classic, satisfying dinner.",
        "american",
        Normal,
        Beef,
        &["beef", "mince", "bun", "bread", "potato"],
    ),
    idea(
        "Beef Chili",
        "Slow-cooked chili with beans and bold spices.",
        "american",
        TimeBucket::Any,
        Beef,
        &["beef", "mince", "beans", "tomato", "cumin", "onion"],
    ),
    idea(
        "BBQ Chicken",
        "Smoky, sticky baked chicken. Great with coleslaw.",
        "american",
        Normal,
        Chicken,
        &["chicken", "bbq", "onion", "garlic", "paprika"],
    ),
    idea(
        "Fish & Chips",
        "Crispy battered fish with chunky chips.",
        "american",
        Normal,
        Seafood,
        &["fish", "cod", "potato", "flour", "oil"],
    ),
    // Any cuisine
    idea(
        "Grain Bowl",
        "Grains, veg, protein and a sauce.",
        "any",
        Normal,
        Vegetarian,
        &["rice", "quinoa", "chickpea", "avocado", "lemon"],
    ),
    idea(
        "Soup from Scratch",
        "Throw everything in a pot and simmer.",
        "any",
        TimeBucket::Any,
        Vegetarian,
        &["stock", "broth", "carrot", "onion", "celery", "potato"],
    ),
    idea(
        "Chicken & Rice",
        "Simple, satisfying, and uses what you already have.",
        "any",
        Normal,
        Chicken,
        &["chicken", "rice", "stock", "garlic", "onion"],
    ),
    idea(
        "Pasta with Whatever You Have",
        "Pasta is the perfect base for any fridge clean-out.",
        "any",
        Quick,
        Vegetarian,
        &["pasta", "tomato", "garlic", "cheese", "olive oil"],
    ),
    idea(
        "Butter Chicken",
        "Creamy, mildly spiced tomato sauce with tender chicken.",
        "any",
        Normal,
        Chicken,
        &["chicken", "tomato", "cream", "butter", "garlic", "ginger"],
    ),
    idea(
        "Roast Chicken & Vegetables",
        "Whole roast chicken with seasonal roasted veg.",
        "any",
        TimeBucket::Any,
        Chicken,
        &["chicken", "potato", "carrot", "onion", "garlic", "olive oil"],
    ),
    idea(
        "Salmon & Asparagus",
        "Simple baked salmon with lemon and asparagus.",
        "any",
        Quick,
        Seafood,
        &["salmon", "fish", "asparagus", "lemon", "olive oil", "garlic"],
    ),
    idea(
        "Beef Stir-fry",
        "Quick beef and veg stir-fry over noodles or rice.",
        "any",
        Quick,
        Beef,
        &["beef", "steak", "soy sauce", "ginger", "garlic", "onion"],
    ),
];
