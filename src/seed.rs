//! Sample recipes, places and pantry items for trying the app out.
//!
//! Seeding appends: running it twice saves everything twice.

use sqlx::SqlitePool;
use whatsfordinner_recipe::RecipeIngredient;

const PANTRY: [&str; 8] = [
    "Chicken breast",
    "Pasta",
    "Garlic",
    "Onion",
    "Olive oil",
    "Eggs",
    "Rice",
    "Tomato sauce",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Seeded {
    pub recipes: usize,
    pub restaurants: usize,
    pub ingredients: usize,
}

#[tracing::instrument(skip(pool))]
pub async fn seed(pool: &SqlitePool) -> anyhow::Result<Seeded> {
    let mut seeded = Seeded::default();

    let recipe = whatsfordinner_recipe::Command(pool.clone());
    for input in recipes() {
        recipe.create(input).await?;
        seeded.recipes += 1;
    }

    let restaurant = whatsfordinner_restaurant::Command(pool.clone());
    for input in restaurants() {
        restaurant.create(input).await?;
        seeded.restaurants += 1;
    }

    let pantry = whatsfordinner_pantry::Command(pool.clone());
    for name in PANTRY {
        pantry
            .create(whatsfordinner_pantry::CreateInput {
                name: name.to_owned(),
                in_pantry: true,
                ..Default::default()
            })
            .await?;
        seeded.ingredients += 1;
    }

    tracing::info!(
        recipes = seeded.recipes,
        restaurants = seeded.restaurants,
        ingredients = seeded.ingredients,
        "Seeded sample data"
    );

    Ok(seeded)
}

fn ingredient(name: &str, quantity: &str, unit: Option<&str>) -> RecipeIngredient {
    RecipeIngredient {
        name: name.to_owned(),
        quantity: Some(quantity.to_owned()),
        unit: unit.map(str::to_owned),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn recipes() -> Vec<whatsfordinner_recipe::CreateInput> {
    vec![
        whatsfordinner_recipe::CreateInput {
            name: "Spaghetti Bolognese".to_owned(),
            description: Some("A rich and hearty Italian meat sauce served over spaghetti.".to_owned()),
            ingredients: vec![
                ingredient("Ground beef", "500", Some("g")),
                ingredient("Pasta", "400", Some("g")),
                ingredient("Tomato sauce", "400", Some("ml")),
                ingredient("Onion", "1", Some("large")),
                ingredient("Garlic", "3", Some("cloves")),
            ],
            instructions: strings(&[
                "Brown the ground beef in a large pan with diced onion and garlic.",
                "Add tomato sauce and simmer for 20 minutes.",
                "Cook pasta according to package instructions and serve with the sauce.",
            ]),
            cook_time_minutes: Some(45),
            servings: Some(4),
            tags: strings(&["italian", "hearty"]),
            ..Default::default()
        },
        whatsfordinner_recipe::CreateInput {
            name: "Chicken Stir Fry".to_owned(),
            description: Some(
                "A quick and healthy Asian-inspired stir fry with tender chicken and crisp vegetables."
                    .to_owned(),
            ),
            ingredients: vec![
                ingredient("Chicken breast", "400", Some("g")),
                ingredient("Broccoli", "200", Some("g")),
                ingredient("Soy sauce", "3", Some("tbsp")),
                ingredient("Rice", "300", Some("g")),
                ingredient("Garlic", "2", Some("cloves")),
            ],
            instructions: strings(&[
                "Cook rice according to package instructions.",
                "Slice chicken and stir-fry in a hot wok with garlic for 5 minutes.",
                "Add broccoli and soy sauce, cook for another 5 minutes and serve over rice.",
            ]),
            cook_time_minutes: Some(20),
            servings: Some(2),
            tags: strings(&["asian", "quick"]),
            ..Default::default()
        },
        whatsfordinner_recipe::CreateInput {
            name: "Avocado Toast".to_owned(),
            description: Some("Simple, nutritious, and endlessly customisable.".to_owned()),
            ingredients: vec![
                ingredient("Bread", "2", Some("slices")),
                ingredient("Avocado", "1", Some("ripe")),
                ingredient("Eggs", "2", None),
                ingredient("Salt", "a pinch", None),
                ingredient("Pepper", "a pinch", None),
            ],
            instructions: strings(&[
                "Toast the bread. Mash the avocado with salt and pepper.",
                "Fry or poach the eggs to your liking.",
                "Spread avocado on toast and top with eggs.",
            ]),
            cook_time_minutes: Some(10),
            servings: Some(1),
            tags: strings(&["quick", "light"]),
            ..Default::default()
        },
        whatsfordinner_recipe::CreateInput {
            name: "Beef Tacos".to_owned(),
            description: Some(
                "Crowd-pleasing tacos loaded with seasoned beef and fresh toppings.".to_owned(),
            ),
            ingredients: vec![
                ingredient("Ground beef", "500", Some("g")),
                ingredient("Taco shells", "8", None),
                ingredient("Cheese", "100", Some("g")),
                ingredient("Lettuce", "1", Some("cup")),
                ingredient("Salsa", "4", Some("tbsp")),
            ],
            instructions: strings(&[
                "Brown the ground beef in a pan with taco seasoning.",
                "Warm taco shells in the oven for 5 minutes.",
                "Fill shells with beef and top with cheese, lettuce, and salsa.",
            ]),
            cook_time_minutes: Some(25),
            servings: Some(4),
            tags: strings(&["mexican", "casual"]),
            ..Default::default()
        },
        whatsfordinner_recipe::CreateInput {
            name: "Grilled Salmon".to_owned(),
            description: Some(
                "Elegant and healthy grilled salmon with lemon and asparagus.".to_owned(),
            ),
            ingredients: vec![
                ingredient("Salmon", "2", Some("fillets")),
                ingredient("Lemon", "1", None),
                ingredient("Garlic", "2", Some("cloves")),
                ingredient("Olive oil", "2", Some("tbsp")),
                ingredient("Asparagus", "200", Some("g")),
            ],
            instructions: strings(&[
                "Marinate salmon in olive oil, lemon juice, and garlic for 10 minutes.",
                "Grill salmon for 4 to 5 minutes per side.",
                "Grill asparagus alongside and serve together.",
            ]),
            cook_time_minutes: Some(30),
            servings: Some(2),
            tags: strings(&["healthy", "fancy"]),
            ..Default::default()
        },
    ]
}

fn restaurants() -> Vec<whatsfordinner_restaurant::CreateInput> {
    vec![
        whatsfordinner_restaurant::CreateInput {
            name: "Mario's Italian Kitchen".to_owned(),
            cuisine: Some("Italian".to_owned()),
            notes: Some("Great for date night, cosy atmosphere and excellent pasta.".to_owned()),
            is_dine_in_available: true,
            ..Default::default()
        },
        whatsfordinner_restaurant::CreateInput {
            name: "Lucky Dragon".to_owned(),
            cuisine: Some("Chinese".to_owned()),
            notes: Some("Best takeout in town. Fast delivery, generous portions.".to_owned()),
            is_takeout_available: true,
            is_delivery_available: true,
            ..Default::default()
        },
        whatsfordinner_restaurant::CreateInput {
            name: "The Burger Joint".to_owned(),
            cuisine: Some("American".to_owned()),
            notes: Some("Casual and cheap. Good smash burgers and thick shakes.".to_owned()),
            is_dine_in_available: true,
            is_takeout_available: true,
            ..Default::default()
        },
        whatsfordinner_restaurant::CreateInput {
            name: "Sakura Sushi".to_owned(),
            cuisine: Some("Japanese".to_owned()),
            notes: Some("Very fresh fish, a bit pricey but worth it for a treat.".to_owned()),
            is_dine_in_available: true,
            ..Default::default()
        },
    ]
}
