use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use whatsfordinner_db::{Migrate, Plan};
use whatsfordinner_recipe::{CreateInput, RecipeIngredient};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    whatsfordinner_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub fn create_input(name: impl Into<String>) -> CreateInput {
    CreateInput {
        name: name.into(),
        description: Some("Weeknight favourite".to_owned()),
        ingredients: vec![
            RecipeIngredient {
                name: "Chicken breast".to_owned(),
                quantity: Some("2".to_owned()),
                unit: None,
            },
            RecipeIngredient::new("Rice"),
        ],
        instructions: vec!["Cook rice".to_owned(), "Fry chicken".to_owned()],
        cook_time_minutes: Some(15),
        prep_time_minutes: Some(5),
        servings: Some(2),
        tags: vec!["asian".to_owned(), "quick".to_owned()],
        is_favorite: false,
    }
}
