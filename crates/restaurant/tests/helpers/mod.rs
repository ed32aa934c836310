use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use whatsfordinner_db::{Migrate, Plan};
use whatsfordinner_restaurant::CreateInput;

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
        cuisine: Some("Italian".to_owned()),
        price_range: Some(2),
        rating: Some(4.5),
        notes: Some("Casual and cheap".to_owned()),
        is_dine_in_available: true,
        ..Default::default()
    }
}
