use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use temp_dir::TempDir;
use whatsfordinner_db::{Migrate, Plan};

async fn table_names(pool: &SqlitePool) -> anyhow::Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' AND name NOT LIKE 'sqlite%' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(names)
}

#[tokio::test]
async fn test_apply_and_revert_all() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;

    let migrator = whatsfordinner_db::migrator()?;
    migrator.run(&mut conn, &Plan::apply_all()).await?;
    drop(conn);

    assert_eq!(
        table_names(&pool).await?,
        vec!["ingredient", "recipe", "restaurant"]
    );

    let mut conn = pool.acquire().await?;
    migrator.run(&mut conn, &Plan::revert_all()).await?;
    drop(conn);

    assert!(table_names(&pool).await?.is_empty());

    Ok(())
}
