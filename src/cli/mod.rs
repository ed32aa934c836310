pub mod decide;
pub mod pantry;
pub mod place;
pub mod recipe;
pub mod seed;

async fn pool(config: &whatsfordinner::Config) -> anyhow::Result<sqlx::SqlitePool> {
    whatsfordinner::create_pool(&config.database.url, config.database.max_connections).await
}

#[cfg(test)]
async fn test_pool(dir: &temp_dir::TempDir) -> anyhow::Result<sqlx::SqlitePool> {
    let config = whatsfordinner::Config {
        database: whatsfordinner::config::DatabaseConfig {
            url: format!("sqlite:{}", dir.child("cli.db").to_string_lossy()),
            max_connections: 1,
        },
        observability: Default::default(),
    };

    whatsfordinner::migrate::migrate(&config).await?;

    pool(&config).await
}
