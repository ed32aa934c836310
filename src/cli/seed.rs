pub async fn run(config: whatsfordinner::Config) -> anyhow::Result<()> {
    let pool = super::pool(&config).await?;
    let seeded = whatsfordinner::seed::seed(&pool).await?;

    println!(
        "Added {} recipes, {} places and {} pantry items",
        seeded.recipes, seeded.restaurants, seeded.ingredients
    );

    Ok(())
}
