use temp_dir::TempDir;
use whatsfordinner_recipe::{Command, Query, UpdateInput};
use whatsfordinner_shared::Error;

mod helpers;

#[tokio::test]
async fn test_create_then_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let id = command.create(helpers::create_input("  Chicken Stir Fry ")).await?;
    let recipe = query.find(&id).await?.unwrap();

    assert_eq!(recipe.name, "Chicken Stir Fry");
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].quantity.as_deref(), Some("2"));
    assert_eq!(recipe.instructions, vec!["Cook rice", "Fry chicken"]);
    assert_eq!(recipe.tags, vec!["asian", "quick"]);
    assert_eq!(recipe.total_time_minutes(), Some(20));
    assert!(!recipe.is_favorite);
    assert_eq!(recipe.created_at, recipe.updated_at);

    Ok(())
}

#[tokio::test]
async fn test_all_keeps_creation_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    for name in ["Tacos", "Bolognese", "Salmon"] {
        command.create(helpers::create_input(name)).await?;
    }

    let names = query
        .all()
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Tacos", "Bolognese", "Salmon"]);

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());

    let blank = command.create(helpers::create_input("   ")).await;
    assert!(matches!(blank, Err(Error::Validate(_))));

    let mut too_long = helpers::create_input("Slow roast");
    too_long.cook_time_minutes = Some(24 * 60 + 1);
    assert!(matches!(
        command.create(too_long).await,
        Err(Error::Validate(_))
    ));

    let mut no_servings = helpers::create_input("Soup");
    no_servings.servings = Some(0);
    assert!(matches!(
        command.create(no_servings).await,
        Err(Error::Validate(_))
    ));

    assert!(Query(pool).all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_update_replaces_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let id = command.create(helpers::create_input("Stir Fry")).await?;
    command
        .update(
            &id,
            UpdateInput {
                name: "Beef Stir Fry".to_owned(),
                cook_time_minutes: Some(40),
                tags: vec!["asian".to_owned()],
                ..Default::default()
            },
        )
        .await?;

    let recipe = query.find(&id).await?.unwrap();
    assert_eq!(recipe.name, "Beef Stir Fry");
    assert_eq!(recipe.cook_time_minutes, Some(40));
    assert_eq!(recipe.prep_time_minutes, None);
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.tags, vec!["asian"]);

    let missing = command
        .update(
            "missing",
            UpdateInput {
                name: "Ghost".to_owned(),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(missing, Err(Error::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn test_toggle_favorite_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let id = command.create(helpers::create_input("Tacos")).await?;

    assert!(command.toggle_favorite(&id).await?);
    assert!(query.find(&id).await?.unwrap().is_favorite);
    assert!(!command.toggle_favorite(&id).await?);

    command.delete(&id).await?;
    assert!(query.find(&id).await?.is_none());
    assert!(matches!(command.delete(&id).await, Err(Error::NotFound(_))));
    assert!(matches!(
        command.toggle_favorite(&id).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_corrupted_list_column_reads_as_empty() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool.clone());

    let id = command.create(helpers::create_input("Tacos")).await?;
    sqlx::query("UPDATE recipe SET tags = '[\"mexican\", oops' WHERE id = ?")
        .bind(&id)
        .execute(&pool)
        .await?;

    let recipe = query.find(&id).await?.unwrap();
    assert!(recipe.tags.is_empty());
    assert_eq!(recipe.ingredients.len(), 2);

    Ok(())
}
