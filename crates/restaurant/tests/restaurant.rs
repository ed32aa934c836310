use temp_dir::TempDir;
use whatsfordinner_restaurant::{Command, Query, ServiceKind, UpdateInput};
use whatsfordinner_shared::Error;

mod helpers;

#[tokio::test]
async fn test_create_then_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let mut input = helpers::create_input("Lucky Dragon");
    input.is_takeout_available = true;
    input.tags = vec!["asian".to_owned()];
    let id = command.create(input).await?;

    let restaurant = query.find(&id).await?.unwrap();
    assert_eq!(restaurant.name, "Lucky Dragon");
    assert_eq!(restaurant.price_label().as_deref(), Some("$$"));
    assert_eq!(restaurant.rating, Some(4.5));
    assert_eq!(restaurant.tags, vec!["asian"]);
    assert_eq!(
        restaurant.services(),
        vec![ServiceKind::DineIn, ServiceKind::Takeout]
    );

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_out_of_range_values() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());

    let mut pricey = helpers::create_input("Sakura Sushi");
    pricey.price_range = Some(5);
    assert!(matches!(command.create(pricey).await, Err(Error::Validate(_))));

    let mut rated = helpers::create_input("Sakura Sushi");
    rated.rating = Some(5.5);
    assert!(matches!(command.create(rated).await, Err(Error::Validate(_))));

    assert!(matches!(
        command.create(helpers::create_input("")).await,
        Err(Error::Validate(_))
    ));

    assert!(Query(pool).all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_update_toggle_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let first = command.create(helpers::create_input("Mario's")).await?;
    let second = command.create(helpers::create_input("Burger Joint")).await?;

    command
        .update(
            &second,
            UpdateInput {
                name: "The Burger Joint".to_owned(),
                cuisine: Some("American".to_owned()),
                is_takeout_available: true,
                ..Default::default()
            },
        )
        .await?;

    let restaurant = query.find(&second).await?.unwrap();
    assert_eq!(restaurant.name, "The Burger Joint");
    assert_eq!(restaurant.price_range, None);
    assert_eq!(restaurant.services(), vec![ServiceKind::Takeout]);

    assert!(command.toggle_favorite(&first).await?);
    assert!(query.find(&first).await?.unwrap().is_favorite);

    command.delete(&first).await?;
    let names = query
        .all()
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["The Burger Joint"]);

    assert!(matches!(command.delete(&first).await, Err(Error::NotFound(_))));

    Ok(())
}
