use clap::{Args, Subcommand};
use sqlx::SqlitePool;
use whatsfordinner_restaurant::{
    Command, CreateInput, Query, Restaurant, ServiceKind, UpdateInput,
};

#[derive(Subcommand)]
pub enum PlaceCommand {
    /// Save a new restaurant or takeaway
    Add(AddArgs),
    /// List saved places, oldest first
    List,
    /// Show every detail of a place, service options included
    Show { id: String },
    /// Change a saved place, options left out keep their value
    Edit(EditArgs),
    /// Delete a place by id
    Delete { id: String },
    /// Flip the favourite flag of a place
    Favorite { id: String },
}

#[derive(Args)]
pub struct AddArgs {
    name: String,
    #[arg(long)]
    cuisine: Option<String>,
    /// 1 (`$`) to 4 (`$$$$`)
    #[arg(long)]
    price: Option<u8>,
    /// 0 to 5
    #[arg(long)]
    rating: Option<f32>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    website: Option<String>,
    /// Free text used to guess the vibe, e.g. "cheap and casual"
    #[arg(long)]
    notes: Option<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long)]
    dine_in: bool,
    #[arg(long)]
    takeout: bool,
    #[arg(long)]
    delivery: bool,
    #[arg(long)]
    favorite: bool,
}

#[derive(Args, Default)]
pub struct EditArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    cuisine: Option<String>,
    #[arg(long)]
    price: Option<u8>,
    #[arg(long)]
    rating: Option<f32>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    website: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    /// Replaces every tag, repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// `true` or `false`
    #[arg(long)]
    dine_in: Option<bool>,
    #[arg(long)]
    takeout: Option<bool>,
    #[arg(long)]
    delivery: Option<bool>,
}

impl EditArgs {
    fn apply(self, restaurant: Restaurant) -> UpdateInput {
        UpdateInput {
            name: self.name.unwrap_or(restaurant.name),
            cuisine: self.cuisine.or(restaurant.cuisine),
            price_range: self.price.or(restaurant.price_range),
            rating: self.rating.or(restaurant.rating),
            address: self.address.or(restaurant.address),
            phone_number: self.phone.or(restaurant.phone_number),
            website: self.website.or(restaurant.website),
            notes: self.notes.or(restaurant.notes),
            tags: if self.tags.is_empty() {
                restaurant.tags
            } else {
                self.tags
            },
            is_delivery_available: self.delivery.unwrap_or(restaurant.is_delivery_available),
            is_takeout_available: self.takeout.unwrap_or(restaurant.is_takeout_available),
            is_dine_in_available: self.dine_in.unwrap_or(restaurant.is_dine_in_available),
        }
    }
}

pub async fn run(config: whatsfordinner::Config, command: PlaceCommand) -> anyhow::Result<()> {
    let pool = super::pool(&config).await?;

    match command {
        PlaceCommand::Add(args) => {
            let id = Command(pool)
                .create(CreateInput {
                    name: args.name,
                    cuisine: args.cuisine,
                    price_range: args.price,
                    rating: args.rating,
                    address: args.address,
                    phone_number: args.phone,
                    website: args.website,
                    notes: args.notes,
                    tags: args.tags,
                    is_delivery_available: args.delivery,
                    is_takeout_available: args.takeout,
                    is_dine_in_available: args.dine_in,
                    is_favorite: args.favorite,
                })
                .await?;

            println!("{id}");
        }
        PlaceCommand::List => {
            let restaurants = Query(pool).all().await?;
            if restaurants.is_empty() {
                println!("No places saved yet!");
            }

            for restaurant in restaurants {
                println!("{}", line(&restaurant));
            }
        }
        PlaceCommand::Show { id } => {
            println!("{}", details(&find(&pool, &id).await?));
        }
        PlaceCommand::Edit(args) => {
            edit(&pool, args).await?;
        }
        PlaceCommand::Delete { id } => {
            Command(pool).delete(id).await?;
        }
        PlaceCommand::Favorite { id } => {
            let favorite = Command(pool).toggle_favorite(id).await?;
            println!("{}", if favorite { "Favourite" } else { "Not a favourite" });
        }
    }

    Ok(())
}

async fn find(pool: &SqlitePool, id: &str) -> anyhow::Result<Restaurant> {
    match Query(pool.clone()).find(id).await? {
        Some(restaurant) => Ok(restaurant),
        None => anyhow::bail!("restaurant {id} not found"),
    }
}

async fn edit(pool: &SqlitePool, args: EditArgs) -> anyhow::Result<()> {
    let restaurant = find(pool, &args.id).await?;
    let id = restaurant.id.to_owned();

    Command(pool.clone()).update(id, args.apply(restaurant)).await?;

    Ok(())
}

fn line(restaurant: &Restaurant) -> String {
    let mut line = format!("{}  {}", restaurant.id, restaurant.name);

    let details = [restaurant.cuisine.to_owned(), restaurant.price_label()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }

    let services = restaurant
        .services()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    if !services.is_empty() {
        line.push_str(&format!(" [{}]", services.join(", ")));
    }

    if restaurant.is_favorite {
        line.push_str(" *");
    }

    line
}

fn details(restaurant: &Restaurant) -> String {
    let mut lines = vec![if restaurant.is_favorite {
        format!("{} *", restaurant.name)
    } else {
        restaurant.name.to_owned()
    }];

    let summary = [
        restaurant.cuisine.to_owned(),
        restaurant.price_label(),
        restaurant.rating.map(|r| format!("{r:.1}/5")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();
    if !summary.is_empty() {
        lines.push(format!("  {}", summary.join(", ")));
    }

    for (label, value) in [
        ("Address", &restaurant.address),
        ("Phone", &restaurant.phone_number),
        ("Website", &restaurant.website),
        ("Notes", &restaurant.notes),
    ] {
        if let Some(value) = value {
            lines.push(format!("  {label}: {value}"));
        }
    }

    if !restaurant.tags.is_empty() {
        lines.push(format!("  Tags: {}", restaurant.tags.join(", ")));
    }

    lines.push(String::new());
    let services = restaurant.services();
    for kind in [ServiceKind::DineIn, ServiceKind::Takeout, ServiceKind::Delivery] {
        let available = if services.contains(&kind) { "yes" } else { "no" };
        lines.push(format!("  {kind}: {available}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line() {
        let restaurant = Restaurant {
            id: "01J".to_owned(),
            name: "Lucky Dragon".to_owned(),
            cuisine: Some("Chinese".to_owned()),
            price_range: Some(2),
            is_takeout_available: true,
            is_delivery_available: true,
            ..Default::default()
        };

        assert_eq!(
            line(&restaurant),
            "01J  Lucky Dragon (Chinese, $$) [Takeout, Delivery]"
        );
    }

    #[test]
    fn test_details_shows_service_flags() {
        let restaurant = Restaurant {
            name: "Lucky Dragon".to_owned(),
            cuisine: Some("Chinese".to_owned()),
            price_range: Some(2),
            rating: Some(4.5),
            phone_number: Some("555-0101".to_owned()),
            notes: Some("Great dumplings".to_owned()),
            is_takeout_available: true,
            is_delivery_available: true,
            is_favorite: true,
            ..Default::default()
        };

        assert_eq!(
            details(&restaurant),
            concat!(
                "Lucky Dragon *\n",
                "  Chinese, $$, 4.5/5\n",
                "  Phone: 555-0101\n",
                "  Notes: Great dumplings\n",
                "\n",
                "  Dine-in: no\n",
                "  Takeout: yes\n",
                "  Delivery: yes",
            )
        );
    }

    #[test]
    fn test_apply_overrides_service_flags() {
        let restaurant = Restaurant {
            name: "Lucky Dragon".to_owned(),
            notes: Some("Great dumplings".to_owned()),
            is_takeout_available: true,
            ..Default::default()
        };

        let input = EditArgs {
            dine_in: Some(true),
            takeout: Some(false),
            ..Default::default()
        }
        .apply(restaurant);

        assert_eq!(input.name, "Lucky Dragon");
        assert_eq!(input.notes.as_deref(), Some("Great dumplings"));
        assert!(input.is_dine_in_available);
        assert!(!input.is_takeout_available);
        assert!(!input.is_delivery_available);
    }

    #[tokio::test]
    async fn test_edit_then_show() -> anyhow::Result<()> {
        let dir = temp_dir::TempDir::new()?;
        let pool = super::super::test_pool(&dir).await?;

        let id = Command(pool.clone())
            .create(CreateInput {
                name: "Lucky Dragon".to_owned(),
                cuisine: Some("Chinese".to_owned()),
                is_takeout_available: true,
                ..Default::default()
            })
            .await?;

        edit(
            &pool,
            EditArgs {
                id: id.to_owned(),
                delivery: Some(true),
                price: Some(2),
                ..Default::default()
            },
        )
        .await?;

        let restaurant = find(&pool, &id).await?;
        assert_eq!(restaurant.cuisine.as_deref(), Some("Chinese"));
        assert_eq!(restaurant.price_range, Some(2));
        assert!(restaurant.is_delivery_available);
        assert!(details(&restaurant).contains("  Delivery: yes"));

        let args = EditArgs {
            id: "missing".to_owned(),
            ..Default::default()
        };
        assert!(edit(&pool, args).await.is_err());

        Ok(())
    }
}
