use clap::{Args, Subcommand};
use sqlx::SqlitePool;
use whatsfordinner_pantry::{Command, CreateInput, Ingredient, Query, UpdateInput};

#[derive(Subcommand)]
pub enum PantryCommand {
    /// Add an ingredient, in the pantry unless `--out-of-stock`
    Add(AddArgs),
    /// List ingredients in the pantry, then those out of stock
    List,
    /// Change the name or amount of an ingredient
    Edit(EditArgs),
    /// Mark an ingredient as in or out of the pantry
    Toggle { id: String },
    /// Delete an ingredient by id
    Delete { id: String },
}

#[derive(Args)]
pub struct AddArgs {
    name: String,
    #[arg(long)]
    quantity: Option<String>,
    #[arg(long)]
    unit: Option<String>,
    /// e.g. `dairy` or `produce`
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    out_of_stock: bool,
}

#[derive(Args, Default)]
pub struct EditArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    quantity: Option<String>,
    #[arg(long)]
    unit: Option<String>,
    #[arg(long)]
    category: Option<String>,
}

impl EditArgs {
    fn apply(self, ingredient: Ingredient) -> UpdateInput {
        UpdateInput {
            name: self.name.unwrap_or(ingredient.name),
            quantity: self.quantity.or(ingredient.quantity),
            unit: self.unit.or(ingredient.unit),
            category: self.category.or(ingredient.category),
        }
    }
}

pub async fn run(config: whatsfordinner::Config, command: PantryCommand) -> anyhow::Result<()> {
    let pool = super::pool(&config).await?;

    match command {
        PantryCommand::Add(args) => {
            let id = Command(pool)
                .create(CreateInput {
                    name: args.name,
                    quantity: args.quantity,
                    unit: args.unit,
                    category: args.category,
                    in_pantry: !args.out_of_stock,
                })
                .await?;

            println!("{id}");
        }
        PantryCommand::List => {
            let ingredients = Query(pool).all().await?;
            if ingredients.is_empty() {
                println!("Your pantry is empty");
            }

            for line in sections(&ingredients) {
                println!("{line}");
            }
        }
        PantryCommand::Edit(args) => {
            edit(&pool, args).await?;
        }
        PantryCommand::Toggle { id } => {
            let in_pantry = Command(pool).toggle_pantry(id).await?;
            println!("{}", if in_pantry { "In the pantry" } else { "Out of stock" });
        }
        PantryCommand::Delete { id } => {
            Command(pool).delete(id).await?;
        }
    }

    Ok(())
}

async fn edit(pool: &SqlitePool, args: EditArgs) -> anyhow::Result<()> {
    let Some(ingredient) = Query(pool.clone()).find(&args.id).await? else {
        anyhow::bail!("ingredient {} not found", args.id);
    };
    let id = ingredient.id.to_owned();

    Command(pool.clone()).update(id, args.apply(ingredient)).await?;

    Ok(())
}

/// Ingredients in the pantry first, then the out of stock ones, each under a
/// heading. Empty groups are left out.
fn sections(ingredients: &[Ingredient]) -> Vec<String> {
    let (in_pantry, out_of_stock): (Vec<_>, Vec<_>) =
        ingredients.iter().partition(|i| i.in_pantry);

    let mut lines = Vec::new();
    for (heading, group) in [("In your pantry", in_pantry), ("Out of stock", out_of_stock)] {
        if group.is_empty() {
            continue;
        }

        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{heading} ({})", group.len()));
        lines.extend(group.into_iter().map(line));
    }

    lines
}

fn line(ingredient: &Ingredient) -> String {
    let mark = if ingredient.in_pantry { "[x]" } else { "[ ]" };
    let mut line = format!("{mark} {}  {}", ingredient.id, ingredient.name);

    let amount = [ingredient.quantity.as_deref(), ingredient.unit.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    if !amount.is_empty() {
        line.push_str(&format!(" ({})", amount.join(" ")));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: &str, name: &str, in_pantry: bool) -> Ingredient {
        Ingredient {
            id: id.to_owned(),
            name: name.to_owned(),
            in_pantry,
            ..Default::default()
        }
    }

    #[test]
    fn test_line() {
        let ingredient = Ingredient {
            id: "01J".to_owned(),
            name: "Rice".to_owned(),
            quantity: Some("2".to_owned()),
            unit: Some("kg".to_owned()),
            in_pantry: true,
            ..Default::default()
        };

        assert_eq!(line(&ingredient), "[x] 01J  Rice (2 kg)");

        let ingredient = Ingredient {
            in_pantry: false,
            quantity: None,
            unit: None,
            ..ingredient
        };

        assert_eq!(line(&ingredient), "[ ] 01J  Rice");
    }

    #[test]
    fn test_sections_group_by_stock() {
        let ingredients = vec![
            ingredient("1", "Milk", false),
            ingredient("2", "Rice", true),
            ingredient("3", "Eggs", true),
        ];

        assert_eq!(
            sections(&ingredients),
            vec![
                "In your pantry (2)",
                "[x] 2  Rice",
                "[x] 3  Eggs",
                "",
                "Out of stock (1)",
                "[ ] 1  Milk",
            ]
        );
    }

    #[test]
    fn test_sections_skip_empty_groups() {
        let ingredients = vec![ingredient("1", "Rice", true)];

        assert_eq!(sections(&ingredients), vec!["In your pantry (1)", "[x] 1  Rice"]);
        assert!(sections(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_edit_keeps_stock_state() -> anyhow::Result<()> {
        let dir = temp_dir::TempDir::new()?;
        let pool = super::super::test_pool(&dir).await?;

        let id = Command(pool.clone())
            .create(CreateInput {
                name: "Rice".to_owned(),
                quantity: Some("2".to_owned()),
                unit: Some("kg".to_owned()),
                in_pantry: false,
                ..Default::default()
            })
            .await?;

        edit(
            &pool,
            EditArgs {
                id: id.to_owned(),
                name: Some("Basmati rice".to_owned()),
                quantity: Some("1".to_owned()),
                ..Default::default()
            },
        )
        .await?;

        let ingredient = Query(pool.clone()).find(&id).await?.unwrap();
        assert_eq!(ingredient.name, "Basmati rice");
        assert_eq!(ingredient.quantity.as_deref(), Some("1"));
        assert_eq!(ingredient.unit.as_deref(), Some("kg"));
        assert!(!ingredient.in_pantry);

        let args = EditArgs {
            id: "missing".to_owned(),
            ..Default::default()
        };
        assert!(edit(&pool, args).await.is_err());

        Ok(())
    }
}
