use clap::{Args, Subcommand};
use sqlx::SqlitePool;
use whatsfordinner_recipe::{Command, CreateInput, Query, Recipe, RecipeIngredient, UpdateInput};

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Save a new recipe
    Add(AddArgs),
    /// List saved recipes, oldest first
    List,
    /// Show a recipe with its ingredients and steps
    Show { id: String },
    /// Change a saved recipe, options left out keep their value
    Edit(EditArgs),
    /// Delete a recipe by id
    Delete { id: String },
    /// Flip the favourite flag of a recipe
    Favorite { id: String },
}

#[derive(Args)]
pub struct AddArgs {
    name: String,
    #[arg(long)]
    description: Option<String>,
    /// Ingredient name, repeat for each ingredient
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Preparation step, repeat in order
    #[arg(long = "step")]
    instructions: Vec<String>,
    /// Cooking time in minutes
    #[arg(long)]
    cook_time: Option<u32>,
    /// Preparation time in minutes
    #[arg(long)]
    prep_time: Option<u32>,
    #[arg(long)]
    servings: Option<u32>,
    /// Tag such as `italian` or `quick`, repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long)]
    favorite: bool,
}

#[derive(Args, Default)]
pub struct EditArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Replaces the whole ingredient list, repeat for each ingredient
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Replaces every step, repeat in order
    #[arg(long = "step")]
    instructions: Vec<String>,
    #[arg(long)]
    cook_time: Option<u32>,
    #[arg(long)]
    prep_time: Option<u32>,
    #[arg(long)]
    servings: Option<u32>,
    /// Replaces every tag, repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,
}

impl EditArgs {
    fn apply(self, recipe: Recipe) -> UpdateInput {
        UpdateInput {
            name: self.name.unwrap_or(recipe.name),
            description: self.description.or(recipe.description),
            ingredients: if self.ingredients.is_empty() {
                recipe.ingredients
            } else {
                self.ingredients.into_iter().map(RecipeIngredient::new).collect()
            },
            instructions: if self.instructions.is_empty() {
                recipe.instructions
            } else {
                self.instructions
            },
            cook_time_minutes: self.cook_time.or(recipe.cook_time_minutes),
            prep_time_minutes: self.prep_time.or(recipe.prep_time_minutes),
            servings: self.servings.or(recipe.servings),
            tags: if self.tags.is_empty() { recipe.tags } else { self.tags },
        }
    }
}

pub async fn run(config: whatsfordinner::Config, command: RecipeCommand) -> anyhow::Result<()> {
    let pool = super::pool(&config).await?;

    match command {
        RecipeCommand::Add(args) => {
            let id = Command(pool)
                .create(CreateInput {
                    name: args.name,
                    description: args.description,
                    ingredients: args.ingredients.into_iter().map(RecipeIngredient::new).collect(),
                    instructions: args.instructions,
                    cook_time_minutes: args.cook_time,
                    prep_time_minutes: args.prep_time,
                    servings: args.servings,
                    tags: args.tags,
                    is_favorite: args.favorite,
                })
                .await?;

            println!("{id}");
        }
        RecipeCommand::List => {
            let recipes = Query(pool).all().await?;
            if recipes.is_empty() {
                println!("No recipes saved yet!");
            }

            for recipe in recipes {
                println!("{}", line(&recipe));
            }
        }
        RecipeCommand::Show { id } => {
            println!("{}", details(&find(&pool, &id).await?));
        }
        RecipeCommand::Edit(args) => {
            edit(&pool, args).await?;
        }
        RecipeCommand::Delete { id } => {
            Command(pool).delete(id).await?;
        }
        RecipeCommand::Favorite { id } => {
            let favorite = Command(pool).toggle_favorite(id).await?;
            println!("{}", if favorite { "Favourite" } else { "Not a favourite" });
        }
    }

    Ok(())
}

async fn find(pool: &SqlitePool, id: &str) -> anyhow::Result<Recipe> {
    match Query(pool.clone()).find(id).await? {
        Some(recipe) => Ok(recipe),
        None => anyhow::bail!("recipe {id} not found"),
    }
}

async fn edit(pool: &SqlitePool, args: EditArgs) -> anyhow::Result<()> {
    let recipe = find(pool, &args.id).await?;
    let id = recipe.id.to_owned();

    Command(pool.clone()).update(id, args.apply(recipe)).await?;

    Ok(())
}

fn line(recipe: &Recipe) -> String {
    let mut line = format!("{}  {}", recipe.id, recipe.name);

    if let Some(minutes) = recipe.total_time_minutes() {
        line.push_str(&format!(" ({minutes} min)"));
    }

    if !recipe.tags.is_empty() {
        line.push_str(&format!(" [{}]", recipe.tags.join(", ")));
    }

    if recipe.is_favorite {
        line.push_str(" *");
    }

    line
}

fn details(recipe: &Recipe) -> String {
    let mut lines = vec![if recipe.is_favorite {
        format!("{} *", recipe.name)
    } else {
        recipe.name.to_owned()
    }];

    if let Some(description) = &recipe.description {
        lines.push(format!("  {description}"));
    }

    let facts = [
        recipe.prep_time_minutes.map(|m| format!("prep {m} min")),
        recipe.cook_time_minutes.map(|m| format!("cook {m} min")),
        recipe.servings.map(|s| format!("serves {s}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();
    if !facts.is_empty() {
        lines.push(format!("  {}", facts.join(", ")));
    }

    if !recipe.tags.is_empty() {
        lines.push(format!("  Tags: {}", recipe.tags.join(", ")));
    }

    lines.push(String::new());
    lines.push("Ingredients".to_owned());
    if recipe.ingredients.is_empty() {
        lines.push("  None listed".to_owned());
    }
    for ingredient in &recipe.ingredients {
        let amount = [
            ingredient.quantity.as_deref(),
            ingredient.unit.as_deref(),
            Some(ingredient.name.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        lines.push(format!("  - {}", amount.join(" ")));
    }

    lines.push(String::new());
    lines.push("Steps".to_owned());
    if recipe.instructions.is_empty() {
        lines.push("  None listed".to_owned());
    }
    for (i, step) in recipe.instructions.iter().enumerate() {
        lines.push(format!("  {}. {step}", i + 1));
    }

    lines.join("\n")
}
