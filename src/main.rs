use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// whatsfordinner - answer a few questions, get dinner sorted
#[derive(Parser)]
#[command(name = "whatsfordinner")]
#[command(about = "Decide what to cook, where to eat or what to make from the pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the questions and get a suggestion
    Decide {
        /// Seed the random picks for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Manage saved recipes
    #[command(subcommand)]
    Recipe(cli::recipe::RecipeCommand),
    /// Manage saved restaurants and takeaways
    #[command(subcommand)]
    Place(cli::place::PlaceCommand),
    /// Manage pantry ingredients
    #[command(subcommand)]
    Pantry(cli::pantry::PantryCommand),
    /// Append sample recipes, places and pantry items
    Seed,
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = whatsfordinner::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    whatsfordinner::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Decide { seed } => cli::decide::run(config, seed).await,
        Commands::Recipe(command) => cli::recipe::run(config, command).await,
        Commands::Place(command) => cli::place::run(config, command).await,
        Commands::Pantry(command) => cli::pantry::run(config, command).await,
        Commands::Seed => cli::seed::run(config).await,
        Commands::Migrate => whatsfordinner::migrate::migrate(&config).await,
        Commands::Reset => whatsfordinner::migrate::reset(&config).await,
    }
}
