use clap::{Parser, Subcommand};
use log::error;
use recipe_catalog::{CatalogConfig, CatalogError, RecipeDetail, RecipeServiceBuilder, RecipeSummary};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "recipe-catalog")]
#[command(author, version, about = "Browse recipes from the public recipe catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes in a category
    List {
        /// Category name (defaults to the configured category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show ingredients and instructions for a recipe
    Show {
        /// Recipe id
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let kind = match &e {
                CatalogError::Fetch(err) => err.kind(),
                CatalogError::Transport(_) => "transport",
                CatalogError::Config(_) => "config",
            };
            eprintln!("Could not load recipes, please retry ({kind}).");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CatalogError> {
    let config = CatalogConfig::load()?;
    let service = RecipeServiceBuilder::from_config(&config).build()?;

    match cli.command {
        Commands::List { category } => {
            let category = category.unwrap_or(config.default_category);
            let recipes = service.fetch_summaries(&category).await?;
            if cli.json {
                print_json(&recipes);
            } else {
                print_summaries(&recipes);
            }
        }
        Commands::Show { id } => {
            let detail = service.fetch_detail(&id).await?;
            if cli.json {
                print_json(&detail);
            } else {
                print_detail(&detail);
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize output: {}", e),
    }
}

fn print_summaries(recipes: &[RecipeSummary]) {
    for recipe in recipes {
        println!("{:>8}  {}", recipe.id, recipe.name);
    }
}

fn print_detail(detail: &RecipeDetail) {
    println!("{} ({})", detail.name, detail.area);
    if !detail.youtube_url.is_empty() {
        println!("Video: {}", detail.youtube_url);
    }

    println!("\nIngredients:");
    for ingredient in detail.ingredients_by_name() {
        println!("  - {}: {}", ingredient.name, ingredient.measurement);
    }

    println!("\nInstructions:\n{}", detail.instructions);
}
