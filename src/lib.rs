//! Client for a public recipe catalog API.
//!
//! Lists recipe summaries by category and looks up recipe details, turning the
//! catalog's sparse `strIngredientN` / `strMeasureN` fields into paired
//! [`Ingredient`]s. Every failure is reported as one [`FetchError`] kind.

pub mod builder;
pub mod config;
pub mod decoders;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod response;
pub mod state;
pub mod transport;

pub use crate::builder::RecipeServiceBuilder;
pub use crate::config::CatalogConfig;
pub use crate::error::{CatalogError, FetchError, TransportError};
pub use crate::model::{Ingredient, IngredientId, RecipeDetail, RecipeSummary};
pub use crate::pipeline::RecipeService;
pub use crate::state::FetchState;

fn default_service() -> Result<RecipeService, CatalogError> {
    let config = CatalogConfig::load()?;
    Ok(RecipeServiceBuilder::from_config(&config).build()?)
}

/// List the recipes in `category` using configuration from the environment
pub async fn fetch_recipes(category: &str) -> Result<Vec<RecipeSummary>, CatalogError> {
    let service = default_service()?;
    Ok(service.fetch_summaries(category).await?)
}

/// Look up a recipe by id using configuration from the environment
pub async fn fetch_recipe_details(id: &str) -> Result<RecipeDetail, CatalogError> {
    let service = default_service()?;
    Ok(service.fetch_detail(id).await?)
}
