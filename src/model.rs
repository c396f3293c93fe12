use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INGREDIENT_ID: AtomicU64 = AtomicU64::new(1);

/// Basic listing entry for a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecipeSummary {
    pub name: String,
    /// Passed through as-is to whatever loads images
    pub thumbnail_url: String,
    pub id: String,
}

/// Full details for a single recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub area: String,
    pub instructions: String,
    pub youtube_url: String,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDetail {
    /// Ingredients ordered by name, the way they are displayed
    pub fn ingredients_by_name(&self) -> Vec<&Ingredient> {
        let mut sorted: Vec<&Ingredient> = self.ingredients.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}

/// Opaque identity token for an [`Ingredient`], unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IngredientId(u64);

impl IngredientId {
    fn next() -> Self {
        IngredientId(NEXT_INGREDIENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ingredient-{}", self.0)
    }
}

/// An ingredient name paired with its measurement.
///
/// Equality ignores `id`: two ingredients with the same name and measurement are
/// equal even though they keep distinct identities.
#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub measurement: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measurement: impl Into<String>) -> Self {
        Ingredient {
            id: IngredientId::next(),
            name: name.into(),
            measurement: measurement.into(),
        }
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.measurement == other.measurement
    }
}

impl Eq for Ingredient {}
