//! Recipe API client.
//!
//! One operation per REST resource action, behind a trait so screens can be
//! exercised against an in-memory fake. Failure behavior is asymmetric on
//! purpose, matching the deployed client: reads absorb errors into
//! empty/`None` sentinels (and log them), create/update propagate the status
//! and response body, toggle/delete return sentinels.

mod client;
mod fake;

pub use client::HttpApi;
pub use fake::FakeApi;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::image::ImageUpload;
use crate::types::{Category, Recipe, RecipeIngredient, RecipePayload};

/// Trait for the recipe API, enabling mockability in tests.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// List all recipes. Degrades to an empty vec on failure.
    async fn list_recipes(&self) -> Vec<Recipe>;

    /// Fetch a single recipe. Degrades to `None` on failure.
    async fn get_recipe(&self, id: i64) -> Option<Recipe>;

    /// List all categories. Degrades to an empty vec on failure.
    async fn list_categories(&self) -> Vec<Category>;

    /// List the ingredients of a recipe. Degrades to an empty vec on failure.
    async fn list_ingredients(&self, recipe_id: i64) -> Vec<RecipeIngredient>;

    /// Create a recipe via multipart form (`recipe` JSON field plus optional
    /// `image` binary field). Returns the stored recipe.
    async fn create_recipe(
        &self,
        payload: &RecipePayload,
        image: Option<&ImageUpload>,
    ) -> Result<Recipe, ApiError>;

    /// Update a recipe; same body shape as create.
    async fn update_recipe(
        &self,
        id: i64,
        payload: &RecipePayload,
        image: Option<&ImageUpload>,
    ) -> Result<Recipe, ApiError>;

    /// Flip the favorite flag server-side and return the updated recipe.
    /// Degrades to `None` on failure.
    async fn toggle_favorite(&self, id: i64) -> Option<Recipe>;

    /// Delete a recipe. Returns `false` on any failure, including unknown ids.
    async fn delete_recipe(&self, id: i64) -> bool;
}
