//! In-memory recipe API for testing.
//!
//! Behaves like the real server for the operations the client uses: assigns
//! ids, resolves `categoryId` to `categoryName`, flips the favorite flag on
//! toggle, and returns the same sentinels for missing ids.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::image::ImageUpload;
use crate::types::{Category, Recipe, RecipeIngredient, RecipePayload};

use super::RecipeApi;

/// A fake recipe API for testing, no network involved.
pub struct FakeApi {
    state: Mutex<FakeState>,
    /// When true, create/update fail with a 500 status.
    fail_writes: bool,
}

#[derive(Default)]
struct FakeState {
    recipes: Vec<StoredRecipe>,
    categories: Vec<Category>,
    next_recipe_id: i64,
    next_ingredient_id: i64,
}

struct StoredRecipe {
    recipe: Recipe,
    ingredients: Vec<RecipeIngredient>,
}

impl FakeApi {
    /// Create an empty fake with no categories or recipes.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_recipe_id: 1,
                next_ingredient_id: 1,
                ..FakeState::default()
            }),
            fail_writes: false,
        }
    }

    /// Register categories, assigning ids in order starting at 1.
    pub fn with_categories(self, names: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.categories = names
                .iter()
                .enumerate()
                .map(|(i, name)| Category {
                    id: i as i64 + 1,
                    name: name.to_string(),
                })
                .collect();
        }
        self
    }

    /// Seed a recipe directly, bypassing the create path.
    pub fn with_recipe(self, recipe: Recipe, ingredients: Vec<RecipeIngredient>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_recipe_id = state.next_recipe_id.max(recipe.id + 1);
            state.recipes.push(StoredRecipe {
                recipe,
                ingredients,
            });
        }
        self
    }

    /// Make create/update fail with a 500 status.
    pub fn with_write_failures(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn store(state: &mut FakeState, id: i64, payload: &RecipePayload, image: Option<&ImageUpload>) -> Recipe {
        let category_name = state
            .categories
            .iter()
            .find(|c| c.id == payload.category_id)
            .map(|c| c.name.clone());

        let ingredients = payload
            .recipe_ingredients
            .iter()
            .map(|ing| {
                let ingredient_id = ing.ingredient_id.unwrap_or_else(|| {
                    let id = state.next_ingredient_id;
                    state.next_ingredient_id += 1;
                    id
                });
                RecipeIngredient {
                    ingredient_id,
                    ingredient_name: ing.ingredient_name.clone(),
                    quantity: Some(ing.quantity),
                    unit: ing.unit.clone(),
                }
            })
            .collect();

        let recipe = Recipe {
            id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            instructions: Some(payload.instructions.clone()),
            is_healthy: payload.is_healthy,
            is_favorite: payload.is_favorite,
            category_name,
            image: image.map(|img| format!("/images/{}", img.file_name)),
        };

        if let Some(existing) = state.recipes.iter_mut().find(|r| r.recipe.id == id) {
            // Updates without a new image keep the stored one.
            let mut recipe = recipe;
            if recipe.image.is_none() {
                recipe.image = existing.recipe.image.clone();
            }
            existing.recipe = recipe.clone();
            existing.ingredients = ingredients;
            recipe
        } else {
            state.recipes.push(StoredRecipe {
                recipe: recipe.clone(),
                ingredients,
            });
            recipe
        }
    }
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    async fn list_recipes(&self) -> Vec<Recipe> {
        let state = self.state.lock().unwrap();
        state.recipes.iter().map(|r| r.recipe.clone()).collect()
    }

    async fn get_recipe(&self, id: i64) -> Option<Recipe> {
        let state = self.state.lock().unwrap();
        state
            .recipes
            .iter()
            .find(|r| r.recipe.id == id)
            .map(|r| r.recipe.clone())
    }

    async fn list_categories(&self) -> Vec<Category> {
        self.state.lock().unwrap().categories.clone()
    }

    async fn list_ingredients(&self, recipe_id: i64) -> Vec<RecipeIngredient> {
        let state = self.state.lock().unwrap();
        state
            .recipes
            .iter()
            .find(|r| r.recipe.id == recipe_id)
            .map(|r| r.ingredients.clone())
            .unwrap_or_default()
    }

    async fn create_recipe(
        &self,
        payload: &RecipePayload,
        image: Option<&ImageUpload>,
    ) -> Result<Recipe, ApiError> {
        if self.fail_writes {
            return Err(ApiError::Status {
                status: 500,
                body: "internal error".to_string(),
            });
        }

        let mut state = self.state.lock().unwrap();
        let id = state.next_recipe_id;
        state.next_recipe_id += 1;
        Ok(Self::store(&mut state, id, payload, image))
    }

    async fn update_recipe(
        &self,
        id: i64,
        payload: &RecipePayload,
        image: Option<&ImageUpload>,
    ) -> Result<Recipe, ApiError> {
        if self.fail_writes {
            return Err(ApiError::Status {
                status: 500,
                body: "internal error".to_string(),
            });
        }

        let mut state = self.state.lock().unwrap();
        if !state.recipes.iter().any(|r| r.recipe.id == id) {
            return Err(ApiError::Status {
                status: 404,
                body: format!("Recipe not found with id: {}", id),
            });
        }
        Ok(Self::store(&mut state, id, payload, image))
    }

    async fn toggle_favorite(&self, id: i64) -> Option<Recipe> {
        let mut state = self.state.lock().unwrap();
        let stored = state.recipes.iter_mut().find(|r| r.recipe.id == id)?;
        stored.recipe.is_favorite = !stored.recipe.is_favorite;
        Some(stored.recipe.clone())
    }

    async fn delete_recipe(&self, id: i64) -> bool {
        let mut state = self.state.lock().unwrap();
        let before = state.recipes.len();
        state.recipes.retain(|r| r.recipe.id != id);
        state.recipes.len() < before
    }
}
