//! Recipe detail screen state.
//!
//! Refetches on every focus event - nothing is cached across navigations.
//! The favorite toggle is a single round trip whose response replaces local
//! state wholesale; there is no optimistic flip and no in-flight
//! de-duplication.

use crate::api::RecipeApi;
use crate::types::{Recipe, RecipeIngredient};

#[derive(Debug)]
pub struct RecipeDetail {
    recipe_id: i64,
    pub recipe: Option<Recipe>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl RecipeDetail {
    pub fn new(recipe_id: i64) -> Self {
        Self {
            recipe_id,
            recipe: None,
            ingredients: Vec::new(),
        }
    }

    pub fn recipe_id(&self) -> i64 {
        self.recipe_id
    }

    /// Reload recipe and ingredients. A failed recipe fetch keeps whatever
    /// was shown before; ingredients are always replaced.
    pub async fn refresh(&mut self, api: &dyn RecipeApi) {
        if let Some(recipe) = api.get_recipe(self.recipe_id).await {
            self.recipe = Some(recipe);
        }
        self.ingredients = api.list_ingredients(self.recipe_id).await;
    }

    /// Flip the favorite flag server-side. On success the returned recipe
    /// replaces local state; on failure local state is untouched.
    pub async fn toggle_favorite(&mut self, api: &dyn RecipeApi) -> bool {
        if self.recipe.is_none() {
            return false;
        }

        match api.toggle_favorite(self.recipe_id).await {
            Some(updated) => {
                self.recipe = Some(updated);
                true
            }
            None => false,
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.recipe.as_ref().is_some_and(|r| r.is_favorite)
    }
}
