//! Recipe list screen state: server snapshot plus in-memory filtering.
//!
//! Filtering is recomputed from the full snapshot on every input change;
//! the network is only hit on focus events, which replace the snapshot
//! wholesale (no diffing).

use crate::api::RecipeApi;
use crate::types::Recipe;

/// Composable filter over a recipe snapshot: category equality intersected
/// with a case-insensitive substring match on the name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    search: String,
    category: Option<String>,
}

impl RecipeFilter {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Select a category, or clear the selection when the category is
    /// already selected (toggle semantics).
    pub fn toggle_category(&mut self, name: &str) {
        if self.category.as_deref() == Some(name) {
            self.category = None;
        } else {
            self.category = Some(name.to_string());
        }
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(category) = &self.category {
            if recipe.category_name.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            if !recipe.name.to_lowercase().contains(&query) {
                return false;
            }
        }

        true
    }
}

/// The overview screen's state: the latest server snapshot and the active
/// filter.
#[derive(Debug, Default)]
pub struct RecipeList {
    recipes: Vec<Recipe>,
    pub filter: RecipeFilter,
}

impl RecipeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refetch the snapshot. Called on every focus event; the current filter
    /// is reapplied to the new snapshot by the next `visible()` call.
    pub async fn refresh(&mut self, api: &dyn RecipeApi) {
        self.recipes = api.list_recipes().await;
    }

    /// The unfiltered server snapshot.
    pub fn snapshot(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes passing the active filter, in snapshot order.
    pub fn visible(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| self.filter.matches(r))
            .collect()
    }

    /// Favorited recipes, ignoring the filter (the likes screen).
    pub fn favorites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite).collect()
    }
}
