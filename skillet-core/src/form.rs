//! Recipe edit form state machine.
//!
//! Backs both the add and edit flows: loads existing data (categories, then
//! recipe, then ingredients - sequentially, as the screen does), reconciles
//! the recipe's `categoryName` against the loaded categories in an explicit
//! second phase, validates all fields at once, and builds the submission
//! payload with blank ingredient rows dropped.

use std::fmt;

use thiserror::Error;

use crate::api::RecipeApi;
use crate::error::ApiError;
use crate::image::ImageUpload;
use crate::types::{Category, IngredientPayload, Recipe, RecipeIngredient, RecipePayload};

/// Category assigned to new recipes before the user picks one.
pub const DEFAULT_CATEGORY_ID: i64 = 1;

/// Number of empty ingredient rows a blank form starts with.
pub const BLANK_INGREDIENT_ROWS: usize = 3;

/// Form lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    LoadingNew,
    LoadingExisting,
    Ready,
    Saving,
    Deleting,
}

/// One editable ingredient row. Quantity is kept as entered text and only
/// coerced to a number at submission time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientRow {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl IngredientRow {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn new(name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }

    fn from_fetched(ingredient: &RecipeIngredient) -> Self {
        Self {
            name: ingredient.ingredient_name.clone(),
            quantity: ingredient
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_default(),
            unit: ingredient.unit.clone().unwrap_or_default(),
        }
    }
}

/// All validation failures from one save attempt, reported together.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<String>,
}

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

/// Why a save attempt failed.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// State for the add/edit recipe screen.
#[derive(Debug)]
pub struct RecipeForm {
    recipe_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub is_healthy: bool,
    /// Favorite flag of the loaded recipe; `None` for new recipes, which are
    /// submitted as favorites (observed behavior of the deployed client).
    is_favorite: Option<bool>,
    pub category_id: Option<i64>,
    /// Category name from the fetched recipe, pending reconciliation.
    category_name: Option<String>,
    pub image: Option<ImageUpload>,
    pub ingredients: Vec<IngredientRow>,
    categories: Vec<Category>,
    phase: FormPhase,
}

impl RecipeForm {
    /// A blank form for a new recipe: empty fields plus three blank
    /// ingredient rows.
    pub fn blank() -> Self {
        Self {
            recipe_id: None,
            name: String::new(),
            description: String::new(),
            instructions: String::new(),
            is_healthy: false,
            is_favorite: None,
            category_id: Some(DEFAULT_CATEGORY_ID),
            category_name: None,
            image: None,
            ingredients: vec![IngredientRow::blank(); BLANK_INGREDIENT_ROWS],
            categories: Vec::new(),
            phase: FormPhase::Ready,
        }
    }

    /// Load the form, fetching categories and (for an existing recipe) the
    /// recipe and its ingredients. Fetches run sequentially; the category
    /// reconciliation runs once everything is present.
    pub async fn load(api: &dyn RecipeApi, recipe_id: Option<i64>) -> Self {
        let mut form = Self::blank();
        form.phase = match recipe_id {
            Some(_) => FormPhase::LoadingExisting,
            None => FormPhase::LoadingNew,
        };

        form.categories = api.list_categories().await;

        if let Some(id) = recipe_id {
            form.recipe_id = Some(id);
            match api.get_recipe(id).await {
                Some(recipe) => {
                    let ingredients = api.list_ingredients(id).await;
                    form.apply_recipe(&recipe, &ingredients);
                }
                None => {
                    tracing::warn!(id, "recipe not found while loading edit form");
                }
            }
        }

        form.resolve_category();
        form.phase = FormPhase::Ready;
        form
    }

    fn apply_recipe(&mut self, recipe: &Recipe, ingredients: &[RecipeIngredient]) {
        self.name = recipe.name.clone();
        self.description = recipe.description.clone();
        self.instructions = recipe.instructions.clone().unwrap_or_default();
        self.is_healthy = recipe.is_healthy;
        self.is_favorite = Some(recipe.is_favorite);
        self.category_name = recipe.category_name.clone();
        // The response carries only categoryName; the id is resolved later.
        self.category_id = None;
        self.ingredients = ingredients.iter().map(IngredientRow::from_fetched).collect();
    }

    /// Resolve the fetched `categoryName` to a category id, falling back to
    /// the first known category when the name is unknown. A pure step run
    /// once both the recipe and the categories have arrived.
    fn resolve_category(&mut self) {
        let Some(name) = &self.category_name else {
            return;
        };
        if self.categories.is_empty() {
            return;
        }
        self.category_id = self
            .categories
            .iter()
            .find(|c| &c.name == name)
            .or(self.categories.first())
            .map(|c| c.id);
    }

    pub fn recipe_id(&self) -> Option<i64> {
        self.recipe_id
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Append a blank ingredient row ("Add More Ingredients").
    pub fn add_ingredient_row(&mut self) {
        self.ingredients.push(IngredientRow::blank());
    }

    pub fn attach_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
    }

    /// Validate the form and build the submission payload.
    ///
    /// Rows with an empty name are dropped first, then every error across the
    /// remaining fields is accumulated; any error aborts the save with the
    /// full list.
    pub fn validate(&self) -> Result<RecipePayload, ValidationErrors> {
        let mut errors = Vec::new();
        let mut submitted = Vec::new();

        if self.name.is_empty() {
            errors.push("Title is required".to_string());
        }
        if self.description.is_empty() {
            errors.push("Description is required".to_string());
        }

        for row in self.ingredients.iter().filter(|r| !r.name.is_empty()) {
            let quantity = row.quantity.trim();
            if quantity.is_empty() {
                errors.push("Quantity is required".to_string());
                continue;
            }
            match quantity.parse::<f64>() {
                Ok(quantity) => submitted.push(IngredientPayload {
                    ingredient_id: None,
                    ingredient_name: row.name.clone(),
                    quantity,
                    unit: if row.unit.is_empty() {
                        None
                    } else {
                        Some(row.unit.clone())
                    },
                }),
                Err(_) => errors.push("Quantity must be a number".to_string()),
            }
        }

        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        Ok(RecipePayload {
            name: self.name.clone(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
            is_healthy: self.is_healthy,
            is_favorite: self.is_favorite.unwrap_or(true),
            category_id: self.category_id.unwrap_or(DEFAULT_CATEGORY_ID),
            recipe_ingredients: submitted,
        })
    }

    /// Validate and submit, as create or update depending on whether the form
    /// was loaded with an id. Returns the stored recipe on success.
    pub async fn save(&mut self, api: &dyn RecipeApi) -> Result<Recipe, SaveError> {
        let payload = self.validate()?;

        self.phase = FormPhase::Saving;
        let result = match self.recipe_id {
            Some(id) => api.update_recipe(id, &payload, self.image.as_ref()).await,
            None => api.create_recipe(&payload, self.image.as_ref()).await,
        };
        self.phase = FormPhase::Ready;

        Ok(result?)
    }

    /// Issue the delete call. The caller is responsible for user
    /// confirmation before invoking this. Returns the server's sentinel;
    /// local state is untouched on failure.
    pub async fn delete(&mut self, api: &dyn RecipeApi) -> bool {
        let Some(id) = self.recipe_id else {
            return false;
        };
        self.phase = FormPhase::Deleting;
        let deleted = api.delete_recipe(id).await;
        self.phase = FormPhase::Ready;
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FakeApi;

    fn filled_form() -> RecipeForm {
        let mut form = RecipeForm::blank();
        form.name = "Stew".to_string();
        form.description = "Hearty".to_string();
        form
    }

    #[test]
    fn test_blank_form_has_three_empty_rows() {
        let form = RecipeForm::blank();
        assert_eq!(form.ingredients.len(), BLANK_INGREDIENT_ROWS);
        assert!(form.ingredients.iter().all(|r| r.name.is_empty()));
        assert_eq!(form.category_id, Some(DEFAULT_CATEGORY_ID));
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[test]
    fn test_blank_rows_are_dropped_from_payload() {
        // Four rows, two named -> exactly two submitted.
        let mut form = filled_form();
        form.ingredients[0] = IngredientRow::new("Flour", "200", "g");
        form.add_ingredient_row();
        form.ingredients[3] = IngredientRow::new("Salt", "1", "tsp");

        let payload = form.validate().unwrap();
        assert_eq!(payload.recipe_ingredients.len(), 2);
        assert_eq!(payload.recipe_ingredients[0].ingredient_name, "Flour");
        assert_eq!(payload.recipe_ingredients[1].ingredient_name, "Salt");
    }

    #[test]
    fn test_missing_quantity_blocks_save() {
        let mut form = filled_form();
        form.ingredients[0] = IngredientRow::new("Flour", "", "g");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.messages(), ["Quantity is required"]);
    }

    #[test]
    fn test_non_numeric_quantity_blocks_save() {
        let mut form = filled_form();
        form.ingredients[0] = IngredientRow::new("Flour", "a pinch", "");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.messages(), ["Quantity must be a number"]);
    }

    #[test]
    fn test_errors_accumulate_and_join() {
        let mut form = RecipeForm::blank();
        form.ingredients[0] = IngredientRow::new("Flour", "", "g");

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "Title is required",
                "Description is required",
                "Quantity is required"
            ]
        );
        assert_eq!(
            errors.to_string(),
            "Title is required\nDescription is required\nQuantity is required"
        );
    }

    #[test]
    fn test_unit_is_optional() {
        let mut form = filled_form();
        form.ingredients[0] = IngredientRow::new("Flour", "200", "");

        let payload = form.validate().unwrap();
        assert_eq!(payload.recipe_ingredients[0].unit, None);
    }

    #[test]
    fn test_new_recipe_defaults_to_favorite() {
        let payload = filled_form().validate().unwrap();
        assert!(payload.is_favorite);
    }

    #[test]
    fn test_quantity_coerced_to_number() {
        let mut form = filled_form();
        form.ingredients[0] = IngredientRow::new("Flour", "2.5", "cups");

        let payload = form.validate().unwrap();
        assert_eq!(payload.recipe_ingredients[0].quantity, 2.5);
    }

    #[tokio::test]
    async fn test_load_existing_resolves_category_and_formats_quantities() {
        let recipe = Recipe {
            id: 9,
            name: "Pasta Bake".to_string(),
            description: "Cheesy".to_string(),
            instructions: Some("Bake it".to_string()),
            is_healthy: false,
            is_favorite: false,
            category_name: Some("Dinner".to_string()),
            image: None,
        };
        let ingredients = vec![RecipeIngredient {
            ingredient_id: 1,
            ingredient_name: "Pasta".to_string(),
            quantity: Some(400.0),
            unit: Some("g".to_string()),
        }];
        let api = FakeApi::new()
            .with_categories(&["Breakfast", "Lunch", "Dinner"])
            .with_recipe(recipe, ingredients);

        let form = RecipeForm::load(&api, Some(9)).await;
        assert_eq!(form.recipe_id(), Some(9));
        assert_eq!(form.category_id, Some(3));
        assert_eq!(form.ingredients.len(), 1);
        // 400.0 renders without a trailing fraction, like the screen shows it
        assert_eq!(form.ingredients[0].quantity, "400");
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[tokio::test]
    async fn test_unknown_category_name_falls_back_to_first() {
        let recipe = Recipe {
            id: 2,
            name: "Mystery".to_string(),
            description: "?".to_string(),
            instructions: None,
            is_healthy: false,
            is_favorite: false,
            category_name: Some("Discontinued".to_string()),
            image: None,
        };
        let api = FakeApi::new()
            .with_categories(&["Breakfast", "Lunch"])
            .with_recipe(recipe, Vec::new());

        let form = RecipeForm::load(&api, Some(2)).await;
        assert_eq!(form.category_id, Some(1));
    }

    #[tokio::test]
    async fn test_save_failure_reports_status_and_body() {
        let api = FakeApi::new().with_write_failures();
        let mut form = filled_form();

        match form.save(&api).await {
            Err(SaveError::Api(ApiError::Status { status, body })) => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected status error, got {:?}", other.map(|r| r.id)),
        }
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[tokio::test]
    async fn test_validation_failure_blocks_network_call() {
        // Saving an invalid form against an empty fake must not create
        // anything.
        let api = FakeApi::new();
        let mut form = RecipeForm::blank();

        assert!(matches!(
            form.save(&api).await,
            Err(SaveError::Validation(_))
        ));
        assert!(api.list_recipes().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_without_id_is_a_no_op() {
        let api = FakeApi::new();
        let mut form = RecipeForm::blank();
        assert!(!form.delete(&api).await);
    }
}
