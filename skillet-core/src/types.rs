//! Wire types for the recipe API.
//!
//! Field names follow the server's camelCase JSON. Responses carry the
//! resolved `categoryName`; requests carry the `categoryId` instead.

use serde::{Deserialize, Serialize};

/// A recipe as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub is_healthy: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub category_name: Option<String>,
    /// URL of the stored recipe image, if any.
    #[serde(default)]
    pub image: Option<String>,
}

/// An ingredient line as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// A recipe category. Read-only reference data, used both for filtering and
/// for assignment in the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Request body for create/update, serialized as the JSON `recipe` field of
/// the multipart form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub is_healthy: bool,
    pub is_favorite: bool,
    pub category_id: i64,
    pub recipe_ingredients: Vec<IngredientPayload>,
}

/// An ingredient line in a create/update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPayload {
    /// Set when referring to an existing ingredient; omitted so the server
    /// creates the ingredient by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<i64>,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "Pasta Bake",
            "description": "Cheesy",
            "instructions": "Bake it",
            "isHealthy": false,
            "isFavorite": true,
            "categoryName": "Dinner",
            "image": null
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 7);
        assert!(recipe.is_favorite);
        assert_eq!(recipe.category_name.as_deref(), Some("Dinner"));
        assert_eq!(recipe.image, None);
    }

    #[test]
    fn test_recipe_tolerates_missing_optional_fields() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 1, "name": "Stew"}"#).unwrap();
        assert!(!recipe.is_healthy);
        assert!(!recipe.is_favorite);
        assert_eq!(recipe.instructions, None);
        assert_eq!(recipe.category_name, None);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = RecipePayload {
            name: "Stew".to_string(),
            description: "Hearty".to_string(),
            instructions: String::new(),
            is_healthy: true,
            is_favorite: true,
            category_id: 2,
            recipe_ingredients: vec![IngredientPayload {
                ingredient_id: None,
                ingredient_name: "Beef".to_string(),
                quantity: 500.0,
                unit: Some("g".to_string()),
            }],
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(json["isHealthy"], true);
        assert_eq!(json["categoryId"], 2);
        let ingredient = &json["recipeIngredients"][0];
        assert_eq!(ingredient["ingredientName"], "Beef");
        assert_eq!(ingredient["quantity"], 500.0);
        // ingredientId is omitted entirely when unset
        assert!(ingredient.get("ingredientId").is_none());
    }

    #[test]
    fn test_ingredient_quantity_may_be_null() {
        let json = r#"{"ingredientId": 3, "ingredientName": "salt", "quantity": null, "unit": null}"#;
        let ingredient: RecipeIngredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.quantity, None);
    }
}
