//! End-to-end client flows against the in-memory API.
//!
//! These cover the cross-module behavior the screens rely on: focus-driven
//! refetches, the create-then-fetch round trip, favorite toggling, and the
//! delete sentinel.

use skillet_core::{
    FakeApi, IngredientRow, RecipeApi, RecipeDetail, RecipeForm, RecipeList,
};

fn sample_form() -> RecipeForm {
    let mut form = RecipeForm::blank();
    form.name = "Pasta Bake".to_string();
    form.description = "Cheesy comfort food".to_string();
    form.instructions = "Boil, assemble, bake.".to_string();
    form.is_healthy = false;
    form.category_id = Some(3);
    form.ingredients[0] = IngredientRow::new("Pasta", "400", "g");
    form.ingredients[1] = IngredientRow::new("Cheddar", "150", "g");
    form
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let api = FakeApi::new().with_categories(&["Breakfast", "Lunch", "Dinner"]);

    let mut form = sample_form();
    let created = form.save(&api).await.unwrap();

    let fetched = api.get_recipe(created.id).await.unwrap();
    assert_eq!(fetched.name, "Pasta Bake");
    assert_eq!(fetched.description, "Cheesy comfort food");
    assert_eq!(fetched.instructions.as_deref(), Some("Boil, assemble, bake."));
    assert!(!fetched.is_healthy);
    assert_eq!(fetched.category_name.as_deref(), Some("Dinner"));

    let ingredients = api.list_ingredients(created.id).await;
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0].ingredient_name, "Pasta");
    assert_eq!(ingredients[0].quantity, Some(400.0));
}

#[tokio::test]
async fn test_toggle_favorite_twice_restores_original_state() {
    let api = FakeApi::new().with_categories(&["Dinner"]);
    let mut form = sample_form();
    form.category_id = Some(1);
    let created = form.save(&api).await.unwrap();
    let original = created.is_favorite;

    let mut detail = RecipeDetail::new(created.id);
    detail.refresh(&api).await;

    detail.toggle_favorite(&api).await;
    assert_eq!(detail.is_favorite(), !original);

    detail.toggle_favorite(&api).await;
    assert_eq!(detail.is_favorite(), original);
}

#[tokio::test]
async fn test_delete_missing_recipe_returns_false() {
    let api = FakeApi::new();
    assert!(!api.delete_recipe(999).await);
}

#[tokio::test]
async fn test_list_refresh_replaces_snapshot() {
    let api = FakeApi::new().with_categories(&["Breakfast", "Lunch", "Dinner"]);

    let mut list = RecipeList::new();
    list.refresh(&api).await;
    assert!(list.snapshot().is_empty());

    let created = sample_form().save(&api).await.unwrap();

    // Back on the list screen: the focus refetch picks up the new recipe.
    list.refresh(&api).await;
    assert_eq!(list.snapshot().len(), 1);

    assert!(api.delete_recipe(created.id).await);
    list.refresh(&api).await;
    assert!(list.snapshot().is_empty());
}

#[tokio::test]
async fn test_filter_applies_to_fresh_snapshot() {
    let api = FakeApi::new().with_categories(&["Lunch", "Dinner"]);

    let mut bake = sample_form();
    bake.category_id = Some(2);
    bake.save(&api).await.unwrap();

    let mut salad = sample_form();
    salad.name = "Pasta Salad".to_string();
    salad.category_id = Some(1);
    salad.save(&api).await.unwrap();

    let mut stew = sample_form();
    stew.name = "Stew".to_string();
    stew.category_id = Some(2);
    stew.save(&api).await.unwrap();

    let mut list = RecipeList::new();
    list.filter.set_search("pasta");
    list.filter.toggle_category("Dinner");
    list.refresh(&api).await;

    let visible = list.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Pasta Bake");
}

#[tokio::test]
async fn test_edit_flow_updates_in_place() {
    let api = FakeApi::new().with_categories(&["Lunch", "Dinner"]);
    let mut form = sample_form();
    form.category_id = Some(2);
    let created = form.save(&api).await.unwrap();

    let mut edit = RecipeForm::load(&api, Some(created.id)).await;
    assert_eq!(edit.category_id, Some(2));
    edit.description = "Even cheesier".to_string();
    edit.add_ingredient_row();
    let rows = edit.ingredients.len();
    edit.ingredients[rows - 1] = IngredientRow::new("Parmesan", "50", "g");

    let updated = edit.save(&api).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description, "Even cheesier");
    assert_eq!(api.list_ingredients(created.id).await.len(), 3);
    assert_eq!(api.list_recipes().await.len(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_flow_removes_recipe() {
    let api = FakeApi::new().with_categories(&["Dinner"]);
    let mut form = sample_form();
    form.category_id = Some(1);
    let created = form.save(&api).await.unwrap();

    let mut edit = RecipeForm::load(&api, Some(created.id)).await;
    assert!(edit.delete(&api).await);
    assert_eq!(api.get_recipe(created.id).await, None);

    // A second delete of the same id yields the failure sentinel.
    assert!(!edit.delete(&api).await);
}
