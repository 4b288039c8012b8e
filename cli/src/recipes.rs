use anyhow::Result;
use skillet_core::{Recipe, RecipeApi, RecipeDetail, RecipeList};

fn print_recipe_line(recipe: &Recipe) {
    let favorite = if recipe.is_favorite { " *" } else { "" };
    println!(
        "{:>4}  {} [{}]{}",
        recipe.id,
        recipe.name,
        recipe.category_name.as_deref().unwrap_or("uncategorized"),
        favorite
    );
}

pub async fn list(
    api: &dyn RecipeApi,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let mut list = RecipeList::new();
    if let Some(search) = search {
        list.filter.set_search(search);
    }
    if let Some(category) = category {
        list.filter.toggle_category(&category);
    }

    list.refresh(api).await;

    let visible = list.visible();
    if visible.is_empty() {
        println!("No recipes found");
        return Ok(());
    }
    for recipe in visible {
        print_recipe_line(recipe);
    }

    Ok(())
}

pub async fn categories(api: &dyn RecipeApi) -> Result<()> {
    for category in api.list_categories().await {
        println!("{:>4}  {}", category.id, category.name);
    }
    Ok(())
}

pub async fn show(api: &dyn RecipeApi, id: i64) -> Result<()> {
    let mut detail = RecipeDetail::new(id);
    detail.refresh(api).await;

    let Some(recipe) = &detail.recipe else {
        anyhow::bail!("Recipe not found: {}", id);
    };

    println!("{}", recipe.name);
    println!("{}", recipe.description);
    if recipe.is_healthy {
        println!("[Healthy]");
    }
    if let Some(image) = &recipe.image {
        println!("Image: {}", image);
    }

    println!();
    println!("Ingredients:");
    for ingredient in &detail.ingredients {
        let quantity = ingredient
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_default();
        let unit = ingredient.unit.as_deref().unwrap_or("");
        println!("- {} ({} {})", ingredient.ingredient_name, quantity, unit);
    }

    if let Some(instructions) = &recipe.instructions {
        if !instructions.is_empty() {
            println!();
            println!("Instructions:");
            println!("{}", instructions);
        }
    }

    Ok(())
}

pub async fn favorite(api: &dyn RecipeApi, id: i64) -> Result<()> {
    let mut detail = RecipeDetail::new(id);
    detail.refresh(api).await;

    if detail.recipe.is_none() {
        anyhow::bail!("Recipe not found: {}", id);
    }

    if !detail.toggle_favorite(api).await {
        anyhow::bail!("Failed to toggle favorite status");
    }

    if detail.is_favorite() {
        println!("Added to likes");
    } else {
        println!("Removed from likes");
    }

    Ok(())
}

pub async fn likes(api: &dyn RecipeApi) -> Result<()> {
    let mut list = RecipeList::new();
    list.refresh(api).await;

    let favorites = list.favorites();
    if favorites.is_empty() {
        println!("No likes yet");
        return Ok(());
    }
    for recipe in favorites {
        print_recipe_line(recipe);
    }

    Ok(())
}
