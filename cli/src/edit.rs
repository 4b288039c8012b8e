use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use skillet_core::{ImageUpload, IngredientRow, RecipeApi, RecipeForm, SaveError};

#[derive(Args)]
pub struct AddArgs {
    /// Recipe title
    #[arg(long)]
    name: String,
    /// Short description
    #[arg(long)]
    description: String,
    /// Preparation instructions
    #[arg(long, default_value = "")]
    instructions: String,
    /// Mark the recipe as healthy
    #[arg(long)]
    healthy: bool,
    /// Category id to assign
    #[arg(long)]
    category: Option<i64>,
    /// Ingredient as "name:quantity[:unit]", repeatable
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Path to an image file to attach
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Args)]
pub struct EditArgs {
    id: i64,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    instructions: Option<String>,
    /// Set the healthy flag
    #[arg(long)]
    healthy: Option<bool>,
    /// Category id to assign
    #[arg(long)]
    category: Option<i64>,
    /// Replace all ingredient rows; "name:quantity[:unit]", repeatable
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Path to a replacement image file
    #[arg(long)]
    image: Option<PathBuf>,
}

/// Parse an ingredient flag of the form "name:quantity[:unit]".
/// Quantity and unit may be empty; validation happens on save.
fn parse_ingredient_row(spec: &str) -> IngredientRow {
    let mut parts = spec.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    let quantity = parts.next().unwrap_or_default();
    let unit = parts.next().unwrap_or_default();
    IngredientRow::new(name, quantity, unit)
}

async fn load_image(path: &Path) -> Result<ImageUpload> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    ImageUpload::from_bytes(data, file_name).context("Failed to validate image")
}

fn report_save_error(action: &str, error: SaveError) -> anyhow::Error {
    match error {
        SaveError::Validation(errors) => anyhow::anyhow!("{}", errors),
        SaveError::Api(e) => anyhow::Error::new(e).context(format!("Failed to {} recipe", action)),
    }
}

pub async fn add(api: &dyn RecipeApi, args: AddArgs) -> Result<()> {
    let mut form = RecipeForm::load(api, None).await;
    form.name = args.name;
    form.description = args.description;
    form.instructions = args.instructions;
    form.is_healthy = args.healthy;
    if let Some(category) = args.category {
        form.category_id = Some(category);
    }
    for spec in &args.ingredients {
        form.add_ingredient_row();
        let row = form.ingredients.len() - 1;
        form.ingredients[row] = parse_ingredient_row(spec);
    }
    if let Some(path) = &args.image {
        form.attach_image(load_image(path).await?);
    }

    let recipe = form
        .save(api)
        .await
        .map_err(|e| report_save_error("create", e))?;
    println!("Created: {} (id {})", recipe.name, recipe.id);

    Ok(())
}

pub async fn edit(api: &dyn RecipeApi, args: EditArgs) -> Result<()> {
    let mut form = RecipeForm::load(api, Some(args.id)).await;
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    if let Some(instructions) = args.instructions {
        form.instructions = instructions;
    }
    if let Some(healthy) = args.healthy {
        form.is_healthy = healthy;
    }
    if let Some(category) = args.category {
        form.category_id = Some(category);
    }
    if !args.ingredients.is_empty() {
        form.ingredients = args
            .ingredients
            .iter()
            .map(|spec| parse_ingredient_row(spec))
            .collect();
    }
    if let Some(path) = &args.image {
        form.attach_image(load_image(path).await?);
    }

    let recipe = form
        .save(api)
        .await
        .map_err(|e| report_save_error("update", e))?;
    println!("Updated: {} (id {})", recipe.name, recipe.id);

    Ok(())
}

fn confirm_delete() -> Result<bool> {
    print!("Are you sure you want to delete this recipe? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub async fn delete(api: &dyn RecipeApi, id: i64, yes: bool) -> Result<()> {
    if !yes && !confirm_delete()? {
        println!("Delete cancelled");
        return Ok(());
    }

    if !api.delete_recipe(id).await {
        anyhow::bail!("Failed to delete the recipe");
    }

    println!("Recipe deleted");
    Ok(())
}
