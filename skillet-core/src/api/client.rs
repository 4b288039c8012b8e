//! Production API client backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::image::ImageUpload;
use crate::types::{Category, Recipe, RecipeIngredient, RecipePayload};

use super::RecipeApi;

/// HTTP client for the recipe service.
pub struct HttpApi {
    /// Server base URL including the `/api` prefix.
    base_url: String,
    inner: reqwest::Client,
}

impl HttpApi {
    /// Create a client for the given server URL (without the `/api` suffix).
    pub fn new(server: &str) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Skillet/0.1")
            .build()?;

        Ok(Self {
            base_url: format!("{}/api", server.trim_end_matches('/')),
            inner,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, reqwest::Error> {
        let response = self.inner.get(self.url(path)).send().await?;
        response.error_for_status()?.json().await
    }

    fn multipart_form(
        payload: &RecipePayload,
        image: Option<&ImageUpload>,
    ) -> Result<Form, ApiError> {
        let mut form = Form::new().text("recipe", serde_json::to_string(payload)?);

        if let Some(image) = image {
            let part = Part::bytes(image.data.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }

        Ok(form)
    }

    /// Send a create/update request and decode the stored recipe, converting
    /// non-success statuses into `ApiError::Status` with the response body.
    async fn submit(&self, request: reqwest::RequestBuilder) -> Result<Recipe, ApiError> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RecipeApi for HttpApi {
    async fn list_recipes(&self) -> Vec<Recipe> {
        match self.get_json("/recipes").await {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch recipes");
                Vec::new()
            }
        }
    }

    async fn get_recipe(&self, id: i64) -> Option<Recipe> {
        match self.get_json(&format!("/recipes/{}", id)).await {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to fetch recipe");
                None
            }
        }
    }

    async fn list_categories(&self) -> Vec<Category> {
        match self.get_json("/categories").await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch categories");
                Vec::new()
            }
        }
    }

    async fn list_ingredients(&self, recipe_id: i64) -> Vec<RecipeIngredient> {
        match self
            .get_json(&format!("/recipes/{}/ingredients", recipe_id))
            .await
        {
            Ok(ingredients) => ingredients,
            Err(e) => {
                tracing::warn!(recipe_id, error = %e, "failed to fetch ingredients");
                Vec::new()
            }
        }
    }

    async fn create_recipe(
        &self,
        payload: &RecipePayload,
        image: Option<&ImageUpload>,
    ) -> Result<Recipe, ApiError> {
        let form = Self::multipart_form(payload, image)?;
        tracing::debug!(name = %payload.name, "creating recipe");
        self.submit(self.inner.post(self.url("/recipes")).multipart(form))
            .await
    }

    async fn update_recipe(
        &self,
        id: i64,
        payload: &RecipePayload,
        image: Option<&ImageUpload>,
    ) -> Result<Recipe, ApiError> {
        let form = Self::multipart_form(payload, image)?;
        tracing::debug!(id, name = %payload.name, "updating recipe");
        self.submit(
            self.inner
                .put(self.url(&format!("/recipes/{}", id)))
                .multipart(form),
        )
        .await
    }

    async fn toggle_favorite(&self, id: i64) -> Option<Recipe> {
        let request = self
            .inner
            .patch(self.url(&format!("/recipes/{}/toggle-favorite", id)));

        match request.send().await {
            Ok(response) if response.status().is_success() => match response.json().await {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    tracing::warn!(id, error = %e, "failed to decode toggled recipe");
                    None
                }
            },
            Ok(response) => {
                tracing::warn!(id, status = %response.status(), "failed to toggle favorite");
                None
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to toggle favorite");
                None
            }
        }
    }

    async fn delete_recipe(&self, id: i64) -> bool {
        match self
            .inner
            .delete(self.url(&format!("/recipes/{}", id)))
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(id, status = %response.status(), "failed to delete recipe");
                false
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to delete recipe");
                false
            }
        }
    }
}
