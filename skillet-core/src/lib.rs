pub mod api;
pub mod detail;
pub mod error;
pub mod form;
pub mod image;
pub mod list;
pub mod prefs;
pub mod profile;
pub mod theme;
pub mod types;

pub use api::{FakeApi, HttpApi, RecipeApi};
pub use detail::RecipeDetail;
pub use error::ApiError;
pub use form::{FormPhase, IngredientRow, RecipeForm, SaveError, ValidationErrors};
pub use image::{ImageUpload, MAX_FILE_SIZE};
pub use list::{RecipeFilter, RecipeList};
pub use prefs::PrefsStore;
pub use profile::{Profile, ProfileError, ProfileService, DEFAULT_PROFILE_NAME};
pub use theme::{Theme, ThemeMode, ThemeService, DARK_THEME, LIGHT_THEME};
pub use types::{Category, IngredientPayload, Recipe, RecipeIngredient, RecipePayload};
