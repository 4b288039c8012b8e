//! Local profile: display name and picture, persisted per-key.
//!
//! The profile never leaves the device; it is not synced to the server.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::prefs::{PrefsStore, PROFILE_NAME_KEY, PROFILE_PICTURE_KEY};

/// Placeholder shown until the user sets a name.
pub const DEFAULT_PROFILE_NAME: &str = "Heya Stranger";

/// Maximum display name length.
pub const MAX_NAME_LENGTH: usize = 50;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("valid name pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub profile_picture: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            profile_picture: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Invalid Characters in name")]
    InvalidCharacters,

    #[error("Name must be less than 50 characters.")]
    NameTooLong,

    #[error("Failed to persist profile: {0}")]
    Store(#[from] std::io::Error),
}

/// Validate a display name: required, letters/spaces/apostrophes/hyphens
/// only, at most 50 characters.
pub fn validate_name(name: &str) -> Result<(), ProfileError> {
    if name.is_empty() {
        return Err(ProfileError::NameRequired);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(ProfileError::InvalidCharacters);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ProfileError::NameTooLong);
    }
    Ok(())
}

/// Profile preference service: loaded once at startup, write-through on
/// every mutation.
#[derive(Debug)]
pub struct ProfileService {
    store: PrefsStore,
    profile: Profile,
}

impl ProfileService {
    /// Initialize from persisted storage, falling back to the placeholder
    /// profile when nothing is stored.
    pub fn load(store: PrefsStore) -> Self {
        let name = store
            .get(PROFILE_NAME_KEY)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string());
        let profile_picture = store.get(PROFILE_PICTURE_KEY).filter(|p| !p.is_empty());

        Self {
            store,
            profile: Profile {
                name,
                profile_picture,
            },
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Set and persist the display name. The name is trimmed, then
    /// validated; invalid names leave both memory and storage untouched.
    pub fn set_name(&mut self, name: &str) -> Result<(), ProfileError> {
        let name = name.trim();
        validate_name(name)?;
        self.profile.name = name.to_string();
        self.store.set(PROFILE_NAME_KEY, name)?;
        Ok(())
    }

    /// Set and persist the profile picture URI. `None` clears it.
    pub fn set_picture(&mut self, uri: Option<&str>) -> Result<(), ProfileError> {
        self.profile.profile_picture = uri.map(str::to_string);
        self.store.set(PROFILE_PICTURE_KEY, uri.unwrap_or(""))?;
        Ok(())
    }
}
