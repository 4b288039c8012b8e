//! Theme tokens and the persisted light/dark preference.

use std::io;

use crate::prefs::{PrefsStore, THEME_KEY};

/// A fixed set of named color and size tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub text_color_inverse: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub card_background: &'static str,
    pub favorite_icon: &'static str,
    pub shadow_color: &'static str,
    pub font_size_large: u16,
    pub font_size_medium: u16,
    pub font_size_small: u16,
}

pub static LIGHT_THEME: Theme = Theme {
    background_color: "#f7f7f7",
    text_color: "#000000",
    text_color_inverse: "#000000",
    primary_color: "#ff7f50",
    secondary_color: "#9e9e9e",
    card_background: "#ffffff",
    favorite_icon: "#ff5252",
    shadow_color: "#e0e0e0",
    font_size_large: 18,
    font_size_medium: 16,
    font_size_small: 14,
};

pub static DARK_THEME: Theme = Theme {
    background_color: "#121212",
    text_color: "#ffffff",
    text_color_inverse: "#000000",
    primary_color: "#ff9800",
    secondary_color: "#828282",
    card_background: "#1c1c1c",
    favorite_icon: "#ff9800",
    shadow_color: "#000000",
    font_size_large: 18,
    font_size_medium: 16,
    font_size_small: 14,
};

/// The two selectable theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Anything other than the exact "dark" flag reads as light.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeMode::Light => &LIGHT_THEME,
            ThemeMode::Dark => &DARK_THEME,
        }
    }
}

/// Theme preference service: loaded once at startup, persisted on every
/// toggle, alive for the process lifetime.
#[derive(Debug)]
pub struct ThemeService {
    store: PrefsStore,
    mode: ThemeMode,
}

impl ThemeService {
    /// Initialize from persisted storage, defaulting to light.
    pub fn load(store: PrefsStore) -> Self {
        let mode = ThemeMode::from_flag(store.get(THEME_KEY).as_deref());
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn theme(&self) -> &'static Theme {
        self.mode.theme()
    }

    /// Switch between light and dark, persisting the new flag immediately.
    pub fn toggle(&mut self) -> io::Result<ThemeMode> {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.store.set(THEME_KEY, self.mode.as_str())?;
        Ok(self.mode)
    }
}
