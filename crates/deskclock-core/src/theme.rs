//! Display theme.
//!
//! There is a single grayscale theme. Names of the older colour themes are
//! still accepted in configuration and resolve to it.

use serde::Serialize;

const LEGACY_THEMES: [&str; 7] = [
    "minimal-light",
    "minimal-dark",
    "forest",
    "ocean",
    "sunrise",
    "light",
    "dark",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub foreground: Rgb,
    pub dim: Rgb,
    pub accent: Rgb,
}

impl Theme {
    pub fn grayscale() -> Self {
        Self {
            name: "grayscale",
            foreground: Rgb(0xe0, 0xe0, 0xe0),
            dim: Rgb(0x80, 0x80, 0x80),
            accent: Rgb(0xff, 0xff, 0xff),
        }
    }

    /// Resolve a configured theme name to the theme to draw with.
    pub fn apply(name: &str) -> Self {
        let name = name.trim();
        if name != "grayscale" {
            if LEGACY_THEMES.contains(&name) {
                tracing::info!(replaced = name, "legacy theme replaced by grayscale");
            } else {
                tracing::warn!(requested = name, "unknown theme, using grayscale");
            }
        }
        Self::grayscale()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::grayscale()
    }
}
