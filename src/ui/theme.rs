//! Day/night theme and ANSI escape sequence generation.
//!
//! A theme is two color tokens, `color_dark` (foreground) and `color_light`
//! (background), plus an accent used for the tile cursor. The day theme
//! applies the base tokens as written; the night theme applies them swapped.
//! There is no intermediate palette.
//!
//! # TOML Format
//!
//! ```toml
//! name = "default"
//! color_dark = "10, 10, 20"
//! color_light = "255, 255, 255"
//! accent = "#0096ff"
//! ```
//!
//! Colors accept either the `r, g, b` triplet form or `#rrggbb`.

use crate::domain::error::{CatalogError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variable some terminals export as `fg;bg` palette indexes.
const COLORFGBG: &str = "COLORFGBG";

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || CatalogError::Theme(format!("invalid color: {s:?}"));

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
            return Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let channels: Vec<u8> = s
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<_>>()?;
        match channels.as_slice() {
            &[r, g, b] => Ok(Self(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Host color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Parses a configured preference (`dark`/`light`, case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" | "night" => Some(Self::Dark),
            "light" | "day" => Some(Self::Light),
            _ => None,
        }
    }

    /// Reads the `COLORFGBG` convention (`"15;0"` = light text on a dark
    /// background). Returns `None` when unset or unparseable.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var(COLORFGBG).ok().and_then(|v| Self::from_colorfgbg(&v))
    }

    /// Interprets a `COLORFGBG` value. Background indexes 0-6 and 8 are
    /// dark palette slots.
    #[must_use]
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        Some(if bg <= 6 || bg == 8 { Self::Dark } else { Self::Light })
    }
}

/// Selected theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    /// Dark preference → night, anything else → day.
    #[must_use]
    pub const fn from_preference(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::Night,
            ColorScheme::Light => Self::Day,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    /// Value used by the settings form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Label shown in the settings selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

/// The two tokens consumed by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    /// Foreground.
    pub color_dark: Rgb,
    /// Background.
    pub color_light: Rgb,
}

impl ColorTokens {
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            color_dark: self.color_light,
            color_light: self.color_dark,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: String,
    color_dark: Rgb,
    color_light: Rgb,
    accent: Rgb,
}

/// Base tokens plus the currently applied mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    base: ColorTokens,
    pub accent: Rgb,
    pub mode: ThemeMode,
}

impl Theme {
    /// Loads a built-in token set by name. Only `default` ships.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            _ => return None,
        };
        Self::from_toml_str(toml_str).ok()
    }

    /// Loads a token set from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(toml_str)
            .map_err(|e| CatalogError::Theme(format!("failed to parse theme TOML: {e}")))?;
        Ok(Self {
            name: file.name,
            base: ColorTokens {
                color_dark: file.color_dark,
                color_light: file.color_light,
            },
            accent: file.accent,
            mode: ThemeMode::Day,
        })
    }

    /// Returns the theme with `mode` applied.
    #[must_use]
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.apply(mode);
        self
    }

    /// Applies `mode`; takes effect on the next render.
    pub fn apply(&mut self, mode: ThemeMode) {
        tracing::debug!(from = self.mode.as_str(), to = mode.as_str(), "applying theme");
        self.mode = mode;
    }

    /// Tokens for the current mode.
    #[must_use]
    pub const fn tokens(&self) -> ColorTokens {
        match self.mode {
            ThemeMode::Day => self.base,
            ThemeMode::Night => self.base.swapped(),
        }
    }

    #[must_use]
    pub const fn foreground(&self) -> Rgb {
        self.tokens().color_dark
    }

    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.tokens().color_light
    }

    /// Foreground + background escape for ordinary text.
    #[must_use]
    pub fn base_style(&self) -> String {
        format!("{}{}", Self::fg(self.foreground()), Self::bg(self.background()))
    }

    /// Inverted style with the accent as background, used for the cursor.
    #[must_use]
    pub fn cursor_style(&self) -> String {
        format!("{}{}", Self::fg(self.background()), Self::bg(self.accent))
    }

    #[must_use]
    pub fn fg(rgb: Rgb) -> String {
        let Rgb(r, g, b) = rgb;
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub fn bg(rgb: Rgb) -> String {
        let Rgb(r, g, b) = rgb;
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The built-in `default` tokens in day mode.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("default").expect("Built-in default theme should always parse")
    }
}
