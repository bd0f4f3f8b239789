//! Configuration file support for the prerendered document.
//!
//! Loads optional `portfolio.toml`. Only the `<head>` of the generated
//! document is configurable; page content is fixed in [`crate::content`].

use serde::Deserialize;
use std::path::Path;

use crate::error::{PortfolioError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "portfolio.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document metadata
    pub site: SiteMeta,
    /// External stylesheet and script URLs
    pub assets: AssetConfig,
}

/// `[site]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// `<title>`
    pub title: String,
    /// `<meta name="description">`
    pub description: String,
    /// `<html lang>`
    pub lang: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Thanh Huy | Portfolio".into(),
            description: "Student portfolio blending organic chemistry concepts with deep-space aesthetics."
                .into(),
            lang: "en".into(),
        }
    }
}

/// `[assets]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Tailwind runtime script
    pub tailwind_script: String,
    /// Text font stylesheet
    pub fonts_stylesheet: String,
    /// Material Symbols stylesheet
    pub symbols_stylesheet: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            tailwind_script: "https://cdn.tailwindcss.com?plugins=forms,container-queries".into(),
            fonts_stylesheet:
                "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;500;700&family=JetBrains+Mono:wght@400;500&display=swap"
                    .into(),
            symbols_stylesheet:
                "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:wght,FILL@100..700,0..1&display=swap"
                    .into(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document. Omitted keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a path that must exist and parse.
    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PortfolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `portfolio.toml` from the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default config");
                Self::default()
            }
        }
    }
}
