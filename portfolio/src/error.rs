//! Error type for configuration loading and page verification.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Everything that can go wrong outside the (infallible) page itself.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::SiteConfig`]
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A nav link points at an id that no element carries
    #[error("anchor #{0} has no target element")]
    MissingAnchor(&'static str),

    /// More than one element carries a nav target id
    #[error("anchor #{id} is defined {count} times")]
    DuplicateAnchor {
        /// Element id
        id: &'static str,
        /// Number of occurrences
        count: usize,
    },

    /// A top-level page section did not render
    #[error("section {0} is missing from the page")]
    MissingSection(&'static str),

    /// A top-level page section rendered more than once
    #[error("section {name} rendered {count} times")]
    DuplicateSection {
        /// Section name
        name: &'static str,
        /// Number of occurrences
        count: usize,
    },

    /// Sections rendered out of order
    #[error("section {later} renders before {earlier}")]
    SectionOrder {
        /// Section that should come first
        earlier: &'static str,
        /// Section that should come after it
        later: &'static str,
    },
}
