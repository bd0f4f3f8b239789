//! # portfolio
//!
//! Leptos components for the Thanh Huy portfolio page, plus a static renderer
//! that turns the same component tree into a complete HTML document.
//!
//! The page is a navbar, a hero banner, a project gallery, an about/skills
//! section, a contact section and a footer, all driven by the `const` tables
//! in [`content`]. The only state is the navbar's scrolled/menu-open pair
//! ([`state::NavState`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::{config::SiteConfig, render_page, verify_page};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! let report = verify_page(&html).unwrap();
//! assert_eq!(report.sections, 6);
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - navigation, project, tech-stack and social tables
//! - [`theme`] - accent, image-filter and navbar class lookup tables
//! - [`state`] - navbar toggle state and the scroll threshold
//! - [`components`] - Leptos UI components
//! - [`render`] - prerendering and page-contract verification
//! - [`config`] - optional `portfolio.toml` for the document head
//! - [`styles`] - page CSS and Tailwind theme
//!
//! ## Features
//!
//! - `ssr` (default): prerender to strings, used by the CLI and tests
//! - `csr`: browser mount with live scroll and click handling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod state;
pub mod styles;
pub mod theme;

pub use error::{PortfolioError, Result};
pub use render::{PageReport, render_page, render_to_string, verify_page};
