//! Page stylesheet and Tailwind theme.
//!
//! The page is styled with Tailwind utility classes. Two pieces live outside
//! the markup:
//!
//! - [`PORTFOLIO_CSS`]: rules Tailwind has no utility for (star field, wave
//!   animation, Material Symbols defaults)
//! - [`TAILWIND_CONFIG`]: the theme extension defining `primary`, `secondary`,
//!   `background-dark`, `surface-dark`, `void` and the `neon` shadows
//!
//! Both are plain files under `assets/` so the CSR build can link them
//! directly; the prerendered document inlines them.

/// Stylesheet for rules outside Tailwind.
pub const PORTFOLIO_CSS: &str = include_str!("../assets/portfolio.css");

/// Tailwind runtime configuration script.
pub const TAILWIND_CONFIG: &str = include_str!("../assets/tailwind.config.js");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_defines_custom_backgrounds() {
        assert!(PORTFOLIO_CSS.contains(".bg-stars"));
        assert!(PORTFOLIO_CSS.contains(".wave-bg"));
        assert!(PORTFOLIO_CSS.contains("@keyframes wave-drift"));
    }

    #[test]
    fn anchor_scrolling_stays_native() {
        assert!(!PORTFOLIO_CSS.contains("scroll-behavior"));
    }

    #[test]
    fn tailwind_config_defines_theme_tokens() {
        for token in ["primary", "secondary", "\"background-dark\"", "\"surface-dark\"", "void", "\"neon-purple\""] {
            assert!(TAILWIND_CONFIG.contains(token), "missing {token}");
        }
    }
}
