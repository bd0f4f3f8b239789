//! Material Symbols glyphs.
//!
//! Glyphs are ligatures: the element's text is the symbol name and the
//! `material-symbols-outlined` font turns it into an icon. Callers pass the
//! complete class list, which must include `material-symbols-outlined`.

use leptos::prelude::*;

/// Renders one Material Symbols glyph.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Symbol name="rocket_launch" class=SYMBOL /> }
/// ```
#[component]
pub fn Symbol(
    /// Ligature name, e.g. `"mail"`
    name: &'static str,
    /// Full class list
    #[prop(default = SYMBOL)]
    class: &'static str,
) -> impl IntoView {
    view! { <span class=class>{name}</span> }
}

/// Bare glyph with no extra styling.
pub const SYMBOL: &str = "material-symbols-outlined";
