//! Style lookup tables.
//!
//! Every class string here is a complete literal so Tailwind's source scanner
//! picks it up. Components select a descriptor by enum and never build class
//! names at runtime.

use serde::Serialize;

/// The two accent colours of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Cyan (`primary` in the Tailwind config)
    #[default]
    Primary,
    /// Purple (`secondary` in the Tailwind config)
    Secondary,
}

/// Class strings for every element an accent touches.
#[derive(Debug, PartialEq, Eq)]
pub struct AccentStyle {
    /// Project card container: hover lift, border and glow
    pub project_card: &'static str,
    /// Category badge on a project card
    pub project_badge: &'static str,
    /// Project title, coloured on card hover
    pub project_title: &'static str,
    /// Tech-stack card container
    pub stack_card: &'static str,
    /// Tech-stack glyph
    pub stack_icon: &'static str,
    /// Contact icon link
    pub social_link: &'static str,
}

const PRIMARY_STYLE: AccentStyle = AccentStyle {
    project_card: "group relative cursor-pointer overflow-hidden rounded-xl bg-[#0a0f14] border border-white/5 transition-all duration-300 hover:-translate-y-2 hover:border-primary/50 hover:shadow-neon",
    project_badge: "absolute top-4 right-4 bg-primary/20 backdrop-blur-md border border-primary/30 text-primary text-xs font-bold px-3 py-1 rounded-full",
    project_title: "text-xl font-bold text-white group-hover:text-primary transition-colors",
    stack_card: "bg-surface-dark/50 backdrop-blur-sm p-5 rounded-lg border border-slate-800 hover:border-primary transition-all group",
    stack_icon: "material-symbols-outlined text-primary mb-3 text-3xl group-hover:scale-110 transition-transform",
    social_link: "h-14 w-14 flex items-center justify-center rounded-lg bg-[#0a0f14] border border-slate-800 text-slate-400 hover:text-white hover:border-primary hover:shadow-neon transition-all",
};

const SECONDARY_STYLE: AccentStyle = AccentStyle {
    project_card: "group relative cursor-pointer overflow-hidden rounded-xl bg-[#0a0f14] border border-white/5 transition-all duration-300 hover:-translate-y-2 hover:border-secondary/50 hover:shadow-neon-purple",
    project_badge: "absolute top-4 right-4 bg-purple-500/20 backdrop-blur-md border border-purple-500/30 text-purple-300 text-xs font-bold px-3 py-1 rounded-full",
    project_title: "text-xl font-bold text-white group-hover:text-secondary transition-colors",
    stack_card: "bg-surface-dark/50 backdrop-blur-sm p-5 rounded-lg border border-slate-800 hover:border-secondary transition-all group",
    stack_icon: "material-symbols-outlined text-secondary mb-3 text-3xl group-hover:scale-110 transition-transform",
    social_link: "h-14 w-14 flex items-center justify-center rounded-lg bg-[#0a0f14] border border-slate-800 text-slate-400 hover:text-white hover:border-secondary hover:shadow-neon-purple transition-all",
};

impl Accent {
    /// Descriptor for this accent.
    pub const fn style(self) -> &'static AccentStyle {
        match self {
            Accent::Primary => &PRIMARY_STYLE,
            Accent::Secondary => &SECONDARY_STYLE,
        }
    }
}

/// CSS filter applied to a project's background image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFilter {
    /// Cold blue shift for the rover imagery
    CoolShift,
    /// Desaturated, darkened treatment
    Grayscale,
    /// Warm hue rotation
    #[default]
    Standard,
}

impl ImageFilter {
    /// Value for the CSS `filter` property.
    pub const fn css(self) -> &'static str {
        match self {
            ImageFilter::CoolShift => "contrast(1.2) hue-rotate(220deg) saturate(0.8)",
            ImageFilter::Grayscale => "grayscale(100%) brightness(0.8) contrast(1.2)",
            ImageFilter::Standard => "hue-rotate(45deg) contrast(1.1)",
        }
    }
}

/// Inline style for a card's background layer.
pub fn background_style(image: &str, filter: ImageFilter) -> String {
    format!("background-image: url('{}'); filter: {};", image, filter.css())
}

/// The navbar's two looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVisual {
    /// At the top of the page: no background, no border
    Transparent,
    /// Past the scroll threshold: blurred translucent panel with a bottom border
    Scrolled,
}

impl NavVisual {
    /// Class of the `<nav>` element.
    pub const fn class(self) -> &'static str {
        match self {
            NavVisual::Transparent => {
                "fixed top-0 z-50 w-full border-b transition-colors duration-300 border-transparent bg-transparent"
            }
            NavVisual::Scrolled => {
                "fixed top-0 z-50 w-full border-b transition-colors duration-300 border-white/5 bg-background-dark/90 backdrop-blur-md"
            }
        }
    }
}
