//! Static page content.
//!
//! Everything the page displays lives in these tables. They are `const` data:
//! nothing is created, updated or removed at runtime, and display order is
//! array order.
//!
//! Styling decisions are explicit fields ([`Accent`], [`ImageFilter`],
//! [`Platform`]) chosen here, so components never inspect titles or names.
//!
//! # Example
//!
//! ```rust
//! use portfolio::content::{Anchor, NAV_ITEMS, PROJECTS};
//!
//! assert_eq!(NAV_ITEMS[1].href(), "#projects");
//! assert_eq!(NAV_ITEMS[1].anchor, Anchor::Projects);
//! assert_eq!(PROJECTS.len(), 3);
//! ```

use serde::Serialize;

use crate::theme::{Accent, ImageFilter};

/// Display name used in the navbar, hero and footer.
pub const OWNER_NAME: &str = "Thanh Huy";

/// Address shown in the contact section.
pub const CONTACT_EMAIL: &str = "hello@thanhhuy.com";

/// Target of the contact section's `mailto:` link. Differs from the displayed
/// [`CONTACT_EMAIL`].
pub const CONTACT_MAILTO: &str = "hello@alexrivera.com";

/// Footer copyright year. A literal, never read from the clock.
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Navbar portrait.
pub const AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=100&auto=format&fit=crop";

/// Decorative wave layer behind the hero heading.
pub const HERO_WAVE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/1/1a/Wave_Pattern.svg";

/// In-page navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Hero banner
    Home,
    /// Project gallery
    Projects,
    /// About / tech stack
    About,
    /// Contact section
    Contact,
}

impl Anchor {
    /// All anchors in document order.
    pub const ALL: [Anchor; 4] = [Anchor::Home, Anchor::Projects, Anchor::About, Anchor::Contact];

    /// Element id carried by the target section.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Projects => "projects",
            Anchor::About => "about",
            Anchor::Contact => "contact",
        }
    }

    /// `#fragment` used by links pointing at the section.
    pub const fn href(self) -> &'static str {
        match self {
            Anchor::Home => "#home",
            Anchor::Projects => "#projects",
            Anchor::About => "#about",
            Anchor::Contact => "#contact",
        }
    }
}

/// A navbar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Link text
    pub label: &'static str,
    /// Section the link scrolls to
    pub anchor: Anchor,
}

impl NavItem {
    /// Link destination, always an in-page fragment.
    pub const fn href(&self) -> &'static str {
        self.anchor.href()
    }
}

/// A card in the project gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Card heading
    pub title: &'static str,
    /// Badge text in the card corner
    pub category: &'static str,
    /// Two-line summary
    pub description: &'static str,
    /// Remote background image
    pub image: &'static str,
    /// Technology tags, shown in order
    pub tags: &'static [&'static str],
    /// Border, glow, badge and title-hover treatment
    pub accent: Accent,
    /// CSS filter applied to the background image
    pub filter: ImageFilter,
    /// Project link. Not wired to any handler yet; the card is not clickable.
    pub url: &'static str,
}

/// A card in the about section's skills grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TechStackEntry {
    /// Material Symbols glyph name
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// Short list of tools
    pub description: &'static str,
    /// Icon colour and hover border
    pub accent: Accent,
}

/// Social platforms linked from the contact section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Platform {
    /// GitHub profile
    GitHub,
    /// LinkedIn profile
    LinkedIn,
}

impl Platform {
    /// Visible platform name, also used as the link's `aria-label`.
    pub const fn label(self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Material Symbols glyph shown inside the link.
    pub const fn icon(self) -> &'static str {
        match self {
            Platform::GitHub => "code_blocks",
            Platform::LinkedIn => "person_search",
        }
    }

    /// Hover treatment of the link.
    pub const fn accent(self) -> Accent {
        match self {
            Platform::GitHub => Accent::Primary,
            Platform::LinkedIn => Accent::Secondary,
        }
    }
}

/// An icon link in the contact section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Which platform the link represents
    pub platform: Platform,
    /// Placeholder destination
    pub href: &'static str,
}

/// Navbar links, in display order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", anchor: Anchor::Home },
    NavItem { label: "Work", anchor: Anchor::Projects },
    NavItem { label: "About", anchor: Anchor::About },
    NavItem { label: "Contact", anchor: Anchor::Contact },
];

/// Project gallery, in display order.
pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Exploring with Curiosity",
        category: "Space Tech",
        description: "Interactive WebGL rover simulation visualizing surface data from Mars exploration missions.",
        image: "https://images.unsplash.com/photo-1541873676-a18131494184?q=80&w=1000&auto=format&fit=crop",
        tags: &["Three.js", "React"],
        accent: Accent::Secondary,
        filter: ImageFilter::CoolShift,
        url: "#",
    },
    Project {
        title: "Molecular Bonds",
        category: "Chemistry",
        description: "Educational platform featuring minimalist 3D hexagonal structures and covalent bond visualizations.",
        image: "https://images.unsplash.com/photo-1532094349884-543bc11b234d?q=80&w=1000&auto=format&fit=crop",
        tags: &["WebGL", "D3.js"],
        accent: Accent::Primary,
        filter: ImageFilter::Grayscale,
        url: "#",
    },
    Project {
        title: "Nebula Cartography",
        category: "Astrophysics",
        description: "Mapping star density in local clusters using high-contrast monochromatic UI design.",
        image: "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?q=80&w=1000&auto=format&fit=crop",
        tags: &["Data Viz", "UI/UX"],
        accent: Accent::Secondary,
        filter: ImageFilter::Standard,
        url: "#",
    },
];

/// Skills grid (2x2), in display order.
pub const TECH_STACK: [TechStackEntry; 4] = [
    TechStackEntry {
        icon: "code",
        title: "Frontend",
        description: "React, WebGL, Tailwind",
        accent: Accent::Primary,
    },
    TechStackEntry {
        icon: "hexagon",
        title: "Science",
        description: "Organic Chem, Physics",
        accent: Accent::Secondary,
    },
    TechStackEntry {
        icon: "database",
        title: "Data",
        description: "Python, Visualization",
        accent: Accent::Secondary,
    },
    TechStackEntry {
        icon: "architecture",
        title: "Design",
        description: "Figma, Blender 3D",
        accent: Accent::Primary,
    },
];

/// Contact section icon links.
pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink { platform: Platform::GitHub, href: "#" },
    SocialLink { platform: Platform::LinkedIn, href: "#" },
];

/// Serializable snapshot of every content table, used by `portfolio content`.
#[derive(Debug, Serialize)]
pub struct ContentSnapshot {
    /// [`OWNER_NAME`]
    pub owner: &'static str,
    /// [`CONTACT_EMAIL`]
    pub email: &'static str,
    /// [`CONTACT_MAILTO`]
    pub mailto: &'static str,
    /// [`COPYRIGHT_YEAR`]
    pub year: u16,
    /// [`NAV_ITEMS`]
    pub nav: &'static [NavItem],
    /// [`PROJECTS`]
    pub projects: &'static [Project],
    /// [`TECH_STACK`]
    pub tech_stack: &'static [TechStackEntry],
    /// [`SOCIAL_LINKS`]
    pub social: &'static [SocialLink],
}

/// Borrow all tables at once.
pub fn snapshot() -> ContentSnapshot {
    ContentSnapshot {
        owner: OWNER_NAME,
        email: CONTACT_EMAIL,
        mailto: CONTACT_MAILTO,
        year: COPYRIGHT_YEAR,
        nav: &NAV_ITEMS,
        projects: &PROJECTS,
        tech_stack: &TECH_STACK,
        social: &SOCIAL_LINKS,
    }
}

/// Content tables as JSON.
pub fn to_json(pretty: bool) -> serde_json::Result<String> {
    let snapshot = snapshot();
    if pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    }
}
