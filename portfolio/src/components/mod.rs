//! Leptos UI components for the portfolio page.
//!
//! Every component renders the same markup in the browser and when
//! prerendered; only the navbar has live behaviour, and that is attached in
//! an effect.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument (prerender only)
//! └── Portfolio
//!     ├── Navbar
//!     ├── Hero
//!     ├── Projects
//!     │   └── ProjectCard (per project)
//!     ├── About
//!     │   └── TechCard (per stack entry)
//!     ├── Contact
//!     │   └── SocialIcon (per platform)
//!     └── Footer
//! ```

mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod navbar;
mod page;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use navbar::Navbar;
pub use page::{Portfolio, PortfolioDocument};
pub use projects::{ProjectCard, Projects};
