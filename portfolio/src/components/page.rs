//! Page root and the prerendered document around it.

use leptos::prelude::*;

use super::{About, Contact, Footer, Hero, Navbar, Projects};
use crate::config::SiteConfig;
use crate::state::NavState;
use crate::styles::{PORTFOLIO_CSS, TAILWIND_CONFIG};

/// The whole page, top to bottom. Mounted directly by the browser build.
#[component]
pub fn Portfolio(
    /// Starting navbar state
    #[prop(optional)]
    nav: NavState,
) -> impl IntoView {
    view! {
        <main class="relative flex min-h-screen w-full flex-col">
            <Navbar initial=nav />
            <Hero />
            <Projects />
            <About />
            <Contact />
            <Footer />
        </main>
    }
}

/// Complete HTML document for the prerendered page.
#[component]
pub fn PortfolioDocument(config: SiteConfig) -> impl IntoView {
    let SiteConfig { site, assets } = config;

    view! {
        <html lang=site.lang class="dark">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=site.description />
                <title>{site.title}</title>
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=assets.fonts_stylesheet />
                <link rel="stylesheet" href=assets.symbols_stylesheet />
                <script src=assets.tailwind_script></script>
                <script inner_html=TAILWIND_CONFIG></script>
                <style inner_html=PORTFOLIO_CSS></style>
            </head>
            <body class="bg-void font-display text-slate-200 antialiased">
                <Portfolio />
            </body>
        </html>
    }
}
