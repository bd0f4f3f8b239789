//! Prerendering and page-contract verification.
//!
//! Leptos 0.8 renders any view to a string through `RenderHtml::to_html`.
//! Effects never run on this path, so the navbar's scroll listener is not
//! registered and the output is the page in its initial state.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::PortfolioDocument;
use crate::config::SiteConfig;
use crate::content::NAV_ITEMS;
use crate::error::{PortfolioError, Result};

/// Top-level landmarks of the page in required document order, as
/// `(name, marker)` pairs. Each marker must occur exactly once.
pub const LANDMARKS: [(&str, &str); 6] = [
    ("navbar", "<nav"),
    ("hero", "id=\"home\""),
    ("projects", "id=\"projects\""),
    ("about", "id=\"about\""),
    ("contact", "id=\"contact\""),
    ("footer", "<footer"),
];

/// Render a view to HTML inside a fresh reactive owner.
///
/// ```rust
/// use leptos::prelude::*;
/// use portfolio::components::Footer;
/// use portfolio::render::render_to_string;
///
/// let html = render_to_string(|| view! { <Footer /> });
/// assert!(html.starts_with("<footer"));
/// ```
pub fn render_to_string<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

/// Render the complete document, `<!DOCTYPE html>` included.
pub fn render_page(config: &SiteConfig) -> String {
    let config = config.clone();
    let html = render_to_string(move || view! { <PortfolioDocument config=config /> });
    tracing::debug!(bytes = html.len(), "rendered portfolio document");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// What [`verify_page`] checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageReport {
    /// Nav anchors with exactly one target
    pub anchors: usize,
    /// Landmarks found in order
    pub sections: usize,
    /// Document size
    pub bytes: usize,
}

/// Check the in-page navigation contract and the section order of a
/// rendered document.
pub fn verify_page(html: &str) -> Result<PageReport> {
    for item in NAV_ITEMS {
        let id = item.anchor.id();
        match html.matches(&format!("id=\"{id}\"")).count() {
            0 => return Err(PortfolioError::MissingAnchor(id)),
            1 => {}
            count => return Err(PortfolioError::DuplicateAnchor { id, count }),
        }
    }

    let mut previous: Option<(&'static str, usize)> = None;
    for (name, marker) in LANDMARKS {
        let at = match html.matches(marker).count() {
            0 => return Err(PortfolioError::MissingSection(name)),
            1 => html.find(marker).unwrap_or_default(),
            count => return Err(PortfolioError::DuplicateSection { name, count }),
        };
        if let Some((earlier, earlier_at)) = previous {
            if at < earlier_at {
                return Err(PortfolioError::SectionOrder { earlier, later: name });
            }
        }
        previous = Some((name, at));
    }

    Ok(PageReport {
        anchors: NAV_ITEMS.len(),
        sections: LANDMARKS.len(),
        bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal(body: &str) -> String {
        format!("<html><body>{body}</body></html>")
    }

    const ORDERED: &str = r#"<nav></nav><section id="home"></section><section id="projects"></section><section id="about"></section><section id="contact"></section><footer></footer>"#;

    #[test]
    fn accepts_well_formed_page() {
        let report = verify_page(&minimal(ORDERED)).expect("valid page");
        assert_eq!(report.anchors, 4);
        assert_eq!(report.sections, 6);
    }

    #[test]
    fn rejects_missing_anchor() {
        let html = minimal(&ORDERED.replace(r#" id="about""#, ""));
        let err = verify_page(&html).expect_err("about removed");
        assert!(matches!(err, PortfolioError::MissingAnchor("about")));
    }

    #[test]
    fn rejects_duplicate_anchor() {
        let html = minimal(&format!(r#"{ORDERED}<div id="contact"></div>"#));
        let err = verify_page(&html).expect_err("contact twice");
        assert!(matches!(err, PortfolioError::DuplicateAnchor { id: "contact", count: 2 }));
    }

    #[test]
    fn rejects_missing_or_repeated_chrome() {
        let err = verify_page(&minimal(&ORDERED.replace("<footer></footer>", ""))).expect_err("no footer");
        assert!(matches!(err, PortfolioError::MissingSection("footer")));

        let err = verify_page(&minimal(&format!("<nav></nav>{ORDERED}"))).expect_err("two navs");
        assert!(matches!(err, PortfolioError::DuplicateSection { name: "navbar", count: 2 }));
    }

    #[test]
    fn rejects_reordered_sections() {
        let html = minimal(
            r#"<nav></nav><section id="projects"></section><section id="home"></section><section id="about"></section><section id="contact"></section><footer></footer>"#,
        );
        let err = verify_page(&html).expect_err("hero after projects");
        assert!(matches!(
            err,
            PortfolioError::SectionOrder { earlier: "hero", later: "projects" }
        ));
        assert_eq!(err.to_string(), "section projects renders before hero");
    }
}
