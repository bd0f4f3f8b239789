//! Project gallery.

use leptos::prelude::*;

use super::Symbol;
use crate::content::{Anchor, PROJECTS, Project};
use crate::theme::background_style;

/// Gallery section: one card per entry of [`PROJECTS`], in table order.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Anchor::Projects.id() class="py-24 px-4 sm:px-6 lg:px-8 relative bg-void overflow-hidden">
            <div class="absolute inset-0 z-0 bg-stars opacity-40"></div>
            <div class="absolute top-0 right-0 w-[500px] h-[500px] bg-secondary/10 blur-[120px] rounded-full pointer-events-none"></div>
            <div class="absolute bottom-0 left-0 w-[600px] h-[600px] bg-primary/5 blur-[100px] rounded-full pointer-events-none"></div>

            <div class="relative z-10 mx-auto max-w-6xl">
                <div class="flex items-end justify-between mb-16 border-b border-white/10 pb-6">
                    <div>
                        <span class="text-secondary font-mono text-sm tracking-widest mb-2 block">"SELECTED WORKS"</span>
                        <h2 class="text-3xl font-bold text-white sm:text-4xl">"Exploration Log"</h2>
                    </div>
                    <a
                        href="#"
                        class="hidden sm:flex items-center gap-2 text-sm font-medium text-slate-400 hover:text-secondary transition-colors"
                    >
                        "Full Archive "
                        <Symbol name="arrow_forward" class="material-symbols-outlined text-[16px]" />
                    </a>
                </div>

                <div class="grid grid-cols-1 gap-10 md:grid-cols-2 lg:grid-cols-3">
                    {PROJECTS.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A single gallery card.
///
/// `project.url` is carried as data only; the card renders no link and has
/// no click handler.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let style = project.accent.style();
    let background = background_style(project.image, project.filter);

    view! {
        <div class=style.project_card data-filter=project.filter.css()>
            <div class="aspect-[4/3] w-full overflow-hidden relative">
                <div
                    class="h-full w-full bg-cover bg-center transition-transform duration-700 group-hover:scale-110"
                    style=background
                >
                    <div class="absolute inset-0 bg-gradient-to-t from-[#0a0f14] via-transparent to-transparent opacity-90"></div>
                </div>
                <div class=style.project_badge>{project.category}</div>
            </div>

            <div class="absolute bottom-0 left-0 w-full p-6">
                <h3 class=style.project_title>{project.title}</h3>
                <p class="mt-2 text-sm text-slate-400 line-clamp-2">{project.description}</p>
                <div class="mt-4 flex gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-[10px] uppercase tracking-wider text-slate-500 font-mono">{*tag}</span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_to_string;
    use crate::theme::{Accent, ImageFilter};

    fn card_chunks(html: &str) -> Vec<&str> {
        // Every card opens with its data-filter attribute
        let starts: Vec<usize> = html.match_indices("data-filter=\"").map(|(i, _)| i).collect();
        starts
            .iter()
            .enumerate()
            .map(|(n, &start)| {
                let end = starts.get(n + 1).copied().unwrap_or(html.len());
                &html[start..end]
            })
            .collect()
    }

    #[test]
    fn renders_one_card_per_project_in_order() {
        let html = render_to_string(|| view! { <Projects /> });
        let cards = card_chunks(&html);
        assert_eq!(cards.len(), PROJECTS.len());

        for (card, project) in cards.iter().zip(PROJECTS.iter()) {
            assert!(card.contains(project.title), "{}", project.title);
            assert!(card.contains(project.category));
            assert!(card.contains(project.description));

            let tag_positions: Vec<usize> = project
                .tags
                .iter()
                .map(|tag| card.find(tag).unwrap_or_else(|| panic!("tag {tag} missing")))
                .collect();
            assert!(tag_positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn exactly_one_card_is_grayscale() {
        let html = render_to_string(|| view! { <Projects /> });
        let cards = card_chunks(&html);

        let grayscale: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.contains(ImageFilter::Grayscale.css()))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(grayscale, vec![1]);
        assert!(cards[1].contains("Molecular Bonds"));

        for card in &cards {
            let filters = [ImageFilter::CoolShift, ImageFilter::Grayscale, ImageFilter::Standard]
                .iter()
                .filter(|f| card.contains(&format!("data-filter=\"{}\"", f.css())))
                .count();
            assert_eq!(filters, 1);
        }
    }

    #[test]
    fn accent_picks_badge_treatment() {
        let html = render_to_string(|| view! { <ProjectCard project=PROJECTS[1] /> });
        assert!(html.contains(Accent::Primary.style().project_badge));
        assert!(!html.contains("text-purple-300"));

        let html = render_to_string(|| view! { <ProjectCard project=PROJECTS[0] /> });
        assert!(html.contains(Accent::Secondary.style().project_badge));
    }

    #[test]
    fn cards_are_not_links() {
        let html = render_to_string(|| view! { <ProjectCard project=PROJECTS[2] /> });
        assert!(!html.contains("<a"));
        assert!(html.contains("cursor-pointer"));
    }
}
