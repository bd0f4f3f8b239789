use leptos::prelude::*;

use super::Symbol;
use crate::content::{Anchor, TECH_STACK, TechStackEntry};

/// Methodology prose next to the tech-stack grid.
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Anchor::About.id() class="py-24 px-4 sm:px-6 lg:px-8 bg-[#050505] relative">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-px h-24 bg-gradient-to-b from-transparent to-slate-800"></div>

            <div class="mx-auto max-w-4xl relative z-10">
                <div class="mb-16 text-center">
                    <h2 class="text-3xl font-bold text-white sm:text-4xl">
                        <span class="text-primary">"Tech"</span>
                        " & "
                        <span class="text-secondary">"Science"</span>
                        " Stack"
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-16 items-center">
                    <div class="space-y-6 order-2 md:order-1">
                        <h3 class="text-xl font-bold text-white flex items-center gap-2">
                            <Symbol name="science" class="material-symbols-outlined text-secondary" />
                            "Scientific Methodology"
                        </h3>
                        <p class="text-slate-400 leading-relaxed">
                            "My approach to frontend development is rooted in the precision of the scientific method. "
                            "I treat every project like a laboratory experiment: hypothesizing user needs, "
                            "experimenting with design patterns, and analyzing engagement data."
                        </p>
                        <p class="text-slate-400 leading-relaxed">
                            "Whether rendering complex molecular structures or optimizing load times for deep-space "
                            "data visualizations, I maintain a monochromatic focus on performance and clarity."
                        </p>
                        <div class="pt-4">
                            <a
                                href="#"
                                class="inline-flex items-center text-white border-b border-primary pb-1 hover:text-primary transition-colors font-medium"
                            >
                                "Analyze Resume "
                                <Symbol name="download" class="material-symbols-outlined ml-2 text-lg" />
                            </a>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4 order-1 md:order-2">
                        {TECH_STACK.into_iter().map(|entry| view! { <TechCard entry=entry /> }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechCard(entry: TechStackEntry) -> impl IntoView {
    let style = entry.accent.style();
    view! {
        <div class=style.stack_card>
            <Symbol name=entry.icon class=style.stack_icon />
            <h4 class="text-white font-bold text-sm uppercase tracking-wider">{entry.title}</h4>
            <p class="text-xs text-slate-500 mt-1 font-mono">{entry.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_to_string;
    use crate::theme::Accent;

    #[test]
    fn renders_four_stack_cards_in_order() {
        let html = render_to_string(|| view! { <About /> });

        let cards = [Accent::Primary, Accent::Secondary]
            .iter()
            .map(|a| html.matches(a.style().stack_card).count())
            .sum::<usize>();
        assert_eq!(cards, TECH_STACK.len());

        let mut cursor = 0;
        for entry in TECH_STACK {
            for text in [entry.icon, entry.title, entry.description] {
                let at = html[cursor..]
                    .find(text)
                    .unwrap_or_else(|| panic!("{text} missing or out of order"));
                cursor += at + text.len();
            }
        }
    }

    #[test]
    fn icon_colour_follows_accent() {
        let html = render_to_string(|| view! { <TechCard entry=TECH_STACK[1] /> });
        assert!(html.contains("material-symbols-outlined text-secondary mb-3"));
        assert!(html.contains("hexagon"));

        let html = render_to_string(|| view! { <TechCard entry=TECH_STACK[3] /> });
        assert!(html.contains("material-symbols-outlined text-primary mb-3"));
        assert!(html.contains("architecture"));
    }

    #[test]
    fn about_anchor_and_prose() {
        let html = render_to_string(|| view! { <About /> });
        assert!(html.contains("id=\"about\""));
        assert!(html.contains("Scientific Methodology"));
        assert!(html.contains("Analyze Resume"));
    }
}
