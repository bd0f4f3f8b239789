//! Fixed top navigation bar.

use leptos::ev;
use leptos::prelude::*;

use super::SYMBOL;
use crate::content::{AVATAR_URL, NAV_ITEMS, OWNER_NAME};
use crate::state::{NavState, is_scrolled};

/// Fixed header with brand, in-page links and a collapsible mobile menu.
///
/// Owns a private [`NavState`]. While mounted in the browser it listens to
/// window `scroll` events; the listener is removed when the component is
/// torn down. `initial` seeds the state, which is how prerendering and tests
/// show the scrolled look or the open menu.
#[component]
pub fn Navbar(
    /// Starting state (defaults to top of page, menu closed)
    #[prop(optional)]
    initial: NavState,
) -> impl IntoView {
    let state = RwSignal::new(initial);

    // Effects only run in the browser, so the listener is never registered
    // while prerendering.
    Effect::new(move |_| {
        let handle = window_event_listener(ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            if state.with_untracked(|s| s.scrolled) != is_scrolled(offset) {
                state.update(|s| {
                    s.on_scroll(offset);
                });
                tracing::trace!(offset, "navbar scroll state changed");
            }
        });
        on_cleanup(move || handle.remove());
    });

    let avatar_style = format!("background-image: url('{AVATAR_URL}')");
    let avatar_label = format!("Portrait of {OWNER_NAME}");

    view! {
        <nav class=move || state.get().visual().class()>
            <div class="mx-auto flex h-16 max-w-7xl items-center justify-between px-6 lg:px-8">
                <div class="flex items-center gap-4">
                    <div
                        class="h-10 w-10 rounded-full bg-cover bg-center ring-2 ring-primary/50 shadow-neon"
                        style=avatar_style
                        aria-label=avatar_label
                    ></div>
                    <span class="text-lg font-bold tracking-tight text-white hidden sm:block">{OWNER_NAME}</span>
                </div>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href()
                                    class="text-sm font-medium text-slate-300 hover:text-primary transition-colors"
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    class="md:hidden p-2 text-slate-300 hover:text-white"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || if state.get().menu_open { "true" } else { "false" }
                    on:click=move |_| state.update(NavState::toggle_menu)
                >
                    <span class=SYMBOL>{move || state.get().toggle_icon()}</span>
                </button>
            </div>

            // Mobile menu
            <Show when=move || state.get().menu_open>
                <div class="md:hidden absolute top-16 left-0 w-full bg-background-dark/95 border-b border-white/5 backdrop-blur-md py-4">
                    <div class="flex flex-col items-center gap-4">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="text-base font-medium text-slate-300 hover:text-primary transition-colors"
                                        on:click=move |_| state.update(NavState::select_link)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
