use leptos::prelude::*;

use super::Symbol;
use crate::content::{Anchor, CONTACT_EMAIL, CONTACT_MAILTO, SOCIAL_LINKS, SocialLink};

/// Closing call to action with the mail and social links.
#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_MAILTO}");

    view! {
        <section id=Anchor::Contact.id() class="py-32 px-4 sm:px-6 relative overflow-hidden bg-void">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 h-[400px] w-[400px] bg-secondary/10 blur-[100px] rounded-full"></div>
            <div class="absolute top-0 w-full h-px bg-gradient-to-r from-transparent via-secondary/50 to-transparent"></div>

            <div class="mx-auto max-w-2xl text-center relative z-10">
                <h2 class="text-4xl font-black text-white mb-6 sm:text-6xl tracking-tighter">"Signal Received?"</h2>
                <p class="text-lg text-slate-400 mb-12 font-light">
                    "Ready to collaborate on the next frontier of web design? "
                    <br class="hidden sm:block" />
                    "My frequency is open for new opportunities."
                </p>

                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <a
                        href=mailto
                        class="flex items-center justify-center gap-3 bg-[#0a0f14] hover:bg-[#131b24] border border-slate-800 hover:border-secondary text-white px-8 py-4 rounded-lg transition-all group shadow-lg hover:shadow-neon-purple"
                    >
                        <Symbol name="mail" class="material-symbols-outlined text-secondary group-hover:animate-pulse" />
                        <span class="font-medium tracking-wide">{CONTACT_EMAIL}</span>
                    </a>
                    <div class="flex gap-4 justify-center items-center">
                        {SOCIAL_LINKS.into_iter().map(|link| view! { <SocialIcon link=link /> }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialIcon(link: SocialLink) -> impl IntoView {
    let platform = link.platform;
    view! {
        <a href=link.href class=platform.accent().style().social_link aria-label=platform.label()>
            <Symbol name=platform.icon() />
        </a>
    }
}
