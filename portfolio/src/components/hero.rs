use leptos::prelude::*;

use super::Symbol;
use crate::content::{Anchor, HERO_WAVE_URL, OWNER_NAME};

/// Full-height banner with the headline and the two calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    let wave_style = format!(
        "background-image: url('{HERO_WAVE_URL}'); filter: hue-rotate(180deg) brightness(1.2);"
    );

    view! {
        <section
            id=Anchor::Home.id()
            class="relative flex min-h-[90vh] flex-col items-center justify-center overflow-hidden px-4 sm:px-6 bg-gradient-to-b from-background-dark to-[#050a0d]"
        >
            <div class="absolute inset-0 z-0 pointer-events-none">
                <div class="wave-bg absolute bottom-0 h-80 w-[200%] opacity-30 mix-blend-screen" style=wave_style></div>
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-void"></div>
            </div>

            <div class="relative z-10 mx-auto max-w-5xl text-center mt-10">
                <p class="mb-4 text-xs font-bold uppercase tracking-[0.2em] text-primary/80">"Student Portfolio 2024"</p>
                <h1 class="mb-6 text-5xl font-black leading-tight tracking-tight text-white sm:text-7xl lg:text-8xl">
                    "Bridging the "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary via-cyan-300 to-white">"Abyss"</span>
                    " "
                    <br />
                    "to the "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-secondary via-purple-400 to-white">"Cosmos"</span>
                </h1>
                <p class="mx-auto mb-10 max-w-2xl text-lg font-light leading-relaxed text-slate-400 sm:text-xl">
                    "I'm "
                    <span class="text-white font-medium">{OWNER_NAME}</span>
                    ". I blend organic chemistry concepts with deep-space aesthetics to create immersive digital experiences."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <a
                        href=Anchor::Projects.href()
                        class="group relative flex h-12 items-center justify-center overflow-hidden rounded-full bg-primary px-8 text-sm font-bold text-[#020204] transition-all hover:bg-cyan-300 hover:shadow-neon"
                    >
                        <span class="relative z-10 mr-2">"Explore Universe"</span>
                        <span class="material-symbols-outlined relative z-10 text-[20px] transition-transform group-hover:translate-x-1">
                            "rocket_launch"
                        </span>
                    </a>
                    <a
                        href=Anchor::Contact.href()
                        class="flex h-12 items-center justify-center rounded-full border border-slate-700 px-8 text-sm font-bold text-white transition-colors hover:border-secondary hover:text-secondary hover:shadow-neon-purple bg-surface-dark/50 backdrop-blur-sm"
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>

            <div class="absolute bottom-10 animate-bounce text-slate-500">
                <Symbol name="keyboard_arrow_down" class="material-symbols-outlined text-3xl" />
            </div>
        </section>
    }
}
