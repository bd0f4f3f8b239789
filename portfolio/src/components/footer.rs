use leptos::prelude::*;

use crate::content::{COPYRIGHT_YEAR, OWNER_NAME};

/// Copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {COPYRIGHT_YEAR} {OWNER_NAME}. ");

    view! {
        <footer class="border-t border-white/5 bg-void py-10 px-6 text-center">
            <p class="text-slate-600 text-sm font-mono">
                {copyright}
                <span class="text-slate-700 mx-2">"|"</span>
                " Built in the void with "
                <span class="text-secondary">"♥"</span>
                " and Tailwind CSS."
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_to_string;

    #[test]
    fn renders_literal_copyright_year() {
        let html = render_to_string(|| view! { <Footer /> });
        assert!(html.starts_with("<footer"));
        assert!(html.contains("© 2024 Thanh Huy."));
        assert!(html.contains("Tailwind CSS."));
    }
}
