// Portfolio page, browser build
// Mount the page into <body>; Tailwind, fonts and page CSS come from index.html.

use leptos::prelude::*;
use portfolio::components::Portfolio;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <Portfolio /> });
}
