mod home;

pub use home::HomePage;

use leptos::prelude::*;

/// Fallback view for paths outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="container">
            <h1>"Page not found"</h1>
            <p>
                <a href="/">"Back to the episode index"</a>
            </p>
        </main>
    }
}
