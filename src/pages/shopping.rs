//! Shared shopping list page.

use leptos::prelude::*;

/// Shopping list page.
#[component]
pub fn ShoppingPage() -> impl IntoView {
    view! {
        <div class="shopping-page">
            <h1>"Shopping"</h1>
            <p>"The shared grocery and errands list."</p>
        </div>
    }
}
