//! Wishlist page.

use leptos::prelude::*;

#[component]
pub fn WishlistPage() -> impl IntoView {
    view! {
        <div class="wishlist-page">
            <h1>"Wishlist"</h1>
            <p>"Gift ideas and wishes, one list per family member."</p>
        </div>
    }
}
