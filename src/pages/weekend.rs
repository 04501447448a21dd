//! Weekend planning page.

use leptos::prelude::*;

#[component]
pub fn WeekendPage() -> impl IntoView {
    view! {
        <div class="weekend-page">
            <h1>"Weekend"</h1>
            <p>"Trips, visits, and plans for the weekend."</p>
        </div>
    }
}
