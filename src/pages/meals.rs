//! Meal planning page.

use leptos::prelude::*;

/// Weekly meal plan page.
#[component]
pub fn MealsPage() -> impl IntoView {
    view! {
        <div class="meals-page">
            <h1>"Meals"</h1>
            <p>"What's for dinner this week?"</p>
        </div>
    }
}
