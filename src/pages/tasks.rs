//! Tasks page — the landing route once a role is selected.

use leptos::prelude::*;

/// Tasks page with the family chore board.
#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <div class="tasks-page">
            <h1>"Tasks"</h1>
            <p>"Chores and to-dos for the whole family."</p>
        </div>
    }
}
