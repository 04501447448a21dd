//! Profile page with the current role and a role reset action.

use leptos::prelude::*;

use crate::state::role::SessionRoleStore;

/// Profile page — shows the selected role. Switching roles clears the
/// stored value; the navigation guard then returns to `/welcome`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let role_store = expect_context::<RwSignal<SessionRoleStore>>();

    let role_label = move || {
        role_store.with(|store| {
            store.current_role().map_or_else(|| "none".to_owned(), |r| r.as_str().to_owned())
        })
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__role">"Current role: " {role_label}</p>
            <button class="btn" on:click=move |_| role_store.update(|store| store.clear_role())>
                "Switch role"
            </button>
        </div>
    }
}
