//! Role selection page shown until a family role is chosen.

use leptos::prelude::*;

use crate::state::role::{Role, SessionRoleStore};

/// Role selection page — picking a role persists it; the navigation guard
/// then moves the session on to `/tasks`.
#[component]
pub fn RoleSelectionPage() -> impl IntoView {
    let role_store = expect_context::<RwSignal<SessionRoleStore>>();

    let select = move |value: &'static str| {
        move |_| {
            if let Some(role) = Role::new(value) {
                role_store.update(|store| store.set_role(role));
            }
        }
    };

    view! {
        <div class="role-page">
            <h1>"Welcome to Hearth"</h1>
            <p>"Who is using this device?"</p>
            <div class="role-page__choices">
                <button class="btn btn--primary" on:click=select("parent")>
                    "Parent"
                </button>
                <button class="btn btn--primary" on:click=select("child")>
                    "Child"
                </button>
            </div>
        </div>
    }
}
