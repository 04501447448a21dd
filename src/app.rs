//! Root application component with routing and the navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{
    meals::MealsPage, profile::ProfilePage, role_selection::RoleSelectionPage,
    shopping::ShoppingPage, tasks::TasksPage, weekend::WeekendPage, wishlist::WishlistPage,
};
use crate::router::guard::{self, Decision};
use crate::router::routes::RouteName;
use crate::state::role::{RoleStore, SessionRoleStore};
use crate::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session role store from browser storage, provides it via
/// context, and sets up client-side routing behind the navigation guard.
/// `/` carries no component and redirects straight to `/tasks`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let role_store = RwSignal::new(RoleStore::new(BrowserStorage::new()));
    provide_context(role_store);

    view! {
        <Stylesheet id="leptos" href="/pkg/hearth.css"/>
        <Title text="Hearth"/>

        <Router>
            <NavigationGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/tasks"/> }/>
                <Route path=StaticSegment("welcome") view=RoleSelectionPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
                <Route path=StaticSegment("shopping") view=ShoppingPage/>
                <Route path=StaticSegment("wishlist") view=WishlistPage/>
                <Route path=StaticSegment("meals") view=MealsPage/>
                <Route path=StaticSegment("weekend") view=WeekendPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}

/// Runs the role gate on every navigation.
///
/// The effect subscribes to both the path and the role store, which keeps
/// the funnel self-maintaining: selecting a role while on `/welcome`
/// redirects to `/tasks`, clearing it from `/profile` returns to
/// `/welcome`. Unknown paths are left to the not-found fallback.
#[component]
fn NavigationGuard() -> impl IntoView {
    let role_store = expect_context::<RwSignal<SessionRoleStore>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let Some(target) = RouteName::from_path(&path) else {
            return;
        };
        let decision = role_store.with(|store| guard::check(target, store.current_role()));
        if let Decision::Redirect(to) = decision {
            navigate(to.path(), NavigateOptions::default());
        }
    });
}
