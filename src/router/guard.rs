#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::router::routes::RouteName;
use crate::state::role::Role;

/// Outcome of a guard check for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation complete unchanged.
    Proceed,
    /// Replace the requested target before anything renders.
    Redirect(RouteName),
}

/// Role gate run before every navigation.
///
/// Arms are evaluated top to bottom and the first match wins; a redirect
/// target is never re-checked within the same invocation. Until a role is
/// selected every route funnels to the selection page; once one exists,
/// the selection page itself becomes unreachable.
pub fn check(target: RouteName, role: Option<&Role>) -> Decision {
    match (role, target) {
        (None, t) if t != RouteName::Welcome => Decision::Redirect(RouteName::Welcome),
        (Some(_), RouteName::Welcome) => Decision::Redirect(RouteName::Tasks),
        _ => Decision::Proceed,
    }
}

/// Earlier guard revision with a login gate ahead of the role gate.
///
/// Kept as a pure function for deployments that front onboarding with an
/// authentication step (flag read via [`crate::state::auth`]); the current
/// route table wires [`check`] instead. Same first-match-wins evaluation.
pub fn check_with_login(target: RouteName, authenticated: bool, role: Option<&Role>) -> Decision {
    match (authenticated, role, target) {
        (false, _, t) if t != RouteName::Login => Decision::Redirect(RouteName::Login),
        (true, _, RouteName::Login) => Decision::Redirect(RouteName::Welcome),
        (_, None, t) if t != RouteName::Welcome && t != RouteName::Login => {
            Decision::Redirect(RouteName::Welcome)
        }
        (_, Some(_), RouteName::Welcome) => Decision::Redirect(RouteName::Tasks),
        _ => Decision::Proceed,
    }
}
