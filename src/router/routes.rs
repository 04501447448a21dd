#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Navigation targets of the app.
///
/// `Home` is a redirect-only alias for `Tasks` and carries no component.
/// `Login` belongs to the login-gated guard revision and is not registered
/// in the current route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Login,
    Welcome,
    Tasks,
    Shopping,
    Wishlist,
    Meals,
    Weekend,
    Profile,
}

impl RouteName {
    /// The URL path this route lives at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Welcome => "/welcome",
            Self::Tasks => "/tasks",
            Self::Shopping => "/shopping",
            Self::Wishlist => "/wishlist",
            Self::Meals => "/meals",
            Self::Weekend => "/weekend",
            Self::Profile => "/profile",
        }
    }

    /// Resolve a URL path to a route name.
    ///
    /// Trailing slashes are ignored; unknown paths return `None` and fall
    /// through to the router's not-found view.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/welcome" => Some(Self::Welcome),
            "/tasks" => Some(Self::Tasks),
            "/shopping" => Some(Self::Shopping),
            "/wishlist" => Some(Self::Wishlist),
            "/meals" => Some(Self::Meals),
            "/weekend" => Some(Self::Weekend),
            "/profile" => Some(Self::Profile),
            _ => None,
        }
    }
}
