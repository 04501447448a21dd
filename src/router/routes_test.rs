use super::*;

const ALL_ROUTES: [RouteName; 9] = [
    RouteName::Home,
    RouteName::Login,
    RouteName::Welcome,
    RouteName::Tasks,
    RouteName::Shopping,
    RouteName::Wishlist,
    RouteName::Meals,
    RouteName::Weekend,
    RouteName::Profile,
];

#[test]
fn path_round_trips_for_every_route() {
    for route in ALL_ROUTES {
        assert_eq!(RouteName::from_path(route.path()), Some(route));
    }
}

#[test]
fn home_is_the_root_path() {
    assert_eq!(RouteName::Home.path(), "/");
    assert_eq!(RouteName::from_path("/"), Some(RouteName::Home));
}

#[test]
fn paths_are_unique() {
    for (i, a) in ALL_ROUTES.iter().enumerate() {
        for (j, b) in ALL_ROUTES.iter().enumerate() {
            if i != j {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(RouteName::from_path("/tasks/"), Some(RouteName::Tasks));
}

#[test]
fn unknown_path_resolves_to_none() {
    assert_eq!(RouteName::from_path("/settings"), None);
    assert_eq!(RouteName::from_path("/tasks/today"), None);
}
