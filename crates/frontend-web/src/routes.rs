//! Hash routes and their authentication requirements.

use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/list/:id")]
    SupplyList { id: String },
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Routes rendered only for a signed-in user. A matching path with no user
/// renders an empty main instead.
pub fn requires_user(route: &Route) -> bool {
    matches!(route, Route::Profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_matches_home_exactly() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        // Sub-paths must not collapse onto the home route.
        assert_eq!(Route::recognize("/supplies"), Some(Route::NotFound));
    }

    #[test]
    fn list_route_captures_the_id_param() {
        assert_eq!(
            Route::recognize("/list/42"),
            Some(Route::SupplyList { id: "42".to_owned() })
        );
        assert_eq!(
            Route::recognize("/list/fall-2026"),
            Some(Route::SupplyList { id: "fall-2026".to_owned() })
        );
    }

    #[test]
    fn bare_list_path_is_not_a_list_route() {
        assert_eq!(Route::recognize("/list"), Some(Route::NotFound));
    }

    #[test]
    fn profile_route_matches() {
        assert_eq!(Route::recognize("/profile"), Some(Route::Profile));
    }

    #[test]
    fn only_the_profile_route_requires_a_user() {
        assert!(requires_user(&Route::Profile));
        assert!(!requires_user(&Route::Home));
        assert!(!requires_user(&Route::SupplyList { id: "1".to_owned() }));
        assert!(!requires_user(&Route::NotFound));
    }
}
