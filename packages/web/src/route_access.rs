//! Explicit route-to-role registry.
//!
//! Every guarded route is listed here by variant, so access rules are
//! decided by an exhaustive match instead of inspecting path strings.
//! Adding a route without deciding its access level is a compile error.

use api::Role;

use crate::Route;

/// The role a route requires, or `None` for public routes.
pub fn required_role(route: &Route) -> Option<Role> {
    match route {
        Route::Landing {}
        | Route::AdminLogin {}
        | Route::OperationLogin {}
        | Route::NotFound { .. } => None,
        // The unauthorized page must stay reachable for any signed-in user.
        Route::Unauthorized {} => None,
        Route::AdminOverview {}
        | Route::AdminDefaultTasks {}
        | Route::AdminDailyTasks {}
        | Route::AdminNewTasks {}
        | Route::AdminHelp {} => Some(Role::Admin),
        Route::OperationOverview {}
        | Route::OperationDailyTasks {}
        | Route::OperationNewTasks {}
        | Route::OperationHelp {} => Some(Role::Operation),
    }
}

/// Where to send an unauthenticated visitor of a role's screens.
pub fn login_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminLogin {},
        Role::Operation => Route::OperationLogin {},
    }
}

/// A role's dashboard landing page, used after login.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminOverview {},
        Role::Operation => Route::OperationOverview {},
    }
}

/// Where a signed-in user of the wrong role lands.
pub fn unauthorized_route() -> Route {
    Route::Unauthorized {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_routes_require_admin() {
        for route in [
            Route::AdminOverview {},
            Route::AdminDefaultTasks {},
            Route::AdminDailyTasks {},
            Route::AdminNewTasks {},
            Route::AdminHelp {},
        ] {
            assert_eq!(required_role(&route), Some(Role::Admin), "{route:?}");
        }
    }

    #[test]
    fn operation_routes_require_operation() {
        for route in [
            Route::OperationOverview {},
            Route::OperationDailyTasks {},
            Route::OperationNewTasks {},
            Route::OperationHelp {},
        ] {
            assert_eq!(required_role(&route), Some(Role::Operation), "{route:?}");
        }
    }

    #[test]
    fn public_routes_require_nothing() {
        for route in [
            Route::Landing {},
            Route::AdminLogin {},
            Route::OperationLogin {},
            Route::Unauthorized {},
            Route::NotFound { segments: vec![] },
        ] {
            assert_eq!(required_role(&route), None, "{route:?}");
        }
    }

    #[test]
    fn login_and_home_are_role_specific() {
        assert_eq!(login_route(Role::Admin), Route::AdminLogin {});
        assert_eq!(login_route(Role::Operation), Route::OperationLogin {});
        assert_eq!(home_route(Role::Admin), Route::AdminOverview {});
        assert_eq!(home_route(Role::Operation), Route::OperationOverview {});
    }
}
