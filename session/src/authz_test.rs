use super::*;
use crate::role::Role;
use crate::test_support::{FUTURE_EXP, NOW_MS, PAST_EXP, token};

fn admin_only() -> RouteRequirement {
    RouteRequirement::only(Role::Admin)
}

fn any_member() -> RouteRequirement {
    RouteRequirement::any_of([Role::Admin, Role::User])
}

// =============================================================
// inspect
// =============================================================

#[test]
fn inspect_classifies_tokens() {
    assert_eq!(inspect(None, NOW_MS), TokenStatus::Missing);
    assert!(matches!(inspect(Some("junk"), NOW_MS), TokenStatus::Malformed(_)));
    assert!(matches!(
        inspect(Some(&token("user", PAST_EXP)), NOW_MS),
        TokenStatus::Expired(_)
    ));
    let live = inspect(Some(&token("admin", FUTURE_EXP)), NOW_MS);
    assert_eq!(live.live_claims().and_then(|c| c.role), Some(Role::Admin));
}

// =============================================================
// authorize
// =============================================================

#[test]
fn public_route_is_granted_without_token() {
    assert_eq!(
        authorize(None, &RouteRequirement::public(), NOW_MS),
        Access::Granted
    );
    assert!(authorize(Some("junk"), &RouteRequirement::public(), NOW_MS).is_granted());
}

#[test]
fn missing_token_redirects_to_login() {
    assert_eq!(
        authorize(None, &any_member(), NOW_MS),
        Access::Denied(Redirect::Login)
    );
}

#[test]
fn admin_token_is_granted_admin_route() {
    let t = token("admin", FUTURE_EXP);
    assert_eq!(authorize(Some(&t), &admin_only(), NOW_MS), Access::Granted);
}

#[test]
fn user_token_on_admin_route_redirects_home() {
    let t = token("user", FUTURE_EXP);
    assert_eq!(
        authorize(Some(&t), &admin_only(), NOW_MS),
        Access::Denied(Redirect::Home)
    );
}

#[test]
fn unknown_role_on_guarded_route_redirects_home() {
    let t = token("auditor", FUTURE_EXP);
    assert_eq!(
        authorize(Some(&t), &any_member(), NOW_MS),
        Access::Denied(Redirect::Home)
    );
}

#[test]
fn expired_token_with_valid_role_redirects_to_login() {
    let t = token("admin", PAST_EXP);
    assert_eq!(
        authorize(Some(&t), &admin_only(), NOW_MS),
        Access::Denied(Redirect::Login)
    );
}

#[test]
fn malformed_token_redirects_to_login() {
    assert_eq!(
        authorize(Some("a.b"), &any_member(), NOW_MS),
        Access::Denied(Redirect::Login)
    );
}

#[test]
fn redirect_paths() {
    assert_eq!(Redirect::Login.path(), "/login");
    assert_eq!(Redirect::Home.path(), "/");
}
