use std::cell::Cell;

use super::*;
use crate::role::Role;
use crate::test_support::{FUTURE_EXP, FixedClock, NOW_MS, PAST_EXP, token};
use crate::token_store::MemoryTokenStore;

fn guard_with(token: Option<String>) -> (RouteGuard, Arc<MemoryTokenStore>) {
    let store = Arc::new(match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::new(),
    });
    let guard = RouteGuard::new(store.clone(), Arc::new(FixedClock::at(NOW_MS)));
    (guard, store)
}

#[test]
fn admin_renders_admin_view() {
    let (guard, _) = guard_with(Some(token("admin", FUTURE_EXP)));
    let out = guard.guard(&RouteRequirement::only(Role::Admin), || "user list");
    assert_eq!(out, Guarded::Render("user list"));
}

#[test]
fn user_is_sent_home_from_admin_view_without_rendering() {
    let (guard, _) = guard_with(Some(token("user", FUTURE_EXP)));
    let rendered = Cell::new(false);
    let out = guard.guard(&RouteRequirement::only(Role::Admin), || rendered.set(true));
    assert_eq!(out, Guarded::Redirect(Redirect::Home));
    assert!(!rendered.get());
}

#[test]
fn anonymous_visitor_is_sent_to_login_from_profile() {
    let (guard, _) = guard_with(None);
    let table = RouteTable::console_default();
    assert_eq!(
        guard.check_path(&table, "/users/myprofile"),
        Access::Denied(Redirect::Login)
    );
}

#[test]
fn anonymous_visitor_may_render_public_pages() {
    let (guard, _) = guard_with(None);
    let table = RouteTable::console_default();
    assert_eq!(guard.check_path(&table, "/items"), Access::Granted);
}

#[test]
fn expired_admin_token_is_sent_to_login() {
    let (guard, _) = guard_with(Some(token("admin", PAST_EXP)));
    assert_eq!(
        guard.check(&RouteRequirement::only(Role::Admin)),
        Access::Denied(Redirect::Login)
    );
}

#[test]
fn guard_observes_token_changes() {
    let (guard, store) = guard_with(None);
    let req = RouteRequirement::any_of([Role::Admin, Role::User]);
    assert_eq!(guard.check(&req), Access::Denied(Redirect::Login));
    store.save(&token("user", FUTURE_EXP));
    assert_eq!(guard.check(&req), Access::Granted);
    store.clear();
    assert_eq!(guard.check(&req), Access::Denied(Redirect::Login));
}
