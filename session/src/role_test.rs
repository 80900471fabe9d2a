use super::*;

#[test]
fn parse_known_tags() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("user"), Some(Role::User));
    assert_eq!(Role::parse(" admin "), Some(Role::Admin));
}

#[test]
fn parse_unknown_tags_as_anonymous() {
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("root"), None);
}

#[test]
fn display_matches_wire_tag() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::User.to_string(), "user");
}

#[test]
fn public_requirement_admits_everyone() {
    let req = RouteRequirement::public();
    assert!(req.is_public());
    assert!(req.admits(None));
    assert!(req.admits(Some(Role::User)));
    assert!(req.admits(Some(Role::Admin)));
}

#[test]
fn set_requirement_admits_only_members() {
    let req = RouteRequirement::any_of([Role::Admin, Role::User]);
    assert!(req.admits(Some(Role::Admin)));
    assert!(req.admits(Some(Role::User)));
    assert!(!req.admits(None));

    let admin_only = RouteRequirement::any_of([Role::Admin]);
    assert!(admin_only.admits(Some(Role::Admin)));
    assert!(!admin_only.admits(Some(Role::User)));
}

#[test]
fn scalar_requirement_is_a_singleton_set() {
    assert_eq!(
        RouteRequirement::only(Role::Admin),
        RouteRequirement::any_of([Role::Admin])
    );
    assert_eq!(RouteRequirement::from(Role::User).roles().collect::<Vec<_>>(), vec![Role::User]);
}

#[test]
fn duplicate_roles_collapse() {
    let req = RouteRequirement::any_of([Role::User, Role::User, Role::Admin]);
    assert_eq!(req.roles().collect::<Vec<_>>(), vec![Role::Admin, Role::User]);
}
