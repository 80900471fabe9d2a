use super::*;

fn profile(role: &str) -> UserProfile {
    UserProfile {
        id: 1,
        username: "ann".to_owned(),
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: "ann@example.com".to_owned(),
        role: role.to_owned(),
        date_joined: "2024-02-01".to_owned(),
        is_active: true,
    }
}

fn authenticated(role: &str) -> AuthState {
    AuthState {
        phase: SessionPhase::Authenticated,
        user: Some(profile(role)),
        loading: false,
    }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.phase, SessionPhase::Uninitialized);
    assert!(!state.is_authenticated());
}

#[test]
fn mirrors_session_snapshot() {
    let snapshot = SessionState {
        phase: SessionPhase::Authenticated,
        user: Some(profile("user")),
        loading: false,
    };
    let state = AuthState::from(&snapshot);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::User));
}

#[test]
fn admin_flag_follows_profile_role() {
    assert!(authenticated("admin").is_admin());
    assert!(!authenticated("user").is_admin());
}

#[test]
fn inventory_edits_require_known_role() {
    assert!(authenticated("user").can_edit_inventory());
    assert!(!authenticated("auditor").can_edit_inventory());
    assert!(!AuthState::default().can_edit_inventory());
}
