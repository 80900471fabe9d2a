//! "My profile": the signed-in user's card plus edit and password forms.
//!
//! Both forms go through the session store so the navbar and every other
//! view see the refreshed profile.

use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use session::{ProfileUpdate, SessionError, SessionStore, UserProfile};

use crate::components::form_field::TextField;
use crate::state::auth::AuthState;
use crate::util::auth::session_error_message;
use crate::util::form::{parse_email, validate_password_change};
use crate::util::task::spawn_scoped;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Notice {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Notice {
    fn view(&self) -> AnyView {
        match self {
            Self::None => ().into_any(),
            Self::Success(text) => view! { <p class="notice notice--success">{text.clone()}</p> }.into_any(),
            Self::Error(text) => view! { <p class="notice notice--error">{text.clone()}</p> }.into_any(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileStatus {
    Loading,
    Missing,
    Ready,
}

impl ProfileStatus {
    fn of(state: &AuthState) -> Self {
        if state.loading {
            Self::Loading
        } else if state.user.is_some() {
            Self::Ready
        } else {
            Self::Missing
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    // Only re-render the page skeleton when the status flips; profile edits
    // refresh the card in place so form notices survive.
    let status = Memo::new(move |_| auth.with(ProfileStatus::of));

    view! {
        <div class="profile-page">
            <Title text="Warehouse Manager | My Profile"/>
            {move || match status.get() {
                ProfileStatus::Loading => view! { <p>"Loading..."</p> }.into_any(),
                ProfileStatus::Missing => view! { <p>"No user data available."</p> }.into_any(),
                ProfileStatus::Ready => {
                    view! {
                        <ProfileCard/>
                        <EditProfileForm/>
                        <ChangePasswordForm/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || auth.get().user.map(render_card)
}

fn render_card(user: UserProfile) -> impl IntoView {
    let role_class = if user.is_admin() { "badge badge--admin" } else { "badge" };
    let (active_class, active_label) = if user.is_active {
        ("badge badge--ok", "Yes")
    } else {
        ("badge badge--danger", "No")
    };
    let joined = user.joined_date().to_owned();

    view! {
        <section class="profile-card">
            <h1>"My Profile"</h1>
            <dl>
                <dt>"Username"</dt>
                <dd>{user.username}</dd>
                <dt>"First Name"</dt>
                <dd>{user.first_name}</dd>
                <dt>"Last Name"</dt>
                <dd>{user.last_name}</dd>
                <dt>"Email"</dt>
                <dd>{user.email}</dd>
                <dt>"Role"</dt>
                <dd><span class=role_class>{user.role}</span></dd>
                <dt>"Joined Date"</dt>
                <dd>{joined}</dd>
                <dt>"Active"</dt>
                <dd><span class=active_class>{active_label}</span></dd>
            </dl>
        </section>
    }
}

#[component]
fn EditProfileForm() -> impl IntoView {
    let store = expect_context::<Arc<SessionStore>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let initial = auth.get_untracked().user;
    let initial_field = |pick: fn(&UserProfile) -> &str| initial.as_ref().map(|u| pick(u).to_owned()).unwrap_or_default();
    let username = RwSignal::new(initial_field(|u| u.username.as_str()));
    let first_name = RwSignal::new(initial_field(|u| u.first_name.as_str()));
    let last_name = RwSignal::new(initial_field(|u| u.last_name.as_str()));
    let email = RwSignal::new(initial_field(|u| u.email.as_str()));
    let notice = RwSignal::new(Notice::None);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(current) = auth.get_untracked().user else {
            notice.set(Notice::Error(session_error_message(&SessionError::Unauthorized)));
            return;
        };
        let update = ProfileUpdate::diff(
            &current,
            &username.get_untracked(),
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
        );
        if update.is_empty() {
            notice.set(Notice::Error("Nothing to update.".to_owned()));
            return;
        }
        if let Some(changed) = &update.email {
            if let Err(message) = parse_email(changed) {
                notice.set(Notice::Error(message.to_owned()));
                return;
            }
        }
        busy.set(true);
        let store = store.clone();
        spawn_scoped(async move {
            match store.update_me(&update).await {
                Ok(_) => notice.set(Notice::Success("Profile updated.".to_owned())),
                Err(err) => notice.set(Notice::Error(session_error_message(&err))),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="profile-form">
            <h2>"Edit Profile"</h2>
            <form on:submit=on_submit>
                <TextField label="Username" value=username/>
                <TextField label="First Name" value=first_name/>
                <TextField label="Last Name" value=last_name/>
                <TextField label="Email" value=email kind="email"/>
                <button type="submit" disabled=move || busy.get()>"Save Changes"</button>
            </form>
            {move || notice.with(Notice::view)}
        </section>
    }
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let store = expect_context::<Arc<SessionStore>>();
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let notice = RwSignal::new(Notice::None);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_password_change(
            &current.get_untracked(),
            &new_password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                notice.set(Notice::Error(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        let store = store.clone();
        spawn_scoped(async move {
            match store.change_password(&request).await {
                Ok(()) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    notice.set(Notice::Success("Password changed.".to_owned()));
                }
                Err(err) => notice.set(Notice::Error(session_error_message(&err))),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="profile-form">
            <h2>"Change Password"</h2>
            <form on:submit=on_submit>
                <TextField label="Current Password" value=current kind="password"/>
                <TextField label="New Password" value=new_password kind="password"/>
                <TextField label="Confirm New Password" value=confirm kind="password"/>
                <button type="submit" disabled=move || busy.get()>"Change Password"</button>
            </form>
            {move || notice.with(Notice::view)}
        </section>
    }
}
