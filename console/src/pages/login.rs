//! Username + password sign-in.

use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use session::SessionStore;

use crate::pages::navigate_on;
use crate::util::auth::session_error_message;
use crate::util::form::validate_login_input;
use crate::util::task::spawn_scoped;

/// Where a successful login lands.
pub const AFTER_LOGIN_PATH: &str = "/users/myprofile";

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<Arc<SessionStore>>();
    let redirect = RwSignal::new(None::<String>);
    navigate_on(redirect);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let store = store.clone();
        spawn_scoped(async move {
            match store.login(&user, &pass).await {
                Ok(profile) => {
                    log::info!("login: signed in as {}", profile.username);
                    redirect.set(Some(AFTER_LOGIN_PATH.to_owned()));
                }
                Err(err) => {
                    password.set(String::new());
                    error.set(Some(session_error_message(&err)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <Title text="Warehouse Manager | Login"/>
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
