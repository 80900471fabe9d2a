//! Sign-out page: drops the session, then returns home after a pause.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::SessionStore;

use crate::util::task::spawn_scoped;

pub const LOGOUT_REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[component]
pub fn LogoutPage() -> impl IntoView {
    let store = expect_context::<Arc<SessionStore>>();
    let navigate = use_navigate();

    store.logout();
    spawn_scoped(async move {
        #[cfg(feature = "csr")]
        gloo_timers::future::sleep(LOGOUT_REDIRECT_DELAY).await;
        navigate("/", NavigateOptions::default());
    });

    view! {
        <div class="logout-page">
            <Title text="Warehouse Manager | Logout"/>
            <p>"You have been logged out."</p>
            <p>{format!("Redirecting to the home page in {} seconds...", LOGOUT_REDIRECT_DELAY.as_secs())}</p>
        </div>
    }
}
