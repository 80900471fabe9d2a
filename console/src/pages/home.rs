//! Landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|state| match &state.user {
            Some(user) => format!("Welcome back, {}.", user.display_name()),
            None => "Welcome to the Warehouse Manager.".to_owned(),
        })
    };

    view! {
        <div class="home-page">
            <Title text="Warehouse Manager"/>
            <h1>"Warehouse Manager"</h1>
            <p class="home-page__lead">{greeting}</p>
            <div class="home-page__actions">
                <A href="/items">"View Items"</A>
                <A href="/warehouses">"View Warehouses"</A>
                <A href="/categories">"View Categories"</A>
            </div>
            <h2>"How to Use"</h2>
            <ul>
                <li><strong>"Items: "</strong>"browse and edit the item catalogue."</li>
                <li><strong>"Warehouses: "</strong>"manage locations and see what each one holds."</li>
                <li><strong>"Categories: "</strong>"group items for easier lookup."</li>
                <li><strong>"Stock Movement: "</strong>"record inflows and outflows per warehouse."</li>
            </ul>
        </div>
    }
}
