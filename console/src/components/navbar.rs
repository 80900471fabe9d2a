//! Top navigation bar.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

/// Inventory links visible to everyone.
const INVENTORY_LINKS: [(&str, &str); 5] = [
    ("/stock", "Stock"),
    ("/stock/movement", "Stock Movement"),
    ("/items", "Items"),
    ("/warehouses", "Warehouses"),
    ("/categories", "Categories"),
];

/// `(href, label)` pairs for the current session.
pub fn nav_links(state: &AuthState) -> Vec<(&'static str, &'static str)> {
    let mut links = INVENTORY_LINKS.to_vec();
    if state.is_admin() {
        links.push(("/users", "Users"));
    }
    if state.is_authenticated() {
        links.push(("/users/myprofile", "My Profile"));
        links.push(("/logout", "Logout"));
    } else if !state.loading {
        links.push(("/login", "Login"));
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="navbar">
            <A href="/">"Warehouse Management"</A>
            <ul class="navbar__links">
                {move || {
                    nav_links(&auth.get())
                        .into_iter()
                        .map(|(href, label)| view! { <li class="navbar__item"><A href=href>{label}</A></li> })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
