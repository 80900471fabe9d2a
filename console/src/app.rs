//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use session::{RouteTable, SessionStore, TokenStore};

use crate::components::navbar::Navbar;
use crate::config::ConsoleConfig;
use crate::net::api::HttpGateway;
use crate::pages::{
    categories::{AddCategoryPage, CategoriesPage, CategoryDetailsPage},
    home::HomePage,
    items::{AddItemPage, ItemDetailsPage, ItemsPage},
    login::LoginPage,
    logout::LogoutPage,
    profile::ProfilePage,
    stock::{AddMovementPage, MovementsPage, StockPage},
    users::{AddUserPage, UserDetailsPage, UserListPage},
    warehouses::{AddWarehousePage, WarehouseDetailsPage, WarehousesPage},
};
use crate::state::auth;
use crate::util::auth::Protected;

#[cfg(feature = "csr")]
fn token_store(config: &ConsoleConfig) -> Arc<dyn TokenStore> {
    Arc::new(session::LocalStorageTokenStore::new(config.token_key.clone()))
}

#[cfg(not(feature = "csr"))]
fn token_store(_config: &ConsoleConfig) -> Arc<dyn TokenStore> {
    Arc::new(session::MemoryTokenStore::new())
}

/// Session store wired to the backend gateway and, in the browser, to a
/// full-page navigator for forced logouts.
fn session_store(tokens: Arc<dyn TokenStore>, gateway: &HttpGateway) -> SessionStore {
    let store = SessionStore::new(tokens, Arc::new(gateway.clone()));
    #[cfg(feature = "csr")]
    let store = store.with_navigator(Arc::new(session::LocationNavigator));
    store
}

/// Root application component.
///
/// Provides the session store, its reactive mirror, the API gateway and the
/// route table, then resolves any stored token before routing settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    log::info!("console: api base {}", config.api_base_url);
    let tokens = token_store(&config);
    let gateway = HttpGateway::new(config.api_base_url.clone(), tokens.clone());
    let store = Arc::new(session_store(tokens, &gateway));
    let auth_state = auth::bind(&store);

    provide_context(store.clone());
    provide_context(auth_state);
    provide_context(gateway);
    provide_context(RouteTable::console_default());

    leptos::task::spawn_local(async move {
        let phase = store.init().await;
        log::debug!("session: initial phase {phase:?}");
    });

    view! {
        <Title text="Warehouse Manager"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("logout") view=LogoutPage/>

                    <Route path=StaticSegment("items") view=ItemsPage/>
                    <Route path=(StaticSegment("items"), StaticSegment("add")) view=AddItemPage/>
                    <Route path=(StaticSegment("items"), ParamSegment("id")) view=ItemDetailsPage/>

                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=(StaticSegment("categories"), StaticSegment("add")) view=AddCategoryPage/>
                    <Route path=(StaticSegment("categories"), ParamSegment("id")) view=CategoryDetailsPage/>

                    <Route path=StaticSegment("warehouses") view=WarehousesPage/>
                    <Route path=(StaticSegment("warehouses"), StaticSegment("add")) view=AddWarehousePage/>
                    <Route path=(StaticSegment("warehouses"), ParamSegment("id")) view=WarehouseDetailsPage/>

                    <Route path=StaticSegment("stock") view=StockPage/>
                    <Route path=(StaticSegment("stock"), StaticSegment("movement")) view=MovementsPage/>
                    <Route
                        path=(StaticSegment("stock"), StaticSegment("movement"), StaticSegment("add"))
                        view=AddMovementPage
                    />
                    <Route
                        path=(StaticSegment("stock"), StaticSegment("movement"), StaticSegment("add"), ParamSegment("id"))
                        view=AddMovementPage
                    />

                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <Protected><UserListPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("users"), StaticSegment("register"))
                        view=|| view! { <Protected><AddUserPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("users"), StaticSegment("myprofile"))
                        view=|| view! { <Protected><ProfilePage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("users"), ParamSegment("id"))
                        view=|| view! { <Protected><UserDetailsPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
