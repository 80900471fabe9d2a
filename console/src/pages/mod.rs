//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form state) and
//! delegates layout to `components`. Role gating happens in the router via
//! `util::auth::Protected`, never inside a page.

pub mod categories;
pub mod home;
pub mod items;
pub mod login;
pub mod logout;
pub mod profile;
pub mod stock;
pub mod users;
pub mod warehouses;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::fetch::Fetch;
use crate::util::list_view::{ListRow, Listed};

/// Numeric `:id` route parameter, if present and well-formed.
pub(crate) fn route_id() -> Memo<Option<i64>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok())))
}

/// Navigate as soon as `target` holds a path. Async actions set the signal
/// instead of holding a navigator themselves.
pub(crate) fn navigate_on(target: RwSignal<Option<String>>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// List-view rows derived from a fetched collection.
pub(crate) fn list_rows<T>(fetch: RwSignal<Fetch<Vec<T>>>) -> Signal<Fetch<Vec<ListRow>>>
where
    T: Listed + Clone + Send + Sync + 'static,
{
    Signal::derive(move || fetch.with(|f| f.clone().map(|list| list.iter().map(ListRow::from_listed).collect())))
}

/// `(value, label)` options for a `<select>` of fetched records.
pub(crate) fn select_options<T>(
    fetch: RwSignal<Fetch<Vec<T>>>,
    option: fn(&T) -> (String, String),
) -> Signal<Vec<(String, String)>>
where
    T: Send + Sync + 'static,
{
    Signal::derive(move || fetch.with(|f| f.ready().map(|list| list.iter().map(option).collect()).unwrap_or_default()))
}
