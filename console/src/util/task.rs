//! View-scoped async tasks.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use session::{ApiError, SessionStore};

use crate::state::fetch::Fetch;
use crate::util::auth::{api_error_message, recheck_on_unauthorized};

/// Spawn `fut` on the local executor and abort it when the owning view is
/// cleaned up, so a late response never writes into disposed signals.
///
/// Outside a reactive owner (e.g. a bare event handler) the task is detached.
pub fn spawn_scoped<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    if Owner::current().is_none() {
        leptos::task::spawn_local(fut);
        return;
    }
    let (task, guard) = session::cancellable(fut);
    leptos::task::spawn_local(async move {
        if task.await.is_none() {
            log::debug!("task: view disposed before completion");
        }
    });
    on_cleanup(move || drop(guard));
}

/// Start a fetch whose result lands in a fresh signal.
pub fn load<T, F>(fetch: F) -> RwSignal<Fetch<T>>
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(Fetch::Loading);
    load_into(state, fetch);
    state
}

/// Run `fetch` and store its result in `state`.
pub fn load_into<T, F>(state: RwSignal<Fetch<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let store = use_context::<Arc<SessionStore>>();
    spawn_scoped(async move {
        let result = fetch.await;
        if let Err(err) = &result {
            log::error!("fetch failed: {err}");
            if let Some(store) = &store {
                recheck_on_unauthorized(store, err).await;
            }
        }
        state.set(Fetch::from_result(result));
    });
}

/// Run a create/update/delete call. Failures land in `error` as an inline
/// message; success clears it and hands the response to `on_ok`.
pub fn run_action<T, F>(action: F, error: RwSignal<Option<String>>, on_ok: impl FnOnce(T) + 'static)
where
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let store = use_context::<Arc<SessionStore>>();
    spawn_scoped(async move {
        match action.await {
            Ok(value) => {
                error.set(None);
                on_ok(value);
            }
            Err(err) => {
                log::error!("action failed: {err}");
                error.set(Some(api_error_message(&err)));
                if let Some(store) = &store {
                    recheck_on_unauthorized(store, &err).await;
                }
            }
        }
    });
}
