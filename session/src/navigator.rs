//! Forced navigation sink used when a session is evicted.

/// Performs a hard navigation to an application path.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that reloads the page at `path` through `window.location`.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

#[cfg(feature = "browser")]
impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// Navigator that ignores requests; for contexts with nowhere to go.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigator: dropping navigation to {path}");
    }
}
