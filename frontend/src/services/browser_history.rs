//! `window.history` as a [`History`] for the URL synchronizer.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use movie_catalog::core::History;

use super::catalog_state::CatalogState;

/// Reads `location.search` and writes with `history.pushState`.
///
/// Holds no JS handles, the window is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_query(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn push(&mut self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // An empty query must clear the search part, so push the bare path
        let url = if query.is_empty() {
            window
                .location()
                .pathname()
                .unwrap_or_else(|_| "/".to_string())
        } else {
            format!("?{query}")
        };

        match window.history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
                    log::warn!("pushState failed for {url}: {e:?}");
                }
            }
            Err(e) => log::warn!("window.history unavailable: {e:?}"),
        }
    }
}

/// Re-synchronize `state` on every `popstate` for the rest of the page's life.
pub fn listen_for_navigation(state: CatalogState) {
    let _handle = window_event_listener(ev::popstate, move |_| {
        let query = BrowserHistory.current_query();
        let changes = state.on_external_navigation(&query);
        tracing::debug!(?changes, "popstate");
    });
}
