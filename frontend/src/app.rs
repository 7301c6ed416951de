use leptos::prelude::*;

use movie_catalog::core::Catalog;

use crate::components::catalog::{FacetPanel, MovieGrid, Pagination};
use crate::services::browser_history::{listen_for_navigation, BrowserHistory};
use crate::services::catalog_state::provide_catalog_state;

#[component]
pub fn App() -> impl IntoView {
    let state = provide_catalog_state(Catalog::builtin(), Box::new(BrowserHistory));

    // Back/forward re-synchronizes the selection without pushing history
    listen_for_navigation(state);

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="px-6 py-4 border-b border-gray-700">
                <h1 class="text-2xl font-bold">"Movie Catalog"</h1>
                <p class="text-sm text-gray-400">
                    {move || {
                        let result = state.result.get();
                        format!("{} of {} movies match", result.filtered_count, state.movie_count())
                    }}
                </p>
            </header>
            <div class="flex flex-1 gap-6 p-6">
                <FacetPanel />
                <main class="flex-1 flex flex-col gap-6">
                    <MovieGrid />
                    <Pagination />
                </main>
            </div>
        </div>
    }
}
