//! Catalog State Service
//!
//! Reactive wrapper around the core [`UrlSync`]. The synchronizer owns the
//! canonical selection and the history; each selection field is mirrored
//! into its own signal so a change only wakes the views that read it.

use indexmap::IndexSet;
use leptos::prelude::*;

use movie_catalog::core::pipeline;
use movie_catalog::core::{
    Action, Catalog, Facets, FieldChanges, History, QueryResult, SelectionState, SortMode,
    UrlSync,
};

/// History backing the synchronizer; boxed so tests can swap in memory history.
pub type DynHistory = Box<dyn History + Send + Sync>;

#[derive(Clone, Copy)]
pub struct CatalogState {
    catalog: StoredValue<Catalog>,
    facets: StoredValue<Facets>,
    sync: StoredValue<UrlSync<DynHistory>>,
    pub genres: RwSignal<IndexSet<String>>,
    pub year: RwSignal<Option<i32>>,
    pub sort: RwSignal<SortMode>,
    pub page: RwSignal<u32>,
    /// Current page of the filtered, sorted catalog.
    pub result: Memo<QueryResult>,
}

impl CatalogState {
    pub fn new(catalog: Catalog, history: DynHistory) -> Self {
        let facets = Facets::from_movies(catalog.movies());
        let sync = UrlSync::new(history);
        let initial = sync.state().clone();

        let genres = RwSignal::new(initial.genres);
        let year = RwSignal::new(initial.year);
        let sort = RwSignal::new(initial.sort);
        let page = RwSignal::new(initial.page);

        let catalog = StoredValue::new(catalog);
        let result = Memo::new(move |_| {
            let selection = SelectionState {
                genres: genres.get(),
                year: year.get(),
                sort: sort.get(),
                page: page.get(),
            };
            catalog.with_value(|c| pipeline::run(c.movies(), &selection))
        });

        Self {
            catalog,
            facets: StoredValue::new(facets),
            sync: StoredValue::new(sync),
            genres,
            year,
            sort,
            page,
            result,
        }
    }

    pub fn facets(&self) -> Facets {
        self.facets.get_value()
    }

    pub fn movie_count(&self) -> usize {
        self.catalog.with_value(Catalog::len)
    }

    pub fn is_genre_selected(&self, genre: &str) -> bool {
        self.genres.with(|g| g.contains(genre))
    }

    /// Canonical query string the history should currently show.
    pub fn canonical_query(&self) -> String {
        self.sync.with_value(|sync| sync.canonical_query())
    }

    /// Query string the history actually shows.
    pub fn history_query(&self) -> String {
        self.sync.with_value(|sync| sync.history().current_query())
    }

    /// Reduce a user action, publish it, and refresh the changed signals.
    pub fn dispatch(&self, action: Action) {
        let changes = self
            .sync
            .try_update_value(|sync| {
                let before = sync.state().clone();
                sync.dispatch(action);
                FieldChanges::between(&before, sync.state())
            })
            .unwrap_or_default();
        self.refresh(changes);
    }

    /// Re-decode `query` after the URL changed underneath us. Never publishes.
    pub fn on_external_navigation(&self, query: &str) -> FieldChanges {
        let changes = self
            .sync
            .try_update_value(|sync| sync.on_external_navigation(query))
            .unwrap_or_default();
        self.refresh(changes);
        changes
    }

    fn refresh(&self, changes: FieldChanges) {
        if !changes.any() {
            return;
        }
        let Some(state) = self.sync.try_with_value(|sync| sync.state().clone()) else {
            return;
        };
        if changes.genres {
            self.genres.set(state.genres);
        }
        if changes.year {
            self.year.set(state.year);
        }
        if changes.sort {
            self.sort.set(state.sort);
        }
        if changes.page {
            self.page.set(state.page);
        }
    }
}

// Global accessor helpers
pub fn provide_catalog_state(catalog: Catalog, history: DynHistory) -> CatalogState {
    let state = CatalogState::new(catalog, history);
    provide_context(state);
    state
}

pub fn use_catalog_state() -> CatalogState {
    expect_context::<CatalogState>()
}
