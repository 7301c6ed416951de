use leptos::prelude::*;

use movie_catalog::core::Movie;

use crate::components::design_system::{Card, CardBody, CardHeader, CardTitle};
use crate::services::catalog_state::use_catalog_state;

pub const EMPTY_MESSAGE: &str = "No movies match the current filters.";
pub const EMPTY_PAGE_MESSAGE: &str = "This page is empty.";

/// Movies on the current page, or an empty-state message.
#[component]
pub fn MovieGrid() -> impl IntoView {
    let state = use_catalog_state();

    move || {
        let result = state.result.get();
        if result.page_items.is_empty() {
            let message = if result.filtered_count == 0 {
                EMPTY_MESSAGE
            } else {
                EMPTY_PAGE_MESSAGE
            };
            view! { <p class="empty-state text-gray-400 italic">{message}</p> }.into_any()
        } else {
            view! {
                <div class="movie-grid grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4">
                    {result
                        .page_items
                        .into_iter()
                        .map(|movie| view! { <MovieCard movie=movie /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let genre = movie.genre_label();

    view! {
        <Card class="movie-card">
            <CardHeader>
                <CardTitle>{movie.title}</CardTitle>
            </CardHeader>
            <CardBody class="text-sm text-gray-300 flex flex-col gap-1">
                <span>"Release date: " {movie.year}</span>
                <span>"Genre: " {genre}</span>
            </CardBody>
        </Card>
    }
}
